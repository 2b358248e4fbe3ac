//! Class-name composition.
//!
//! Joins an ordered list of class fragments into one normalized string:
//!
//! - absent fragments (`None`, `false`, empty or blank strings) are skipped
//! - present fragments keep their input order
//! - exactly one space separates class names, with none at either end
//! - duplicates pass through untouched; composition knows nothing about CSS
//!
//! # Example
//!
//! ```rust
//! use classcraft::{combine_classes, classes, when};
//!
//! let disabled = true;
//! let loading = false;
//!
//! let class = classes!(
//!     "btn",
//!     when(disabled, "opacity-50 cursor-not-allowed"),
//!     when(loading, "animate-pulse"),
//! );
//! assert_eq!(class, "btn opacity-50 cursor-not-allowed");
//!
//! let joined = combine_classes([Some("a"), None, Some("b")]);
//! assert_eq!(joined, "a b");
//! ```

use std::borrow::Cow;

use crate::style::StyleToken;

/// A value that may contribute class names to a composed string.
///
/// Returning `None` marks the fragment as absent. A bare `bool` is always
/// absent: only strings carry classes, so the common `cond && "class"`
/// pattern is expressed with [`when`] or an `Option` instead.
///
/// `bool` is the only non-string scalar with an impl. Integers, floats and
/// other scalars are not fragments at all: passing one is a compile error
/// rather than a silently dropped value.
///
/// ```compile_fail
/// use classcraft::classes;
///
/// let _ = classes!("p-2", 42);
/// ```
pub trait ClassFragment {
    /// Returns the fragment's class text, or `None` when absent.
    fn class_str(&self) -> Option<&str>;
}

impl ClassFragment for str {
    fn class_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl ClassFragment for String {
    fn class_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl ClassFragment for Cow<'_, str> {
    fn class_str(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl ClassFragment for StyleToken {
    fn class_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl ClassFragment for bool {
    fn class_str(&self) -> Option<&str> {
        None
    }
}

impl<T: ClassFragment> ClassFragment for Option<T> {
    fn class_str(&self) -> Option<&str> {
        self.as_ref().and_then(ClassFragment::class_str)
    }
}

impl<T: ClassFragment + ?Sized> ClassFragment for &T {
    fn class_str(&self) -> Option<&str> {
        (**self).class_str()
    }
}

/// Returns `fragment` when `condition` holds, otherwise an absent fragment.
pub fn when<F: ClassFragment>(condition: bool, fragment: F) -> Option<F> {
    condition.then_some(fragment)
}

/// Incremental builder behind [`combine_classes`] and [`classes!`](crate::classes).
#[derive(Debug, Default, Clone)]
pub struct Composer {
    out: String,
}

impl Composer {
    /// Creates an empty composer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fragment; absent and blank fragments are ignored.
    pub fn push<F: ClassFragment + ?Sized>(&mut self, fragment: &F) -> &mut Self {
        if let Some(text) = fragment.class_str() {
            for class in text.split_whitespace() {
                if !self.out.is_empty() {
                    self.out.push(' ');
                }
                self.out.push_str(class);
            }
        }
        self
    }

    /// Returns true if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Consumes the composer, returning the joined class string.
    pub fn finish(self) -> String {
        self.out
    }
}

impl<F: ClassFragment> Extend<F> for Composer {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        for fragment in iter {
            self.push(&fragment);
        }
    }
}

/// Joins the present fragments, in order, with single spaces.
///
/// Returns an empty string when every fragment is absent. Never fails.
pub fn combine_classes<I>(fragments: I) -> String
where
    I: IntoIterator,
    I::Item: ClassFragment,
{
    let mut composer = Composer::new();
    composer.extend(fragments);
    composer.finish()
}

/// Composes heterogeneous fragments into one class string.
///
/// Accepts anything implementing [`ClassFragment`]: string slices, `String`,
/// [`StyleToken`], `Option`s of those, and `bool`.
///
/// ```rust
/// use classcraft::classes;
///
/// let extra: Option<&str> = None;
/// assert_eq!(classes!("a", extra, false, String::from("b")), "a b");
/// assert_eq!(classes!(), "");
/// ```
#[macro_export]
macro_rules! classes {
    () => {
        ::std::string::String::new()
    };
    ($($fragment:expr),+ $(,)?) => {{
        let mut composer = $crate::Composer::new();
        $( composer.push(&$fragment); )+
        composer.finish()
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Basic composition
    // =========================================================================

    #[test]
    fn test_no_fragments_is_empty() {
        assert_eq!(combine_classes(Vec::<&str>::new()), "");
        assert_eq!(classes!(), "");
    }

    #[test]
    fn test_absent_fragments_are_skipped() {
        let out = classes!("a", None::<&str>, "b", false, None::<String>, "c");
        assert_eq!(out, "a b c");
    }

    #[test]
    fn test_single_fragment() {
        assert_eq!(classes!("only-one"), "only-one");
    }

    #[test]
    fn test_all_absent() {
        assert_eq!(classes!(false, None::<&str>, ""), "");
    }

    #[test]
    fn test_order_preserved() {
        assert_eq!(classes!("x", "y"), "x y");
        assert_eq!(classes!("y", "x"), "y x");
        assert_ne!(classes!("x", "y"), classes!("y", "x"));
    }

    #[test]
    fn test_duplicates_preserved() {
        assert_eq!(classes!("a", "a"), "a a");
    }

    #[test]
    fn test_multi_class_fragments() {
        let out = combine_classes(["bg-blue-500 text-white", "hover:bg-blue-600"]);
        assert_eq!(out, "bg-blue-500 text-white hover:bg-blue-600");
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let out = classes!("  a  ", "\tb\n", "   ", "c   d");
        assert_eq!(out, "a b c d");
    }

    #[test]
    fn test_tokens_and_options() {
        let token = StyleToken::from_static("rounded");
        let missing: Option<StyleToken> = None;
        assert_eq!(classes!(token, missing, Some(&token)), "rounded rounded");
    }

    #[test]
    fn test_when() {
        assert_eq!(when(true, "x"), Some("x"));
        assert_eq!(when(false, "x"), None);
        assert_eq!(classes!("btn", when(true, "active"), when(false, "hidden")), "btn active");
    }

    #[test]
    fn test_composer_extend_and_is_empty() {
        let mut composer = Composer::new();
        assert!(composer.is_empty());
        composer.extend([Some("a"), None]);
        composer.push("b");
        assert!(!composer.is_empty());
        assert_eq!(composer.finish(), "a b");
    }

    // =========================================================================
    // Properties
    // =========================================================================

    fn fragment() -> impl Strategy<Value = Option<String>> {
        prop::option::of("[ a-z:\\-\t]{0,12}")
    }

    proptest! {
        #[test]
        fn prop_no_double_or_edge_spaces(fragments in prop::collection::vec(fragment(), 0..12)) {
            let out = combine_classes(&fragments);
            prop_assert!(!out.contains("  "));
            prop_assert!(!out.starts_with(' '));
            prop_assert!(!out.ends_with(' '));
            prop_assert!(!out.contains('\t'));
        }

        #[test]
        fn prop_classes_keep_input_order(fragments in prop::collection::vec(fragment(), 0..12)) {
            let expected: Vec<&str> = fragments
                .iter()
                .flatten()
                .flat_map(|f| f.split_whitespace())
                .collect();
            let out = combine_classes(&fragments);
            let actual: Vec<&str> = out.split(' ').filter(|c| !c.is_empty()).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
