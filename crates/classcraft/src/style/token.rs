//! Opaque style tokens.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

/// One or more space-separated utility class names under a semantic key.
///
/// The content is never interpreted. Built-in tokens borrow `'static`
/// literals; tokens loaded from a stylesheet own their text.
///
/// # Example
///
/// ```rust
/// use classcraft::StyleToken;
///
/// let token = StyleToken::from_static("rounded-lg shadow-sm");
/// assert_eq!(token.as_str(), "rounded-lg shadow-sm");
/// assert_eq!(token.to_string(), "rounded-lg shadow-sm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleToken(Cow<'static, str>);

impl StyleToken {
    /// Creates a token borrowing a static literal.
    pub const fn from_static(classes: &'static str) -> Self {
        Self(Cow::Borrowed(classes))
    }

    /// Creates a token owning its text.
    pub fn new(classes: impl Into<String>) -> Self {
        Self(Cow::Owned(classes.into()))
    }

    /// Returns the raw class string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the token carries no class names at all.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StyleToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for StyleToken {
    fn from(classes: &'static str) -> Self {
        Self::from_static(classes)
    }
}

impl From<String> for StyleToken {
    fn from(classes: String) -> Self {
        Self::new(classes)
    }
}

impl PartialEq<str> for StyleToken {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for StyleToken {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Serialize for StyleToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_and_owned_compare_equal() {
        let borrowed = StyleToken::from_static("p-4");
        let owned = StyleToken::new(String::from("p-4"));
        assert_eq!(borrowed, owned);
    }

    #[test]
    fn test_is_blank() {
        assert!(StyleToken::from_static("").is_blank());
        assert!(StyleToken::from_static("   ").is_blank());
        assert!(!StyleToken::from_static("p-2").is_blank());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let token = StyleToken::from_static("text-sm");
        assert_eq!(serde_json::to_string(&token).unwrap(), r#""text-sm""#);
    }
}
