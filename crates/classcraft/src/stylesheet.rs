//! Loading registries from YAML or JSON stylesheets.
//!
//! A stylesheet is a mapping of category name to a mapping of key to either
//! a class string or a nested group:
//!
//! ```yaml
//! spacing:
//!   sm: p-2
//!   md: p-4
//! colors:
//!   primary:
//!     base: bg-blue-500 text-white
//!     hover: hover:bg-blue-600
//! ```
//!
//! Groups flatten the same way as [`CategoryBuilder::group`]: `primary.base`
//! becomes key `primary`, `primary.hover` stays `primary.hover`. Deeper
//! nesting keeps extending the dotted key. Declaration order is preserved.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::style::registry::group_key;
use crate::style::{CategoryBuilder, Registry, RegistryError, StyleToken};

/// Recognized stylesheet extensions.
pub const STYLESHEET_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// A map that keeps document order.
struct OrderedMap<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for MapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, V>()? {
                    entries.push(entry);
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(MapVisitor(PhantomData))
    }
}

/// A stylesheet value: a class string or a nested group.
enum Entry {
    Token(String),
    Group(Vec<(String, Entry)>),
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = Entry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a class string or a mapping of nested tokens")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Entry, E> {
                Ok(Entry::Token(v.to_string()))
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Entry, E> {
                Ok(Entry::Token(v))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Entry, A::Error> {
                let mut members = Vec::new();
                while let Some(member) = access.next_entry::<String, Entry>()? {
                    members.push(member);
                }
                Ok(Entry::Group(members))
            }
        }

        deserializer.deserialize_any(EntryVisitor)
    }
}

type Sheet = OrderedMap<OrderedMap<Entry>>;

fn flatten(category: &mut CategoryBuilder, key: String, entry: Entry) {
    match entry {
        Entry::Token(classes) => category.insert(key, StyleToken::new(classes)),
        Entry::Group(members) => {
            for (member, nested) in members {
                flatten(category, group_key(&key, &member), nested);
            }
        }
    }
}

fn sheet_to_registry(sheet: Sheet) -> Result<Registry, RegistryError> {
    let mut builder = Registry::builder();
    for (name, members) in sheet.0 {
        let mut category = CategoryBuilder::new(&name);
        for (key, entry) in members.0 {
            flatten(&mut category, key, entry);
        }
        builder.push_category(category.finish()?);
    }
    builder.build()
}

fn stylesheet_error(err: impl fmt::Display) -> RegistryError {
    RegistryError::Stylesheet {
        message: err.to_string(),
    }
}

impl Registry {
    /// Parses a YAML stylesheet.
    ///
    /// A blank document yields an empty registry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use classcraft::Registry;
    ///
    /// let registry = Registry::from_yaml("shadows:\n  sm: shadow-sm\n  md: shadow\n").unwrap();
    /// assert_eq!(registry.token("shadows", "md").unwrap(), "shadow");
    /// ```
    pub fn from_yaml(source: &str) -> Result<Registry, RegistryError> {
        if source.trim().is_empty() {
            return Ok(Registry::default());
        }
        let sheet: Sheet = serde_yaml::from_str(source).map_err(stylesheet_error)?;
        sheet_to_registry(sheet)
    }

    /// Parses a JSON stylesheet with the same shape as the YAML form.
    pub fn from_json(source: &str) -> Result<Registry, RegistryError> {
        let sheet: Sheet = serde_json::from_str(source).map_err(stylesheet_error)?;
        sheet_to_registry(sheet)
    }

    /// Reads a stylesheet file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ReadError`] if the file cannot be read and
    /// [`RegistryError::Stylesheet`] for unknown extensions or bad content.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Registry, RegistryError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .filter(|e| STYLESHEET_EXTENSIONS.contains(&e.as_str()))
            .ok_or_else(|| RegistryError::Stylesheet {
                message: format!(
                    "unsupported stylesheet \"{}\" (expected .yaml, .yml or .json)",
                    path.display()
                ),
            })?;

        tracing::debug!(path = %path.display(), "loading stylesheet");
        let source = std::fs::read_to_string(path).map_err(|e| RegistryError::ReadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        match extension.as_str() {
            "json" => Registry::from_json(&source),
            _ => Registry::from_yaml(&source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = r#"
spacing:
  sm: p-2
  md: p-4
colors:
  primary:
    base: bg-blue-500 text-white
    hover: hover:bg-blue-600
  accent: text-pink-500
"#;

    // =========================================================================
    // YAML
    // =========================================================================

    #[test]
    fn test_from_yaml() {
        let registry = Registry::from_yaml(SHEET).unwrap();
        assert_eq!(registry.token("spacing", "md").unwrap(), "p-4");
        assert_eq!(registry.token("colors", "primary").unwrap(), "bg-blue-500 text-white");
        assert_eq!(registry.resolve("colors.primary.hover").unwrap(), "hover:bg-blue-600");
    }

    #[test]
    fn test_from_yaml_keeps_document_order() {
        let registry = Registry::from_yaml(SHEET).unwrap();
        let names: Vec<&str> = registry.category_names().collect();
        assert_eq!(names, vec!["spacing", "colors"]);
        let keys: Vec<&str> = registry.category("colors").unwrap().keys().collect();
        assert_eq!(keys, vec!["primary", "primary.hover", "accent"]);
    }

    #[test]
    fn test_deep_nesting_extends_key() {
        let registry = Registry::from_yaml("colors:\n  primary:\n    states:\n      hover: a\n").unwrap();
        assert_eq!(registry.token("colors", "primary.states.hover").unwrap(), "a");
    }

    #[test]
    fn test_blank_yaml_is_empty() {
        assert!(Registry::from_yaml("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_non_string_leaf_rejected() {
        let err = Registry::from_yaml("spacing:\n  sm: 2\n").unwrap_err();
        assert!(matches!(err, RegistryError::Stylesheet { .. }));
    }

    #[test]
    fn test_category_must_be_mapping() {
        let err = Registry::from_yaml("spacing: p-2\n").unwrap_err();
        assert!(matches!(err, RegistryError::Stylesheet { .. }));
    }

    #[test]
    fn test_blank_token_rejected() {
        let err = Registry::from_yaml("spacing:\n  sm: \"\"\n").unwrap_err();
        assert_eq!(
            err,
            RegistryError::BlankToken {
                category: "spacing".to_string(),
                key: "sm".to_string(),
            }
        );

        let err = Registry::from_json(r#"{"colors": {"primary": {"base": "bg-blue-500", "hover": "   "}}}"#)
            .unwrap_err();
        assert!(matches!(err, RegistryError::BlankToken { ref key, .. } if key == "primary.hover"));
    }

    #[test]
    fn test_dotted_category_name_rejected() {
        let err = Registry::from_yaml("colors.dark:\n  bg: bg-black\n").unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidCategoryName {
                category: "colors.dark".to_string(),
            }
        );
    }

    #[test]
    fn test_flattened_collision_rejected() {
        let dup = "colors:\n  primary.hover: x\n  primary:\n    hover: y\n";
        assert_eq!(
            Registry::from_yaml(dup).unwrap_err(),
            RegistryError::DuplicateToken {
                category: "colors".to_string(),
                key: "primary.hover".to_string(),
            }
        );
    }

    // =========================================================================
    // JSON
    // =========================================================================

    #[test]
    fn test_from_json() {
        let json = r#"{"shadows": {"sm": "shadow-sm"}, "colors": {"danger": {"base": "bg-red-500", "hover": "hover:bg-red-600"}}}"#;
        let registry = Registry::from_json(json).unwrap();
        assert_eq!(registry.token("shadows", "sm").unwrap(), "shadow-sm");
        assert_eq!(registry.token("colors", "danger.hover").unwrap(), "hover:bg-red-600");
        let names: Vec<&str> = registry.category_names().collect();
        assert_eq!(names, vec!["shadows", "colors"]);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            Registry::from_json("[1, 2]"),
            Err(RegistryError::Stylesheet { .. })
        ));
    }

    // =========================================================================
    // Files
    // =========================================================================

    #[test]
    fn test_from_file_yaml_and_json() {
        let dir = tempfile::tempdir().unwrap();

        let yaml = dir.path().join("theme.yml");
        std::fs::write(&yaml, SHEET).unwrap();
        assert!(Registry::from_file(&yaml).unwrap().has("spacing", "sm"));

        let json = dir.path().join("theme.JSON");
        std::fs::write(&json, r#"{"spacing": {"lg": "p-6"}}"#).unwrap();
        assert!(Registry::from_file(&json).unwrap().has("spacing", "lg"));
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let err = Registry::from_file("styles.toml").unwrap_err();
        assert!(matches!(err, RegistryError::Stylesheet { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Registry::from_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, RegistryError::ReadError { .. }));
    }
}
