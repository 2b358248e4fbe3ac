//! Registry and component lookup errors.

use std::path::PathBuf;

/// Error returned by registry construction, lookups and stylesheet loading.
///
/// The `*NotFound` variants signal a broken reference between a caller and
/// the registry (usually a typo in a category or key name). They are never
/// swallowed by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No category with this name exists.
    CategoryNotFound { category: String },
    /// The category exists but has no token under this key.
    TokenNotFound { category: String, key: String },
    /// A dotted path had no category separator.
    InvalidPath { path: String },
    /// A component has no variant axis with this name.
    VariantAxisNotFound { component: String, axis: String },
    /// The variant axis exists but lacks this value.
    VariantNotFound {
        component: String,
        axis: String,
        value: String,
    },
    /// A component has no size with this key.
    SizeNotFound { component: String, size: String },
    /// A component has no nested part with this name.
    PartNotFound { component: String, part: String },
    /// Two categories were registered under the same name.
    DuplicateCategory { category: String },
    /// Two tokens were registered under the same key in one category.
    DuplicateToken { category: String, key: String },
    /// A token was empty or whitespace-only; absence is expressed by omitting the key.
    BlankToken { category: String, key: String },
    /// A category name was empty or contained a `.`, which would make it unreachable by path.
    InvalidCategoryName { category: String },
    /// A stylesheet could not be parsed or has the wrong shape.
    Stylesheet { message: String },
    /// A stylesheet file could not be read.
    ReadError { path: PathBuf, message: String },
    /// Rendering the reference page failed.
    Render { message: String },
}

impl RegistryError {
    /// Returns true for the lookup failures (any `*NotFound` variant).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::CategoryNotFound { .. }
                | RegistryError::TokenNotFound { .. }
                | RegistryError::VariantAxisNotFound { .. }
                | RegistryError::VariantNotFound { .. }
                | RegistryError::SizeNotFound { .. }
                | RegistryError::PartNotFound { .. }
        )
    }
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::CategoryNotFound { category } => {
                write!(f, "style category not found: \"{}\"", category)
            }
            RegistryError::TokenNotFound { category, key } => {
                write!(f, "style token not found: \"{}.{}\"", category, key)
            }
            RegistryError::InvalidPath { path } => {
                write!(f, "invalid token path \"{}\": expected \"category.key\"", path)
            }
            RegistryError::VariantAxisNotFound { component, axis } => {
                write!(f, "component '{}' has no variant axis '{}'", component, axis)
            }
            RegistryError::VariantNotFound {
                component,
                axis,
                value,
            } => {
                write!(
                    f,
                    "component '{}' has no variant '{}' on axis '{}'",
                    component, value, axis
                )
            }
            RegistryError::SizeNotFound { component, size } => {
                write!(f, "component '{}' has no size '{}'", component, size)
            }
            RegistryError::PartNotFound { component, part } => {
                write!(f, "component '{}' has no part '{}'", component, part)
            }
            RegistryError::DuplicateCategory { category } => {
                write!(f, "style category \"{}\" registered twice", category)
            }
            RegistryError::DuplicateToken { category, key } => {
                write!(f, "style token \"{}.{}\" registered twice", category, key)
            }
            RegistryError::BlankToken { category, key } => {
                write!(f, "style token \"{}.{}\" is blank", category, key)
            }
            RegistryError::InvalidCategoryName { category } => {
                write!(
                    f,
                    "invalid style category name \"{}\": must be non-empty and contain no '.'",
                    category
                )
            }
            RegistryError::Stylesheet { message } => {
                write!(f, "invalid stylesheet: {}", message)
            }
            RegistryError::ReadError { path, message } => {
                write!(
                    f,
                    "failed to read stylesheet \"{}\": {}",
                    path.display(),
                    message
                )
            }
            RegistryError::Render { message } => {
                write!(f, "failed to render style reference: {}", message)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_not_found_display() {
        let err = RegistryError::TokenNotFound {
            category: "colors".to_string(),
            key: "nonexistent".to_string(),
        };
        assert!(err.to_string().contains("colors.nonexistent"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_variant_not_found_display() {
        let err = RegistryError::VariantNotFound {
            component: "button".to_string(),
            axis: "intent".to_string(),
            value: "ghost".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("button"));
        assert!(msg.contains("intent"));
        assert!(msg.contains("ghost"));
    }

    #[test]
    fn test_blank_token_display() {
        let err = RegistryError::BlankToken {
            category: "spacing".to_string(),
            key: "sm".to_string(),
        };
        assert!(err.to_string().contains("spacing.sm"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_load_errors_are_not_lookup_failures() {
        let err = RegistryError::DuplicateCategory {
            category: "spacing".to_string(),
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("twice"));
    }
}
