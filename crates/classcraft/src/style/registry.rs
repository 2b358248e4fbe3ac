//! Style token registry.
//!
//! A [`Registry`] is a two-level mapping: category name to [`Category`], and
//! within a category, key to [`StyleToken`]. Both levels keep insertion order
//! so listings read the way the registry was declared.
//!
//! # Nested groups
//!
//! Some categories group related tokens, e.g. a color with base, hover and
//! focus classes. Groups are flattened into dotted keys:
//!
//! | Group member | Stored key |
//! |--------------|------------|
//! | `primary.base` | `primary` |
//! | `primary.hover` | `primary.hover` |
//! | `primary.focus` | `primary.focus` |
//!
//! so `token("colors", "primary")` yields the group's base classes.
//!
//! # Lifecycle
//!
//! Registries are assembled once through [`RegistryBuilder`] and are
//! immutable afterwards. No method takes `&mut self`, so a registry can be
//! shared across threads freely (see [`common_styles`](crate::common_styles)).
//!
//! # Example
//!
//! ```rust
//! use classcraft::Registry;
//!
//! let registry = Registry::builder()
//!     .category("spacing", |c| c.token("sm", "p-2").token("md", "p-4"))
//!     .category("colors", |c| {
//!         c.group("primary", [("base", "bg-blue-500 text-white"), ("hover", "hover:bg-blue-600")])
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(registry.token("spacing", "md").unwrap(), "p-4");
//! assert_eq!(registry.token("colors", "primary").unwrap(), "bg-blue-500 text-white");
//! assert_eq!(registry.resolve("colors.primary.hover").unwrap(), "hover:bg-blue-600");
//! assert!(registry.token("colors", "nonexistent").is_err());
//! ```

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::error::RegistryError;
use super::token::StyleToken;

/// Member name that maps onto the bare group key.
pub const GROUP_BASE_KEY: &str = "base";

/// Returns the flattened key for a member of a nested group.
pub(crate) fn group_key(group: &str, member: &str) -> String {
    if member == GROUP_BASE_KEY {
        group.to_string()
    } else {
        format!("{}.{}", group, member)
    }
}

/// A named set of tokens, e.g. all spacing sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    entries: Vec<(String, StyleToken)>,
    index: HashMap<String, usize>,
}

impl Category {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: String, token: StyleToken) -> Result<(), RegistryError> {
        if token.is_blank() {
            return Err(RegistryError::BlankToken {
                category: self.name.clone(),
                key,
            });
        }
        if self.index.contains_key(&key) {
            return Err(RegistryError::DuplicateToken {
                category: self.name.clone(),
                key,
            });
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, token));
        Ok(())
    }

    fn upsert(&mut self, key: String, token: StyleToken) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = token,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, token));
            }
        }
    }

    /// The category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a token by key.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::TokenNotFound`] if the key is unknown.
    pub fn get(&self, key: &str) -> Result<&StyleToken, RegistryError> {
        self.index
            .get(key)
            .map(|&i| &self.entries[i].1)
            .ok_or_else(|| RegistryError::TokenNotFound {
                category: self.name.clone(),
                key: key.to_string(),
            })
    }

    /// Returns true if the key exists in this category.
    pub fn has(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(key, token)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleToken)> {
        self.entries.iter().map(|(k, t)| (k.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, token) in &self.entries {
            map.serialize_entry(key, token)?;
        }
        map.end()
    }
}

/// An immutable collection of style categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Starts building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Looks up a category by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CategoryNotFound`] if the name is unknown.
    pub fn category(&self, name: &str) -> Result<&Category, RegistryError> {
        self.index
            .get(name)
            .map(|&i| &self.categories[i])
            .ok_or_else(|| RegistryError::CategoryNotFound {
                category: name.to_string(),
            })
    }

    /// Looks up a token by category and key.
    ///
    /// Returns the same token on every call for the lifetime of the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CategoryNotFound`] or
    /// [`RegistryError::TokenNotFound`] when either name is unknown.
    pub fn token(&self, category: &str, key: &str) -> Result<&StyleToken, RegistryError> {
        self.category(category)?.get(key)
    }

    /// Resolves a dotted `category.key` path.
    ///
    /// The path splits at the first dot, so group members resolve naturally:
    /// `"colors.primary.hover"` is key `primary.hover` in `colors`.
    pub fn resolve(&self, path: &str) -> Result<&StyleToken, RegistryError> {
        let (category, key) = path
            .split_once('.')
            .filter(|(c, k)| !c.is_empty() && !k.is_empty())
            .ok_or_else(|| RegistryError::InvalidPath {
                path: path.to_string(),
            })?;
        self.token(category, key)
    }

    /// Returns true if the category contains the key.
    pub fn has(&self, category: &str, key: &str) -> bool {
        self.category(category).is_ok_and(|c| c.has(key))
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Category names in declaration order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name())
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Returns a new registry with `overrides` layered on top of this one.
    ///
    /// Tokens in `overrides` replace same-keyed tokens here; new keys and
    /// categories are appended after the existing ones.
    pub fn merged(&self, overrides: &Registry) -> Registry {
        let mut merged = self.clone();
        for category in overrides.categories() {
            let i = match merged.index.get(category.name()) {
                Some(&i) => i,
                None => {
                    merged
                        .index
                        .insert(category.name().to_string(), merged.categories.len());
                    merged.categories.push(Category::new(category.name()));
                    merged.categories.len() - 1
                }
            };
            for (key, token) in category.iter() {
                merged.categories[i].upsert(key.to_string(), token.clone());
            }
        }
        tracing::debug!(
            categories = merged.len(),
            overrides = overrides.len(),
            "merged style registries"
        );
        merged
    }
}

impl Serialize for Registry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(category.name(), category)?;
        }
        map.end()
    }
}

/// Fluent builder for [`Registry`].
///
/// Errors (duplicate names) are recorded as they happen and reported by
/// [`build`](Self::build), so declarations can be chained without `?`.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
    error: Option<RegistryError>,
}

impl RegistryBuilder {
    /// Declares a category and fills it through `fill`.
    pub fn category<F>(mut self, name: &str, fill: F) -> Self
    where
        F: FnOnce(CategoryBuilder) -> CategoryBuilder,
    {
        match fill(CategoryBuilder::new(name)).finish() {
            Ok(category) => self.push_category(category),
            Err(err) => {
                self.error.get_or_insert(err);
            }
        }
        self
    }

    pub(crate) fn push_category(&mut self, category: Category) {
        if self.error.is_some() {
            return;
        }
        // `resolve` splits paths at the first dot.
        if category.name().is_empty() || category.name().contains('.') {
            self.error = Some(RegistryError::InvalidCategoryName {
                category: category.name().to_string(),
            });
            return;
        }
        if self.registry.index.contains_key(category.name()) {
            self.error = Some(RegistryError::DuplicateCategory {
                category: category.name().to_string(),
            });
            return;
        }
        self.registry
            .index
            .insert(category.name().to_string(), self.registry.categories.len());
        self.registry.categories.push(category);
    }

    /// Finishes the registry.
    ///
    /// # Errors
    ///
    /// Returns the first error recorded while building: a duplicate category
    /// or token, a blank token, or a category name that is empty or dotted.
    pub fn build(self) -> Result<Registry, RegistryError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        tracing::debug!(
            categories = self.registry.len(),
            tokens = self.registry.categories().map(Category::len).sum::<usize>(),
            "built style registry"
        );
        Ok(self.registry)
    }
}

/// Fills one category inside [`RegistryBuilder::category`].
#[derive(Debug)]
pub struct CategoryBuilder {
    category: Category,
    error: Option<RegistryError>,
}

impl CategoryBuilder {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            category: Category::new(name),
            error: None,
        }
    }

    /// Adds a token under `key`.
    pub fn token(mut self, key: &str, token: impl Into<StyleToken>) -> Self {
        self.insert(key.to_string(), token.into());
        self
    }

    /// Adds a nested group, flattening its members into dotted keys.
    ///
    /// The `base` member takes the bare group name.
    pub fn group<I, K, V>(mut self, name: &str, members: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<StyleToken>,
    {
        for (member, token) in members {
            self.insert(group_key(name, member.as_ref()), token.into());
        }
        self
    }

    pub(crate) fn insert(&mut self, key: String, token: StyleToken) {
        if self.error.is_some() {
            return;
        }
        tracing::trace!(category = %self.category.name, key = %key, "registering style token");
        if let Err(err) = self.category.insert(key, token) {
            self.error = Some(err);
        }
    }

    pub(crate) fn finish(self) -> Result<Category, RegistryError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.category),
        }
    }
}
