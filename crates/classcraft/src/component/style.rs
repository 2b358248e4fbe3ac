//! Per-component style bundles.
//!
//! A [`ComponentStyle`] holds everything one UI component family may apply:
//!
//! - `base`: always applied
//! - `variants`: axis name to value to token (e.g. `intent.primary`)
//! - `sizes`: size key to token
//! - `nested`: sub-part name (e.g. `header`, `footer`) to token
//!
//! Picking which variant or size applies to a given render is left to the
//! caller; this type only stores and looks up tokens.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::compose::{ClassFragment, Composer};
use crate::style::{Category, RegistryError, StyleToken};

/// Style tokens for one component family.
///
/// # Example
///
/// ```rust
/// use classcraft::{classes, ComponentStyle};
///
/// let button = ComponentStyle::builder("button", "rounded font-medium")
///     .variant("intent", "primary", "bg-blue-500 text-white")
///     .variant("intent", "danger", "bg-red-500 text-white")
///     .size("sm", "p-2 text-sm")
///     .build()
///     .unwrap();
///
/// let intent = "danger";
/// let class = classes!(
///     button.base(),
///     button.variant("intent", intent).unwrap(),
///     button.size("sm").unwrap(),
/// );
/// assert_eq!(class, "rounded font-medium bg-red-500 text-white p-2 text-sm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentStyle {
    name: String,
    base: StyleToken,
    variants: Vec<Category>,
    variant_index: HashMap<String, usize>,
    sizes: Category,
    parts: Category,
}

impl ComponentStyle {
    /// Starts building a component style with its always-applied classes.
    pub fn builder(name: &str, base: impl Into<StyleToken>) -> ComponentStyleBuilder {
        ComponentStyleBuilder {
            style: ComponentStyle {
                name: name.to_string(),
                base: base.into(),
                variants: Vec::new(),
                variant_index: HashMap::new(),
                sizes: Category::new("sizes"),
                parts: Category::new("nested"),
            },
            error: None,
        }
    }

    /// The component family name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classes applied on every render.
    pub fn base(&self) -> &StyleToken {
        &self.base
    }

    /// Looks up all values of one variant axis.
    pub fn variant_axis(&self, axis: &str) -> Result<&Category, RegistryError> {
        self.variant_index
            .get(axis)
            .map(|&i| &self.variants[i])
            .ok_or_else(|| RegistryError::VariantAxisNotFound {
                component: self.name.clone(),
                axis: axis.to_string(),
            })
    }

    /// Looks up the token for `value` on variant `axis`.
    pub fn variant(&self, axis: &str, value: &str) -> Result<&StyleToken, RegistryError> {
        self.variant_axis(axis)?
            .get(value)
            .map_err(|_| RegistryError::VariantNotFound {
                component: self.name.clone(),
                axis: axis.to_string(),
                value: value.to_string(),
            })
    }

    /// Variant axes in declaration order.
    pub fn variant_axes(&self) -> impl Iterator<Item = &Category> {
        self.variants.iter()
    }

    /// Looks up a size token.
    pub fn size(&self, key: &str) -> Result<&StyleToken, RegistryError> {
        self.sizes.get(key).map_err(|_| RegistryError::SizeNotFound {
            component: self.name.clone(),
            size: key.to_string(),
        })
    }

    /// All sizes in declaration order.
    pub fn sizes(&self) -> &Category {
        &self.sizes
    }

    /// Looks up the token of a nested part.
    pub fn part(&self, name: &str) -> Result<&StyleToken, RegistryError> {
        self.parts.get(name).map_err(|_| RegistryError::PartNotFound {
            component: self.name.clone(),
            part: name.to_string(),
        })
    }

    /// All nested parts in declaration order.
    pub fn parts(&self) -> &Category {
        &self.parts
    }

    /// Composes `base` followed by the caller-selected fragments.
    pub fn with<I>(&self, extra: I) -> String
    where
        I: IntoIterator,
        I::Item: ClassFragment,
    {
        let mut composer = Composer::new();
        composer.push(&self.base);
        composer.extend(extra);
        composer.finish()
    }
}

struct Variants<'a>(&'a [Category]);

impl Serialize for Variants<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for axis in self.0 {
            map.serialize_entry(axis.name(), axis)?;
        }
        map.end()
    }
}

impl Serialize for ComponentStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ComponentStyle", 4)?;
        s.serialize_field("base", &self.base)?;
        if self.variants.is_empty() {
            s.skip_field("variants")?;
        } else {
            s.serialize_field("variants", &Variants(&self.variants))?;
        }
        if self.sizes.is_empty() {
            s.skip_field("sizes")?;
        } else {
            s.serialize_field("sizes", &self.sizes)?;
        }
        if self.parts.is_empty() {
            s.skip_field("nested")?;
        } else {
            s.serialize_field("nested", &self.parts)?;
        }
        s.end()
    }
}

/// Fluent builder for [`ComponentStyle`].
#[derive(Debug)]
pub struct ComponentStyleBuilder {
    style: ComponentStyle,
    error: Option<RegistryError>,
}

impl ComponentStyleBuilder {
    /// Adds the token for `value` on variant `axis`, creating the axis on first use.
    pub fn variant(mut self, axis: &str, value: &str, token: impl Into<StyleToken>) -> Self {
        let style = &mut self.style;
        let i = match style.variant_index.get(axis) {
            Some(&i) => i,
            None => {
                style.variant_index.insert(axis.to_string(), style.variants.len());
                style.variants.push(Category::new(axis));
                style.variants.len() - 1
            }
        };
        let result = style.variants[i].insert(value.to_string(), token.into());
        self.record(result);
        self
    }

    /// Adds a size token.
    pub fn size(mut self, key: &str, token: impl Into<StyleToken>) -> Self {
        let result = self.style.sizes.insert(key.to_string(), token.into());
        self.record(result);
        self
    }

    /// Adds a nested part token.
    pub fn part(mut self, name: &str, token: impl Into<StyleToken>) -> Self {
        let result = self.style.parts.insert(name.to_string(), token.into());
        self.record(result);
        self
    }

    fn record(&mut self, result: Result<(), RegistryError>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }

    /// Finishes the component style.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::BlankToken`] for a blank base, variant, size
    /// or part, and [`RegistryError::DuplicateToken`] for the first repeated
    /// variant value, size or part.
    pub fn build(self) -> Result<ComponentStyle, RegistryError> {
        if self.style.base.is_blank() {
            return Err(RegistryError::BlankToken {
                category: self.style.name,
                key: "base".to_string(),
            });
        }
        match self.error {
            Some(err) => Err(err),
            None => {
                tracing::debug!(
                    component = %self.style.name,
                    variants = self.style.variants.len(),
                    sizes = self.style.sizes.len(),
                    parts = self.style.parts.len(),
                    "built component style"
                );
                Ok(self.style)
            }
        }
    }
}
