//! Ready-made component styles derived from a registry.
//!
//! Every derived token is an explicit [`combine_classes`] call over registry
//! lookups, so a broken reference surfaces as a [`RegistryError`] instead of
//! a silently wrong class string.

use once_cell::sync::Lazy;

use super::style::ComponentStyle;
use crate::compose::combine_classes;
use crate::style::{common_styles, Registry, RegistryError, StyleToken};

static COMMON_PRESETS: Lazy<Presets> = Lazy::new(|| match Presets::from_registry(common_styles()) {
    Ok(presets) => presets,
    Err(err) => panic!("built-in presets reference a missing token: {}", err),
});

/// Button, card and badge styles built from one registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presets {
    pub button: ComponentStyle,
    pub card: ComponentStyle,
    pub badge: ComponentStyle,
}

impl Presets {
    /// Derives all presets from `registry`. The badge reads no tokens and
    /// comes out the same for every registry.
    ///
    /// Useful after layering a stylesheet over the built-in registry with
    /// [`Registry::merged`].
    ///
    /// # Errors
    ///
    /// Returns the first missing category or token.
    pub fn from_registry(registry: &Registry) -> Result<Self, RegistryError> {
        Ok(Self {
            button: button_from(registry)?,
            card: card_from(registry)?,
            badge: badge_from()?,
        })
    }
}

/// Returns the presets derived from [`common_styles`].
pub fn common_presets() -> &'static Presets {
    &COMMON_PRESETS
}

/// Button style built from the built-in registry.
pub fn button_styles() -> &'static ComponentStyle {
    &common_presets().button
}

/// Card style built from the built-in registry.
pub fn card_styles() -> &'static ComponentStyle {
    &common_presets().card
}

/// Badge style built from the built-in registry.
pub fn badge_styles() -> &'static ComponentStyle {
    &common_presets().badge
}

fn composed<'a, I>(fragments: I) -> StyleToken
where
    I: IntoIterator<Item = &'a str>,
{
    StyleToken::new(combine_classes(fragments))
}

fn button_from(r: &Registry) -> Result<ComponentStyle, RegistryError> {
    let base = composed([
        r.token("transitions", "default")?.as_str(),
        r.token("borderRadius", "md")?.as_str(),
        "font-medium",
        r.token("states", "focus")?.as_str(),
    ]);

    let mut builder = ComponentStyle::builder("button", base);
    for intent in ["primary", "secondary", "danger"] {
        let colors = r.category("colors")?;
        let token = composed([
            colors.get(intent)?.as_str(),
            colors.get(&format!("{}.hover", intent))?.as_str(),
            colors.get(&format!("{}.focus", intent))?.as_str(),
        ]);
        builder = builder.variant("intent", intent, token);
    }
    for size in ["sm", "md", "lg"] {
        let token = composed([
            r.token("spacing", size)?.as_str(),
            r.token("typography", size)?.as_str(),
        ]);
        builder = builder.size(size, token);
    }
    builder.build()
}

fn card_from(r: &Registry) -> Result<ComponentStyle, RegistryError> {
    let base = composed([
        r.token("borderRadius", "lg")?.as_str(),
        "bg-white",
        r.token("shadows", "sm")?.as_str(),
    ]);
    let h1 = composed([r.token("typography", "xl")?.as_str(), "font-bold text-gray-900"]);
    let h3 = composed([r.token("typography", "sm")?.as_str(), "text-gray-500 mt-1"]);

    ComponentStyle::builder("card", base)
        .part("header", "mb-4")
        .part("h1", h1)
        .part("h3", h3)
        .part("div", "text-gray-700")
        .part("footer", "mt-4 pt-4 border-t border-gray-200")
        .build()
}

/// The badge uses no registry tokens, so it is the same for every registry.
fn badge_from() -> Result<ComponentStyle, RegistryError> {
    ComponentStyle::builder("badge", "inline-flex items-center font-medium bg-gray-100 text-gray-800")
        .build()
}
