//! # Classcraft - style tokens and class-name composition
//!
//! Classcraft keeps utility-class strings (Tailwind and friends) in one
//! registry and composes them into the `class` attribute of a component.
//!
//! ## Core concepts
//!
//! - [`StyleToken`]: one or more class names under a semantic key
//! - [`Registry`]: tokens grouped into categories (`spacing`, `colors`, ...)
//! - [`combine_classes`] / [`classes!`]: join present fragments with single spaces
//! - [`ComponentStyle`]: base, variant, size and nested-part tokens of one component
//!
//! ## Quick start
//!
//! ```rust
//! use classcraft::{button_styles, classes, common_styles, when};
//!
//! let button = button_styles();
//! let disabled = true;
//!
//! let class = classes!(
//!     button.base(),
//!     button.variant("intent", "primary").unwrap(),
//!     button.size("sm").unwrap(),
//!     when(disabled, common_styles().token("states", "disabled").unwrap()),
//! );
//! assert!(class.ends_with("p-2 text-sm opacity-50 cursor-not-allowed"));
//! ```
//!
//! ## Stylesheets
//!
//! Registries can also be loaded from YAML or JSON and layered over the
//! built-in one:
//!
//! ```rust
//! use classcraft::{common_styles, Presets, Registry};
//!
//! let overrides = Registry::from_yaml("borderRadius:\n  md: rounded-md\n").unwrap();
//! let styles = common_styles().merged(&overrides);
//! let presets = Presets::from_registry(&styles).unwrap();
//! assert!(presets.button.base().as_str().contains("rounded-md"));
//! ```
//!
//! Choosing which variant applies for given props is up to the caller;
//! the crate only stores, looks up and joins strings.

pub mod component;
pub mod compose;
pub mod reference;
pub mod style;
mod stylesheet;

pub use component::{
    badge_styles, button_styles, card_styles, common_presets, ComponentStyle, ComponentStyleBuilder,
    Presets,
};
pub use compose::{combine_classes, when, ClassFragment, Composer};
pub use style::{
    common_styles, Category, CategoryBuilder, Registry, RegistryBuilder, RegistryError,
    StyleToken, GROUP_BASE_KEY,
};
pub use stylesheet::STYLESHEET_EXTENSIONS;
