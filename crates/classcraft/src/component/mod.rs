//! Component style bundles and the built-in presets.

mod presets;
mod style;

pub use presets::{badge_styles, button_styles, card_styles, common_presets, Presets};
pub use style::{ComponentStyle, ComponentStyleBuilder};
