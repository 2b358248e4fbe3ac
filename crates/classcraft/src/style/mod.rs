//! Style tokens and the registry that groups them.
//!
//! - [`StyleToken`]: an opaque class string
//! - [`Registry`]: categories of tokens, built once and read-only afterwards
//! - [`common_styles`]: the built-in registry
//! - [`RegistryError`]: lookup and load failures

mod common;
mod error;
pub(crate) mod registry;
mod token;

pub use common::common_styles;
pub use error::RegistryError;
pub use registry::{Category, CategoryBuilder, Registry, RegistryBuilder, GROUP_BASE_KEY};
pub use token::StyleToken;
