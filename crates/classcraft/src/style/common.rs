//! The built-in style registry.
//!
//! Categories: `spacing`, `typography`, `colors`, `states`, `transitions`,
//! `borderRadius`, `shadows`. Color groups flatten into `primary`,
//! `primary.hover`, `primary.focus` (and likewise for `secondary`, `danger`).

use once_cell::sync::Lazy;

use super::registry::Registry;

static COMMON_STYLES: Lazy<Registry> = Lazy::new(build_common_styles);

/// Returns the process-wide built-in registry.
///
/// Built on first access and never torn down. Lookups are read-only, so any
/// number of threads may share it.
///
/// # Example
///
/// ```rust
/// use classcraft::common_styles;
///
/// let styles = common_styles();
/// assert_eq!(styles.token("borderRadius", "md").unwrap(), "rounded");
/// assert_eq!(styles.resolve("colors.danger.hover").unwrap(), "hover:bg-red-600");
/// ```
pub fn common_styles() -> &'static Registry {
    &COMMON_STYLES
}

fn build_common_styles() -> Registry {
    let built = Registry::builder()
        .category("spacing", |c| c.token("sm", "p-2").token("md", "p-4").token("lg", "p-6"))
        .category("typography", |c| {
            c.token("sm", "text-sm")
                .token("md", "text-base")
                .token("lg", "text-lg")
                .token("xl", "text-xl")
        })
        .category("colors", |c| {
            c.group(
                "primary",
                [
                    ("base", "bg-blue-500 text-white"),
                    ("hover", "hover:bg-blue-600"),
                    ("focus", "focus:ring-blue-500"),
                ],
            )
            .group(
                "secondary",
                [
                    ("base", "bg-gray-500 text-white"),
                    ("hover", "hover:bg-gray-600"),
                    ("focus", "focus:ring-gray-500"),
                ],
            )
            .group(
                "danger",
                [
                    ("base", "bg-red-500 text-white"),
                    ("hover", "hover:bg-red-600"),
                    ("focus", "focus:ring-red-500"),
                ],
            )
        })
        .category("states", |c| {
            c.token("disabled", "opacity-50 cursor-not-allowed")
                .token(
                    "loading",
                    r#"relative text-transparent after:absolute after:inset-0 after:flex after:items-center after:justify-center after:text-white after:content-["..."]"#,
                )
                .token("focus", "focus:outline-none focus:ring-2 focus:ring-offset-2")
        })
        .category("transitions", |c| {
            c.token("default", "transition-all")
                .token("colors", "transition-colors")
                .token("transform", "transition-transform")
        })
        .category("borderRadius", |c| {
            c.token("none", "rounded-none")
                .token("sm", "rounded-sm")
                .token("md", "rounded")
                .token("lg", "rounded-lg")
                .token("full", "rounded-full")
        })
        .category("shadows", |c| {
            c.token("none", "shadow-none")
                .token("sm", "shadow-sm")
                .token("md", "shadow")
                .token("lg", "shadow-lg")
        })
        .build();

    match built {
        Ok(registry) => registry,
        // Every key above is a literal; a duplicate is a bug in this file.
        Err(err) => panic!("built-in style registry is invalid: {}", err),
    }
}
