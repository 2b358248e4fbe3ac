//! Markdown reference pages for registries and component styles.
//!
//! Documentation sites display tokens as example code; these helpers render
//! them as markdown tables (one section per category or component section)
//! through a MiniJinja template.

use minijinja::Environment;
use serde::Serialize;

use crate::component::ComponentStyle;
use crate::style::{Category, Registry, RegistryError};

const REFERENCE_TEMPLATE: &str = r#"# {{ title }}
{% for section in sections %}

## `{{ section.name }}`

| Key | Classes |
|-----|---------|
{% for row in section.rows %}
| `{{ row.key | cell }}` | `{{ row.classes | cell }}` |
{% endfor %}
{% endfor %}
"#;

#[derive(Serialize)]
struct Row<'a> {
    key: &'a str,
    classes: &'a str,
}

#[derive(Serialize)]
struct Section<'a> {
    name: String,
    rows: Vec<Row<'a>>,
}

impl<'a> Section<'a> {
    fn from_category(name: String, category: &'a Category) -> Self {
        Self {
            name,
            rows: category
                .iter()
                .map(|(key, token)| Row {
                    key,
                    classes: token.as_str(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct Page<'a> {
    title: &'a str,
    sections: Vec<Section<'a>>,
}

fn render_page(page: &Page<'_>) -> Result<String, RegistryError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    // Pipes would split a markdown table cell.
    env.add_filter("cell", |value: String| value.replace('|', "\\|"));

    let render_error = |e: minijinja::Error| RegistryError::Render {
        message: e.to_string(),
    };
    env.add_template("reference", REFERENCE_TEMPLATE)
        .map_err(render_error)?;
    let tmpl = env.get_template("reference").map_err(render_error)?;
    tmpl.render(page).map_err(render_error)
}

/// Renders every category of `registry` as a markdown table.
///
/// # Example
///
/// ```rust
/// use classcraft::{reference, Registry};
///
/// let registry = Registry::from_yaml("shadows:\n  sm: shadow-sm\n").unwrap();
/// let page = reference::render_registry("Shadows", &registry).unwrap();
/// assert!(page.contains("| `sm` | `shadow-sm` |"));
/// ```
pub fn render_registry(title: &str, registry: &Registry) -> Result<String, RegistryError> {
    let page = Page {
        title,
        sections: registry
            .categories()
            .map(|c| Section::from_category(c.name().to_string(), c))
            .collect(),
    };
    tracing::debug!(title, sections = page.sections.len(), "rendering registry reference");
    render_page(&page)
}

/// Renders the base, variants, sizes and nested parts of one component.
///
/// Empty sections are left out.
pub fn render_component(style: &ComponentStyle) -> Result<String, RegistryError> {
    let mut sections = vec![Section {
        name: "base".to_string(),
        rows: vec![Row {
            key: style.name(),
            classes: style.base().as_str(),
        }],
    }];
    for axis in style.variant_axes() {
        sections.push(Section::from_category(
            format!("variants.{}", axis.name()),
            axis,
        ));
    }
    if !style.sizes().is_empty() {
        sections.push(Section::from_category("sizes".to_string(), style.sizes()));
    }
    if !style.parts().is_empty() {
        sections.push(Section::from_category("nested".to_string(), style.parts()));
    }

    render_page(&Page {
        title: style.name(),
        sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{badge_styles, button_styles, card_styles};
    use crate::common_styles;

    #[test]
    fn test_render_registry_sections_in_order() {
        let page = render_registry("Common styles", common_styles()).unwrap();
        assert!(page.starts_with("# Common styles\n"));

        let spacing = page.find("## `spacing`").unwrap();
        let shadows = page.find("## `shadows`").unwrap();
        assert!(spacing < shadows);
        assert!(page.contains("| `primary.hover` | `hover:bg-blue-600` |"));
    }

    #[test]
    fn test_render_registry_rows_are_lines() {
        let registry = Registry::from_yaml("spacing:\n  sm: p-2\n  md: p-4\n").unwrap();
        let page = render_registry("Spacing", &registry).unwrap();
        let rows: Vec<&str> = page.lines().filter(|l| l.starts_with("| `")).collect();
        assert_eq!(rows, vec!["| `sm` | `p-2` |", "| `md` | `p-4` |"]);
    }

    #[test]
    fn test_pipes_are_escaped() {
        let registry = Registry::from_yaml("odd:\n  pipe: \"a|b\"\n").unwrap();
        let page = render_registry("Odd", &registry).unwrap();
        assert!(page.contains(r"`a\|b`"));
    }

    #[test]
    fn test_render_component_button() {
        let page = render_component(button_styles()).unwrap();
        assert!(page.starts_with("# button\n"));
        assert!(page.contains("## `base`"));
        assert!(page.contains("## `variants.intent`"));
        assert!(page.contains("## `sizes`"));
        assert!(!page.contains("## `nested`"));
        assert!(page.contains("| `lg` | `p-6 text-lg` |"));
    }

    #[test]
    fn test_render_component_card_and_badge() {
        let card = render_component(card_styles()).unwrap();
        assert!(card.contains("## `nested`"));
        assert!(card.contains("| `footer` | `mt-4 pt-4 border-t border-gray-200` |"));

        let badge = render_component(badge_styles()).unwrap();
        assert!(!badge.contains("## `sizes`"));
        assert!(badge.contains("| `badge` |"));
    }
}
