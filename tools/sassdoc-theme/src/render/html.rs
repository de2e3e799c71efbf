//! HTML page renderer.
//!
//! Generates a single page with:
//! - A search form wired to the client by the DOM contract ids
//! - Collapsible navigation, one group per entry type
//! - One section per entry, anchored at its id
//! - The search index and client options as embedded JSON

use anyhow::Result;
use sassdoc_client::{INDEX_SCRIPT_ID, OPTIONS_SCRIPT_ID};
use sassdoc_search::DocType;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

use super::{json, Site};

#[derive(Serialize)]
struct NavGroup<'a> {
    class: String,
    heading: &'static str,
    items: Vec<NavItem<'a>>,
}

#[derive(Serialize)]
struct NavItem<'a> {
    id: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct SectionView<'a> {
    id: &'a str,
    doc_type: &'static str,
    name: &'a str,
    description: &'a str,
    source: Option<&'a str>,
}

/// Render `index.html` and `search-index.json`.
pub fn render(site: &Site<'_>, output: &Path) -> Result<Vec<PathBuf>> {
    let tera = create_templates()?;
    let html = render_page(site, &tera)?;

    let page = output.join("index.html");
    std::fs::write(&page, html)?;
    tracing::debug!(path = ?page, "page written");

    let index = json::write_search_index(site.index, output)?;
    Ok(vec![page, index])
}

fn create_templates() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_template("index.html", include_str!("../../templates/index.html"))?;
    Ok(tera)
}

fn render_page(site: &Site<'_>, tera: &Tera) -> Result<String> {
    let config = site.config;
    let mut context = Context::new();

    context.insert("title", &config.title);
    context.insert("shortcut_icon", &config.shortcut_icon);
    context.insert(
        "client_script",
        &embed_json(&serde_json::to_string(&config.client_script)?),
    );
    context.insert("dom", &config.dom);
    context.insert("groups", &nav_groups(site));
    context.insert("sections", &sections(site));
    context.insert("index_script_id", INDEX_SCRIPT_ID);
    context.insert("options_script_id", OPTIONS_SCRIPT_ID);
    context.insert("index_json", &embed_json(&site.index.to_json()?));
    context.insert(
        "options_json",
        &embed_json(&serde_json::to_string(&config.client_options())?),
    );

    Ok(tera.render("index.html", &context)?)
}

/// Class shared by a group's header `data-toggles` and its item list.
#[must_use]
pub fn group_class(doc_type: DocType) -> String {
    format!("nav-group--{doc_type}")
}

/// Make JSON safe to place inside a `<script>` element.
///
/// `<` only occurs inside JSON strings, where `\u003c` is an equivalent
/// escape, so the result still parses to the same value.
#[must_use]
pub fn embed_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

fn nav_groups<'a>(site: &'a Site<'_>) -> Vec<NavGroup<'a>> {
    DocType::ALL
        .into_iter()
        .filter_map(|ty| {
            let items: Vec<_> = site
                .sections
                .iter()
                .filter(|s| s.doc_type == ty)
                .map(|s| NavItem {
                    id: s.id.as_str(),
                    name: &s.item.context.name,
                })
                .collect();
            (!items.is_empty()).then(|| NavGroup {
                class: group_class(ty),
                heading: ty.display_name(),
                items,
            })
        })
        .collect()
}

fn sections<'a>(site: &'a Site<'_>) -> Vec<SectionView<'a>> {
    site.sections
        .iter()
        .map(|s| SectionView {
            id: s.id.as_str(),
            doc_type: s.doc_type.as_str(),
            name: &s.item.context.name,
            description: s.item.description.trim(),
            source: s.item.source(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_json_round_trips() {
        let json = serde_json::to_string(&serde_json::json!({"x": "</script><!--"})).unwrap();
        let embedded = embed_json(&json);
        assert!(!embedded.contains('<'));
        let back: serde_json::Value = serde_json::from_str(&embedded).unwrap();
        assert_eq!(back["x"], "</script><!--");
    }

    #[test]
    fn test_group_class() {
        assert_eq!(group_class(DocType::Placeholder), "nav-group--placeholder");
    }
}
