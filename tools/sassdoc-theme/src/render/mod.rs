//! Site rendering.
//!
//! - HTML: a single page with navigation, one section per entry, and the
//!   search index embedded for the client
//! - JSON: only the search index, for tooling

pub mod html;
pub mod json;

use anyhow::{Context, Result};
use sassdoc_search::{DocId, DocType, SearchIndex};
use std::path::{Path, PathBuf};

use crate::config::ThemeConfig;
use crate::model::SassDocItem;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `index.html` plus `search-index.json`.
    Html,
    /// `search-index.json` only.
    Json,
}

/// One entry as it appears in the page.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    /// Anchor and index id.
    pub id: DocId,
    /// Entry type.
    pub doc_type: DocType,
    /// The item documenting it.
    pub item: &'a SassDocItem,
}

/// Everything a renderer needs.
#[derive(Debug, Clone)]
pub struct Site<'a> {
    /// Theme settings.
    pub config: &'a ThemeConfig,
    /// Sections in index order.
    pub sections: Vec<Section<'a>>,
    /// The built index.
    pub index: &'a SearchIndex,
}

/// Render `site` into `output`, returning the files written.
pub fn render(site: &Site<'_>, output: &Path, format: Format) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output)
        .with_context(|| format!("creating output directory {}", output.display()))?;

    match format {
        Format::Html => html::render(site, output),
        Format::Json => Ok(vec![json::write_search_index(site.index, output)?]),
    }
}
