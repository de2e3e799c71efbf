//! Search index file for tooling.

use anyhow::{Context, Result};
use sassdoc_search::SearchIndex;
use std::path::{Path, PathBuf};

/// File name of the standalone index.
pub const SEARCH_INDEX_FILE: &str = "search-index.json";

/// Write the index as `search-index.json`, the same blob the page embeds.
pub fn write_search_index(index: &SearchIndex, output: &Path) -> Result<PathBuf> {
    let path = output.join(SEARCH_INDEX_FILE);
    std::fs::write(&path, index.to_json()?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(?path, "search index written");
    Ok(path)
}

/// Read an index written by [`write_search_index`].
pub fn read_search_index(dir: &Path) -> Result<SearchIndex> {
    let path = dir.join(SEARCH_INDEX_FILE);
    let json =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    SearchIndex::from_json(&json).with_context(|| format!("loading {}", path.display()))
}
