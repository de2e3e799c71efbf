//! Command-line search over a built site.
//!
//! Loads `search-index.json` from an output directory and runs the same fuzzy
//! search the page does, so ranking can be checked without a browser.

use anyhow::Result;
use sassdoc_search::DocType;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::render::json::read_search_index;

/// Search configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Output directory of a build.
    pub dir: PathBuf,
    /// Query, in the same syntax the page accepts.
    pub query: String,
    /// Maximum results.
    pub limit: Option<usize>,
    /// Default edit distance.
    pub edit_distance: u8,
}

/// A search hit.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    /// Entry type.
    pub doc_type: DocType,
    /// Entry name.
    pub name: String,
    /// In-page link.
    pub anchor: String,
    /// Relevance score (higher is better).
    pub score: f64,
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} {}  {}  {:.3}",
            self.doc_type, self.name, self.anchor, self.score
        )
    }
}

/// Run a search query.
pub fn run(config: SearchConfig) -> Result<Vec<SearchHit>> {
    let index = read_search_index(&config.dir)?;
    tracing::debug!(documents = index.len(), query = %config.query, "searching");

    let mut results = index.fuzzy_search(&config.query, config.edit_distance);
    if let Some(limit) = config.limit {
        results.truncate(limit);
    }

    results
        .into_iter()
        .map(|result| -> Result<SearchHit> {
            let (doc_type, name) = result.id.decode()?;
            Ok(SearchHit {
                doc_type,
                name: name.to_string(),
                anchor: result.id.anchor(),
                score: result.score,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_display() {
        let hit = SearchHit {
            doc_type: DocType::Mixin,
            name: "foo-bar".to_string(),
            anchor: "#mixin-foo-bar".to_string(),
            score: 0.5,
        };
        assert_eq!(hit.to_string(), "mixin        foo-bar  #mixin-foo-bar  0.500");
    }
}
