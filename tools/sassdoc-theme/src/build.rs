//! Site build.
//!
//! This module orchestrates generation:
//! 1. Load the SassDoc data
//! 2. Index every item
//! 3. Render to the specified format

use anyhow::{Context, Result};
use sassdoc_search::{DocId, DuplicatePolicy, IndexBuilder, SearchIndex};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::ThemeConfig;
use crate::model::{self, SassDocItem};
use crate::render::{self, Format, Section, Site};

/// Build configuration.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// SassDoc data file.
    pub input: PathBuf,
    /// Output directory.
    pub output: PathBuf,
    /// Output format.
    pub format: Format,
    /// Theme settings.
    pub theme: ThemeConfig,
}

/// What a build produced.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    /// Items read from the input.
    pub items: usize,
    /// Documents in the index.
    pub documents: usize,
    /// Distinct terms in the index.
    pub terms: usize,
    /// Files written.
    pub files: Vec<PathBuf>,
}

/// Run the build.
pub fn run(config: BuildConfig) -> Result<BuildSummary> {
    tracing::info!("Building documentation from {:?}", config.input);

    let items = model::load_items(&config.input)?;
    tracing::info!("Loaded {} items", items.len());

    let (index, sections) = index_items(&items, config.theme.duplicates)?;

    let site = Site {
        config: &config.theme,
        sections,
        index: &index,
    };
    let files = render::render(&site, &config.output, config.format)?;

    tracing::info!("Documentation written to {:?}", config.output);

    Ok(BuildSummary {
        items: items.len(),
        documents: index.len(),
        terms: index.term_count(),
        files,
    })
}

/// Index `items` in order and pair every document with the item it came from.
///
/// Under [`DuplicatePolicy::Replace`] a section shows the last item with its id.
pub fn index_items(
    items: &[SassDocItem],
    policy: DuplicatePolicy,
) -> Result<(SearchIndex, Vec<Section<'_>>)> {
    let mut builder = IndexBuilder::new().duplicate_policy(policy);
    let mut source: HashMap<DocId, usize> = HashMap::new();

    for (position, item) in items.iter().enumerate() {
        let entry = item.entry().with_context(|| {
            format!("item {position} (`{}`) has an invalid type", item.context.name)
        })?;
        let id = builder
            .add(&entry)
            .with_context(|| format!("cannot index item {position}"))?
            .clone();
        source.insert(id, position);
    }

    let sections = builder
        .documents()
        .filter_map(|doc| {
            source.get(&doc.id).map(|&position| Section {
                id: doc.id.clone(),
                doc_type: doc.doc_type,
                item: &items[position],
            })
        })
        .collect();

    Ok((builder.build(), sections))
}
