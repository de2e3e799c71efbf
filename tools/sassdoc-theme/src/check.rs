//! Validation of SassDoc data without writing anything.
//!
//! Unlike a build, which stops at the first bad item, a check reports every
//! problem.

use anyhow::Result;
use sassdoc_search::{DocId, DuplicatePolicy};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use crate::config::ThemeConfig;
use crate::model::{self, SassDocItem};

/// Check configuration.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// SassDoc data file.
    pub input: PathBuf,
    /// Theme settings.
    pub theme: ThemeConfig,
}

/// One problem with one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// Position of the item in the input.
    pub position: usize,
    /// Item name as written.
    pub name: String,
    /// What is wrong.
    pub message: String,
}

/// Outcome of a check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Items inspected.
    pub items: usize,
    /// Problems found, in input order.
    pub problems: Vec<Problem>,
}

impl CheckReport {
    /// Whether every item can be indexed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.problems {
            writeln!(f, "item {} (`{}`): {}", p.position, p.name, p.message)?;
        }
        write!(
            f,
            "{} items checked, {} problems",
            self.items,
            self.problems.len()
        )
    }
}

/// Run the check.
pub fn run(config: CheckConfig) -> Result<CheckReport> {
    let items = model::load_items(&config.input)?;
    Ok(check_items(&items, config.theme.duplicates))
}

/// Check items against the indexing rules.
///
/// Duplicates are only problems under [`DuplicatePolicy::Reject`].
#[must_use]
pub fn check_items(items: &[SassDocItem], policy: DuplicatePolicy) -> CheckReport {
    let mut problems = Vec::new();
    let mut seen: HashMap<DocId, usize> = HashMap::new();

    for (position, item) in items.iter().enumerate() {
        let mut problem = |message: String| {
            problems.push(Problem {
                position,
                name: item.context.name.clone(),
                message,
            });
        };

        let id = match item.entry().and_then(|entry| DocId::for_entry(&entry)) {
            Ok(id) => id,
            Err(err) => {
                problem(err.to_string());
                continue;
            }
        };

        match seen.get(&id) {
            Some(&first) if policy == DuplicatePolicy::Reject => {
                problem(format!("duplicate id `{id}`, first used by item {first}"));
            }
            Some(&first) => {
                tracing::warn!(%id, first, position, "duplicate id will replace earlier item");
            }
            None => {
                seen.insert(id, position);
            }
        }
    }

    tracing::info!(items = items.len(), problems = problems.len(), "check finished");
    CheckReport {
        items: items.len(),
        problems,
    }
}
