//! The immutable inverted index and its scorer.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Bound;
use tracing::debug;

use crate::error::{IndexError, IndexResult, QueryParseError};
use crate::fuzzy;
use crate::id::DocId;
use crate::query::{Clause, Field, Presence, Query};

/// Serialization format version.
pub const INDEX_VERSION: u32 = 1;

const K1: f64 = 1.2;
const B: f64 = 0.75;

/// A `(document ordinal, term frequency)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting(pub u32, pub u32);

/// One hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Matched document.
    pub id: DocId,
    /// Position in the result list, starting at 0.
    pub rank: usize,
    /// Relevance score.
    pub score: f64,
}

/// Full-text index over documentation entries.
///
/// Built by [`IndexBuilder`](crate::IndexBuilder), serialized into the page
/// and loaded once by the client. Never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "IndexRepr")]
pub struct SearchIndex {
    version: u32,
    fields: BTreeMap<Field, f64>,
    documents: Vec<DocId>,
    field_lengths: BTreeMap<Field, Vec<u32>>,
    terms: BTreeMap<String, BTreeMap<Field, Vec<Posting>>>,
    #[serde(skip)]
    average_lengths: BTreeMap<Field, f64>,
}

#[derive(Deserialize)]
struct IndexRepr {
    version: u32,
    fields: BTreeMap<Field, f64>,
    documents: Vec<DocId>,
    field_lengths: BTreeMap<Field, Vec<u32>>,
    terms: BTreeMap<String, BTreeMap<Field, Vec<Posting>>>,
}

impl TryFrom<IndexRepr> for SearchIndex {
    type Error = IndexError;

    fn try_from(repr: IndexRepr) -> IndexResult<Self> {
        if repr.version != INDEX_VERSION {
            return Err(IndexError::UnsupportedVersion {
                found: repr.version,
                expected: INDEX_VERSION,
            });
        }

        let n = repr.documents.len();
        let mut seen = FxHashSet::default();
        for id in &repr.documents {
            if !seen.insert(id) {
                return Err(IndexError::Corrupt(format!("document `{id}` listed twice")));
            }
        }

        for field in repr.fields.keys() {
            match repr.field_lengths.get(field) {
                Some(lengths) if lengths.len() == n => {}
                Some(lengths) => {
                    return Err(IndexError::Corrupt(format!(
                        "field `{field}` has {} lengths for {n} documents",
                        lengths.len()
                    )))
                }
                None => {
                    return Err(IndexError::Corrupt(format!(
                        "field `{field}` has no length table"
                    )))
                }
            }
        }

        for (term, by_field) in &repr.terms {
            for (field, postings) in by_field {
                if !repr.fields.contains_key(field) {
                    return Err(IndexError::Corrupt(format!(
                        "term `{term}` posted to unindexed field `{field}`"
                    )));
                }
                if let Some(p) = postings.iter().find(|p| p.0 as usize >= n || p.1 == 0) {
                    return Err(IndexError::Corrupt(format!(
                        "term `{term}` has invalid posting ({}, {})",
                        p.0, p.1
                    )));
                }
            }
        }

        Ok(Self::from_parts(
            repr.fields,
            repr.documents,
            repr.field_lengths,
            repr.terms,
        ))
    }
}

impl SearchIndex {
    pub(crate) fn from_parts(
        fields: BTreeMap<Field, f64>,
        documents: Vec<DocId>,
        field_lengths: BTreeMap<Field, Vec<u32>>,
        terms: BTreeMap<String, BTreeMap<Field, Vec<Posting>>>,
    ) -> Self {
        let average_lengths = field_lengths
            .iter()
            .map(|(&field, lengths)| {
                let total: u64 = lengths.iter().map(|&l| u64::from(l)).sum();
                let avg = if lengths.is_empty() {
                    0.0
                } else {
                    total as f64 / lengths.len() as f64
                };
                (field, avg)
            })
            .collect();

        Self {
            version: INDEX_VERSION,
            fields,
            documents,
            field_lengths,
            terms,
            average_lengths,
        }
    }

    /// Load and validate a serialized index.
    pub fn from_json(json: &str) -> IndexResult<Self> {
        let repr: IndexRepr = serde_json::from_str(json)?;
        Self::try_from(repr)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> IndexResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Format version.
    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the index holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document ids in insertion order.
    pub fn documents(&self) -> impl Iterator<Item = &DocId> {
        self.documents.iter()
    }

    /// Number of distinct terms.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Parse `input` as query syntax and run it.
    pub fn search(&self, input: &str) -> Result<Vec<SearchResult>, QueryParseError> {
        Ok(self.query(&Query::parse(input)?))
    }

    /// Typo-tolerant search for interactive input.
    ///
    /// Clauses without an explicit `~N` get `edit_distance`. A leading `-` is
    /// read as part of the name, not as an exclusion, so private members such
    /// as `-internal` stay findable. Input that is not valid query syntax is
    /// searched as plain text instead of failing.
    #[must_use]
    pub fn fuzzy_search(&self, input: &str, edit_distance: u8) -> Vec<SearchResult> {
        let query = match Query::parse(input) {
            Ok(q) => q.without_prohibitions().with_default_distance(edit_distance),
            Err(err) => {
                debug!(%err, input, "query syntax rejected, searching literally");
                Query::literal(input, edit_distance)
            }
        };
        self.query(&query)
    }

    /// Run a parsed query.
    ///
    /// Results are ordered by descending score, ties by insertion order.
    #[must_use]
    pub fn query(&self, query: &Query) -> Vec<SearchResult> {
        if query.is_empty() || self.is_empty() {
            return Vec::new();
        }

        let mut scores: FxHashMap<u32, f64> = FxHashMap::default();
        let mut matched_optional: FxHashSet<u32> = FxHashSet::default();
        let mut required: Option<FxHashSet<u32>> = None;
        let mut prohibited: FxHashSet<u32> = FxHashSet::default();
        let mut has_positive = false;

        for clause in &query.clauses {
            let mut matched = FxHashSet::default();
            for (term, distance) in self.expand(clause) {
                let Some(by_field) = self.terms.get(term) else {
                    continue;
                };
                for (&field, postings) in by_field {
                    if !clause.targets(field) {
                        continue;
                    }
                    let field_boost = self.fields.get(&field).copied().unwrap_or(1.0);
                    let idf = self.idf(postings.len());
                    for &Posting(ordinal, tf) in postings {
                        matched.insert(ordinal);
                        if clause.presence == Presence::Prohibited {
                            continue;
                        }
                        let score = self.bm25(field, ordinal, tf, idf) * field_boost * clause.boost
                            / (1.0 + f64::from(distance));
                        *scores.entry(ordinal).or_default() += score;
                    }
                }
            }

            match clause.presence {
                Presence::Optional => {
                    has_positive = true;
                    matched_optional.extend(matched);
                }
                Presence::Required => {
                    has_positive = true;
                    required = Some(match required {
                        Some(acc) => acc.intersection(&matched).copied().collect(),
                        None => matched,
                    });
                }
                Presence::Prohibited => prohibited.extend(matched),
            }
        }

        let candidates: Vec<u32> = match (required, has_positive) {
            (Some(req), _) => req.into_iter().collect(),
            (None, true) => matched_optional.into_iter().collect(),
            (None, false) => (0..self.documents.len() as u32).collect(),
        };

        let mut hits: Vec<(u32, f64)> = candidates
            .into_iter()
            .filter(|o| !prohibited.contains(o))
            .map(|o| (o, scores.get(&o).copied().unwrap_or(0.0)))
            .collect();
        hits.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        hits.into_iter()
            .enumerate()
            .map(|(rank, (ordinal, score))| SearchResult {
                id: self.documents[ordinal as usize].clone(),
                rank,
                score,
            })
            .collect()
    }

    /// Vocabulary terms a clause matches, with their edit distance.
    fn expand<'a>(&'a self, clause: &Clause) -> Vec<(&'a str, u8)> {
        let term = clause.term.as_str();

        if clause.has_wildcard() {
            let prefix = term.trim_end_matches('*');
            if !prefix.contains('*') && !prefix.is_empty() {
                return self
                    .terms
                    .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
                    .map(|(t, _)| t.as_str())
                    .take_while(|t| t.starts_with(prefix))
                    .map(|t| (t, 0))
                    .collect();
            }
            return self
                .terms
                .keys()
                .filter(|t| fuzzy::wildcard_match(term, t))
                .map(|t| (t.as_str(), 0))
                .collect();
        }

        match clause.edit_distance {
            Some(max) if max > 0 => self
                .terms
                .keys()
                .filter_map(|t| fuzzy::bounded_distance(term, t, max).map(|d| (t.as_str(), d)))
                .collect(),
            _ => self
                .terms
                .get_key_value(term)
                .map(|(t, _)| (t.as_str(), 0))
                .into_iter()
                .collect(),
        }
    }

    fn idf(&self, df: usize) -> f64 {
        let n = self.documents.len() as f64;
        let df = df as f64;
        (1.0 + ((n - df + 0.5) / (df + 0.5)).abs()).ln()
    }

    fn bm25(&self, field: Field, ordinal: u32, tf: u32, idf: f64) -> f64 {
        let len = self
            .field_lengths
            .get(&field)
            .and_then(|l| l.get(ordinal as usize))
            .copied()
            .unwrap_or(0);
        let avg = self.average_lengths.get(&field).copied().unwrap_or(0.0);
        let norm = if avg > 0.0 { f64::from(len) / avg } else { 1.0 };
        let tf = f64::from(tf);
        idf * (tf * (K1 + 1.0)) / (tf + K1 * (1.0 - B + B * norm))
    }
}
