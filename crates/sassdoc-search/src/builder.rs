//! Build-time index construction.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::entry::{DocEntry, DocType};
use crate::error::{IndexError, IndexResult};
use crate::id::DocId;
use crate::index::{Posting, SearchIndex};
use crate::pipeline;
use crate::query::Field;

/// What to do when two entries produce the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with [`IndexError::DuplicateId`].
    #[default]
    Reject,
    /// Keep the later entry at the earlier entry's position.
    Replace,
}

/// A document as stored in the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedDocument {
    /// Composite identifier.
    pub id: DocId,
    /// Entry type.
    pub doc_type: DocType,
    /// Entry name.
    pub name: String,
}

impl IndexedDocument {
    /// Derive the document for an entry, validating its name.
    pub fn from_entry(entry: &DocEntry) -> IndexResult<Self> {
        Ok(Self {
            id: DocId::for_entry(entry)?,
            doc_type: entry.doc_type,
            name: entry.name.clone(),
        })
    }

    /// Raw text of an indexed field.
    #[must_use]
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Type => self.doc_type.as_str(),
            Field::Name => &self.name,
        }
    }
}

/// Accumulates entries and produces a [`SearchIndex`].
///
/// Documents are numbered in insertion order, so the same input order always
/// produces the same serialized index.
///
/// ```
/// use sassdoc_search::{DocEntry, DocType, IndexBuilder};
///
/// let mut builder = IndexBuilder::new();
/// builder.add(&DocEntry::new(DocType::Mixin, "button")).unwrap();
/// let index = builder.build();
/// assert_eq!(index.fuzzy_search("buton", 1)[0].id.as_str(), "mixin-button");
/// ```
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    fields: BTreeMap<Field, f64>,
    policy: DuplicatePolicy,
    documents: Vec<IndexedDocument>,
    positions: FxHashMap<DocId, usize>,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexBuilder {
    /// A builder indexing `type` and `name` with boost 1 and rejecting
    /// duplicates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Field::ALL.into_iter().map(|f| (f, 1.0)).collect(),
            policy: DuplicatePolicy::default(),
            documents: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    /// Set the boost of a field.
    #[must_use]
    pub fn field(mut self, field: Field, boost: f64) -> Self {
        self.fields.insert(field, boost);
        self
    }

    /// Set the duplicate policy.
    #[must_use]
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Add one entry and return its id.
    pub fn add(&mut self, entry: &DocEntry) -> IndexResult<&DocId> {
        let doc = IndexedDocument::from_entry(entry)?;

        let slot = match self.positions.get(&doc.id) {
            Some(&existing) => match self.policy {
                DuplicatePolicy::Reject => return Err(IndexError::DuplicateId { id: doc.id }),
                DuplicatePolicy::Replace => {
                    warn!(id = %doc.id, "duplicate documentation id, replacing earlier entry");
                    self.documents[existing] = doc;
                    existing
                }
            },
            None => {
                debug!(id = %doc.id, ordinal = self.documents.len(), "indexing entry");
                let slot = self.documents.len();
                self.positions.insert(doc.id.clone(), slot);
                self.documents.push(doc);
                slot
            }
        };
        Ok(&self.documents[slot].id)
    }

    /// Add every entry in order, stopping at the first error.
    pub fn extend<'a, I>(&mut self, entries: I) -> IndexResult<()>
    where
        I: IntoIterator<Item = &'a DocEntry>,
    {
        for entry in entries {
            self.add(entry)?;
        }
        Ok(())
    }

    /// Number of distinct documents so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no documents were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents in ordinal order.
    pub fn documents(&self) -> impl Iterator<Item = &IndexedDocument> {
        self.documents.iter()
    }

    /// Freeze into an immutable index.
    #[must_use]
    pub fn build(self) -> SearchIndex {
        let mut field_lengths: BTreeMap<Field, Vec<u32>> = self
            .fields
            .keys()
            .map(|&f| (f, vec![0; self.documents.len()]))
            .collect();
        let mut terms: BTreeMap<String, BTreeMap<Field, Vec<Posting>>> = BTreeMap::new();

        for (ordinal, doc) in self.documents.iter().enumerate() {
            for (&field, lengths) in &mut field_lengths {
                let tokens = pipeline::tokenize(doc.text(field));
                lengths[ordinal] = tokens.len() as u32;

                let mut frequencies: BTreeMap<String, u32> = BTreeMap::new();
                for token in tokens {
                    *frequencies.entry(token).or_default() += 1;
                }
                for (token, tf) in frequencies {
                    terms
                        .entry(token)
                        .or_default()
                        .entry(field)
                        .or_default()
                        .push(Posting(ordinal as u32, tf));
                }
            }
        }

        info!(
            documents = self.documents.len(),
            terms = terms.len(),
            "search index built"
        );

        let documents = self.documents.into_iter().map(|d| d.id).collect();
        SearchIndex::from_parts(self.fields, documents, field_lengths, terms)
    }
}
