//! # SassDoc Search
//!
//! Full-text index over SassDoc entries, built once when the site is generated
//! and queried in the browser on every keystroke.
//!
//! ## Overview
//!
//! ```text
//!  DocEntry list ──▶ IndexBuilder ──▶ SearchIndex ──▶ JSON (embedded in page)
//!                                                          │
//!                         ranked DocIds ◀── fuzzy_search ◀─┘
//! ```
//!
//! Every entry is identified by a [`DocId`] of the form `type-name`, which is
//! also the anchor of its section in the generated page. Two fields are
//! indexed, `type` and `name`, and hits are ranked with BM25.
//!
//! ## Usage
//!
//! ```
//! use sassdoc_search::{DocEntry, DocType, IndexBuilder, SearchIndex};
//!
//! let mut builder = IndexBuilder::new();
//! builder.add(&DocEntry::new(DocType::Function, "foo")).unwrap();
//! builder.add(&DocEntry::new(DocType::Mixin, "foo-bar")).unwrap();
//! let json = builder.build().to_json().unwrap();
//!
//! let index = SearchIndex::from_json(&json).unwrap();
//! let hits = index.fuzzy_search("foo", 1);
//! assert_eq!(hits[0].id.as_str(), "function-foo");
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod entry;
pub mod error;
pub mod fuzzy;
pub mod id;
pub mod index;
pub mod pipeline;
pub mod query;

pub use builder::{DuplicatePolicy, IndexBuilder, IndexedDocument};
pub use entry::{DocEntry, DocType};
pub use error::{IndexError, IndexResult, QueryParseError};
pub use id::{DocId, SEPARATOR};
pub use index::{SearchIndex, SearchResult, INDEX_VERSION};
pub use query::{Clause, Field, Presence, Query};
