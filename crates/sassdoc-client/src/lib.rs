//! # SassDoc Client
//!
//! In-page behaviour of the SassDoc theme: search-as-you-type over the
//! embedded index and collapsible navigation groups.
//!
//! The page logic is written against the [`Dom`] trait. In the browser it runs
//! over `web-sys` (see `SassDocTheme`, compiled for `wasm32` only); elsewhere
//! [`MemoryDom`] stands in for the document.
//!
//! ```
//! use sassdoc_client::{ClientOptions, MemoryDom, MemoryElement, ThemeController};
//! use sassdoc_search::{DocEntry, DocType, IndexBuilder};
//!
//! let mut builder = IndexBuilder::new();
//! builder.add(&DocEntry::new(DocType::Function, "foo")).unwrap();
//! let index = builder.build().to_json().unwrap();
//!
//! let mut dom = MemoryDom::new();
//! dom.append(MemoryElement::new("input").with_id("search"));
//! let results = dom.append(MemoryElement::new("div").with_id("search-results"));
//!
//! let mut theme = ThemeController::new(&mut dom, &index, ClientOptions::default()).unwrap();
//! theme.on_input_value("foo").unwrap();
//! drop(theme);
//! assert!(dom.get(results).inner_html.contains("#function-foo"));
//! ```

#![warn(missing_docs)]

pub mod controller;
pub mod dom;
pub mod error;
pub mod memory;
pub mod options;
pub mod render;
pub mod search;
pub mod toggle;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use controller::{report_boot_error, ThemeController};
pub use dom::Dom;
pub use error::{ClientError, ClientResult};
pub use memory::{MemoryDom, MemoryElement, NodeId};
pub use options::{
    ClientOptions, DomContract, SearchOptions, INDEX_SCRIPT_ID, OPTIONS_SCRIPT_ID,
};
pub use search::{SearchClient, SearchOutcome};
pub use toggle::{ToggleBinding, ToggleController};

#[cfg(target_arch = "wasm32")]
pub use wasm::{SassDocTheme, WebDom};
