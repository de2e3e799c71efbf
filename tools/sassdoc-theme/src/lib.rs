//! sassdoc-theme: HTML theme for SassDoc with built-in search.
//!
//! Turns SassDoc's parsed data into a single page with:
//!
//! - **Search as you type**: a prebuilt full-text index embedded in the page
//!   and queried by the `sassdoc-client` wasm module
//! - **Collapsible navigation**: one group per item type
//! - **Stable anchors**: every item lives at `#<type>-<name>`
//!
//! # Architecture
//!
//! 1. **Model** ([`model`]): SassDoc items as emitted by the parser
//! 2. **Config** ([`config`]): theme settings merged over defaults
//! 3. **Build** ([`build`]): index the items and render the site
//! 4. **Render** ([`render`]): HTML page or bare JSON index
//! 5. **Search** ([`search`]): query a built site from the command line
//! 6. **Check** ([`check`]): report every item that cannot be indexed
//!
//! # Usage
//!
//! ```ignore
//! use sassdoc_theme::{build, config::ThemeConfig, render::Format};
//!
//! let summary = build::run(build::BuildConfig {
//!     input: "sassdoc.json".into(),
//!     output: "docs".into(),
//!     format: Format::Html,
//!     theme: ThemeConfig::default(),
//! })?;
//! println!("{} documents indexed", summary.documents);
//! ```

#![warn(missing_docs)]

pub mod build;
pub mod check;
pub mod config;
pub mod model;
pub mod render;
pub mod search;
