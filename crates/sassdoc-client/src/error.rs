//! Client error type.

use sassdoc_search::IndexError;
use thiserror::Error;

/// Errors raised by the in-page client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required element is not in the page.
    #[error("no element with id `{0}` in the page")]
    MissingElement(String),

    /// The embedded index could not be loaded.
    #[error("search index could not be loaded: {0}")]
    Index(#[from] IndexError),

    /// The embedded client options are not valid JSON.
    #[error("invalid client options: {0}")]
    Options(#[source] serde_json::Error),

    /// A search result could not be rendered.
    #[error("cannot render result `{id}`: {source}")]
    Render {
        /// Raw id of the result.
        id: String,
        /// Why it failed to decode.
        source: IndexError,
    },

    /// A DOM operation failed.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
