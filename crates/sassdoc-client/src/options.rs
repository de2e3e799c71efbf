//! Client options and the DOM contract shared with the page generator.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Id of the `application/json` script holding the serialized index.
pub const INDEX_SCRIPT_ID: &str = "sassdoc-index";

/// Id of the `application/json` script holding the [`ClientOptions`].
pub const OPTIONS_SCRIPT_ID: &str = "sassdoc-options";

/// Ids, selectors and class names the client expects in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomContract {
    /// Id of the results container.
    pub results_id: String,
    /// Id of the search input.
    pub input_id: String,
    /// Selector matching navigation group headers.
    pub header_selector: String,
    /// Attribute on a header naming the group it toggles.
    pub toggle_attribute: String,
    /// Class hiding the results container.
    pub hidden_class: String,
    /// Class marking the results container as failed.
    pub error_class: String,
    /// Suffix appended to an element's first class when collapsed.
    pub collapsed_suffix: String,
}

impl Default for DomContract {
    fn default() -> Self {
        Self {
            results_id: "search-results".to_string(),
            input_id: "search".to_string(),
            header_selector: ".nav-group__header".to_string(),
            toggle_attribute: "data-toggles".to_string(),
            hidden_class: "search-form__results--hidden".to_string(),
            error_class: "search-form__results--error".to_string(),
            collapsed_suffix: "--collapsed".to_string(),
        }
    }
}

/// Search behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Edit distance applied to clauses without an explicit `~N`.
    pub edit_distance: u8,
    /// Number of characters of the type label shown per result; `None` shows
    /// it in full.
    pub type_label_len: Option<usize>,
    /// Maximum number of rendered results.
    pub limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            edit_distance: 1,
            type_label_len: Some(3),
            limit: None,
        }
    }
}

/// Everything the page passes to the client besides the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Search behaviour.
    pub search: SearchOptions,
    /// DOM contract.
    pub dom: DomContract,
}

impl ClientOptions {
    /// Parse options embedded in the page. Missing keys take their defaults.
    pub fn from_json(json: &str) -> ClientResult<Self> {
        serde_json::from_str(json).map_err(ClientError::Options)
    }
}
