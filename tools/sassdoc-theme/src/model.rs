//! SassDoc parser output.
//!
//! Only the fields the theme renders are typed; everything else is kept as
//! opaque JSON so items survive a round trip unchanged.

use anyhow::{Context, Result};
use sassdoc_search::{DocEntry, DocType, IndexResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One documented item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SassDocItem {
    /// Free-form description. Rendered as plain text.
    #[serde(default)]
    pub description: String,

    /// What is documented.
    pub context: ItemContext,

    /// Every other field SassDoc emits.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The `context` object of an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemContext {
    /// Type label, e.g. `mixin`.
    #[serde(rename = "type")]
    pub doc_type: String,

    /// Name without sigil.
    pub name: String,

    /// Body of a function, mixin or placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Value of a variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Source lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<LineRange>,

    /// Other context fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Inclusive line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    /// First line.
    pub start: u32,
    /// Last line.
    pub end: u32,
}

impl SassDocItem {
    /// The index entry for this item.
    pub fn entry(&self) -> IndexResult<DocEntry> {
        let doc_type: DocType = self.context.doc_type.parse()?;
        Ok(DocEntry::new(doc_type, self.context.name.clone()))
    }

    /// Source shown under the item: code for callables, value for variables.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.context
            .code
            .as_deref()
            .or(self.context.value.as_deref())
    }
}

/// Read a SassDoc data file (a JSON array of items).
pub fn load_items(path: &Path) -> Result<Vec<SassDocItem>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading SassDoc data {}", path.display()))?;
    let items: Vec<SassDocItem> = serde_json::from_str(&json)
        .with_context(|| format!("parsing SassDoc data {}", path.display()))?;
    tracing::debug!(items = items.len(), ?path, "loaded SassDoc data");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM: &str = r#"{
        "description": "Sets the button theme.\n",
        "commentRange": {"start": 1, "end": 4},
        "context": {
            "type": "mixin",
            "name": "button-theme",
            "code": "\n  color: $color;\n",
            "line": {"start": 5, "end": 7}
        },
        "group": ["themes"],
        "access": "public"
    }"#;

    #[test]
    fn test_parse_item() {
        let item: SassDocItem = serde_json::from_str(ITEM).unwrap();
        assert_eq!(item.context.name, "button-theme");
        assert_eq!(item.context.line, Some(LineRange { start: 5, end: 7 }));
        assert!(item.extra.contains_key("group"));
        assert_eq!(
            item.entry().unwrap(),
            DocEntry::new(DocType::Mixin, "button-theme")
        );
        assert_eq!(item.source(), Some("\n  color: $color;\n"));
    }

    #[test]
    fn test_unknown_type() {
        let item: SassDocItem =
            serde_json::from_str(r#"{"context":{"type":"keyframes","name":"spin"}}"#).unwrap();
        assert!(item.entry().is_err());
    }

    #[test]
    fn test_round_trip_keeps_opaque_fields() {
        let item: SassDocItem = serde_json::from_str(ITEM).unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["access"], "public");
        assert_eq!(value["commentRange"]["end"], 4);
    }
}
