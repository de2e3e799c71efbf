//! Documentation entries as handed over by the SassDoc parser.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IndexError;

/// The category of a documented construct.
///
/// The set is closed. None of the labels contain the id separator, which is
/// what makes [`DocId::decode`](crate::DocId::decode) unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    /// `@function`
    Function,
    /// `@mixin`
    Mixin,
    /// `%placeholder`
    Placeholder,
    /// `$variable`
    Variable,
    /// Plain CSS rule.
    Css,
}

impl DocType {
    /// Every type, in navigation order.
    pub const ALL: [DocType; 5] = [
        DocType::Function,
        DocType::Mixin,
        DocType::Placeholder,
        DocType::Variable,
        DocType::Css,
    ];

    /// The label used in ids, anchors and the `type` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DocType::Function => "function",
            DocType::Mixin => "mixin",
            DocType::Placeholder => "placeholder",
            DocType::Variable => "variable",
            DocType::Css => "css",
        }
    }

    /// Plural heading for navigation groups.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            DocType::Function => "Functions",
            DocType::Mixin => "Mixins",
            DocType::Placeholder => "Placeholders",
            DocType::Variable => "Variables",
            DocType::Css => "CSS",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DocType {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| IndexError::UnknownType(s.to_string()))
    }
}

/// One documented construct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocEntry {
    /// Category.
    #[serde(rename = "type")]
    pub doc_type: DocType,
    /// Identifier, without sigil (`$`, `%`).
    pub name: String,
}

impl DocEntry {
    /// Create an entry.
    pub fn new(doc_type: DocType, name: impl Into<String>) -> Self {
        Self {
            doc_type,
            name: name.into(),
        }
    }
}
