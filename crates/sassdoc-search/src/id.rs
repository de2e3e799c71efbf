//! Composite `type-name` identifiers.
//!
//! The identifier doubles as the in-page anchor of an entry's section, so the
//! page, the index and the client all agree on it. Encoding validates the name;
//! decoding splits on the first separator only, which is safe because no
//! [`DocType`] label contains the separator while names may.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entry::{DocEntry, DocType};
use crate::error::{IndexError, IndexResult};

/// Reserved separator between the type label and the name.
pub const SEPARATOR: char = '-';

/// A validated `type-name` identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocId(String);

impl DocId {
    /// Encode an identifier from its parts.
    pub fn encode(doc_type: DocType, name: &str) -> IndexResult<Self> {
        validate_name(name)?;
        Ok(Self(format!("{}{SEPARATOR}{name}", doc_type.as_str())))
    }

    /// Encode the identifier of an entry.
    pub fn for_entry(entry: &DocEntry) -> IndexResult<Self> {
        Self::encode(entry.doc_type, &entry.name)
    }

    /// Parse and validate an identifier string.
    pub fn parse(raw: &str) -> IndexResult<Self> {
        let (ty, name) = split(raw)?;
        Self::encode(ty, name)
    }

    /// Split back into type and name.
    pub fn decode(&self) -> IndexResult<(DocType, &str)> {
        split(&self.0)
    }

    /// The entry type.
    pub fn doc_type(&self) -> IndexResult<DocType> {
        self.decode().map(|(ty, _)| ty)
    }

    /// The entry name.
    pub fn name(&self) -> IndexResult<&str> {
        self.decode().map(|(_, name)| name)
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fragment link target, e.g. `#mixin-foo`.
    #[must_use]
    pub fn anchor(&self) -> String {
        format!("#{}", self.0)
    }
}

fn split(raw: &str) -> IndexResult<(DocType, &str)> {
    let (ty, name) = raw
        .split_once(SEPARATOR)
        .ok_or_else(|| IndexError::MalformedId(raw.to_string()))?;
    if name.is_empty() {
        return Err(IndexError::MalformedId(raw.to_string()));
    }
    let ty = ty
        .parse::<DocType>()
        .map_err(|_| IndexError::MalformedId(raw.to_string()))?;
    Ok((ty, name))
}

fn validate_name(name: &str) -> IndexResult<()> {
    let reject = |reason| {
        Err(IndexError::InvalidName {
            name: name.to_string(),
            reason,
        })
    };

    if name.is_empty() {
        return reject("name is empty");
    }
    if name.chars().any(char::is_whitespace) {
        return reject("name contains whitespace");
    }
    if name.chars().any(char::is_control) {
        return reject("name contains control characters");
    }
    if name.contains(['#', '"', '\'', '<', '>']) {
        return reject("name contains characters that are not valid in an anchor");
    }
    Ok(())
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DocId {
    type Error = IndexError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let (_, name) = split(&value)?;
        validate_name(name)?;
        Ok(Self(value))
    }
}

impl From<DocId> for String {
    fn from(id: DocId) -> Self {
        id.0
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_joins_with_separator() {
        let id = DocId::encode(DocType::Function, "foo").unwrap();
        assert_eq!(id.as_str(), "function-foo");
        assert_eq!(id.anchor(), "#function-foo");
    }

    #[test]
    fn test_decode_splits_on_first_separator() {
        let id = DocId::encode(DocType::Mixin, "foo-bar-baz").unwrap();
        assert_eq!(id.decode().unwrap(), (DocType::Mixin, "foo-bar-baz"));
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        assert!(matches!(
            DocId::parse("keyframes-spin"),
            Err(IndexError::MalformedId(_))
        ));
    }

    #[test]
    fn test_parse_rejects_missing_name() {
        assert!(DocId::parse("function-").is_err());
        assert!(DocId::parse("function").is_err());
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "foo bar", "a#b", "x\"y", "<b>", "tab\tbed"] {
            assert!(
                matches!(
                    DocId::encode(DocType::Variable, name),
                    Err(IndexError::InvalidName { .. })
                ),
                "name {name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_serde_validates() {
        let id: DocId = serde_json::from_str(r#""placeholder-card""#).unwrap();
        assert_eq!(id.decode().unwrap(), (DocType::Placeholder, "card"));
        assert!(serde_json::from_str::<DocId>(r#""bogus""#).is_err());
    }
}
