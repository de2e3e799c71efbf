//! Query model and parser.
//!
//! A query is a list of clauses separated by whitespace. Each clause may carry
//! a presence prefix (`+` required, `-` prohibited), a field restriction
//! (`name:`), wildcards (`*`) and trailing modifiers (`~N` edit distance, `^N`
//! boost). Hyphens inside a term split it into several clauses sharing the
//! same modifiers, mirroring how field text is tokenized.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QueryParseError;
use crate::pipeline;

/// An indexed text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The entry type label.
    Type,
    /// The entry name.
    Name,
}

impl Field {
    /// Every field, in serialization order.
    pub const ALL: [Field; 2] = [Field::Type, Field::Name];

    /// Field name as used in query syntax.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::Name => "name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = QueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| QueryParseError::UnknownField(s.to_string()))
    }
}

/// Whether a clause must, may or must not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    /// Contributes to the score when it matches.
    #[default]
    Optional,
    /// Documents that do not match are dropped.
    Required,
    /// Documents that match are dropped.
    Prohibited,
}

/// One term of a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// Normalized term, possibly containing `*`.
    pub term: String,
    /// Fields to search; `None` means all.
    pub fields: Option<Vec<Field>>,
    /// Maximum edit distance; `None` means exact.
    pub edit_distance: Option<u8>,
    /// Score multiplier.
    pub boost: f64,
    /// Presence requirement.
    pub presence: Presence,
}

impl Clause {
    /// An optional, unboosted clause over all fields.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            fields: None,
            edit_distance: None,
            boost: 1.0,
            presence: Presence::Optional,
        }
    }

    /// Whether the term contains a wildcard.
    #[must_use]
    pub fn has_wildcard(&self) -> bool {
        self.term.contains('*')
    }

    /// Whether this clause searches `field`.
    #[must_use]
    pub fn targets(&self, field: Field) -> bool {
        self.fields.as_ref().map_or(true, |fs| fs.contains(&field))
    }
}

/// A parsed query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    /// Clauses in input order.
    pub clauses: Vec<Clause>,
}

impl Query {
    /// Parse query syntax.
    pub fn parse(input: &str) -> Result<Self, QueryParseError> {
        let mut clauses = Vec::new();
        for raw in input.split_whitespace() {
            parse_clause(raw, &mut clauses)?;
        }
        Ok(Self { clauses })
    }

    /// Treat `input` as plain text: one fuzzy clause per token.
    #[must_use]
    pub fn literal(input: &str, edit_distance: u8) -> Self {
        let clauses = pipeline::tokenize(input)
            .into_iter()
            .map(|term| Clause {
                edit_distance: Some(edit_distance),
                ..Clause::new(term)
            })
            .collect();
        Self { clauses }
    }

    /// Give every non-wildcard clause without an explicit `~N` the distance
    /// `edit_distance`.
    #[must_use]
    pub fn with_default_distance(mut self, edit_distance: u8) -> Self {
        for clause in &mut self.clauses {
            if clause.edit_distance.is_none() && !clause.has_wildcard() {
                clause.edit_distance = Some(edit_distance);
            }
        }
        self
    }

    /// Turn prohibited clauses into optional ones.
    ///
    /// Sass private members are named with a leading `-`, so in typed input
    /// that hyphen belongs to the name rather than excluding it.
    #[must_use]
    pub fn without_prohibitions(mut self) -> Self {
        for clause in &mut self.clauses {
            if clause.presence == Presence::Prohibited {
                clause.presence = Presence::Optional;
            }
        }
        self
    }

    /// Whether the query has no clauses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl FromStr for Query {
    type Err = QueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Query::parse(s)
    }
}

fn parse_clause(raw: &str, out: &mut Vec<Clause>) -> Result<(), QueryParseError> {
    let mut rest = raw;

    let presence = match rest.chars().next() {
        Some('+') => Presence::Required,
        Some('-') => Presence::Prohibited,
        _ => Presence::Optional,
    };
    if presence != Presence::Optional {
        rest = &rest[1..];
    }

    let mut fields = None;
    if let Some((name, term)) = rest.split_once(':') {
        fields = Some(vec![name.parse::<Field>()?]);
        rest = term;
    }

    let (text, modifiers) = match rest.find(['~', '^']) {
        Some(at) => rest.split_at(at),
        None => (rest, ""),
    };
    let (edit_distance, boost) = parse_modifiers(modifiers, raw)?;

    let terms: Vec<String> = text
        .split(pipeline::is_separator)
        .filter_map(normalize_term)
        .collect();
    if terms.is_empty() {
        // A bare `$` or `.` carries nothing searchable and is not an error on
        // its own, but a clause with syntax attached to it is.
        let has_syntax =
            presence != Presence::Optional || fields.is_some() || !modifiers.is_empty();
        if has_syntax {
            return Err(QueryParseError::EmptyTerm(raw.to_string()));
        }
        return Ok(());
    }

    out.extend(terms.into_iter().map(|term| Clause {
        term,
        fields: fields.clone(),
        edit_distance,
        boost,
        presence,
    }));
    Ok(())
}

fn parse_modifiers(mut s: &str, clause: &str) -> Result<(Option<u8>, f64), QueryParseError> {
    let mut edit_distance = None;
    let mut boost = 1.0;

    while let Some(modifier) = s.chars().next() {
        let body = &s[modifier.len_utf8()..];
        let end = body
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(body.len());
        let number = &body[..end];
        let missing = || QueryParseError::MissingNumber {
            modifier,
            clause: clause.to_string(),
        };
        match modifier {
            '~' => edit_distance = Some(number.parse::<u8>().map_err(|_| missing())?),
            '^' => boost = number.parse::<f64>().map_err(|_| missing())?,
            _ => return Err(QueryParseError::EmptyTerm(clause.to_string())),
        }
        s = &body[end..];
    }
    Ok((edit_distance, boost))
}

/// Like [`pipeline::normalize`] but keeps `*`.
fn normalize_term(token: &str) -> Option<String> {
    if !token.contains('*') {
        return pipeline::normalize(token);
    }
    let trimmed = token.trim_matches(|c: char| c != '*' && !(c.is_alphanumeric() || c == '_'));
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
