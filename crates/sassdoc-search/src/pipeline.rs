//! Text pipeline shared by indexing and querying.

/// Characters that separate tokens.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Strip leading and trailing non-word characters and lowercase.
///
/// Returns `None` when nothing is left.
#[must_use]
pub fn normalize(token: &str) -> Option<String> {
    let trimmed = token.trim_matches(|c: char| !is_word(c));
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Split text into normalized tokens.
///
/// `foo-bar` yields `foo` and `bar`; `$Primary` yields `primary`.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_separator).filter_map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_hyphen_and_space() {
        assert_eq!(tokenize("foo-bar baz"), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(tokenize("$Primary-Color!"), vec!["primary", "color"]);
    }

    #[test]
    fn test_keeps_inner_punctuation() {
        assert_eq!(tokenize("map.get"), vec!["map.get"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" -- ").is_empty());
    }
}
