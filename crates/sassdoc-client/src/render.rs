//! Result list markup.

use sassdoc_search::{DocType, SearchResult};
use std::fmt::Write;

use crate::error::{ClientError, ClientResult};
use crate::options::SearchOptions;

/// Type label shown next to a result, cut to `len` characters.
#[must_use]
pub fn type_label(doc_type: DocType, len: Option<usize>) -> &'static str {
    let label = doc_type.as_str();
    match len {
        Some(n) => match label.char_indices().nth(n) {
            Some((end, _)) => &label[..end],
            None => label,
        },
        None => label,
    }
}

/// Escape text for use in element content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the result list.
///
/// Fails if a result id does not decode into a type and a name.
pub fn render_results(results: &[SearchResult], options: &SearchOptions) -> ClientResult<String> {
    let mut html = String::from(r#"<ul class="search-form__results-list">"#);
    for result in results {
        let (doc_type, name) = result.id.decode().map_err(|source| ClientError::Render {
            id: result.id.to_string(),
            source,
        })?;
        // Writing to a String cannot fail.
        let _ = write!(
            html,
            r#"<li class="search-form__results-list-item"><a href="{}"><span>{}</span><span>{}</span></a></li>"#,
            escape_html(&result.id.anchor()),
            type_label(doc_type, options.type_label_len),
            escape_html(name),
        );
    }
    html.push_str("</ul>");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sassdoc_search::DocId;

    fn hit(ty: DocType, name: &str) -> SearchResult {
        SearchResult {
            id: DocId::encode(ty, name).unwrap(),
            rank: 0,
            score: 1.0,
        }
    }

    #[test]
    fn test_type_label() {
        assert_eq!(type_label(DocType::Function, Some(3)), "fun");
        assert_eq!(type_label(DocType::Css, Some(3)), "css");
        assert_eq!(type_label(DocType::Css, Some(10)), "css");
        assert_eq!(type_label(DocType::Placeholder, None), "placeholder");
        assert_eq!(type_label(DocType::Mixin, Some(0)), "");
    }

    #[test]
    fn test_render_list() {
        let html = render_results(
            &[hit(DocType::Function, "foo"), hit(DocType::Mixin, "foo-bar")],
            &SearchOptions::default(),
        )
        .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<ul class="search-form__results-list">"#,
                r##"<li class="search-form__results-list-item"><a href="#function-foo"><span>fun</span><span>foo</span></a></li>"##,
                r##"<li class="search-form__results-list-item"><a href="#mixin-foo-bar"><span>mix</span><span>foo-bar</span></a></li>"##,
                "</ul>"
            )
        );
    }

    #[test]
    fn test_escapes_names() {
        let html = render_results(&[hit(DocType::Function, "a&b")], &SearchOptions::default())
            .unwrap();
        assert!(html.contains("<span>a&amp;b</span>"));
        assert!(html.contains(r##"href="#function-a&amp;b""##));
    }

    #[test]
    fn test_empty_list() {
        let html = render_results(&[], &SearchOptions::default()).unwrap();
        assert_eq!(html, r#"<ul class="search-form__results-list"></ul>"#);
    }
}
