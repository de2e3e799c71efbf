//! Keystroke-driven search over the embedded index.

use sassdoc_search::{SearchIndex, SearchResult};
use tracing::debug;

use crate::dom::Dom;
use crate::error::ClientResult;
use crate::options::{DomContract, SearchOptions};
use crate::render;

/// What an input event did to the results container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The input was empty; the container was hidden without searching.
    Reset,
    /// Nothing matched; the container was hidden.
    NoResults,
    /// Results were rendered and the container shown.
    Shown(usize),
}

/// Owns the loaded index and runs one search cycle per input event.
#[derive(Debug, Clone)]
pub struct SearchClient {
    index: SearchIndex,
    options: SearchOptions,
}

impl SearchClient {
    /// Wrap a loaded index.
    #[must_use]
    pub fn new(index: SearchIndex, options: SearchOptions) -> Self {
        Self { index, options }
    }

    /// Load the index from its JSON form.
    pub fn from_json(json: &str, options: SearchOptions) -> ClientResult<Self> {
        Ok(Self::new(SearchIndex::from_json(json)?, options))
    }

    /// The loaded index.
    #[must_use]
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// The active options.
    #[must_use]
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Ranked results for `input`, cut to the configured limit.
    #[must_use]
    pub fn search(&self, input: &str) -> Vec<SearchResult> {
        let mut results = self.index.fuzzy_search(input, self.options.edit_distance);
        if let Some(limit) = self.options.limit {
            results.truncate(limit);
        }
        results
    }

    /// Handle one input event.
    ///
    /// The container's markup is replaced on every non-empty input.
    pub fn on_input<D: Dom>(
        &self,
        dom: &mut D,
        container: &D::Element,
        contract: &DomContract,
        value: &str,
    ) -> ClientResult<SearchOutcome> {
        if value.is_empty() {
            dom.add_class(container, &contract.hidden_class)?;
            return Ok(SearchOutcome::Reset);
        }

        let results = self.search(value);
        debug!(query = value, hits = results.len(), "search");
        let html = render::render_results(&results, &self.options)?;
        dom.set_inner_html(container, &html);
        dom.remove_class(container, &contract.error_class)?;

        if results.is_empty() {
            dom.add_class(container, &contract.hidden_class)?;
            Ok(SearchOutcome::NoResults)
        } else {
            dom.remove_class(container, &contract.hidden_class)?;
            Ok(SearchOutcome::Shown(results.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDom, MemoryElement};
    use sassdoc_search::{DocEntry, DocType, IndexBuilder};

    fn client(options: SearchOptions) -> SearchClient {
        let mut b = IndexBuilder::new();
        b.add(&DocEntry::new(DocType::Function, "foo")).unwrap();
        b.add(&DocEntry::new(DocType::Mixin, "foo-bar")).unwrap();
        SearchClient::new(b.build(), options)
    }

    fn page() -> (MemoryDom, crate::memory::NodeId) {
        let mut dom = MemoryDom::new();
        let results = dom.append(
            MemoryElement::new("div")
                .with_id("search-results")
                .with_classes("search-form__results search-form__results--hidden"),
        );
        (dom, results)
    }

    #[test]
    fn test_shows_results() {
        let (mut dom, results) = page();
        let c = client(SearchOptions::default());
        let outcome = c
            .on_input(&mut dom, &results, &DomContract::default(), "foo")
            .unwrap();
        assert_eq!(outcome, SearchOutcome::Shown(2));
        assert!(!dom.has_class(&results, "search-form__results--hidden"));
        let html = &dom.get(results).inner_html;
        assert!(html.find("#function-foo").unwrap() < html.find("#mixin-foo-bar").unwrap());
    }

    #[test]
    fn test_hides_on_no_results() {
        let (mut dom, results) = page();
        let c = client(SearchOptions::default());
        let contract = DomContract::default();
        c.on_input(&mut dom, &results, &contract, "foo").unwrap();
        let outcome = c.on_input(&mut dom, &results, &contract, "zzz999").unwrap();
        assert_eq!(outcome, SearchOutcome::NoResults);
        assert!(dom.has_class(&results, "search-form__results--hidden"));
    }

    #[test]
    fn test_empty_input_resets_without_rendering() {
        let (mut dom, results) = page();
        let c = client(SearchOptions::default());
        let contract = DomContract::default();
        c.on_input(&mut dom, &results, &contract, "foo").unwrap();
        let before = dom.get(results).inner_html.clone();
        let outcome = c.on_input(&mut dom, &results, &contract, "").unwrap();
        assert_eq!(outcome, SearchOutcome::Reset);
        assert!(dom.has_class(&results, "search-form__results--hidden"));
        assert_eq!(dom.get(results).inner_html, before);
    }

    #[test]
    fn test_limit() {
        let c = client(SearchOptions {
            limit: Some(1),
            ..SearchOptions::default()
        });
        assert_eq!(c.search("foo").len(), 1);
    }
}
