//! Page-level controller wiring search and toggles to a document.

use tracing::{error, info};

use crate::dom::Dom;
use crate::error::{ClientError, ClientResult};
use crate::options::{ClientOptions, DomContract};
use crate::search::{SearchClient, SearchOutcome};
use crate::toggle::ToggleController;

/// Everything the theme does in the page, built once at load.
pub struct ThemeController<D: Dom> {
    dom: D,
    contract: DomContract,
    search: SearchClient,
    results: D::Element,
    input: D::Element,
    toggles: ToggleController<D::Element>,
}

impl<D: Dom> ThemeController<D> {
    /// Load the index and bind to the page.
    ///
    /// On failure the error is written into the results container, if there
    /// is one, before it is returned.
    pub fn new(mut dom: D, index_json: &str, options: ClientOptions) -> ClientResult<Self> {
        match Self::bind(&dom, index_json, &options) {
            Ok((search, results, input, toggles)) => {
                info!(
                    documents = search.index().len(),
                    toggles = toggles.len(),
                    "theme controller ready"
                );
                Ok(Self {
                    dom,
                    contract: options.dom,
                    search,
                    results,
                    input,
                    toggles,
                })
            }
            Err(err) => {
                report_boot_error(&mut dom, &options.dom, &err);
                Err(err)
            }
        }
    }

    #[allow(clippy::type_complexity)]
    fn bind(
        dom: &D,
        index_json: &str,
        options: &ClientOptions,
    ) -> ClientResult<(SearchClient, D::Element, D::Element, ToggleController<D::Element>)> {
        let contract = &options.dom;
        let results = dom
            .element_by_id(&contract.results_id)
            .ok_or_else(|| ClientError::MissingElement(contract.results_id.clone()))?;
        let input = dom
            .element_by_id(&contract.input_id)
            .ok_or_else(|| ClientError::MissingElement(contract.input_id.clone()))?;
        let search = SearchClient::from_json(index_json, options.search.clone())?;
        let toggles = ToggleController::register(dom, contract)?;
        Ok((search, results, input, toggles))
    }

    /// Run a search cycle with the input's current value.
    pub fn on_input(&mut self) -> ClientResult<SearchOutcome> {
        let value = self.dom.value(&self.input);
        self.on_input_value(&value)
    }

    /// Run a search cycle for `value`.
    ///
    /// A render failure is shown in the results container and returned.
    pub fn on_input_value(&mut self, value: &str) -> ClientResult<SearchOutcome> {
        let outcome = self
            .search
            .on_input(&mut self.dom, &self.results, &self.contract, value);
        if let Err(err) = &outcome {
            error!(%err, "search failed");
            self.show_error(&err.to_string())?;
        }
        outcome
    }

    /// Flip the header at `index` and its group.
    ///
    /// A failure is logged and shown in the results container, like a failed
    /// search.
    pub fn on_toggle(&mut self, index: usize) -> ClientResult<()> {
        let outcome = self.toggles.trigger(&mut self.dom, index);
        if let Err(err) = &outcome {
            error!(%err, index, "toggle failed");
            self.show_error(&err.to_string())?;
        }
        outcome
    }

    /// Put the results container into its visible error state.
    pub fn show_error(&mut self, message: &str) -> ClientResult<()> {
        show_error_in(&mut self.dom, &self.results, &self.contract, message)
    }

    /// The document.
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// The results container.
    pub fn results(&self) -> &D::Element {
        &self.results
    }

    /// The search input.
    pub fn input(&self) -> &D::Element {
        &self.input
    }

    /// Registered toggle headers.
    pub fn toggles(&self) -> &ToggleController<D::Element> {
        &self.toggles
    }

    /// The search client.
    pub fn search(&self) -> &SearchClient {
        &self.search
    }
}

/// Show a start-up failure in the results container, if the page has one.
pub fn report_boot_error<D: Dom>(dom: &mut D, contract: &DomContract, err: &ClientError) {
    error!(%err, "theme controller failed to start");
    if let Some(results) = dom.element_by_id(&contract.results_id) {
        // Best effort: the boot error is what gets reported.
        let _ = show_error_in(dom, &results, contract, &err.to_string());
    }
}

fn show_error_in<D: Dom>(
    dom: &mut D,
    results: &D::Element,
    contract: &DomContract,
    message: &str,
) -> ClientResult<()> {
    dom.set_text(results, message);
    dom.add_class(results, &contract.error_class)?;
    dom.remove_class(results, &contract.hidden_class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDom, MemoryElement, NodeId};
    use sassdoc_search::{DocEntry, DocType, IndexBuilder};

    fn page() -> (MemoryDom, NodeId, NodeId) {
        let mut dom = MemoryDom::new();
        let input = dom.append(MemoryElement::new("input").with_id("search"));
        let results = dom.append(
            MemoryElement::new("div")
                .with_id("search-results")
                .with_classes("search-form__results search-form__results--hidden"),
        );
        dom.append(
            MemoryElement::new("h3")
                .with_classes("nav-group__header")
                .with_attribute("data-toggles", "nav-group--function"),
        );
        dom.append(MemoryElement::new("ul").with_classes("nav-group__items nav-group--function"));
        (dom, input, results)
    }

    fn index_json() -> String {
        let mut b = IndexBuilder::new();
        b.add(&DocEntry::new(DocType::Function, "foo")).unwrap();
        b.add(&DocEntry::new(DocType::Mixin, "foo-bar")).unwrap();
        b.build().to_json().unwrap()
    }

    #[test]
    fn test_boot_and_search() {
        let (mut dom, input, results) = page();
        dom.set_value(input, "foo");
        let mut theme =
            ThemeController::new(&mut dom, &index_json(), ClientOptions::default()).unwrap();
        assert_eq!(theme.toggles().len(), 1);
        assert_eq!(theme.on_input().unwrap(), SearchOutcome::Shown(2));
        assert!(!theme.dom().has_class(&results, "search-form__results--hidden"));
    }

    #[test]
    fn test_toggle() {
        let (mut dom, _, _) = page();
        let mut theme =
            ThemeController::new(&mut dom, &index_json(), ClientOptions::default()).unwrap();
        theme.on_toggle(0).unwrap();
        theme.on_toggle(0).unwrap();
        theme.on_toggle(0).unwrap();
        drop(theme);
        let list = dom.query_selector_all(".nav-group--function").unwrap()[0];
        assert!(dom.has_class(&list, "nav-group__items--collapsed"));
    }

    /// A document whose selector queries start failing once `broken` is set.
    struct BrittleDom {
        inner: MemoryDom,
        broken: std::rc::Rc<std::cell::Cell<bool>>,
    }

    impl Dom for BrittleDom {
        type Element = NodeId;

        fn element_by_id(&self, id: &str) -> Option<NodeId> {
            self.inner.element_by_id(id)
        }

        fn query_selector_all(&self, selector: &str) -> ClientResult<Vec<NodeId>> {
            if self.broken.get() {
                return Err(ClientError::Dom(format!("cannot query `{selector}`")));
            }
            self.inner.query_selector_all(selector)
        }

        fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
            self.inner.attribute(element, name)
        }

        fn classes(&self, element: &NodeId) -> Vec<String> {
            self.inner.classes(element)
        }

        fn value(&self, element: &NodeId) -> String {
            self.inner.value(element)
        }

        fn add_class(&mut self, element: &NodeId, class: &str) -> ClientResult<()> {
            self.inner.add_class(element, class)
        }

        fn remove_class(&mut self, element: &NodeId, class: &str) -> ClientResult<()> {
            self.inner.remove_class(element, class)
        }

        fn set_inner_html(&mut self, element: &NodeId, html: &str) {
            self.inner.set_inner_html(element, html);
        }

        fn set_text(&mut self, element: &NodeId, text: &str) {
            self.inner.set_text(element, text);
        }
    }

    #[test]
    fn test_failed_toggle_shows_error() {
        let (dom, _, results) = page();
        let header = dom.query_selector_all(".nav-group__header").unwrap()[0];
        let broken = std::rc::Rc::new(std::cell::Cell::new(false));
        let dom = BrittleDom {
            inner: dom,
            broken: std::rc::Rc::clone(&broken),
        };
        let mut theme = ThemeController::new(dom, &index_json(), ClientOptions::default()).unwrap();

        broken.set(true);
        assert!(matches!(theme.on_toggle(0), Err(ClientError::Dom(_))));
        assert!(theme.dom().has_class(&results, "search-form__results--error"));
        assert!(!theme.dom().has_class(&header, "nav-group__header--collapsed"));
    }

    #[test]
    fn test_bad_index_shows_error() {
        let (mut dom, _, results) = page();
        let err = ThemeController::new(&mut dom, "{not json", ClientOptions::default())
            .err()
            .unwrap();
        assert!(matches!(err, ClientError::Index(_)));
        assert!(dom.has_class(&results, "search-form__results--error"));
        assert!(!dom.has_class(&results, "search-form__results--hidden"));
        assert!(dom.get(results).text.contains("search index could not be loaded"));
    }

    #[test]
    fn test_show_error_then_recover() {
        let (mut dom, _, results) = page();
        let mut theme =
            ThemeController::new(&mut dom, &index_json(), ClientOptions::default()).unwrap();
        theme.show_error("boom").unwrap();
        theme.on_input_value("foo").unwrap();
        drop(theme);
        assert!(!dom.has_class(&results, "search-form__results--error"));
        assert!(dom.get(results).text.is_empty());
    }

    #[test]
    fn test_missing_input() {
        let mut dom = MemoryDom::new();
        dom.append(MemoryElement::new("div").with_id("search-results"));
        let err = ThemeController::new(dom, &index_json(), ClientOptions::default())
            .err()
            .unwrap();
        assert!(matches!(err, ClientError::MissingElement(id) if id == "search"));
    }
}
