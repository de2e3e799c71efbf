//! Browser binding.
//!
//! ```javascript
//! import init, { SassDocTheme } from './sassdoc_client.js';
//!
//! await init();
//! const index = document.getElementById('sassdoc-index').textContent;
//! const options = document.getElementById('sassdoc-options')?.textContent;
//! new SassDocTheme(index, options);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::controller::{report_boot_error, ThemeController};
use crate::dom::Dom;
use crate::error::{ClientError, ClientResult};
use crate::options::{ClientOptions, DomContract, INDEX_SCRIPT_ID};

// Route panics to the browser console
#[wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
}

fn js_error(value: JsValue) -> ClientError {
    ClientError::Dom(format!("{value:?}"))
}

/// The live document.
#[derive(Debug, Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    /// The document of the current window.
    pub fn from_window() -> ClientResult<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|document| Self { document })
            .ok_or_else(|| ClientError::Dom("no document in this context".to_string()))
    }
}

impl Dom for WebDom {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_selector_all(&self, selector: &str) -> ClientResult<Vec<Element>> {
        let nodes = self.document.query_selector_all(selector).map_err(js_error)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn classes(&self, element: &Element) -> Vec<String> {
        let list = element.class_list();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    fn value(&self, element: &Element) -> String {
        element
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    fn add_class(&mut self, element: &Element, class: &str) -> ClientResult<()> {
        element.class_list().add_1(class).map_err(js_error)
    }

    fn remove_class(&mut self, element: &Element, class: &str) -> ClientResult<()> {
        element.class_list().remove_1(class).map_err(js_error)
    }

    fn set_inner_html(&mut self, element: &Element, html: &str) {
        element.set_inner_html(html);
    }

    fn set_text(&mut self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn toggle_class(&mut self, element: &Element, class: &str) -> ClientResult<bool> {
        element.class_list().toggle(class).map_err(js_error)
    }
}

/// The theme's page controller, as seen from JavaScript.
#[wasm_bindgen]
pub struct SassDocTheme {
    controller: Rc<RefCell<ThemeController<WebDom>>>,
}

#[wasm_bindgen]
impl SassDocTheme {
    /// Load the index, bind to the page and attach listeners.
    ///
    /// Throws after showing the error in the results container if the page
    /// cannot be set up; no listeners are attached in that case.
    #[wasm_bindgen(constructor)]
    pub fn new(
        index_json: Option<String>,
        options_json: Option<String>,
    ) -> Result<SassDocTheme, JsError> {
        let mut dom = WebDom::from_window().map_err(to_js)?;

        let Some(index_json) = index_json else {
            let err = ClientError::MissingElement(INDEX_SCRIPT_ID.to_string());
            report_boot_error(&mut dom, &DomContract::default(), &err);
            return Err(to_js(err));
        };

        let options = match options_json.as_deref().map(ClientOptions::from_json) {
            None => ClientOptions::default(),
            Some(Ok(options)) => options,
            Some(Err(err)) => {
                report_boot_error(&mut dom, &DomContract::default(), &err);
                return Err(to_js(err));
            }
        };

        let controller = ThemeController::new(dom, &index_json, options).map_err(to_js)?;
        let input = controller.input().clone();
        let headers: Vec<Element> = controller
            .toggles()
            .bindings()
            .iter()
            .map(|b| b.header.clone())
            .collect();
        let controller = Rc::new(RefCell::new(controller));

        let on_input = {
            let controller = Rc::clone(&controller);
            Closure::wrap(Box::new(move |_: Event| {
                if let Ok(mut controller) = controller.try_borrow_mut() {
                    // Failures are already shown in the results container.
                    let _ = controller.on_input();
                }
            }) as Box<dyn FnMut(Event)>)
        };
        input
            .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
            .map_err(|e| to_js(js_error(e)))?;
        on_input.forget();

        for (index, header) in headers.iter().enumerate() {
            let controller = Rc::clone(&controller);
            let on_click = Closure::wrap(Box::new(move |_: Event| {
                if let Ok(mut controller) = controller.try_borrow_mut() {
                    // Failures are logged and shown in the results container.
                    let _ = controller.on_toggle(index);
                }
            }) as Box<dyn FnMut(Event)>);
            header
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .map_err(|e| to_js(js_error(e)))?;
            on_click.forget();
        }

        Ok(Self { controller })
    }

    /// Ranked results for `query` as JSON, without touching the page.
    pub fn search(&self, query: &str) -> Result<String, JsError> {
        let controller = self.controller.borrow();
        let results = controller.search().search(query);
        serde_json::to_string(&results).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Number of documents in the loaded index.
    #[wasm_bindgen(getter)]
    pub fn documents(&self) -> usize {
        self.controller.borrow().search().index().len()
    }
}

fn to_js(err: ClientError) -> JsError {
    JsError::new(&err.to_string())
}
