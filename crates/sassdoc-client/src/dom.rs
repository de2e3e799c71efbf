//! The DOM operations the client needs.
//!
//! Implemented over `web-sys` in the browser and by [`MemoryDom`] in tests.
//!
//! [`MemoryDom`]: crate::memory::MemoryDom

use crate::error::ClientResult;

/// Minimal document interface.
pub trait Dom {
    /// Handle to an element. Equal handles refer to the same element.
    type Element: Clone + PartialEq;

    /// Element with the given id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Elements matching a selector, in document order.
    fn query_selector_all(&self, selector: &str) -> ClientResult<Vec<Self::Element>>;

    /// Attribute value.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Class list, in order.
    fn classes(&self, element: &Self::Element) -> Vec<String>;

    /// Current value of an input element.
    fn value(&self, element: &Self::Element) -> String;

    /// Add a class if absent.
    fn add_class(&mut self, element: &Self::Element, class: &str) -> ClientResult<()>;

    /// Remove a class if present.
    fn remove_class(&mut self, element: &Self::Element, class: &str) -> ClientResult<()>;

    /// Replace the element's children with parsed markup.
    fn set_inner_html(&mut self, element: &Self::Element, html: &str);

    /// Replace the element's children with a text node.
    fn set_text(&mut self, element: &Self::Element, text: &str);

    /// Whether the element has a class.
    fn has_class(&self, element: &Self::Element, class: &str) -> bool {
        self.classes(element).iter().any(|c| c == class)
    }

    /// Flip a class. Returns whether it is now present.
    fn toggle_class(&mut self, element: &Self::Element, class: &str) -> ClientResult<bool> {
        if self.has_class(element, class) {
            self.remove_class(element, class)?;
            Ok(false)
        } else {
            self.add_class(element, class)?;
            Ok(true)
        }
    }
}

/// Whether `name` can follow `.` or `#` in a selector without escaping.
///
/// Word characters and `-`, not starting with a digit or with `-` and a digit.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let head = match chars.next() {
        Some('-') => chars.next(),
        first => first,
    };
    match head {
        Some(c) if c.is_ascii_digit() => false,
        Some(_) => name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_'),
        None => false,
    }
}

impl<T: Dom + ?Sized> Dom for &mut T {
    type Element = T::Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        (**self).element_by_id(id)
    }

    fn query_selector_all(&self, selector: &str) -> ClientResult<Vec<Self::Element>> {
        (**self).query_selector_all(selector)
    }

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String> {
        (**self).attribute(element, name)
    }

    fn classes(&self, element: &Self::Element) -> Vec<String> {
        (**self).classes(element)
    }

    fn value(&self, element: &Self::Element) -> String {
        (**self).value(element)
    }

    fn add_class(&mut self, element: &Self::Element, class: &str) -> ClientResult<()> {
        (**self).add_class(element, class)
    }

    fn remove_class(&mut self, element: &Self::Element, class: &str) -> ClientResult<()> {
        (**self).remove_class(element, class)
    }

    fn set_inner_html(&mut self, element: &Self::Element, html: &str) {
        (**self).set_inner_html(element, html);
    }

    fn set_text(&mut self, element: &Self::Element, text: &str) {
        (**self).set_text(element, text);
    }
}
