//! In-memory document for headless use.
//!
//! Elements form a flat list in document order. Selectors are limited to a
//! single `.class`, `#id` or tag name.

use std::collections::BTreeMap;

use crate::dom::{is_identifier, Dom};
use crate::error::{ClientError, ClientResult};

/// Handle to a [`MemoryDom`] element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    /// Tag name.
    pub tag: String,
    /// `id` attribute.
    pub id: Option<String>,
    /// Class list.
    pub classes: Vec<String>,
    /// Other attributes.
    pub attributes: BTreeMap<String, String>,
    /// Markup last assigned through `set_inner_html`.
    pub inner_html: String,
    /// Text last assigned through `set_text`.
    pub text: String,
    /// Input value.
    pub value: String,
}

impl MemoryElement {
    /// An element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the class list from a space separated string.
    #[must_use]
    pub fn with_classes(mut self, classes: &str) -> Self {
        self.classes = classes.split_whitespace().map(str::to_string).collect();
        self
    }

    /// Set an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

enum Selector<'a> {
    Class(&'a str),
    Id(&'a str),
    Tag(&'a str),
}

impl<'a> Selector<'a> {
    fn parse(raw: &'a str) -> ClientResult<Self> {
        let raw = raw.trim();
        let selector = if let Some(class) = raw.strip_prefix('.') {
            Selector::Class(class)
        } else if let Some(id) = raw.strip_prefix('#') {
            Selector::Id(id)
        } else {
            Selector::Tag(raw)
        };
        let name = match selector {
            Selector::Class(s) | Selector::Id(s) | Selector::Tag(s) => s,
        };
        if is_identifier(name) {
            Ok(selector)
        } else {
            Err(ClientError::Dom(format!("unsupported selector `{raw}`")))
        }
    }

    fn matches(&self, e: &MemoryElement) -> bool {
        match *self {
            Selector::Class(class) => e.classes.iter().any(|c| c == class),
            Selector::Id(id) => e.id.as_deref() == Some(id),
            Selector::Tag(tag) => e.tag.eq_ignore_ascii_case(tag),
        }
    }
}

/// A document held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    elements: Vec<MemoryElement>,
}

impl MemoryDom {
    /// An empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element and return its handle.
    pub fn append(&mut self, element: MemoryElement) -> NodeId {
        self.elements.push(element);
        NodeId(self.elements.len() - 1)
    }

    /// Borrow an element.
    #[must_use]
    pub fn get(&self, node: NodeId) -> &MemoryElement {
        &self.elements[node.0]
    }

    /// Set an input's value.
    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) {
        self.elements[node.0].value = value.into();
    }

    /// Class list as a space separated string.
    #[must_use]
    pub fn class_name(&self, node: NodeId) -> String {
        self.get(node).classes.join(" ")
    }
}

impl Dom for MemoryDom {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements
            .iter()
            .position(|e| e.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn query_selector_all(&self, selector: &str) -> ClientResult<Vec<NodeId>> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, e)| selector.matches(e))
            .map(|(i, _)| NodeId(i))
            .collect())
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        let e = self.get(*element);
        match name {
            "id" => e.id.clone(),
            "class" => Some(e.classes.join(" ")),
            _ => e.attributes.get(name).cloned(),
        }
    }

    fn classes(&self, element: &NodeId) -> Vec<String> {
        self.get(*element).classes.clone()
    }

    fn value(&self, element: &NodeId) -> String {
        self.get(*element).value.clone()
    }

    fn add_class(&mut self, element: &NodeId, class: &str) -> ClientResult<()> {
        let classes = &mut self.elements[element.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&mut self, element: &NodeId, class: &str) -> ClientResult<()> {
        self.elements[element.0].classes.retain(|c| c != class);
        Ok(())
    }

    fn set_inner_html(&mut self, element: &NodeId, html: &str) {
        let e = &mut self.elements[element.0];
        e.inner_html = html.to_string();
        e.text.clear();
    }

    fn set_text(&mut self, element: &NodeId, text: &str) {
        let e = &mut self.elements[element.0];
        e.text = text.to_string();
        e.inner_html.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors() {
        let mut dom = MemoryDom::new();
        let a = dom.append(MemoryElement::new("h3").with_classes("nav-group__header x"));
        let b = dom.append(MemoryElement::new("ul").with_id("list").with_classes("x"));

        assert_eq!(dom.query_selector_all(".x").unwrap(), vec![a, b]);
        assert_eq!(dom.query_selector_all("#list").unwrap(), vec![b]);
        assert_eq!(dom.query_selector_all("h3").unwrap(), vec![a]);
        assert!(dom.query_selector_all(".missing").unwrap().is_empty());
        assert!(dom.query_selector_all("ul > li").is_err());
        assert!(dom.query_selector_all(".1col").is_err());
        assert!(dom.query_selector_all(".-1x").is_err());
    }

    #[test]
    fn test_class_ops() {
        let mut dom = MemoryDom::new();
        let a = dom.append(MemoryElement::new("div").with_classes("box"));
        assert!(dom.toggle_class(&a, "box--collapsed").unwrap());
        assert_eq!(dom.class_name(a), "box box--collapsed");
        assert!(!dom.toggle_class(&a, "box--collapsed").unwrap());
        assert_eq!(dom.class_name(a), "box");
    }

    #[test]
    fn test_html_and_text_replace_each_other() {
        let mut dom = MemoryDom::new();
        let a = dom.append(MemoryElement::new("div"));
        dom.set_inner_html(&a, "<ul></ul>");
        dom.set_text(&a, "oops");
        assert_eq!(dom.get(a).text, "oops");
        assert!(dom.get(a).inner_html.is_empty());
    }
}
