//! Collapsible navigation groups.
//!
//! A header names its group in a data attribute. Triggering it flips
//! `<first class><suffix>` on the header and on every element carrying the
//! group name as a class. State lives only in the class lists.

use tracing::{debug, warn};

use crate::dom::{is_identifier, Dom};
use crate::error::ClientResult;
use crate::options::DomContract;

/// A registered header.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleBinding<E> {
    /// The clickable header.
    pub header: E,
    /// Group class it controls, if any.
    pub group: Option<String>,
}

/// All header bindings of a page.
#[derive(Debug, Clone)]
pub struct ToggleController<E> {
    bindings: Vec<ToggleBinding<E>>,
    suffix: String,
}

impl<E: Clone + PartialEq> ToggleController<E> {
    /// Find every header in the page and read its group.
    pub fn register<D>(dom: &D, contract: &DomContract) -> ClientResult<Self>
    where
        D: Dom<Element = E>,
    {
        let bindings: Vec<_> = dom
            .query_selector_all(&contract.header_selector)?
            .into_iter()
            .map(|header| {
                let group = dom
                    .attribute(&header, &contract.toggle_attribute)
                    .and_then(|raw| group_class(&raw));
                ToggleBinding { header, group }
            })
            .collect();
        debug!(headers = bindings.len(), "toggle headers registered");

        Ok(Self {
            bindings,
            suffix: contract.collapsed_suffix.clone(),
        })
    }

    /// Registered bindings, in document order.
    #[must_use]
    pub fn bindings(&self) -> &[ToggleBinding<E>] {
        &self.bindings
    }

    /// Number of registered headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the page has no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Flip the header at `index` and its group.
    ///
    /// The group is looked up before anything is flipped, so a failed lookup
    /// leaves the page untouched.
    pub fn trigger<D>(&self, dom: &mut D, index: usize) -> ClientResult<()>
    where
        D: Dom<Element = E>,
    {
        let Some(binding) = self.bindings.get(index) else {
            warn!(index, "toggle index out of range");
            return Ok(());
        };
        let members = match &binding.group {
            Some(group) => dom.query_selector_all(&format!(".{group}"))?,
            None => Vec::new(),
        };

        self.flip(dom, &binding.header)?;
        for element in members.iter().filter(|e| **e != binding.header) {
            self.flip(dom, element)?;
        }
        Ok(())
    }

    fn flip<D>(&self, dom: &mut D, element: &E) -> ClientResult<()>
    where
        D: Dom<Element = E>,
    {
        let Some(first) = dom.classes(element).into_iter().next() else {
            return Ok(());
        };
        dom.toggle_class(element, &format!("{first}{}", self.suffix))?;
        Ok(())
    }
}

/// A group name usable as a class selector.
fn group_class(raw: &str) -> Option<String> {
    let group = raw.trim();
    if group.is_empty() {
        return None;
    }
    if is_identifier(group) {
        Some(group.to_string())
    } else {
        warn!(group, "ignoring toggle group that is not a plain class name");
        None
    }
}
