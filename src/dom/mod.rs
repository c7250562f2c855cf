//! Everything that talks to the browser. The rest of the crate holds plain state and hands it to
//! this layer to be shown.

mod event_registry;
mod node;
mod timer;

pub use event_registry::EventRegistry;
pub use node::{Node, NodeType};
pub use timer::{Interval, Timeout};

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::error::Result;

/// Presentation class marking open menus, the current slide and the current dot.
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    Change,
}

impl EventType {
    /// Event name for use in JS listeners.
    pub fn as_str(&self) -> &'static str {
        use EventType::*;

        match self {
            Click => "click",
            Change => "change",
        }
    }
}

/// Something elements can be looked up within, ie a [`Document`] or an [`Element`].
pub trait Scope {
    /// First element matching `selector`. An invalid selector matches nothing.
    fn select(&self, selector: &str) -> Option<Element>;

    /// All elements matching `selector`, in document order. An invalid selector matches nothing.
    fn select_all(&self, selector: &str) -> Vec<Element>;
}

/// Implements [`Scope`] for types exposing the `querySelector` pair.
macro_rules! impl_scope {
    ($($ty:ty),*) => {
        $(
            impl Scope for $ty {
                fn select(&self, selector: &str) -> Option<Element> {
                    self.query_selector(selector).ok().flatten()
                }

                fn select_all(&self, selector: &str) -> Vec<Element> {
                    let Ok(nodes) = self.query_selector_all(selector) else {
                        return Vec::new();
                    };

                    (0..nodes.length())
                        .filter_map(|i| nodes.item(i))
                        .filter_map(|node| node.dyn_into::<Element>().ok())
                        .collect()
                }
            }
        )*
    };
}

impl_scope!(Document, Element);

/// The element an event was dispatched to, if it was an element.
pub fn event_target(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Whether `element` or one of its ancestors matches `selector`.
pub fn has_ancestor(element: &Element, selector: &str) -> bool {
    matches!(element.closest(selector), Ok(Some(_)))
}

/// Add or remove `class` so that its presence matches `present`.
pub fn set_class(element: &Element, class: &str, present: bool) -> Result<()> {
    element.class_list().toggle_with_force(class, present)?;
    Ok(())
}

/// Set (or with [`None`], clear) an inline style property.
pub fn set_style(element: &Element, property: &str, value: Option<&str>) -> Result<()> {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };

    let style = element.style();
    match value {
        Some(value) => style.set_property(property, value)?,
        None => {
            style.remove_property(property)?;
        }
    }

    Ok(())
}
