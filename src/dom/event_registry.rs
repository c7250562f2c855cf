use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Event, EventTarget};

use super::EventType;
use crate::error::Result;

/// A listener attached to the DOM. The closure must be kept alive for as long as it's attached.
struct Listener {
    target: EventTarget,
    event_type: EventType,
    closure: Closure<dyn Fn(Event)>,
}

/// A registry of attached listeners. Owns each [`Closure`] so it isn't freed while the DOM can
/// still call it, and detaches every listener when dropped.
#[derive(Default)]
pub struct EventRegistry {
    listeners: Vec<Listener>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler` to `target` for the given event type.
    pub fn listen<T, F>(&mut self, target: &T, event_type: EventType, handler: F) -> Result<()>
    where
        T: AsRef<EventTarget>,
        F: 'static + Fn(Event),
    {
        let target = target.as_ref().clone();
        let closure = Closure::<dyn Fn(Event)>::new(handler);

        target.add_event_listener_with_callback(
            event_type.as_str(),
            closure.as_ref().unchecked_ref(),
        )?;

        self.listeners.push(Listener {
            target,
            event_type,
            closure,
        });

        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for EventRegistry {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            // Nothing useful can be done if removal fails while tearing down.
            let _ = listener.target.remove_event_listener_with_callback(
                listener.event_type.as_str(),
                listener.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
