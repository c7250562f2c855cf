use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use web_sys::{Event, EventTarget};

use super::{Component, View};
use crate::{
    dom::{EventRegistry, EventType},
    error::Result,
};

/// A component controller, responsible for passing events from the page into a [`Component`], and
/// rendering whatever the component reports as changed through its [`View`].
pub struct Controller<C, V>
where
    C: Component,
{
    /// The component's state. Wrapping it in [`Rc<RefCell<T>>`] allows for access to the
    /// component in listener callbacks, so it can be mutated as required.
    component: Rc<RefCell<C>>,

    /// The view rendering the component, shared with the same callbacks.
    view: Rc<V>,

    /// Listeners attached on behalf of the component. Detached when the controller is dropped.
    events: EventRegistry,
}

impl<C, V> Controller<C, V>
where
    C: Component + 'static,
    V: View<C> + 'static,
{
    pub fn new(component: C, view: V) -> Self {
        Self {
            component: Rc::new(RefCell::new(component)),
            view: Rc::new(view),
            events: EventRegistry::new(),
        }
    }

    /// Bring the page in line with the component's current state.
    pub fn full_update(&self) {
        self.view.full_update(&self.component.borrow());
    }

    /// Listen for `event_type` on `target`. Each event is translated by `map` into an event for the
    /// component, or ignored if `map` returns [`None`].
    pub fn listen<T, F>(&mut self, target: &T, event_type: EventType, map: F) -> Result<()>
    where
        T: AsRef<EventTarget>,
        F: 'static + Fn(&Event) -> Option<C::Event>,
    {
        let dispatch = self.dispatcher();

        self.events.listen(target, event_type, move |event| {
            if let Some(event) = map(&event) {
                dispatch(event);
            }
        })
    }

    /// A callback that feeds events into the component, for sources other than DOM listeners (eg
    /// timers).
    pub fn dispatcher(&self) -> impl Fn(C::Event) + 'static {
        let component = Rc::clone(&self.component);
        let view = Rc::clone(&self.view);

        move |event| dispatch(&component, view.as_ref(), event)
    }

    /// Feed an event straight into the component.
    pub fn dispatch(&self, event: C::Event) {
        dispatch(&self.component, self.view.as_ref(), event);
    }

    pub fn component(&self) -> Ref<'_, C> {
        self.component.borrow()
    }

    /// Number of listeners attached for this component.
    pub fn listener_count(&self) -> usize {
        self.events.len()
    }
}

fn dispatch<C, V>(component: &RefCell<C>, view: &V, event: C::Event)
where
    C: Component,
    V: View<C>,
{
    // Release the mutable borrow before rendering, the view only needs to read.
    let changed = { component.borrow_mut().handle_event(event) };

    if let Some(changed) = changed {
        view.update(&component.borrow(), &changed);
    }
}
