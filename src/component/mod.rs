mod controller;

pub use self::controller::Controller;

/// Trait that represents the state of an interactive part of the page.
pub trait Component {
    /// Events the component reacts to.
    type Event;

    /// Handle an incomming event, allowing for mutation of the component's state. Returns the
    /// indexes of the parts that changed and need to be rendered again, or [`None`] if nothing
    /// changed.
    fn handle_event(&mut self, event: Self::Event) -> Option<Vec<usize>>;
}

/// Shows the state of a [`Component`] on the page.
pub trait View<C>
where
    C: ?Sized,
{
    /// Render the parts of the component listed in `changed`.
    fn update(&self, component: &C, changed: &[usize]);

    /// Render every part of the component, bringing the page in line with its state.
    fn full_update(&self, component: &C);
}
