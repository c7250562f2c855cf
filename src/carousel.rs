//! The rotating hero carousel.

use web_sys::{Document, Element, Window};

use crate::{
    component::{Component, Controller, View},
    config::SiteConfig,
    dom::{self, EventType, Interval, Scope, ACTIVE_CLASS},
    error::Result,
};

const SLIDE_SELECTOR: &str = ".hero-slide";
const DOT_SELECTOR: &str = ".carousel-dot";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The rotation timer fired.
    Advance,

    /// An indicator dot was clicked.
    GoTo(usize),
}

/// Which of a fixed number of slides is showing. Always has at least one slide, and the active
/// index is always in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

#[allow(clippy::len_without_is_empty)]
impl Carousel {
    /// Create a carousel of `len` slides showing the first. Returns [`None`] for zero slides.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, active: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Move to the next slide, wrapping round to the first.
    pub fn advance(&mut self) -> Vec<usize> {
        self.set_active((self.active + 1) % self.len)
    }

    /// Jump straight to `index`. Out of range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> Vec<usize> {
        if index >= self.len {
            return Vec::new();
        }

        self.set_active(index)
    }

    /// Returns the slides whose active state changed.
    fn set_active(&mut self, index: usize) -> Vec<usize> {
        if index == self.active {
            return Vec::new();
        }

        let previous = std::mem::replace(&mut self.active, index);
        vec![previous, index]
    }
}

impl Component for Carousel {
    type Event = CarouselEvent;

    fn handle_event(&mut self, event: CarouselEvent) -> Option<Vec<usize>> {
        let changed = match event {
            CarouselEvent::Advance => self.advance(),
            CarouselEvent::GoTo(index) => self.go_to(index),
        };

        (!changed.is_empty()).then_some(changed)
    }
}

/// Slides and their indicator dots. Both are marked with the active class for the current slide.
pub struct CarouselView {
    slides: Vec<Element>,
    dots: Vec<Element>,
}

impl View<Carousel> for CarouselView {
    fn update(&self, carousel: &Carousel, changed: &[usize]) {
        for &index in changed {
            let active = index == carousel.active();

            for element in [self.slides.get(index), self.dots.get(index)]
                .into_iter()
                .flatten()
            {
                if let Err(e) = dom::set_class(element, ACTIVE_CLASS, active) {
                    log::warn!("unable to update slide {index}: {e}");
                }
            }
        }
    }

    fn full_update(&self, carousel: &Carousel) {
        let all = (0..carousel.len().max(self.dots.len())).collect::<Vec<_>>();
        self.update(carousel, &all);
    }
}

/// The carousel's controller, along with the timer driving it. The timer stops when this is
/// dropped.
pub struct CarouselController {
    controller: Controller<Carousel, CarouselView>,
    _rotation: Interval,
}

impl CarouselController {
    pub fn active(&self) -> usize {
        self.controller.component().active()
    }

    pub fn dispatch(&self, event: CarouselEvent) {
        self.controller.dispatch(event);
    }
}

/// Wire the hero carousel, if the page has any slides.
pub fn mount(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<Option<CarouselController>> {
    let slides = document.select_all(SLIDE_SELECTOR);

    let Some(carousel) = Carousel::new(slides.len()) else {
        log::debug!("no hero slides found, skipping carousel");
        return Ok(None);
    };

    let dots = document.select_all(DOT_SELECTOR);

    let mut controller = Controller::new(carousel, CarouselView { slides, dots: dots.clone() });
    controller.full_update();

    for (index, dot) in dots.iter().enumerate() {
        controller.listen(dot, EventType::Click, move |_| {
            Some(CarouselEvent::GoTo(index))
        })?;
    }

    let advance = controller.dispatcher();
    let rotation = Interval::new(window, config.rotate_interval_ms, move || {
        advance(CarouselEvent::Advance)
    })?;

    Ok(Some(CarouselController {
        controller,
        _rotation: rotation,
    }))
}
