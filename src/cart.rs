//! The cart counter. Not a real cart: a running total of add-to-cart clicks, with a short-lived
//! confirmation shown on the clicked button.

use std::{cell::RefCell, collections::HashMap};

use web_sys::{Document, Element, Window};

use crate::{
    component::{Component, Controller, View},
    config::SiteConfig,
    dom::{self, EventType, Scope, Timeout},
    error::Result,
};

pub const ADD_BUTTON_SELECTOR: &str = ".product-add-btn";
pub const PRODUCT_CARD_SELECTOR: &str = ".product-card";
const PRODUCT_NAME_SELECTOR: &str = ".product-name";
const COUNT_SELECTOR: &str = ".cart-count";

/// Name logged for buttons that can't be matched to a product.
const UNKNOWN_PRODUCT: &str = "unknown product";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// The add-to-cart button at index `button` was clicked for `product`.
    Add { button: usize, product: String },
}

/// Total number of items added during this page view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    count: usize,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Record one more item, returning the new total.
    pub fn add(&mut self, product: &str) -> usize {
        self.count += 1;
        log::info!("Added {product} to cart. Total items: {}", self.count);
        self.count
    }
}

impl Component for Cart {
    type Event = CartEvent;

    /// The changed part is the button that was clicked. The count label is always refreshed.
    fn handle_event(&mut self, event: CartEvent) -> Option<Vec<usize>> {
        match event {
            CartEvent::Add { button, product } => {
                self.add(&product);
                Some(vec![button])
            }
        }
    }
}

/// At most one pending handle per control. Arming a control drops whatever handle it held, so a
/// handle that cancels on drop (eg [`Timeout`]) can never fire after a newer one was armed.
#[derive(Debug)]
pub struct FeedbackSlots<H> {
    slots: HashMap<usize, H>,
}

impl<H> Default for FeedbackSlots<H> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<H> FeedbackSlots<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `handle` for `control`, dropping the handle it replaces.
    pub fn arm(&mut self, control: usize, handle: H) {
        self.slots.insert(control, handle);
    }

    /// Drop the handle held for `control`, if any.
    pub fn disarm(&mut self, control: usize) {
        self.slots.remove(&control);
    }

    pub fn is_armed(&self, control: usize) -> bool {
        self.slots.contains_key(&control)
    }
}

/// Styling applied to a button while it shows its confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Feedback {
    label: String,
    background: String,
    color: String,
    revert_ms: u32,
}

struct AddButton {
    element: Element,

    /// Label the button had when it was wired, restored after the confirmation.
    label: String,
}

pub struct CartView {
    window: Window,
    count_label: Option<Element>,
    buttons: Vec<AddButton>,
    feedback: Feedback,
    pending: RefCell<FeedbackSlots<Timeout>>,
}

impl CartView {
    fn show_feedback(&self, index: usize) -> Result<()> {
        let Some(button) = self.buttons.get(index) else {
            return Ok(());
        };

        let element = &button.element;
        element.set_text_content(Some(&self.feedback.label));
        dom::set_style(element, "background-color", Some(&self.feedback.background))?;
        dom::set_style(element, "color", Some(&self.feedback.color))?;

        let revert = Timeout::new(&self.window, self.feedback.revert_ms, {
            let element = element.clone();
            let label = button.label.clone();

            move || {
                element.set_text_content(Some(&label));

                let reverted = dom::set_style(&element, "background-color", None)
                    .and_then(|_| dom::set_style(&element, "color", None));
                if let Err(e) = reverted {
                    log::warn!("unable to revert add-to-cart button: {e}");
                }
            }
        })?;

        self.pending.borrow_mut().arm(index, revert);

        Ok(())
    }
}

impl View<Cart> for CartView {
    fn update(&self, cart: &Cart, changed: &[usize]) {
        if let Some(count_label) = &self.count_label {
            count_label.set_text_content(Some(&cart.count().to_string()));
        }

        for &index in changed {
            if let Err(e) = self.show_feedback(index) {
                log::warn!("unable to show add-to-cart confirmation: {e}");
            }
        }
    }

    fn full_update(&self, cart: &Cart) {
        self.update(cart, &[]);
    }
}

pub type CartController = Controller<Cart, CartView>;

/// Name of the product the button belongs to, read from its enclosing card.
fn product_name(button: &Element) -> String {
    button
        .closest(PRODUCT_CARD_SELECTOR)
        .ok()
        .flatten()
        .and_then(|card| card.select(PRODUCT_NAME_SELECTOR))
        .and_then(|name| name.text_content())
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string())
}

/// Wire every add-to-cart button currently in the document. Must run after anything that injects
/// product cards, or their buttons won't be counted.
pub fn mount(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<Option<CartController>> {
    let elements = document.select_all(ADD_BUTTON_SELECTOR);

    if elements.is_empty() {
        log::debug!("no add-to-cart buttons found, skipping cart");
        return Ok(None);
    }

    let buttons = elements
        .iter()
        .map(|element| AddButton {
            element: element.clone(),
            label: element
                .text_content()
                .map(|label| label.trim().to_string())
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| config.default_add_label.clone()),
        })
        .collect();

    let mut controller = Controller::new(
        Cart::new(),
        CartView {
            window: window.clone(),
            count_label: document.select(COUNT_SELECTOR),
            buttons,
            feedback: Feedback {
                label: config.added_label.clone(),
                background: config.accent_background.clone(),
                color: config.accent_color.clone(),
                revert_ms: config.feedback_revert_ms,
            },
            pending: RefCell::new(FeedbackSlots::new()),
        },
    );

    for (index, element) in elements.into_iter().enumerate() {
        let target = element.clone();

        controller.listen(&target, EventType::Click, move |event| {
            event.prevent_default();

            Some(CartEvent::Add {
                button: index,
                product: product_name(&element),
            })
        })?;
    }

    log::debug!("wired {} add-to-cart buttons", controller.listener_count());

    Ok(Some(controller))
}

#[cfg(test)]
mod test {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn counts_every_add() {
        let mut cart = Cart::new();

        for n in 1..=5 {
            let changed = cart.handle_event(CartEvent::Add {
                button: n % 2,
                product: "Halo".to_string(),
            });

            assert_eq!(changed, Some(vec![n % 2]));
            assert_eq!(cart.count(), n);
        }
    }

    /// Records when it is dropped, standing in for a cancelable timer.
    struct Handle(Rc<Cell<usize>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn rearming_cancels_the_pending_handle() {
        let cancelled = Rc::new(Cell::new(0));
        let mut slots = FeedbackSlots::new();

        slots.arm(0, Handle(Rc::clone(&cancelled)));
        assert_eq!(cancelled.get(), 0);

        slots.arm(0, Handle(Rc::clone(&cancelled)));
        assert_eq!(cancelled.get(), 1);

        slots.arm(0, Handle(Rc::clone(&cancelled)));
        assert_eq!(cancelled.get(), 2);
        assert!(slots.is_armed(0));
    }

    #[test]
    fn controls_are_independent() {
        let cancelled = Rc::new(Cell::new(0));
        let mut slots = FeedbackSlots::new();

        slots.arm(0, Handle(Rc::clone(&cancelled)));
        slots.arm(1, Handle(Rc::clone(&cancelled)));
        assert_eq!(cancelled.get(), 0);

        slots.disarm(0);
        assert_eq!(cancelled.get(), 1);
        assert!(!slots.is_armed(0));
        assert!(slots.is_armed(1));
    }

    #[test]
    fn dropping_slots_cancels_everything() {
        let cancelled = Rc::new(Cell::new(0));

        {
            let mut slots = FeedbackSlots::new();
            slots.arm(0, Handle(Rc::clone(&cancelled)));
            slots.arm(4, Handle(Rc::clone(&cancelled)));
        }

        assert_eq!(cancelled.get(), 2);
    }
}
