//! Navigation dropdown menus. At most one menu is open at a time.

use web_sys::{Document, Element};

use crate::{
    component::{Component, Controller, View},
    dom::{self, EventType, Scope, ACTIVE_CLASS},
    error::Result,
};

pub const DROPDOWN_SELECTOR: &str = ".nav-dropdown";
const TOGGLE_SELECTOR: &str = ".dropdown-toggle";
const MENU_SELECTOR: &str = ".dropdown-menu";
const ITEM_SELECTOR: &str = ".dropdown-item";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    /// The toggle of the given menu was clicked.
    Toggle(usize),

    /// An item within the given menu was picked.
    Select(usize),

    /// A click landed outside of every dropdown.
    CloseAll,
}

/// Open state of every menu on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdowns {
    open: Vec<bool>,
}

impl Dropdowns {
    /// Create state for `count` menus, all closed.
    pub fn new(count: usize) -> Self {
        Self {
            open: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, menu: usize) -> bool {
        self.open.get(menu).copied().unwrap_or(false)
    }

    /// The menu currently open, if any.
    pub fn open_menu(&self) -> Option<usize> {
        self.open.iter().position(|open| *open)
    }

    /// Close every other menu, then flip `menu`. Returns the menus whose state changed.
    pub fn toggle(&mut self, menu: usize) -> Vec<usize> {
        if menu >= self.open.len() {
            return Vec::new();
        }

        let was_open = self.open[menu];
        let mut changed = self.close_all();

        if !was_open {
            self.open[menu] = true;
            changed.push(menu);
        }

        changed
    }

    /// Close a single menu. Returns the menus whose state changed.
    pub fn close(&mut self, menu: usize) -> Vec<usize> {
        match self.open.get_mut(menu) {
            Some(open) if *open => {
                *open = false;
                vec![menu]
            }
            _ => Vec::new(),
        }
    }

    /// Close every menu. Returns the menus whose state changed.
    pub fn close_all(&mut self) -> Vec<usize> {
        self.open
            .iter_mut()
            .enumerate()
            .filter(|(_, open)| **open)
            .map(|(menu, open)| {
                *open = false;
                menu
            })
            .collect()
    }
}

impl Component for Dropdowns {
    type Event = DropdownEvent;

    fn handle_event(&mut self, event: DropdownEvent) -> Option<Vec<usize>> {
        let changed = match event {
            DropdownEvent::Toggle(menu) => self.toggle(menu),
            DropdownEvent::Select(menu) => self.close(menu),
            DropdownEvent::CloseAll => self.close_all(),
        };

        (!changed.is_empty()).then_some(changed)
    }
}

/// The menu elements, indexed the same as [`Dropdowns`].
pub struct DropdownView {
    menus: Vec<Element>,
}

impl View<Dropdowns> for DropdownView {
    fn update(&self, dropdowns: &Dropdowns, changed: &[usize]) {
        for &menu in changed {
            if let Some(element) = self.menus.get(menu) {
                if let Err(e) = dom::set_class(element, ACTIVE_CLASS, dropdowns.is_open(menu)) {
                    log::warn!("unable to update dropdown {menu}: {e}");
                }
            }
        }
    }

    fn full_update(&self, dropdowns: &Dropdowns) {
        self.update(dropdowns, &(0..dropdowns.len()).collect::<Vec<_>>());
    }
}

pub type DropdownController = Controller<Dropdowns, DropdownView>;

/// Wire every dropdown in the document. Dropdowns missing their toggle or menu are skipped, and
/// [`None`] is returned if there are none left to wire.
pub fn mount(document: &Document) -> Result<Option<DropdownController>> {
    let wired = document
        .select_all(DROPDOWN_SELECTOR)
        .into_iter()
        .filter_map(|dropdown| {
            let toggle = dropdown.select(TOGGLE_SELECTOR)?;
            let menu = dropdown.select(MENU_SELECTOR)?;
            Some((toggle, menu))
        })
        .collect::<Vec<_>>();

    if wired.is_empty() {
        log::debug!("no dropdown menus found, skipping dropdowns");
        return Ok(None);
    }

    let mut controller = Controller::new(
        Dropdowns::new(wired.len()),
        DropdownView {
            menus: wired.iter().map(|(_, menu)| menu.clone()).collect(),
        },
    );
    controller.full_update();

    for (index, (toggle, menu)) in wired.iter().enumerate() {
        controller.listen(toggle, EventType::Click, move |event| {
            event.prevent_default();
            Some(DropdownEvent::Toggle(index))
        })?;

        for item in menu.select_all(ITEM_SELECTOR) {
            controller.listen(&item, EventType::Click, move |_| {
                Some(DropdownEvent::Select(index))
            })?;
        }
    }

    controller.listen(document, EventType::Click, |event| {
        match dom::event_target(event) {
            Some(target) if dom::has_ancestor(&target, DROPDOWN_SELECTOR) => None,
            _ => Some(DropdownEvent::CloseAll),
        }
    })?;

    log::debug!("wired {} dropdown menus", wired.len());

    Ok(Some(controller))
}
