//! The filter and sort controls of the shop layout. Changing them only reports what is applied:
//! the product grid itself is never filtered or re-ordered. The [`Reporter`] is the hook for
//! whatever should react to a change.

use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

use super::layout::SORT_SELECT_ID;
use crate::{
    catalog::SortKey,
    component::{Component, Controller, View},
    dom::{EventType, Scope},
    error::Result,
};

const CHECKBOX_SELECTOR: &str = ".shop-sidebar input[type=\"checkbox\"]";

/// Filters and sort order currently chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppliedFilters {
    /// Values of the checked filters, in sidebar order.
    pub filters: Vec<String>,
    pub sort: SortKey,
}

/// Receives the applied filters every time a control changes.
pub type Reporter = Rc<dyn Fn(&AppliedFilters)>;

/// A reporter that only logs.
pub fn log_reporter() -> Reporter {
    Rc::new(|applied: &AppliedFilters| {
        match serde_json::to_string(applied) {
            Ok(json) => log::info!("Applied filters: {json}"),
            Err(e) => log::warn!("unable to serialise applied filters: {e}"),
        }
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// The checkbox at `index` changed.
    Toggled { index: usize, checked: bool },

    /// The sort selector changed.
    Sorted(SortKey),
}

/// State of every filter checkbox and the sort selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanel {
    values: Vec<String>,
    checked: Vec<bool>,
    sort: SortKey,
}

impl FilterPanel {
    /// Create a panel from `(value, checked)` pairs in sidebar order.
    pub fn new<I>(options: I, sort: SortKey) -> Self
    where
        I: IntoIterator<Item = (String, bool)>,
    {
        let (values, checked): (Vec<String>, Vec<bool>) = options.into_iter().unzip();

        Self {
            values,
            checked,
            sort,
        }
    }

    pub fn applied(&self) -> AppliedFilters {
        AppliedFilters {
            filters: self
                .values
                .iter()
                .zip(&self.checked)
                .filter(|(_, checked)| **checked)
                .map(|(value, _)| value.clone())
                .collect(),
            sort: self.sort,
        }
    }
}

impl Component for FilterPanel {
    type Event = FilterEvent;

    /// Every change is reported, even if it leaves the applied filters as they were.
    fn handle_event(&mut self, event: FilterEvent) -> Option<Vec<usize>> {
        match event {
            FilterEvent::Toggled { index, checked } => {
                let slot = self.checked.get_mut(index)?;
                *slot = checked;
            }
            FilterEvent::Sorted(sort) => self.sort = sort,
        }

        Some(Vec::new())
    }
}

/// Passes the applied filters to the [`Reporter`] on every change.
pub struct ReporterView {
    reporter: Reporter,
}

impl View<FilterPanel> for ReporterView {
    fn update(&self, panel: &FilterPanel, _changed: &[usize]) {
        (self.reporter)(&panel.applied());
    }

    fn full_update(&self, panel: &FilterPanel) {
        self.update(panel, &[]);
    }
}

pub type FilterController = Controller<FilterPanel, ReporterView>;

fn sort_key(value: &str) -> SortKey {
    value.parse().unwrap_or_else(|e| {
        log::warn!("{e}, sorting by {}", SortKey::default());
        SortKey::default()
    })
}

/// Wire the filter checkboxes and sort selector within `layout`. Returns [`None`] if it has
/// neither.
pub fn mount(layout: &Element, reporter: Reporter) -> Result<Option<FilterController>> {
    let checkboxes = layout
        .select_all(CHECKBOX_SELECTOR)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlInputElement>().ok())
        .collect::<Vec<_>>();

    let select = layout
        .select(&format!("#{SORT_SELECT_ID}"))
        .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok());

    if checkboxes.is_empty() && select.is_none() {
        log::debug!("no filter controls found, skipping filters");
        return Ok(None);
    }

    let panel = FilterPanel::new(
        checkboxes
            .iter()
            .map(|checkbox| (checkbox.value(), checkbox.checked())),
        select
            .as_ref()
            .map(|select| sort_key(&select.value()))
            .unwrap_or_default(),
    );

    let mut controller = Controller::new(panel, ReporterView { reporter });

    for (index, checkbox) in checkboxes.into_iter().enumerate() {
        let target = checkbox.clone();

        controller.listen(&target, EventType::Change, move |_| {
            Some(FilterEvent::Toggled {
                index,
                checked: checkbox.checked(),
            })
        })?;
    }

    if let Some(select) = select {
        let target = select.clone();

        controller.listen(&target, EventType::Change, move |_| {
            Some(FilterEvent::Sorted(sort_key(&select.value())))
        })?;
    }

    Ok(Some(controller))
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;

    use super::*;

    fn panel() -> FilterPanel {
        FilterPanel::new(
            ["rings", "earrings", "0-500"]
                .into_iter()
                .map(|value| (value.to_string(), false)),
            SortKey::Featured,
        )
    }

    #[test]
    fn applied_filters_follow_sidebar_order() {
        let mut panel = panel();

        panel.handle_event(FilterEvent::Toggled {
            index: 2,
            checked: true,
        });
        panel.handle_event(FilterEvent::Toggled {
            index: 0,
            checked: true,
        });

        assert_eq!(panel.applied().filters, ["rings", "0-500"]);
    }

    #[test]
    fn unchecking_removes_filter() {
        let mut panel = panel();

        panel.handle_event(FilterEvent::Toggled {
            index: 1,
            checked: true,
        });
        panel.handle_event(FilterEvent::Toggled {
            index: 1,
            checked: false,
        });

        assert!(panel.applied().filters.is_empty());
    }

    #[test]
    fn sort_is_reported_alongside_filters() {
        let mut panel = panel();

        assert_eq!(
            panel.handle_event(FilterEvent::Sorted(SortKey::PriceHigh)),
            Some(Vec::new())
        );
        assert_eq!(
            panel.applied(),
            AppliedFilters {
                filters: Vec::new(),
                sort: SortKey::PriceHigh,
            }
        );
    }

    #[test]
    fn unknown_checkbox_is_ignored() {
        let mut panel = panel();

        assert_eq!(
            panel.handle_event(FilterEvent::Toggled {
                index: 9,
                checked: true,
            }),
            None
        );
    }

    #[test]
    fn unknown_sort_value_falls_back() {
        assert_eq!(sort_key("price-low"), SortKey::PriceLow);
        assert_eq!(sort_key("alphabetical"), SortKey::Featured);
    }

    #[test]
    fn serialises_for_logging() {
        let applied = AppliedFilters {
            filters: vec!["watches".to_string()],
            sort: SortKey::PriceLow,
        };

        assert_eq!(
            serde_json::to_string(&applied).unwrap(),
            r#"{"filters":["watches"],"sort":"price-low"}"#
        );
    }

    #[test]
    fn reporter_receives_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let reporter: Reporter = {
            let seen = Rc::clone(&seen);
            Rc::new(move |applied: &AppliedFilters| seen.borrow_mut().push(applied.clone()))
        };

        let controller = Controller::new(panel(), ReporterView { reporter });
        controller.dispatch(FilterEvent::Toggled {
            index: 1,
            checked: true,
        });
        controller.dispatch(FilterEvent::Sorted(SortKey::Newest));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].filters, ["earrings"]);
        assert_eq!(seen[0].sort, SortKey::Featured);
        assert_eq!(seen[1].filters, ["earrings"]);
        assert_eq!(seen[1].sort, SortKey::Newest);
    }
}
