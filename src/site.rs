use web_sys::{Document, Window};

use crate::{
    carousel::{self, CarouselController},
    cart::{self, CartController},
    config::SiteConfig,
    dom::Scope,
    dropdown::{self, DropdownController},
    error::Result,
    query::ShopQuery,
    shop::{
        self,
        filters::{self, AppliedFilters, FilterController, Reporter},
        Assembly,
    },
};

/// Every interactive part of the page, wired once when the page loads. Each part is optional:
/// anything whose markup is missing is left out without affecting the rest. Dropping the site
/// detaches all of its listeners and stops its timers.
pub struct Site {
    assembly: Assembly,
    dropdowns: Option<DropdownController>,
    carousel: Option<CarouselController>,
    cart: Option<CartController>,
    filters: Option<FilterController>,
}

impl Site {
    /// Wire the page. The shop view is assembled first so that the cart and filters pick up the
    /// controls it injects.
    pub fn mount(
        window: &Window,
        document: &Document,
        query: &ShopQuery,
        config: &SiteConfig,
        reporter: Reporter,
    ) -> Self {
        let assembly = shop::assemble(document, query, config).unwrap_or_else(|e| {
            log::warn!("unable to assemble shop view: {e}");
            Assembly::Landing
        });

        let filters = match assembly {
            Assembly::Shop { .. } => document
                .select(&shop::shop_layout_selector())
                .and_then(|layout| optional("filters", filters::mount(&layout, reporter))),
            Assembly::Landing => None,
        };

        Self {
            assembly,
            dropdowns: optional("dropdowns", dropdown::mount(document)),
            carousel: optional("carousel", carousel::mount(window, document, config)),
            cart: optional("cart", cart::mount(window, document, config)),
            filters,
        }
    }

    pub fn assembly(&self) -> Assembly {
        self.assembly
    }

    /// Items added to the cart so far, if the cart is wired.
    pub fn cart_count(&self) -> Option<usize> {
        self.cart
            .as_ref()
            .map(|cart| cart.component().count())
    }

    /// The open dropdown menu, if the dropdowns are wired and one is open.
    pub fn open_dropdown(&self) -> Option<usize> {
        self.dropdowns
            .as_ref()
            .and_then(|dropdowns| dropdowns.component().open_menu())
    }

    pub fn carousel(&self) -> Option<&CarouselController> {
        self.carousel.as_ref()
    }

    pub fn applied_filters(&self) -> Option<AppliedFilters> {
        self.filters
            .as_ref()
            .map(|filters| filters.component().applied())
    }
}

/// Unwrap a feature's mount result, logging and dropping the feature if it failed.
fn optional<T>(feature: &str, mounted: Result<Option<T>>) -> Option<T> {
    mounted.unwrap_or_else(|e| {
        log::warn!("unable to wire {feature}: {e}");
        None
    })
}
