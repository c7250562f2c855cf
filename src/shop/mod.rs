//! Turns the landing page into a category page when the URL asks for one.
//!
//! The page starts out in the landing view (hero, categories, story). If the query names a
//! category, filter or section, the landing sections are hidden, the breadcrumb is labelled, and
//! the products section is replaced by the shop layout. There is no way back to the landing view
//! for the rest of the page's lifetime.

pub mod filters;
pub mod layout;

use web_sys::Document;

use crate::{
    catalog::ShopListing,
    config::SiteConfig,
    dom::{self, Scope},
    error::Result,
    query::ShopQuery,
};

use self::layout::SHOP_LAYOUT_CLASS;

const BREADCRUMB_CONTAINER_ID: &str = "breadcrumb-container";
const BREADCRUMB_CURRENT_ID: &str = "breadcrumb-current";
const MAIN_CONTENT_SELECTOR: &str = ".main-content";
const PRODUCTS_SECTION_SELECTOR: &str = ".products-section";

/// Sections of the landing view hidden in the shop view.
const LANDING_SECTIONS: [&str; 3] = [".hero-section", ".categories-section", ".story-section"];

pub fn shop_layout_selector() -> String {
    format!(".{SHOP_LAYOUT_CLASS}")
}

/// Which view the page is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Landing,
    Shop { title: String },
}

impl ViewState {
    /// The view requested by the page's query.
    pub fn from_query(query: &ShopQuery) -> Self {
        match query.title() {
            Some(title) => Self::Shop { title },
            None => Self::Landing,
        }
    }
}

/// What [`assemble`] did to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assembly {
    /// The query didn't ask for a category page, the page is untouched.
    Landing,

    /// The landing sections were hidden. `built` is set if the shop layout was inserted by this
    /// call, rather than already being present (or having nowhere to go).
    Shop { built: bool },
}

/// Switch the page to the shop view if `query` asks for it. Safe to call more than once: the shop
/// layout is only built if it isn't already present.
pub fn assemble(document: &Document, query: &ShopQuery, config: &SiteConfig) -> Result<Assembly> {
    let ViewState::Shop { title } = ViewState::from_query(query) else {
        return Ok(Assembly::Landing);
    };

    show_breadcrumb(document, &title)?;

    let Some(main_content) = document.select(MAIN_CONTENT_SELECTOR) else {
        log::debug!("no main content found, not building shop layout");
        return Ok(Assembly::Shop { built: false });
    };

    for selector in LANDING_SECTIONS {
        if let Some(section) = main_content.select(selector) {
            dom::set_style(&section, "display", Some("none"))?;
        }
    }

    if main_content.select(&shop_layout_selector()).is_some() {
        return Ok(Assembly::Shop { built: false });
    }

    let Some(products_section) = main_content.select(PRODUCTS_SECTION_SELECTOR) else {
        log::debug!("no products section found, not building shop layout");
        return Ok(Assembly::Shop { built: false });
    };

    let listing = ShopListing::sample(title, config);
    let shop_layout = layout::shop_layout(&listing).create_node(document)?;

    // Built detached, so the page only ever sees the finished layout.
    products_section.replace_with_with_node_1(&shop_layout)?;

    log::debug!("built shop layout for {}", listing.title);

    Ok(Assembly::Shop { built: true })
}

/// Reveal the breadcrumb and label it with `title`. Does nothing unless both breadcrumb elements
/// exist.
fn show_breadcrumb(document: &Document, title: &str) -> Result<()> {
    let (Some(container), Some(current)) = (
        document.get_element_by_id(BREADCRUMB_CONTAINER_ID),
        document.get_element_by_id(BREADCRUMB_CURRENT_ID),
    ) else {
        return Ok(());
    };

    dom::set_style(&container, "display", Some("block"))?;
    current.set_text_content(Some(title));

    Ok(())
}
