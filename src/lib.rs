pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod component;
pub mod config;
pub mod dom;
pub mod dropdown;
pub mod error;
pub mod query;
pub mod shop;

mod site;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::window;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use query::{format_category_name, ShopQuery};
pub use site::Site;

thread_local! {
    /// The mounted site. Kept here so its listeners and timers live as long as the page.
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Configure the panic hook to log to console.error
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    // Everything is let through until the configured level is known
    if console_log::init_with_level(log::Level::Trace).is_err() {
        log::debug!("logger already installed");
    }

    let window = window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;

    let config = SiteConfig::from_document(&document);
    log::set_max_level(config.log_level().to_level_filter());

    let search = window.location().search().unwrap_or_default();

    let site = Site::mount(
        &window,
        &document,
        &ShopQuery::parse(&search),
        &config,
        shop::filters::log_reporter(),
    );

    SITE.with(|mounted| *mounted.borrow_mut() = Some(site));

    log::info!("LINEA website initialised");

    Ok(())
}
