//! Browser tests. Run with `wasm-pack test --headless --firefox` (or `--chrome`).

#![cfg(target_arch = "wasm32")]

use std::{cell::RefCell, rc::Rc};

use linea::{
    carousel::CarouselEvent,
    catalog::SortKey,
    dom::Scope,
    shop::{self, filters::AppliedFilters, Assembly},
    ShopQuery, Site, SiteConfig,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, HtmlSelectElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

const NAVBAR: &str = r##"
    <nav class="navbar">
        <div class="nav-dropdown">
            <a href="#" class="dropdown-toggle">Jewelry</a>
            <div class="dropdown-menu">
                <a href="#" class="dropdown-item">Rings</a>
                <a href="#" class="dropdown-item">Earrings</a>
            </div>
        </div>
        <div class="nav-dropdown">
            <a href="#" class="dropdown-toggle">Watches</a>
            <div class="dropdown-menu">
                <a href="#" class="dropdown-item">Men</a>
            </div>
        </div>
        <div class="nav-dropdown">
            <a href="#" class="dropdown-toggle">Orphan</a>
        </div>
        <span class="cart-count">0</span>
    </nav>
    <div id="breadcrumb-container" style="display: none">
        <a href="index.html">Home</a> / <span id="breadcrumb-current"></span>
    </div>
    <p id="outside">Elsewhere</p>
"##;

const MAIN: &str = r#"
    <main class="main-content">
        <section class="hero-section">
            <div class="hero-slide active">One</div>
            <div class="hero-slide">Two</div>
            <div class="hero-slide">Three</div>
            <button class="carousel-dot active"></button>
            <button class="carousel-dot"></button>
            <button class="carousel-dot"></button>
        </section>
        <section class="categories-section"></section>
        <section class="products-section">
            <div class="product-card">
                <button class="product-add-btn">Add to Cart</button>
                <h4 class="product-name">Aurora</h4>
            </div>
            <div class="product-card">
                <button class="product-add-btn">Add to Bag</button>
                <h4 class="product-name">Solstice</h4>
            </div>
        </section>
        <section class="story-section"></section>
    </main>
"#;

fn window() -> Window {
    web_sys::window().unwrap()
}

/// Replace the page body with the standard fixture and return the document.
fn fixture() -> Document {
    let document = window().document().unwrap();
    document
        .body()
        .unwrap()
        .set_inner_html(&format!("{NAVBAR}{MAIN}"));
    document
}

fn fast_config() -> SiteConfig {
    SiteConfig {
        rotate_interval_ms: 60_000,
        feedback_revert_ms: 100,
        ..SiteConfig::default()
    }
}

fn mount(document: &Document, search: &str) -> Site {
    mount_with_reporter(document, search, Rc::new(|_: &AppliedFilters| {}))
}

fn mount_with_reporter(
    document: &Document,
    search: &str,
    reporter: shop::filters::Reporter,
) -> Site {
    Site::mount(
        &window(),
        document,
        &ShopQuery::parse(search),
        &fast_config(),
        reporter,
    )
}

fn click(element: &Element) {
    element.unchecked_ref::<HtmlElement>().click();
}

fn has_active(element: &Element) -> bool {
    element.class_list().contains("active")
}

fn display(element: &Element) -> String {
    element
        .unchecked_ref::<HtmlElement>()
        .style()
        .get_property_value("display")
        .unwrap()
}

async fn sleep(millis: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            .unwrap();
    });

    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn dropdowns_are_exclusive() {
    let document = fixture();
    let site = mount(&document, "");

    let toggles = document.select_all(".dropdown-toggle");
    let menus = document.select_all(".dropdown-menu");

    click(&toggles[0]);
    assert!(has_active(&menus[0]));
    assert!(!has_active(&menus[1]));
    assert_eq!(site.open_dropdown(), Some(0));

    click(&toggles[1]);
    assert!(!has_active(&menus[0]));
    assert!(has_active(&menus[1]));

    click(&toggles[1]);
    assert!(!has_active(&menus[1]));
    assert_eq!(site.open_dropdown(), None);

    // The toggle without a menu is not wired, and as a click inside a dropdown it closes nothing
    click(&toggles[0]);
    click(&toggles[2]);
    assert_eq!(site.open_dropdown(), Some(0));
}

#[wasm_bindgen_test]
fn outside_click_and_item_pick_close_menus() {
    let document = fixture();
    let site = mount(&document, "");

    let toggles = document.select_all(".dropdown-toggle");
    let menus = document.select_all(".dropdown-menu");

    click(&toggles[1]);
    click(&document.get_element_by_id("outside").unwrap());
    assert!(!has_active(&menus[1]));
    assert_eq!(site.open_dropdown(), None);

    click(&toggles[0]);
    click(&document.select_all(".dropdown-item")[1]);
    assert!(!has_active(&menus[0]));
    assert_eq!(site.open_dropdown(), None);
}

#[wasm_bindgen_test]
fn category_query_builds_shop_view() {
    let document = fixture();
    let site = mount(&document, "?category=fine-jewelry");

    assert_eq!(site.assembly(), Assembly::Shop { built: true });

    let current = document.get_element_by_id("breadcrumb-current").unwrap();
    assert_eq!(current.text_content().as_deref(), Some("Fine Jewelry"));
    assert_eq!(
        display(&document.get_element_by_id("breadcrumb-container").unwrap()),
        "block"
    );

    for section in [".hero-section", ".categories-section", ".story-section"] {
        assert_eq!(display(&document.select(section).unwrap()), "none");
    }

    assert_eq!(document.select_all(".shop-layout").len(), 1);
    assert!(document.select(".products-section").is_none());
    assert_eq!(
        document
            .select(".shop-title")
            .and_then(|title| title.text_content())
            .as_deref(),
        Some("Fine Jewelry")
    );
    assert_eq!(document.select_all(".shop-products .product-card").len(), 4);
    assert_eq!(document.select_all("#sort-select option").len(), 5);
}

#[wasm_bindgen_test]
fn landing_view_without_query() {
    let document = fixture();
    let site = mount(&document, "?utm_source=newsletter");

    assert_eq!(site.assembly(), Assembly::Landing);
    assert!(document.select(".shop-layout").is_none());
    assert!(document.select(".products-section").is_some());
    assert_eq!(display(&document.select(".hero-section").unwrap()), "");
    assert_eq!(site.applied_filters(), None);
}

#[wasm_bindgen_test]
fn assembling_twice_builds_one_layout() {
    let document = fixture();
    let query = ShopQuery::parse("?filter=new-in");
    let config = SiteConfig::default();

    assert_eq!(
        shop::assemble(&document, &query, &config).unwrap(),
        Assembly::Shop { built: true }
    );
    assert_eq!(
        shop::assemble(&document, &query, &config).unwrap(),
        Assembly::Shop { built: false }
    );
    assert_eq!(document.select_all(".shop-layout").len(), 1);
}

#[wasm_bindgen_test]
fn missing_products_section_is_a_no_op() {
    let document = fixture();
    document.select(".products-section").unwrap().remove();

    let site = mount(&document, "?section=gifts");

    assert_eq!(site.assembly(), Assembly::Shop { built: false });
    assert!(document.select(".shop-layout").is_none());
    assert_eq!(
        document
            .get_element_by_id("breadcrumb-current")
            .and_then(|current| current.text_content())
            .as_deref(),
        Some("Gifts")
    );
}

#[wasm_bindgen_test]
fn cart_counts_every_click() {
    let document = fixture();
    let site = mount(&document, "");

    let buttons = document.select_all(".product-add-btn");
    for n in 0..5 {
        click(&buttons[n % buttons.len()]);
    }

    assert_eq!(site.cart_count(), Some(5));
    assert_eq!(
        document.select(".cart-count").unwrap().text_content().as_deref(),
        Some("5")
    );
    assert_eq!(buttons[0].text_content().as_deref(), Some("Added!"));
}

#[wasm_bindgen_test]
fn injected_product_cards_are_wired() {
    let document = fixture();
    let site = mount(&document, "?category=rings");

    let injected = document.select_all(".shop-layout .product-add-btn");
    assert_eq!(injected.len(), 4);

    click(&injected[2]);
    click(&injected[3]);

    assert_eq!(site.cart_count(), Some(2));
}

#[wasm_bindgen_test]
async fn confirmation_reverts_after_latest_click() {
    let document = fixture();
    let _site = mount(&document, "");

    let button = document.select_all(".product-add-btn").remove(1);
    let styled = button.unchecked_ref::<HtmlElement>().clone();

    click(&button);
    assert_eq!(button.text_content().as_deref(), Some("Added!"));
    assert_eq!(
        styled.style().get_property_value("color").unwrap(),
        "rgb(26, 26, 26)"
    );

    sleep(60).await;
    click(&button);

    // Past the first click's revert time, but the second click cancelled it
    sleep(60).await;
    assert_eq!(button.text_content().as_deref(), Some("Added!"));

    sleep(120).await;
    assert_eq!(button.text_content().as_deref(), Some("Add to Bag"));
    assert_eq!(styled.style().get_property_value("color").unwrap(), "");
    assert_eq!(
        styled
            .style()
            .get_property_value("background-color")
            .unwrap(),
        ""
    );
}

/// Append `html` to the end of the fixture body.
fn append(document: &Document, html: &str) {
    document
        .body()
        .unwrap()
        .insert_adjacent_html("beforeend", html)
        .unwrap();
}

#[wasm_bindgen_test]
fn unnamed_products_still_count() {
    let document = fixture();
    append(
        &document,
        r#"
            <button id="loose" class="product-add-btn">Add to Cart</button>
            <div class="product-card">
                <button id="nameless" class="product-add-btn">Add to Cart</button>
            </div>
        "#,
    );
    let site = mount(&document, "");

    click(&document.get_element_by_id("loose").unwrap());
    click(&document.get_element_by_id("nameless").unwrap());
    click(&document.get_element_by_id("nameless").unwrap());

    assert_eq!(site.cart_count(), Some(3));
    assert_eq!(
        document.select(".cart-count").unwrap().text_content().as_deref(),
        Some("3")
    );
}

#[wasm_bindgen_test]
async fn empty_label_reverts_to_default() {
    let document = fixture();
    append(
        &document,
        r#"
            <div class="product-card">
                <button id="blank" class="product-add-btn"></button>
                <h4 class="product-name">Meridian</h4>
            </div>
        "#,
    );
    let _site = mount(&document, "");

    let button = document.get_element_by_id("blank").unwrap();
    click(&button);
    assert_eq!(button.text_content().as_deref(), Some("Added!"));

    sleep(200).await;
    assert_eq!(button.text_content().as_deref(), Some("Add to Cart"));
}

#[wasm_bindgen_test]
fn config_defaults_without_element() {
    let document = fixture();

    assert_eq!(SiteConfig::from_document(&document), SiteConfig::default());
}

#[wasm_bindgen_test]
fn config_defaults_on_malformed_json() {
    let document = fixture();
    append(
        &document,
        r#"<script type="application/json" id="site-config">{ "rotate_interval_ms": </script>"#,
    );

    assert_eq!(SiteConfig::from_document(&document), SiteConfig::default());
}

#[wasm_bindgen_test]
fn config_is_read_from_the_page() {
    let document = fixture();
    append(
        &document,
        r#"<script type="application/json" id="site-config">{ "added_label": "In your bag" }</script>"#,
    );

    let config = SiteConfig::from_document(&document);

    assert_eq!(config.added_label, "In your bag");
    assert_eq!(config.rotate_interval_ms, 5000);
}

#[wasm_bindgen_test]
fn carousel_dots_override_rotation() {
    let document = fixture();
    let site = mount(&document, "");

    let slides = document.select_all(".hero-slide");
    let dots = document.select_all(".carousel-dot");
    let carousel = site.carousel().unwrap();

    assert_eq!(carousel.active(), 0);

    carousel.dispatch(CarouselEvent::Advance);
    assert_eq!(carousel.active(), 1);
    assert!(has_active(&slides[1]) && has_active(&dots[1]));
    assert!(!has_active(&slides[0]) && !has_active(&dots[0]));

    click(&dots[2]);
    assert_eq!(carousel.active(), 2);
    assert_eq!(slides.iter().filter(|slide| has_active(slide)).count(), 1);
    assert_eq!(dots.iter().filter(|dot| has_active(dot)).count(), 1);

    carousel.dispatch(CarouselEvent::Advance);
    assert_eq!(carousel.active(), 0);
    assert!(has_active(&slides[0]));
}

#[wasm_bindgen_test]
async fn carousel_rotates_on_its_own() {
    let document = fixture();
    let site = Site::mount(
        &window(),
        &document,
        &ShopQuery::default(),
        &SiteConfig {
            rotate_interval_ms: 100,
            ..SiteConfig::default()
        },
        Rc::new(|_: &AppliedFilters| {}),
    );

    sleep(150).await;

    let carousel = site.carousel().unwrap();
    assert_eq!(carousel.active(), 1);
    assert!(has_active(&document.select_all(".hero-slide")[1]));
}

#[wasm_bindgen_test]
fn filter_changes_are_reported() {
    let document = fixture();
    let reported = Rc::new(RefCell::new(Vec::<AppliedFilters>::new()));

    let site = mount_with_reporter(&document, "?category=rings", {
        let reported = Rc::clone(&reported);
        Rc::new(move |applied: &AppliedFilters| reported.borrow_mut().push(applied.clone()))
    });

    click(&document.get_element_by_id("filter-price-1").unwrap());
    click(&document.get_element_by_id("filter-rings").unwrap());

    let select = document
        .get_element_by_id("sort-select")
        .unwrap()
        .dyn_into::<HtmlSelectElement>()
        .unwrap();
    select.set_value("price-high");
    select
        .dispatch_event(&Event::new("change").unwrap())
        .unwrap();

    let reported = reported.borrow();
    assert_eq!(reported.len(), 3);
    assert_eq!(reported[0].filters, ["500-1500"]);
    assert_eq!(reported[1].filters, ["rings", "500-1500"]);
    assert_eq!(
        reported[2],
        AppliedFilters {
            filters: vec!["rings".to_string(), "500-1500".to_string()],
            sort: SortKey::PriceHigh,
        }
    );
    assert_eq!(site.applied_filters().as_ref(), reported.last());

    let rings = document
        .get_element_by_id("filter-rings")
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    assert!(rings.checked());
}

#[wasm_bindgen_test]
fn dropping_the_site_detaches_listeners() {
    let document = fixture();
    let site = mount(&document, "");

    let toggle = document.select(".dropdown-toggle").unwrap();
    let menu = document.select(".dropdown-menu").unwrap();

    drop(site);

    click(&toggle);
    assert!(!has_active(&menu));
}
