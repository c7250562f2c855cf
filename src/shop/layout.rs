use crate::{
    catalog::{FilterGroup, FilterOption, PageLink, ProductCard, ShopListing, SortKey},
    dom::Node,
};

pub const SHOP_LAYOUT_CLASS: &str = "shop-layout";
pub const SORT_SELECT_ID: &str = "sort-select";

/// Build the shop layout for `listing`: a filter sidebar beside a header, product grid and
/// pagination strip.
pub fn shop_layout(listing: &ShopListing) -> Node {
    Node::element("div").with_class(SHOP_LAYOUT_CLASS).with_child(
        Node::element("div").with_class("container").with_child(
            Node::element("div")
                .with_class("shop-container")
                .with_child(sidebar(&listing.filter_groups))
                .with_child(
                    Node::element("div")
                        .with_class("shop-main")
                        .with_child(header(listing))
                        .with_child(
                            Node::element("div")
                                .with_class("shop-products")
                                .with_attribute("id", "products-container")
                                .with_children(
                                    listing
                                        .products
                                        .iter()
                                        .map(|product| product_card(product, &listing.add_label)),
                                ),
                        )
                        .with_child(pagination(&listing.pagination)),
                ),
        ),
    )
}

fn sidebar(groups: &[FilterGroup]) -> Node {
    Node::element("aside")
        .with_class("shop-sidebar")
        .with_children(groups.iter().map(|group| {
            Node::element("div")
                .with_class("filter-section")
                .with_child(
                    Node::element("h3")
                        .with_class("filter-title")
                        .with_text(&group.title),
                )
                .with_children(group.options.iter().map(filter_option))
        }))
}

fn filter_option(option: &FilterOption) -> Node {
    Node::element("div")
        .with_class("filter-option")
        .with_child(
            Node::element("input")
                .with_attribute("type", "checkbox")
                .with_attribute("id", &option.id)
                .with_attribute("value", &option.value),
        )
        .with_child(
            Node::element("label")
                .with_attribute("for", &option.id)
                .with_text(&option.label),
        )
}

fn header(listing: &ShopListing) -> Node {
    Node::element("div")
        .with_class("shop-header")
        .with_child(
            Node::element("h1")
                .with_class("shop-title")
                .with_text(&listing.title),
        )
        .with_child(
            Node::element("div")
                .with_class("shop-controls")
                .with_child(
                    Node::element("span")
                        .with_class("shop-info")
                        .with_text(&listing.item_count_label),
                )
                .with_child(sort_select(&listing.sort_options)),
        )
}

fn sort_select(options: &[SortKey]) -> Node {
    Node::element("select")
        .with_class("sort-select")
        .with_attribute("id", SORT_SELECT_ID)
        .with_children(options.iter().map(|key| {
            Node::element("option")
                .with_attribute("value", key.as_str())
                .with_text(key.label())
        }))
}

fn product_card(product: &ProductCard, add_label: &str) -> Node {
    Node::element("div")
        .with_class("product-card")
        .with_child(
            Node::element("div")
                .with_class("product-image")
                .with_attribute(
                    "style",
                    format!("background-image: url('{}')", product.image_url),
                )
                .with_child(Node::element("div").with_class("product-overlay"))
                .with_child(
                    Node::element("button")
                        .with_class("product-add-btn")
                        .with_text(add_label),
                ),
        )
        .with_child(
            Node::element("div")
                .with_class("product-info")
                .with_child(
                    Node::element("h4")
                        .with_class("product-name")
                        .with_text(&product.name),
                )
                .with_child(
                    Node::element("p")
                        .with_class("product-category")
                        .with_text(&product.category),
                )
                .with_child(
                    Node::element("p")
                        .with_class("product-price")
                        .with_text(&product.price_display),
                ),
        )
}

fn pagination(links: &[PageLink]) -> Node {
    Node::element("div")
        .with_class("pagination")
        .with_children(links.iter().map(|link| match link {
            PageLink::Gap => Node::element("span")
                .with_class("pagination-info")
                .with_text(link.label()),
            PageLink::Page { active: true, .. } => Node::element("button")
                .with_class("pagination-btn")
                .with_class("active")
                .with_text(link.label()),
            _ => Node::element("button")
                .with_class("pagination-btn")
                .with_text(link.label()),
        }))
}
