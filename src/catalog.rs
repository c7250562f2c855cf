//! Data shown by the shop view. There is no catalog service behind the site, so everything here is
//! fixed sample data. The shop layout is built from these types rather than literal markup, so a
//! real catalog can replace [`ShopListing::sample`] without touching the layout code.

use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use crate::config::SiteConfig;

/// A product as displayed on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub name: String,
    pub category: String,
    pub price_display: String,
    pub image_url: String,
}

impl ProductCard {
    fn new(name: &str, category: &str, price_display: &str, image_url: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            price_display: price_display.to_string(),
            image_url: image_url.to_string(),
        }
    }
}

/// A single checkbox in a filter group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Element id of the checkbox, which its label points at.
    pub id: String,
    pub value: String,
    pub label: String,
}

impl FilterOption {
    fn new(id: &str, value: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterGroup {
    pub title: String,
    pub options: Vec<FilterOption>,
}

/// Orderings offered by the sort selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Featured,
    Newest,
    PriceLow,
    PriceHigh,
    Popular,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        Self::Featured,
        Self::Newest,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Popular,
    ];

    /// Value used for the `<option>` element.
    pub fn as_str(&self) -> &'static str {
        use SortKey::*;

        match self {
            Featured => "featured",
            Newest => "newest",
            PriceLow => "price-low",
            PriceHigh => "price-high",
            Popular => "popular",
        }
    }

    pub fn label(&self) -> &'static str {
        use SortKey::*;

        match self {
            Featured => "Featured",
            Newest => "Newest",
            PriceLow => "Price: Low to High",
            PriceHigh => "Price: High to Low",
            Popular => "Most Popular",
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key `{0}`")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// One control in the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Previous,
    Page { number: u32, active: bool },
    Gap,
    Next,
}

impl PageLink {
    pub fn label(&self) -> String {
        match self {
            PageLink::Previous => "←".to_string(),
            PageLink::Page { number, .. } => number.to_string(),
            PageLink::Gap => "...".to_string(),
            PageLink::Next => "→".to_string(),
        }
    }
}

/// Everything the shop layout displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopListing {
    pub title: String,
    pub item_count_label: String,

    /// Label on every product's add-to-cart button.
    pub add_label: String,
    pub filter_groups: Vec<FilterGroup>,
    pub sort_options: Vec<SortKey>,
    pub products: Vec<ProductCard>,
    pub pagination: Vec<PageLink>,
}

impl ShopListing {
    /// The stock listing: two filter groups, every sort key, four sample products and a fixed
    /// pagination strip.
    pub fn sample(title: impl Into<String>, config: &SiteConfig) -> Self {
        Self {
            title: title.into(),
            item_count_label: config.item_count_label.clone(),
            add_label: config.default_add_label.clone(),
            filter_groups: sample_filter_groups(),
            sort_options: SortKey::ALL.to_vec(),
            products: sample_products(),
            pagination: sample_pagination(),
        }
    }
}

pub fn sample_filter_groups() -> Vec<FilterGroup> {
    vec![
        FilterGroup {
            title: "Category".to_string(),
            options: ["rings", "earrings", "bracelets", "necklaces", "watches"]
                .into_iter()
                .map(|value| {
                    FilterOption::new(
                        &format!("filter-{value}"),
                        value,
                        &crate::query::format_category_name(value),
                    )
                })
                .collect(),
        },
        FilterGroup {
            title: "Price Range".to_string(),
            options: [
                ("0-500", "€0 - €500"),
                ("500-1500", "€500 - €1,500"),
                ("1500-3000", "€1,500 - €3,000"),
                ("3000+", "€3,000+"),
            ]
            .into_iter()
            .enumerate()
            .map(|(i, (value, label))| FilterOption::new(&format!("filter-price-{i}"), value, label))
            .collect(),
        },
    ]
}

pub fn sample_products() -> Vec<ProductCard> {
    vec![
        ProductCard::new("Pantheon", "Earrings", "€2,850", "assets/images/product-1.jpg"),
        ProductCard::new("Eclipse", "Bracelets", "€3,200", "assets/images/product-2.jpg"),
        ProductCard::new("Halo", "Earrings", "€1,950", "assets/images/product-3.jpg"),
        ProductCard::new("Oblique", "Earrings", "€1,650", "assets/images/product-4.jpg"),
    ]
}

pub fn sample_pagination() -> Vec<PageLink> {
    vec![
        PageLink::Previous,
        PageLink::Page {
            number: 1,
            active: true,
        },
        PageLink::Page {
            number: 2,
            active: false,
        },
        PageLink::Page {
            number: 3,
            active: false,
        },
        PageLink::Gap,
        PageLink::Page {
            number: 8,
            active: false,
        },
        PageLink::Next,
    ]
}
