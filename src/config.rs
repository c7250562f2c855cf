use serde::Deserialize;
use web_sys::Document;

use crate::error::Result;

/// Id of the optional `<script type="application/json">` element carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Tunables for the interactive parts of the site. Every field has a default, so a page without
/// a configuration element (or with a partial one) behaves like the stock storefront.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Period of the hero carousel auto-advance.
    pub rotate_interval_ms: u32,

    /// How long an add-to-cart button shows its confirmation before reverting.
    pub feedback_revert_ms: u32,

    pub added_label: String,

    /// Label restored on add-to-cart buttons whose original label was empty.
    pub default_add_label: String,

    pub accent_background: String,
    pub accent_color: String,

    /// Item count shown in the shop header. Not derived from the product list.
    pub item_count_label: String,

    /// Name of a [`log::Level`], eg `info` or `debug`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            rotate_interval_ms: 5000,
            feedback_revert_ms: 2000,
            added_label: "Added!".to_string(),
            default_add_label: "Add to Cart".to_string(),
            accent_background: "#d4af37".to_string(),
            accent_color: "#1a1a1a".to_string(),
            item_count_label: "24 items".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the configuration embedded in the page, falling back to the defaults when the element
    /// is absent or its contents cannot be parsed.
    pub fn from_document(document: &Document) -> Self {
        let Some(json) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        else {
            return Self::default();
        };

        Self::from_json(&json).unwrap_or_else(|error| {
            log::warn!("{error}, using default configuration");
            Self::default()
        })
    }

    /// The configured log level, or [`log::Level::Info`] if it isn't a valid level name.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
