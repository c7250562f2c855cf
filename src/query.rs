use url::form_urlencoded;

/// The category-like parameters read from the page URL when it loads. Only used to decide whether
/// the shop view is shown, and what it is titled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopQuery {
    pub category: Option<String>,
    pub filter: Option<String>,
    pub section: Option<String>,
}

impl ShopQuery {
    /// Parse the query string of a URL (`location.search`). A leading `?` is optional. If a key is
    /// repeated, the first occurrence wins.
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);

        let mut query = Self::default();

        for (key, value) in form_urlencoded::parse(search.as_bytes()) {
            let slot = match key.as_ref() {
                "category" => &mut query.category,
                "filter" => &mut query.filter,
                "section" => &mut query.section,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        query
    }

    /// The first non-empty parameter, in `category`, `filter`, `section` priority order.
    pub fn page(&self) -> Option<&str> {
        [&self.category, &self.filter, &self.section]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|value| !value.is_empty())
    }

    /// Human readable title for the page, if the query selects one.
    pub fn title(&self) -> Option<String> {
        self.page().map(format_category_name)
    }
}

/// Turn a hyphenated slug into a title: each `-` separated word has its first character
/// uppercased, and the words are joined with spaces.
///
/// ```
/// assert_eq!(linea::format_category_name("fine-jewelry"), "Fine Jewelry");
/// ```
pub fn format_category_name(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();

            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
