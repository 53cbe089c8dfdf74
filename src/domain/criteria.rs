// src/domain/criteria.rs

use crate::domain::property::Category;

/// Type keys offered as tabs on the catalog and accepted from deep links.
pub const KNOWN_TYPE_KEYS: &[&str] = &["1RK", "1BHK", "2BHK", "3BHK", "4BHK", "Land"];

/// Tabs in display order: (key, label).
pub const TAB_OPTIONS: &[(&str, &str)] = &[
    ("all", "All"),
    ("rent", "Rent"),
    ("sale", "Sale"),
    ("land", "Land"),
    ("1RK", "1RK"),
    ("1BHK", "1BHK"),
    ("2BHK", "2BHK"),
    ("3BHK", "3BHK"),
    ("4BHK", "4BHK"),
];

/// The category/type axis of the filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TabKey {
    #[default]
    All,
    Category(Category),
    Type(String),
}

impl TabKey {
    /// Resolves a raw tab key. Unrecognized keys resolve to `All` so a bad
    /// link shows everything rather than nothing.
    pub fn parse(raw: &str) -> Self {
        Self::recognize(raw).unwrap_or_default()
    }

    /// Like `parse`, but reports unrecognized keys instead of falling back.
    pub fn recognize(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("all") {
            return Some(TabKey::All);
        }
        match raw.to_ascii_lowercase().as_str() {
            "rent" => return Some(TabKey::Category(Category::Rent)),
            "sale" => return Some(TabKey::Category(Category::Sale)),
            _ => {}
        }
        KNOWN_TYPE_KEYS
            .iter()
            .find(|key| key.eq_ignore_ascii_case(raw))
            .map(|key| TabKey::Type((*key).to_string()))
    }

    /// The key used in links and form values.
    pub fn key(&self) -> String {
        match self {
            TabKey::All => "all".to_string(),
            TabKey::Category(c) => c.key().to_string(),
            TabKey::Type(t) if t == "Land" => "land".to_string(),
            TabKey::Type(t) => t.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const OPTIONS: &'static [(SortOrder, &'static str)] = &[
        (SortOrder::Featured, "Featured"),
        (SortOrder::PriceAsc, "Price: Low to High"),
        (SortOrder::PriceDesc, "Price: High to Low"),
    ];

    /// Unknown values fall back to the default order.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "price-asc" => SortOrder::PriceAsc,
            "price-desc" => SortOrder::PriceDesc,
            _ => SortOrder::Featured,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SortOrder::Featured => "featured",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
        }
    }
}

/// Everything the user has selected on a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterCriteria {
    pub query: String,
    pub active_tab: TabKey,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub sort: SortOrder,
}

impl FilterCriteria {
    /// Builds criteria from the catalog filter form
    /// (`query`, `tab`, `min_price`, `max_price`, `sort`).
    pub fn from_form<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut criteria = FilterCriteria::default();
        for (key, value) in pairs {
            match key {
                "query" => criteria.query = value.trim().to_string(),
                "tab" | "type" => criteria.active_tab = TabKey::parse(value),
                "min_price" => criteria.min_price = parse_price_bound(value),
                "max_price" => criteria.max_price = parse_price_bound(value),
                "sort" => criteria.sort = SortOrder::parse(value),
                _ => {}
            }
        }
        criteria
    }

    /// True when any input narrows the result set.
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
            || self.active_tab != TabKey::All
            || self.min_price.is_some()
            || self.max_price.is_some()
    }
}

/// A price bound as typed into a form field. Blank, non-numeric, negative
/// and zero inputs all mean "no bound".
pub fn parse_price_bound(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|v| *v > 0)
}
