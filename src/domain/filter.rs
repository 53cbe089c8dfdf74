// src/domain/filter.rs

use crate::domain::criteria::{FilterCriteria, SortOrder, TabKey};
use crate::domain::property::{Category, PropertyRecord};

/// Applies `criteria` to `records` and returns a new, ordered list.
///
/// Predicates are conjunctive and evaluated in order: tab, text, lower price
/// bound, upper price bound. The sort is stable, so records the sort key does
/// not distinguish keep their input order. The input is never modified.
pub fn filter_listings(records: &[PropertyRecord], criteria: &FilterCriteria) -> Vec<PropertyRecord> {
    let query = criteria.query.trim().to_lowercase();

    let mut list: Vec<PropertyRecord> = records
        .iter()
        .filter(|r| matches_tab(r, &criteria.active_tab))
        .filter(|r| query.is_empty() || matches_text(r, &query))
        .filter(|r| criteria.min_price.map_or(true, |min| min == 0 || r.price >= min))
        .filter(|r| criteria.max_price.map_or(true, |max| max == 0 || r.price <= max))
        .cloned()
        .collect();

    match criteria.sort {
        SortOrder::Featured => list.sort_by_key(|r| !r.featured),
        SortOrder::PriceAsc => list.sort_by_key(|r| r.price),
        SortOrder::PriceDesc => list.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    list
}

fn matches_tab(record: &PropertyRecord, tab: &TabKey) -> bool {
    match tab {
        TabKey::All => true,
        TabKey::Category(category) => record.category == *category,
        TabKey::Type(t) => record.property_type == *t,
    }
}

/// `query` is already trimmed and lower-cased.
fn matches_text(record: &PropertyRecord, query: &str) -> bool {
    record.title.to_lowercase().contains(query) || record.location.to_lowercase().contains(query)
}

/// Headline numbers for the catalog stats strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingCounts {
    pub total: usize,
    pub rent: usize,
    pub sale: usize,
    pub land: usize,
}

impl ListingCounts {
    pub fn from_records(records: &[PropertyRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, r| {
            acc.total += 1;
            match r.category {
                Category::Rent => acc.rent += 1,
                Category::Sale => acc.sale += 1,
            }
            if r.property_type == "Land" {
                acc.land += 1;
            }
            acc
        })
    }
}

/// Featured records in input order, for the "Featured" rail.
pub fn featured_rail(records: &[PropertyRecord]) -> Vec<&PropertyRecord> {
    records.iter().filter(|r| r.featured).collect()
}
