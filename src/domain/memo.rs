// src/domain/memo.rs

use crate::domain::criteria::FilterCriteria;
use crate::domain::filter::filter_listings;
use crate::domain::property::PropertyRecord;
use std::sync::Arc;

/// A record set tagged with a version that changes whenever the contents do.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub version: u64,
    pub records: Arc<Vec<PropertyRecord>>,
}

impl RecordSet {
    pub fn new(version: u64, records: Vec<PropertyRecord>) -> Self {
        Self {
            version,
            records: Arc::new(records),
        }
    }

    /// A set that was fetched but never stored. Version 0 is never issued
    /// to a stored set and is never memoized.
    pub fn provisional(records: Vec<PropertyRecord>) -> Self {
        Self::new(0, records)
    }
}

/// Remembers the last filter result so repeated renders with the same
/// `(records, criteria)` pair skip the filter pass.
#[derive(Debug, Default)]
pub struct FilterMemo {
    last: Option<(u64, FilterCriteria, Arc<Vec<PropertyRecord>>)>,
    misses: u64,
}

impl FilterMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, set: &RecordSet, criteria: &FilterCriteria) -> Arc<Vec<PropertyRecord>> {
        if set.version == 0 {
            return Arc::new(filter_listings(&set.records, criteria));
        }
        if let Some((version, cached_criteria, result)) = &self.last {
            if *version == set.version && cached_criteria == criteria {
                return Arc::clone(result);
            }
        }

        self.misses += 1;
        let result = Arc::new(filter_listings(&set.records, criteria));
        self.last = Some((set.version, criteria.clone(), Arc::clone(&result)));
        result
    }

    /// Number of times the filter actually ran.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::{SortOrder, TabKey};
    use crate::domain::property::Category;

    fn sample(version: u64) -> RecordSet {
        let records = (1..=4)
            .map(|i| PropertyRecord {
                id: i.to_string(),
                title: format!("Flat {i}"),
                price: i * 1000,
                price_label: String::new(),
                location: "Patia".into(),
                category: if i % 2 == 0 { Category::Rent } else { Category::Sale },
                property_type: "2BHK".into(),
                featured: false,
                image: String::new(),
                beds: None,
                baths: None,
                area: None,
                description: None,
            })
            .collect();
        RecordSet::new(version, records)
    }

    #[test]
    fn same_inputs_hit_the_cache() {
        let set = sample(1);
        let criteria = FilterCriteria {
            sort: SortOrder::PriceDesc,
            ..Default::default()
        };
        let mut memo = FilterMemo::new();

        let first = memo.get(&set, &criteria);
        let second = memo.get(&set, &criteria);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(memo.misses(), 1);
    }

    #[test]
    fn new_criteria_or_version_recompute() {
        let mut memo = FilterMemo::new();
        let criteria = FilterCriteria::default();

        memo.get(&sample(1), &criteria);
        let rent = FilterCriteria {
            active_tab: TabKey::Category(Category::Rent),
            ..Default::default()
        };
        let out = memo.get(&sample(1), &rent);
        assert_eq!(out.len(), 2);

        memo.get(&sample(2), &rent);
        assert_eq!(memo.misses(), 3);
    }

    #[test]
    fn provisional_sets_bypass_the_memo() {
        let mut memo = FilterMemo::new();
        let criteria = FilterCriteria::default();
        let provisional = RecordSet::provisional(sample(1).records.to_vec());

        let first = memo.get(&provisional, &criteria);
        let second = memo.get(&provisional, &criteria);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(memo.misses(), 0);
    }
}
