// src/domain/url_sync.rs

use crate::domain::criteria::{FilterCriteria, TabKey};

/// Seeds catalog criteria from a page's query string on initial load.
///
/// Only `type` and `query` are read. `type` is applied when it names a known
/// tab; anything else leaves the tab at "all". Later filter changes come in
/// through the filter form, never through this function.
pub fn seed_criteria(query_string: &str) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();

    for (key, value) in url::form_urlencoded::parse(query_string.trim_start_matches('?').as_bytes()) {
        match key.as_ref() {
            "type" => {
                if let Some(tab) = TabKey::recognize(&value) {
                    criteria.active_tab = tab;
                }
            }
            "query" => {
                let q = value.trim();
                if !q.is_empty() {
                    criteria.query = q.to_string();
                }
            }
            _ => {}
        }
    }

    criteria
}

/// Deep link into the catalog, as used by promotional cards and the home page.
pub fn catalog_link(tab: Option<&TabKey>, query: Option<&str>) -> String {
    let mut ser = url::form_urlencoded::Serializer::new(String::new());
    if let Some(tab) = tab {
        ser.append_pair("type", &tab.key());
    }
    if let Some(q) = query.map(str::trim).filter(|q| !q.is_empty()) {
        ser.append_pair("query", q);
    }
    let qs = ser.finish();

    if qs.is_empty() {
        "/properties".to_string()
    } else {
        format!("/properties?{qs}")
    }
}
