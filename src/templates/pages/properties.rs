use std::sync::Arc;

use crate::domain::criteria::TabKey;
use crate::domain::url_sync::catalog_link;
use crate::domain::{Category, FilterCriteria, ListingCounts, PropertyRecord};
use crate::remote::FetchState;
use crate::templates::components::{empty_results, error_panel, filter_panel, listing_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct CatalogResults {
    pub listings: Arc<Vec<PropertyRecord>>,
    pub counts: ListingCounts,
}

pub fn catalog_page(criteria: &FilterCriteria, results: &FetchState<CatalogResults>, retry_href: &str) -> Markup {
    desktop_layout(
        "Properties",
        false,
        html! {
            main class="container" {
                h1 { "Browse Properties" }

                @if let Some(results) = results.ready() {
                    (stats_strip(&results.counts))
                }

                (filter_panel(criteria))

                div id="results" aria-live="polite" {
                    (results_fragment(criteria, results, retry_href))
                }
            }
        },
    )
}

/// The part of the catalog that the filter form swaps.
pub fn results_fragment(criteria: &FilterCriteria, results: &FetchState<CatalogResults>, retry_href: &str) -> Markup {
    html! {
        @match results {
            FetchState::Ready(results) => {
                p class="muted result-count" {
                    (results.listings.len()) " of " (results.counts.total) " properties"
                    @if !criteria.query.trim().is_empty() {
                        " matching “" (criteria.query.trim()) "”"
                    }
                }
                @if results.listings.is_empty() {
                    (empty_results("/properties"))
                } @else {
                    div class="listing-grid" {
                        @for record in results.listings.iter() {
                            (listing_card(record))
                        }
                    }
                }
            }
            FetchState::Failed(msg) => (error_panel(msg, retry_href)),
            FetchState::Loading => p class="muted" { "Loading properties…" },
        }
    }
}

fn stats_strip(counts: &ListingCounts) -> Markup {
    let stats = [
        ("Total", counts.total, "/properties".to_string()),
        ("For Rent", counts.rent, catalog_link(Some(&TabKey::Category(Category::Rent)), None)),
        ("For Sale", counts.sale, catalog_link(Some(&TabKey::Category(Category::Sale)), None)),
        ("Land", counts.land, catalog_link(Some(&TabKey::Type("Land".to_string())), None)),
    ];

    html! {
        ul class="stats" {
            @for (label, count, href) in &stats {
                li { a href=(href) { strong { (count) } " " (label) } }
            }
        }
    }
}
