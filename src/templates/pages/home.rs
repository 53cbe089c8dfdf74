use std::sync::Arc;

use crate::domain::criteria::TAB_OPTIONS;
use crate::domain::url_sync::catalog_link;
use crate::domain::{FilterCriteria, PropertyRecord};
use crate::remote::FetchState;
use crate::templates::components::{empty_results, error_panel, listing_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Cards shown under the quick search.
pub const HOME_RESULT_LIMIT: usize = 6;

pub struct HomeView {
    pub criteria: FilterCriteria,
    /// Records to show (search matches, or the featured rail) and the size
    /// of the whole catalog.
    pub results: FetchState<(Arc<Vec<PropertyRecord>>, usize)>,
}

pub fn home_page(view: &HomeView) -> Markup {
    let criteria = &view.criteria;
    let active_tab = criteria.active_tab.key();

    desktop_layout(
        "Find your next home",
        false,
        html! {
            main class="container" {
                section class="hero" {
                    h1 { "Find your next home in Bhubaneswar" }
                    p class="lead" { "Flats, houses and plots for rent and sale." }

                    form class="quick-search" method="get" action="/" {
                        input
                            name="location"
                            placeholder="Location (e.g., Patia, Nayapalli)"
                            value=(criteria.query);
                        select name="type" aria-label="Type" {
                            option value="all" selected[active_tab == "all"] { "Any" }
                            @for (key, label) in TAB_OPTIONS.iter().skip(1) {
                                option value=(key) selected[active_tab == *key] { (label) }
                            }
                        }
                        input type="number" name="min_price" min="0" placeholder="Min Price (₹)" value=[criteria.min_price];
                        input type="number" name="max_price" min="0" placeholder="Max Price (₹)" value=[criteria.max_price];
                        button type="submit" class="btn" { "Search" }
                        @if criteria.is_active() {
                            a href="/" class="clear" { "✕ Clear filters" }
                        }
                    }
                }

                section class="listings" {
                    h2 {
                        @if criteria.is_active() { "Search Results" } @else { "Featured Listings" }
                    }
                    @match &view.results {
                        FetchState::Ready((matches, total)) => {
                            @if criteria.is_active() {
                                p class="muted" { "Showing " (matches.len()) " of " (total) " properties" }
                            }
                            @if matches.is_empty() {
                                (empty_results("/"))
                            } @else {
                                div class="listing-grid" {
                                    @for record in matches.iter().take(HOME_RESULT_LIMIT) {
                                        (listing_card(record))
                                    }
                                }
                                a class="btn secondary" href=(catalog_link(Some(&criteria.active_tab), Some(&criteria.query))) { "View all properties" }
                            }
                        }
                        FetchState::Failed(msg) => (error_panel(msg, "/")),
                        FetchState::Loading => p class="muted" { "Loading…" },
                    }
                }
            }
        },
    )
}

