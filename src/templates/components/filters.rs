use crate::domain::criteria::TAB_OPTIONS;
use crate::domain::{FilterCriteria, SortOrder};
use maud::{html, Markup};

/// Catalog filter form. With htmx it swaps `#results` in place and leaves the
/// address bar alone; without it, the form falls back to a plain GET.
pub fn filter_panel(criteria: &FilterCriteria) -> Markup {
    let active_tab = criteria.active_tab.key();

    html! {
        form
            id="filters"
            class="filters"
            method="get"
            action="/properties"
            hx-get="/properties/results"
            hx-target="#results"
            hx-swap="innerHTML"
            hx-trigger="input changed delay:300ms, change"
        {
            input
                type="search"
                name="query"
                value=(criteria.query)
                placeholder="Search by title or location"
                aria-label="Search";

            select name="type" aria-label="Property type" {
                @for (key, label) in TAB_OPTIONS {
                    option value=(key) selected[active_tab == *key] { (label) }
                }
            }

            input
                type="number"
                name="min_price"
                min="0"
                placeholder="Min price (₹)"
                value=[criteria.min_price];
            input
                type="number"
                name="max_price"
                min="0"
                placeholder="Max price (₹)"
                value=[criteria.max_price];

            select name="sort" aria-label="Sort" {
                @for (order, label) in SortOrder::OPTIONS {
                    option value=(order.key()) selected[*order == criteria.sort] { (label) }
                }
            }

            noscript { button type="submit" { "Search" } }

            @if criteria.is_active() {
                a href="/properties" class="clear" { "Clear" }
            }
        }
    }
}
