use crate::domain::PropertyRecord;
use maud::{html, Markup};

pub fn listing_card(record: &PropertyRecord) -> Markup {
    html! {
        a class="listing-card" href=(record.detail_href()) {
            div class="listing-media" {
                img src=(record.image) alt=(record.title) loading="lazy";
                @if record.featured {
                    span class="badge featured" { "Featured" }
                }
            }
            div class="listing-body" {
                span class="badge" { (record.badge()) }
                h3 { (record.title) }
                p class="location" { (record.location) }
                @if record.beds.is_some() || record.baths.is_some() || record.area.is_some() {
                    ul class="facts" {
                        @if let Some(beds) = record.beds { li { (beds) " bd" } }
                        @if let Some(baths) = record.baths { li { (baths) " ba" } }
                        @if let Some(area) = &record.area { li { (area) } }
                    }
                }
                p class="price" { (record.price_label) }
            }
        }
    }
}
