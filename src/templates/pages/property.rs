use crate::domain::PropertyRecord;
use crate::templates::components::error_panel;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn property_page(record: &PropertyRecord) -> Markup {
    desktop_layout(
        &record.title,
        false,
        html! {
            main class="container property-detail" {
                p { a href="/properties" { "← Back to properties" } }

                div class="detail-media" {
                    img src=(record.image) alt=(record.title);
                }

                div class="detail-body" {
                    span class="badge" { (record.badge()) }
                    @if record.featured { span class="badge featured" { "Featured" } }
                    h1 { (record.title) }
                    p class="location" { (record.location) }
                    p class="price" { (record.price_label) }

                    dl class="facts" {
                        @if let Some(beds) = record.beds { dt { "Bedrooms" } dd { (beds) } }
                        @if let Some(baths) = record.baths { dt { "Bathrooms" } dd { (baths) } }
                        @if let Some(area) = &record.area { dt { "Area" } dd { (area) } }
                        dt { "Type" } dd { (record.property_type) }
                    }

                    @if let Some(description) = &record.description {
                        h2 { "About this property" }
                        p { (description) }
                    }

                    div class="cta" {
                        a class="btn" href="/pricing" { "Book a visit" }
                        a class="btn secondary" href="/contact" { "Ask a question" }
                    }
                }
            }
        },
    )
}

pub fn property_unavailable_page(message: &str, retry_href: &str) -> Markup {
    desktop_layout(
        "Property",
        false,
        html! {
            main class="container narrow" {
                p { a href="/properties" { "← Back to properties" } }
                (error_panel(message, retry_href))
            }
        },
    )
}
