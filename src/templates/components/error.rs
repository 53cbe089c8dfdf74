use maud::{html, Markup};

/// Shown in place of content whose fetch failed.
pub fn error_panel(message: &str, retry_href: &str) -> Markup {
    html! {
        div class="panel error" role="alert" {
            h3 { "Couldn't load this right now" }
            p { (message) }
            a class="btn" href=(retry_href) { "Try again" }
        }
    }
}

pub fn empty_results(reset_href: &str) -> Markup {
    html! {
        div class="panel empty" {
            h3 { "No properties match" }
            p { "Try adjusting your search filters." }
            a class="btn" href=(reset_href) { "Reset filters" }
        }
    }
}
