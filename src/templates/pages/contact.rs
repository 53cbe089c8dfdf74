use crate::domain::forms::{ContactForm, FieldErrors};
use crate::templates::components::{field, notice, textarea_field, Notice};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn contact_page(form: &ContactForm, errors: &FieldErrors, outcome: Option<&Notice>) -> Markup {
    desktop_layout(
        "Contact us",
        false,
        html! {
            main class="container narrow" {
                h1 { "Get in touch" }
                p class="lead" { "Questions about a listing or a visit plan? Send us a message." }

                (notice(outcome))

                form method="post" action="/contact" class="stacked" novalidate {
                    (field("Name", "name", "text", &form.name, errors))
                    (field("Email", "email", "email", &form.email, errors))
                    (field("Phone", "phone", "tel", form.phone.as_deref().unwrap_or_default(), errors))
                    (field("Subject", "subject", "text", &form.subject, errors))
                    (textarea_field("Message", "message", &form.message, errors))
                    button type="submit" class="btn" { "Send message" }
                }
            }
        },
    )
}
