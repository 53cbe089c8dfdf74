use crate::domain::criteria::KNOWN_TYPE_KEYS;
use crate::domain::forms::{FieldErrors, SubmitPropertyForm};
use crate::templates::components::{field, notice, select_field, textarea_field, Notice};
use crate::templates::desktop_layout;
use maud::{html, Markup};

const CATEGORIES: &[(&str, &str)] = &[("sale", "For Sale"), ("rent", "For Rent")];

pub fn submit_property_page(form: &SubmitPropertyForm, errors: &FieldErrors, outcome: Option<&Notice>) -> Markup {
    let mut types: Vec<(&str, &str)> = vec![("", "Select type")];
    types.extend(KNOWN_TYPE_KEYS.iter().map(|k| (*k, *k)));

    desktop_layout(
        "List your property",
        false,
        html! {
            main class="container narrow" {
                h1 { "List your property" }
                p class="lead" { "Tell us about the property and we'll get it in front of buyers and tenants." }

                (notice(outcome))

                form method="post" action="/submit-property" class="stacked" novalidate {
                    fieldset {
                        legend { "Property" }
                        (field("Title", "title", "text", &form.title, errors))
                        (field("Location", "location", "text", &form.location, errors))
                        (field("Price (₹)", "price", "number", &form.price, errors))
                        (select_field("Category", "category", CATEGORIES, &form.category, errors))
                        (select_field("Type", "property_type", &types, &form.property_type, errors))
                        (field("Bedrooms", "bedrooms", "number", &form.bedrooms, errors))
                        (field("Bathrooms", "bathrooms", "number", &form.bathrooms, errors))
                        (field("Area", "area", "text", &form.area, errors))
                        (textarea_field("Description", "description", &form.description, errors))
                        (textarea_field("Image URLs (one per line)", "image_urls", &form.image_urls, errors))
                    }
                    fieldset {
                        legend { "Owner" }
                        (field("Name", "owner_name", "text", &form.owner_name, errors))
                        (field("Phone", "owner_phone", "tel", &form.owner_phone, errors))
                        (field("Email", "owner_email", "email", &form.owner_email, errors))
                    }
                    button type="submit" class="btn" { "Submit property" }
                }
            }
        },
    )
}
