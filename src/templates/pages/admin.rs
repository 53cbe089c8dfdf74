use crate::domain::forms::{FieldErrors, LoginForm};
use crate::templates::components::{field, notice, Notice};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn admin_login_page(form: &LoginForm, errors: &FieldErrors, outcome: Option<&Notice>) -> Markup {
    desktop_layout(
        "Admin sign in",
        false,
        html! {
            main class="container narrow" {
                h1 { "Admin sign in" }
                (notice(outcome))
                form method="post" action="/admin" class="stacked" novalidate {
                    (field("Email", "email", "email", &form.email, errors))
                    (field("Password", "password", "password", "", errors))
                    button type="submit" class="btn" { "Sign in" }
                }
            }
        },
    )
}
