use crate::domain::forms::{FieldErrors, LoginForm, RegisterForm};
use crate::templates::components::{checkbox_field, field, notice, Notice};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn login_page(form: &LoginForm, errors: &FieldErrors) -> Markup {
    desktop_layout(
        "Sign in",
        false,
        html! {
            main class="container narrow" {
                h1 { "Welcome back" }
                form method="post" action="/login" class="stacked" novalidate {
                    (field("Email", "email", "email", &form.email, errors))
                    (field("Password", "password", "password", "", errors))
                    button type="submit" class="btn" { "Sign in" }
                }
                p { "New here? " a href="/register" { "Create an account" } }
            }
        },
    )
}

pub fn register_page(form: &RegisterForm, errors: &FieldErrors, outcome: Option<&Notice>) -> Markup {
    desktop_layout(
        "Create account",
        false,
        html! {
            main class="container narrow" {
                h1 { "Create your account" }

                (notice(outcome))

                form method="post" action="/register" class="stacked" novalidate {
                    (field("Full name", "name", "text", &form.name, errors))
                    (field("Email", "email", "email", &form.email, errors))
                    (field("Password", "password", "password", "", errors))
                    (field("Confirm password", "confirm_password", "password", "", errors))
                    (checkbox_field(
                        html! { "I agree to the " a href="/terms" { "Terms" } " and " a href="/privacy" { "Privacy Policy" } },
                        "agreed",
                        form.agreed.is_some(),
                        errors,
                    ))
                    button type="submit" class="btn" { "Register" }
                }
                p { "Already registered? " a href="/login" { "Sign in" } }
            }
        },
    )
}
