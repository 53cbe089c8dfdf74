use crate::domain::forms::FieldErrors;
use maud::{html, Markup};

/// Outcome banner shown above a form after it was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

pub fn notice(notice: Option<&Notice>) -> Markup {
    html! {
        @match notice {
            Some(Notice::Success(msg)) => div class="notice success" role="status" { (msg) },
            Some(Notice::Failure(msg)) => div class="notice failure" role="alert" { (msg) },
            None => {},
        }
    }
}

fn field_error(errors: &FieldErrors, name: &str) -> Markup {
    html! {
        @if let Some(msg) = errors.get(name) {
            p class="field-error" id=(format!("{name}-error")) { (msg) }
        }
    }
}

pub fn field(label: &str, name: &str, kind: &str, value: &str, errors: &FieldErrors) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input
                type=(kind)
                id=(name)
                name=(name)
                value=(value)
                aria-invalid=[errors.get(name).map(|_| "true")];
            (field_error(errors, name))
        }
    }
}

pub fn textarea_field(label: &str, name: &str, value: &str, errors: &FieldErrors) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            textarea id=(name) name=(name) rows="5" aria-invalid=[errors.get(name).map(|_| "true")] { (value) }
            (field_error(errors, name))
        }
    }
}

/// `options` are (value, label) pairs.
pub fn select_field(
    label: &str,
    name: &str,
    options: &[(&str, &str)],
    selected: &str,
    errors: &FieldErrors,
) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            select id=(name) name=(name) {
                @for (value, text) in options {
                    option value=(value) selected[*value == selected] { (text) }
                }
            }
            (field_error(errors, name))
        }
    }
}

pub fn checkbox_field(label: Markup, name: &str, checked: bool, errors: &FieldErrors) -> Markup {
    html! {
        div class="field checkbox" {
            label {
                input type="checkbox" name=(name) checked[checked];
                " " (label)
            }
            (field_error(errors, name))
        }
    }
}
