use crate::domain::pricing::{Order, Plan, PLANS};
use crate::templates::components::{notice, Notice};
use crate::templates::desktop_layout;
use maud::{html, Markup};

fn plan_card(plan: &Plan) -> Markup {
    html! {
        div class=(if plan.popular { "plan popular" } else { "plan" }) {
            @if plan.popular { span class="badge" { "Most popular" } }
            h3 { (plan.name) }
            p class="muted" { (plan.description) }
            p class="price" { "₹" (plan.price) }
            ul {
                @for feature in plan.features {
                    li { (feature) }
                }
            }
            form method="post" action="/checkout" {
                input type="hidden" name="plan" value=(plan.id);
                button type="submit" class="btn" { "Choose plan" }
            }
        }
    }
}

pub fn pricing_page(outcome: Option<&Notice>) -> Markup {
    desktop_layout(
        "Pricing",
        false,
        html! {
            main class="container" {
                h1 { "Visit plans" }
                p class="lead" { "Pay once, visit the homes you shortlist." }
                (notice(outcome))
                div class="plan-grid" {
                    @for plan in PLANS {
                        (plan_card(plan))
                    }
                }
            }
        },
    )
}

pub fn checkout_page(plan: &Plan, order: &Order) -> Markup {
    desktop_layout(
        "Checkout",
        false,
        html! {
            main class="container narrow" {
                h1 { "Checkout" }
                div class="panel" {
                    h3 { (plan.name) }
                    dl {
                        dt { "Order" } dd { code { (order.id) } }
                        dt { "Amount" } dd { (order.amount_label()) " " (order.currency) }
                        @if let Some(receipt) = &order.receipt {
                            dt { "Receipt" } dd { (receipt) }
                        }
                        dt { "House visits" } dd { (plan.house_visits) }
                    }
                    p class="muted" { "Complete the payment with our payment partner to activate your plan." }
                }
                p { a href="/pricing" { "← Choose a different plan" } }
            }
        },
    )
}
