use crate::domain::criteria::KNOWN_TYPE_KEYS;
use crate::domain::records::{MessageRecord, MonthlySeries, Role, UserRecord};
use crate::domain::PropertyRecord;
use crate::remote::{DashboardData, FetchState};
use crate::templates::components::{error_panel, notice, Notice};
use crate::templates::desktop_layout;
use maud::{html, Markup};

const RETRY: &str = "/dashboard";

fn count<T>(state: &FetchState<Vec<T>>) -> String {
    state
        .ready()
        .map(|v| v.len().to_string())
        .unwrap_or_else(|| "—".to_string())
}

fn section<T>(title: &str, state: &FetchState<T>, body: impl FnOnce(&T) -> Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            @match state {
                FetchState::Ready(value) => (body(value)),
                FetchState::Failed(msg) => (error_panel(msg, RETRY)),
                FetchState::Loading => p class="muted" { "Loading…" },
            }
        }
    }
}

pub fn dashboard_page(data: &DashboardData, outcome: Option<&Notice>) -> Markup {
    desktop_layout(
        "Admin Dashboard",
        true,
        html! {
            main class="container" {
                h1 { "Admin Dashboard" }
                (notice(outcome))

                ul class="stats" {
                    li { strong { (count(&data.users)) } " Users" }
                    li { strong { (count(&data.listings)) } " Listings" }
                    li { strong { (count(&data.messages)) } " Messages" }
                    li {
                        strong {
                            (data.listings.ready().map_or(0, |l| l.iter().filter(|r| r.featured).count()))
                        }
                        " Featured"
                    }
                }

                (section("New listings per month", &data.monthly, monthly_chart))
                (section("Users", &data.users, |users: &Vec<UserRecord>| users_table(users)))
                (section("Listings", &data.listings, |listings: &Vec<PropertyRecord>| listings_table(listings)))
                (section("Messages", &data.messages, |messages: &Vec<MessageRecord>| messages_list(messages)))
            }
        },
    )
}

fn monthly_chart(series: &MonthlySeries) -> Markup {
    html! {
        @if series.peak() == 0 {
            p class="muted" { "No listings yet." }
        } @else {
            div class="bar-chart" role="img" aria-label="New listings per month" {
                @for (label, value) in series.points() {
                    div class="bar" {
                        span class="bar-value" { (value) }
                        div class="bar-fill" style=(format!("height: {}%", series.percent_of_peak(value))) {}
                        span class="bar-label" { (label) }
                    }
                }
            }
        }
    }
}

fn users_table(users: &[UserRecord]) -> Markup {
    html! {
        @if users.is_empty() {
            p class="muted" { "No users yet." }
        } @else {
            table {
                thead { tr { th { "Name" } th { "Email" } th { "Role" } th { "" } th { "" } } }
                tbody {
                    @for user in users {
                        tr {
                            @let form_id = format!("user-{}", user.id);
                            td { input form=(form_id) name="name" value=(user.name); }
                            td { input form=(form_id) type="email" name="email" value=(user.email); }
                            td {
                                select form=(form_id) name="role" {
                                    @for role in [Role::User, Role::Admin] {
                                        option value=(role.key()) selected[role == user.role] { (role.key()) }
                                    }
                                }
                            }
                            td {
                                form id=(form_id) method="post" action=(format!("/dashboard/users/{}", user.id)) {
                                    button type="submit" { "Save" }
                                }
                            }
                            td {
                                form method="post" action=(format!("/dashboard/users/{}/delete", user.id))
                                    onsubmit="return confirm('Delete this user?');" {
                                    button type="submit" class="danger" { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn listings_table(listings: &[PropertyRecord]) -> Markup {
    html! {
        @if listings.is_empty() {
            p class="muted" { "No listings yet." }
        } @else {
            table {
                thead {
                    tr { th { "Title" } th { "Price (₹)" } th { "Location" } th { "Type" } th { "Featured" } th { "" } th { "" } }
                }
                tbody {
                    @for listing in listings {
                        tr {
                            @let form_id = format!("listing-{}", listing.id);
                            td { input form=(form_id) name="title" value=(listing.title); }
                            td { input form=(form_id) type="number" name="price" min="1" value=(listing.price); }
                            td { input form=(form_id) name="location" value=(listing.location); }
                            td {
                                (listing.property_type)
                                @if !KNOWN_TYPE_KEYS.contains(&listing.property_type.as_str()) {
                                    " " span class="muted" { "(other)" }
                                }
                            }
                            td { input form=(form_id) type="checkbox" name="featured" checked[listing.featured]; }
                            td {
                                form id=(form_id) method="post" action=(format!("/dashboard/listings/{}", listing.id)) {
                                    button type="submit" { "Save" }
                                }
                            }
                            td {
                                form method="post" action=(format!("/dashboard/listings/{}/delete", listing.id))
                                    onsubmit="return confirm('Delete this listing?');" {
                                    button type="submit" class="danger" { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn messages_list(messages: &[MessageRecord]) -> Markup {
    html! {
        @if messages.is_empty() {
            p class="muted" { "No messages." }
        } @else {
            ul class="messages" {
                @for message in messages {
                    li {
                        p {
                            strong { (message.subject) }
                            " from " (message.name) " <" a href=(format!("mailto:{}", message.email)) { (message.email) } ">"
                        }
                        @if let Some(at) = message.received_at {
                            p class="muted" { (at.format("%d %b %Y, %H:%M").to_string()) }
                        }
                        p { (message.body) }
                    }
                }
            }
        }
    }
}
