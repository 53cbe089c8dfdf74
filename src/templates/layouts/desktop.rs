use maud::{html, Markup, DOCTYPE};

const NAV: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/properties", "Properties"),
    ("/pricing", "Pricing"),
    ("/submit-property", "List Property"),
    ("/contact", "Contact"),
];

pub fn desktop_layout(title: &str, is_admin: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Amaghara" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#4f46e5"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                        }
                        span { "Amaghara" }
                    }
                    nav {
                        ul {
                            @for (href, label) in NAV {
                                li { a href=(href) { (label) } }
                            }
                            @if is_admin {
                                li { a href="/dashboard" { "Dashboard" } }
                            }
                        }
                    }
                    @if is_admin {
                        form method="post" action="/admin/logout" class="inline" {
                            button type="submit" class="link" { "Log out" }
                        }
                    } @else {
                        div class="auth-links" {
                            a href="/login" { "Login" }
                            a href="/register" class="btn" { "Register" }
                        }
                    }
                }
                (content)
                footer class="site-footer" {
                    p { "© Amaghara. Homes and land across Bhubaneswar." }
                    a href="/admin" { "Admin" }
                }
            }
        }
    }
}
