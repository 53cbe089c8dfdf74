use std::io::Read;
use std::sync::Arc;

use astra::Request;
use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::auth::sessions::{cleared_cookie, credentials_match, session_cookie, token_from_cookie_header};
use crate::domain::forms::{
    field_errors, CheckoutForm, ContactForm, FieldErrors, ListingUpdateForm, LoginForm, RegisterForm,
    SubmitPropertyForm, UserUpdateForm,
};
use crate::domain::pricing::{find_plan, OrderRequest};
use crate::domain::url_sync::catalog_link;
use crate::domain::{featured_rail, seed_criteria, FilterCriteria, ListingCounts};
use crate::errors::ServerError;
use crate::remote::{load_dashboard, FetchState, RemoteError};
use crate::responses::{html_response, html_with_status, redirect, redirect_with_cookie, ResultResp};
use crate::state::AppState;
use crate::templates::components::Notice;
use crate::templates::pages::{self, CatalogResults, HomeView};

const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    let result = route(req, state, &method, &path);

    match &result {
        Ok(resp) => info!("{method} {path} -> {}", resp.status().as_u16()),
        Err(e) => warn!("{method} {path} -> {} ({e})", e.status()),
    }
    result
}

fn route(req: Request, state: &AppState, method: &str, path: &str) -> ResultResp {
    let query = req.uri().query().unwrap_or_default().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let no_errors = FieldErrors::new();

    match (method, segments.as_slice()) {
        ("GET", []) => home(state, &query),

        // Catalog
        ("GET", ["properties"]) => catalog(state, &query),
        ("GET", ["properties", "results"]) => catalog_results(state, &query),
        ("GET", ["properties", id]) => property_detail(state, id),

        // Lead capture
        ("GET", ["contact"]) => html_response(pages::contact_page(&ContactForm::default(), &no_errors, None)),
        ("POST", ["contact"]) => contact(req, state),
        ("GET", ["submit-property"]) => html_response(pages::submit_property_page(
            &SubmitPropertyForm::default(),
            &no_errors,
            None,
        )),
        ("POST", ["submit-property"]) => submit_property(req, state),
        ("GET", ["login"]) => html_response(pages::login_page(&LoginForm::default(), &no_errors)),
        ("POST", ["login"]) => login(req),
        ("GET", ["register"]) => html_response(pages::register_page(&RegisterForm::default(), &no_errors, None)),
        ("POST", ["register"]) => register(req),

        // Pricing
        ("GET", ["pricing"]) => html_response(pages::pricing_page(None)),
        ("POST", ["checkout"]) => checkout(req, state),

        // Back office
        ("GET", ["admin"]) => admin_login_form(&req, state),
        ("POST", ["admin"]) => admin_login(req, state),
        ("POST", ["admin", "logout"]) => admin_logout(&req, state),
        ("GET", ["dashboard"]) => dashboard(&req, state, &query),
        ("POST", ["dashboard", "users", id]) => update_user(req, state, id),
        ("POST", ["dashboard", "users", id, "delete"]) => delete_user(&req, state, id),
        ("POST", ["dashboard", "listings", id]) => update_listing(req, state, id),
        ("POST", ["dashboard", "listings", id, "delete"]) => delete_listing(&req, state, id),

        _ => Err(ServerError::NotFound),
    }
}

/// Decodes an `application/x-www-form-urlencoded` body.
fn read_form<T: DeserializeOwned>(req: Request) -> Result<T, ServerError> {
    let mut body = String::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    serde_urlencoded::from_str(&body).map_err(|e| ServerError::BadRequest(format!("malformed form: {e}")))
}

fn query_pairs(query: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}

fn load_catalog(state: &AppState, criteria: &FilterCriteria) -> FetchState<CatalogResults> {
    match state.catalog.records(state.backend.as_ref()) {
        Ok(set) => FetchState::Ready(CatalogResults {
            listings: state.catalog.filtered(&set, criteria),
            counts: ListingCounts::from_records(&set.records),
        }),
        Err(e) => {
            warn!("Catalog fetch failed: {e}");
            FetchState::Failed(e.to_string())
        }
    }
}

fn home(state: &AppState, query: &str) -> ResultResp {
    // The quick search names its text field "location".
    let pairs = query_pairs(query);
    let criteria = FilterCriteria::from_form(pairs.iter().map(|(k, v)| {
        let key = if k == "location" { "query" } else { k.as_str() };
        (key, v.as_str())
    }));

    let results = match state.catalog.records(state.backend.as_ref()) {
        Ok(set) => {
            let rail: Vec<_> = if criteria.is_active() {
                Vec::new()
            } else {
                featured_rail(&set.records).into_iter().cloned().collect()
            };
            let shown = if rail.is_empty() {
                state.catalog.filtered(&set, &criteria)
            } else {
                Arc::new(rail)
            };
            FetchState::Ready((shown, set.records.len()))
        }
        Err(e) => {
            warn!("Home listings fetch failed: {e}");
            FetchState::Failed(e.to_string())
        }
    };

    html_response(pages::home_page(&HomeView { criteria, results }))
}

/// Full catalog page. Criteria are seeded from the URL once, here.
fn catalog(state: &AppState, query: &str) -> ResultResp {
    let criteria = seed_criteria(query);
    let results = load_catalog(state, &criteria);
    let retry = if query.is_empty() {
        "/properties".to_string()
    } else {
        format!("/properties?{query}")
    };

    html_response(pages::catalog_page(&criteria, &results, &retry))
}

/// Result list only, for the filter form's in-place swap.
fn catalog_results(state: &AppState, query: &str) -> ResultResp {
    let pairs = query_pairs(query);
    let criteria = FilterCriteria::from_form(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let results = load_catalog(state, &criteria);
    let retry = catalog_link(Some(&criteria.active_tab), Some(&criteria.query));

    html_response(pages::results_fragment(&criteria, &results, &retry))
}

fn property_detail(state: &AppState, id: &str) -> ResultResp {
    if let Some(record) = state.catalog.find(id) {
        debug!("Property {id} served from catalog cache");
        return html_response(pages::property_page(&record));
    }

    match state.backend.property(id) {
        Ok(record) => html_response(pages::property_page(&record)),
        Err(RemoteError::NotFound(_)) => Err(ServerError::NotFound),
        Err(e) => {
            warn!("Property {id} fetch failed: {e}");
            html_with_status(
                502,
                pages::property_unavailable_page(&e.to_string(), &format!("/properties/{id}")),
            )
        }
    }
}

fn contact(req: Request, state: &AppState) -> ResultResp {
    let form = read_form::<ContactForm>(req)?.normalized();

    if let Err(e) = form.validate() {
        return html_with_status(422, pages::contact_page(&form, &field_errors(&e), None));
    }

    match state.backend.send_message(&form) {
        Ok(()) => {
            info!("Contact message received from {}", form.email);
            let done = Notice::Success("Thank you for your message! We will get back to you soon.".to_string());
            html_response(pages::contact_page(&ContactForm::default(), &FieldErrors::new(), Some(&done)))
        }
        Err(e) => {
            warn!("Contact message not delivered: {e}");
            let failed = Notice::Failure(format!("We couldn't send your message. Please try again. ({e})"));
            html_with_status(502, pages::contact_page(&form, &FieldErrors::new(), Some(&failed)))
        }
    }
}

fn submit_property(req: Request, state: &AppState) -> ResultResp {
    let form: SubmitPropertyForm = read_form(req)?;

    let property = match form.clone().into_new_property() {
        Ok(property) => property,
        Err(errors) => return html_with_status(422, pages::submit_property_page(&form, &errors, None)),
    };

    match state.backend.submit_property(&property) {
        Ok(()) => {
            info!("Property submitted: {} ({})", property.title, property.location);
            state.catalog.invalidate();
            let done = Notice::Success("Thanks! Your property was submitted for review.".to_string());
            html_response(pages::submit_property_page(
                &SubmitPropertyForm::default(),
                &FieldErrors::new(),
                Some(&done),
            ))
        }
        Err(e) => {
            warn!("Property submission failed: {e}");
            let failed = Notice::Failure(format!("Submission failed. Please try again. ({e})"));
            html_with_status(502, pages::submit_property_page(&form, &FieldErrors::new(), Some(&failed)))
        }
    }
}

fn login(req: Request) -> ResultResp {
    let form: LoginForm = read_form(req)?;
    if let Err(e) = form.validate() {
        return html_with_status(422, pages::login_page(&form, &field_errors(&e)));
    }
    info!("Customer sign-in for {}", form.email.trim());
    redirect("/")
}

fn register(req: Request) -> ResultResp {
    let form: RegisterForm = read_form(req)?;
    if let Err(errors) = form.check() {
        return html_with_status(422, pages::register_page(&form, &errors, None));
    }
    info!("Customer registered: {}", form.email.trim());
    let done = Notice::Success("Registration successful. You can sign in now.".to_string());
    html_response(pages::register_page(&RegisterForm::default(), &FieldErrors::new(), Some(&done)))
}

fn checkout(req: Request, state: &AppState) -> ResultResp {
    let form: CheckoutForm = read_form(req)?;
    let plan = find_plan(form.plan.trim())
        .ok_or_else(|| ServerError::BadRequest(format!("unknown plan '{}'", form.plan)))?;

    let request = OrderRequest::for_plan(plan, Utc::now());
    match state.backend.create_order(&request) {
        Ok(order) => {
            info!("Order {} created for plan {}", order.id, plan.id);
            html_response(pages::checkout_page(plan, &order))
        }
        Err(e) => {
            warn!("Order for plan {} failed: {e}", plan.id);
            let failed = Notice::Failure(format!("We couldn't start checkout. Please try again. ({e})"));
            html_with_status(502, pages::pricing_page(Some(&failed)))
        }
    }
}

fn admin_token(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(token_from_cookie_header)
        .map(str::to_string)
}

fn is_admin(req: &Request, state: &AppState) -> bool {
    admin_token(req).is_some_and(|token| state.sessions.is_valid(&token, Utc::now().timestamp()))
}

fn admin_login_form(req: &Request, state: &AppState) -> ResultResp {
    if is_admin(req, state) {
        return redirect("/dashboard");
    }
    html_response(pages::admin_login_page(&LoginForm::default(), &FieldErrors::new(), None))
}

fn admin_login(req: Request, state: &AppState) -> ResultResp {
    let form: LoginForm = read_form(req)?;
    if let Err(e) = form.validate() {
        return html_with_status(422, pages::admin_login_page(&form, &field_errors(&e), None));
    }

    let config = &state.config;
    if !credentials_match(&config.admin_email, &config.admin_password, &form.email, &form.password) {
        warn!("Rejected admin sign-in for {}", form.email.trim());
        let failed = Notice::Failure("Invalid email or password".to_string());
        return html_with_status(401, pages::admin_login_page(&form, &FieldErrors::new(), Some(&failed)));
    }

    let token = state.sessions.create(Utc::now().timestamp());
    redirect_with_cookie("/dashboard", &session_cookie(&token))
}

fn admin_logout(req: &Request, state: &AppState) -> ResultResp {
    if let Some(token) = admin_token(req) {
        state.sessions.revoke(&token);
    }
    redirect_with_cookie("/admin", &cleared_cookie())
}

/// Banner for the outcome of the last dashboard action (`?done=`).
fn dashboard_notice(query: &str) -> Option<Notice> {
    let done = query_pairs(query)
        .into_iter()
        .find(|(k, _)| k == "done")
        .map(|(_, v)| v)?;

    let message = match done.as_str() {
        "user-updated" => "User updated.",
        "user-deleted" => "User deleted.",
        "listing-updated" => "Listing updated.",
        "listing-deleted" => "Listing deleted.",
        _ => return None,
    };
    Some(Notice::Success(message.to_string()))
}

fn dashboard(req: &Request, state: &AppState, query: &str) -> ResultResp {
    if !is_admin(req, state) {
        return redirect("/admin");
    }
    let data = load_dashboard(state.backend.as_ref());
    html_response(pages::dashboard_page(&data, dashboard_notice(query).as_ref()))
}

/// Re-renders the dashboard with the form's validation messages.
fn dashboard_rejected(state: &AppState, errors: &FieldErrors) -> ResultResp {
    let message = errors.values().cloned().collect::<Vec<_>>().join(" ");
    let data = load_dashboard(state.backend.as_ref());
    html_with_status(422, pages::dashboard_page(&data, Some(&Notice::Failure(message))))
}

fn update_user(req: Request, state: &AppState, id: &str) -> ResultResp {
    if !is_admin(&req, state) {
        return redirect("/admin");
    }
    let form: UserUpdateForm = read_form(req)?;
    let update = match form.into_update() {
        Ok(update) => update,
        Err(errors) => return dashboard_rejected(state, &errors),
    };

    state.backend.update_user(id, &update)?;
    info!("User {id} updated");
    redirect("/dashboard?done=user-updated")
}

fn delete_user(req: &Request, state: &AppState, id: &str) -> ResultResp {
    if !is_admin(req, state) {
        return redirect("/admin");
    }
    state.backend.delete_user(id)?;
    info!("User {id} deleted");
    redirect("/dashboard?done=user-deleted")
}

fn update_listing(req: Request, state: &AppState, id: &str) -> ResultResp {
    if !is_admin(&req, state) {
        return redirect("/admin");
    }
    let form: ListingUpdateForm = read_form(req)?;
    let update = match form.into_update() {
        Ok(update) => update,
        Err(errors) => return dashboard_rejected(state, &errors),
    };

    state.backend.update_listing(id, &update)?;
    state.catalog.invalidate();
    info!("Listing {id} updated");
    redirect("/dashboard?done=listing-updated")
}

fn delete_listing(req: &Request, state: &AppState, id: &str) -> ResultResp {
    if !is_admin(req, state) {
        return redirect("/admin");
    }
    state.backend.delete_listing(id)?;
    state.catalog.invalidate();
    info!("Listing {id} deleted");
    redirect("/dashboard?done=listing-deleted")
}
