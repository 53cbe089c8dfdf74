use crate::router::handle;
use crate::tests::utils::{body_string, get, sample_catalog, test_state};

#[test]
fn catalog_deep_link_preselects_type() {
    let (state, _) = test_state(sample_catalog());

    let resp = handle(get("/properties?type=2BHK"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sunny 2BHK Flat"));
    assert!(body.contains("Compact 2BHK"));
    assert!(!body.contains("Family Home"));
    assert!(!body.contains("Corner Plot"));
    assert!(body.contains(r#"<option value="2BHK" selected>"#));
}

#[test]
fn catalog_deep_link_with_query() {
    let (state, _) = test_state(sample_catalog());

    let resp = handle(get("/properties?type=land&query=khanda"), &state).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Corner Plot"));
    assert!(!body.contains("Sunny 2BHK Flat"));
    assert!(body.contains(r#"value="khanda""#));
}

#[test]
fn unknown_deep_link_type_shows_everything() {
    let (state, _) = test_state(sample_catalog());

    let body = body_string(handle(get("/properties?type=penthouse"), &state).unwrap());
    for title in ["Sunny 2BHK Flat", "Family Home", "Corner Plot", "Compact 2BHK"] {
        assert!(body.contains(title), "missing {title}");
    }
}

#[test]
fn deep_link_ignores_price_params() {
    let (state, _) = test_state(sample_catalog());

    let body = body_string(handle(get("/properties?min_price=9999999"), &state).unwrap());
    assert!(body.contains("Family Home"));
    assert!(body.contains("Sunny 2BHK Flat"));
}

#[test]
fn results_partial_applies_form_filters() {
    let (state, _) = test_state(sample_catalog());

    let resp = handle(
        get("/properties/results?query=&type=rent&min_price=&max_price=12000&sort=price-asc"),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.headers().get("HX-Push-Url").is_none());

    let body = body_string(resp);
    assert!(!body.contains("<html"), "partial must not carry the layout");
    assert!(body.contains("Compact 2BHK"));
    assert!(!body.contains("Sunny 2BHK Flat"));
    assert!(!body.contains("Family Home"));
}

#[test]
fn results_partial_sorts_by_price() {
    let (state, _) = test_state(sample_catalog());

    let body = body_string(handle(get("/properties/results?sort=price-desc"), &state).unwrap());
    let home = body.find("Family Home").unwrap();
    let plot = body.find("Corner Plot").unwrap();
    let flat = body.find("Sunny 2BHK Flat").unwrap();
    assert!(home < plot && plot < flat);
}

#[test]
fn empty_results_offer_reset_link() {
    let (state, _) = test_state(sample_catalog());

    let body = body_string(handle(get("/properties/results?query=nowhere"), &state).unwrap());
    assert!(body.contains("No properties match"));
    assert!(body.contains(r#"href="/properties""#));
}

#[test]
fn backend_failure_renders_error_panel() {
    let (state, backend) = test_state(sample_catalog());
    backend.fail_properties(true);

    let resp = handle(get("/properties?type=rent"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("load this right now"));
    assert!(body.contains(r#"href="/properties?type=rent""#));
}

#[test]
fn catalog_is_fetched_once_per_ttl() {
    let (state, backend) = test_state(sample_catalog());

    handle(get("/properties"), &state).unwrap();
    handle(get("/properties/results?type=sale"), &state).unwrap();
    handle(get("/"), &state).unwrap();

    assert_eq!(backend.property_calls(), 1);
}

#[test]
fn home_quick_search_filters_by_location() {
    let (state, _) = test_state(sample_catalog());

    let body = body_string(handle(get("/?location=patia&type=all"), &state).unwrap());
    assert!(body.contains("Search Results"));
    assert!(body.contains("Showing 1 of 4 properties"));
    assert!(body.contains("Sunny 2BHK Flat"));
}

#[test]
fn home_without_search_shows_featured_rail() {
    let (state, _) = test_state(sample_catalog());

    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains("Featured Listings"));
    assert!(body.contains("Sunny 2BHK Flat"));
    assert!(!body.contains("Family Home"));
}

#[test]
fn home_rail_keeps_catalog_filter_memoized() {
    let (state, _) = test_state(sample_catalog());

    handle(get("/properties?type=2BHK"), &state).unwrap();
    handle(get("/"), &state).unwrap();
    handle(get("/properties?type=2BHK"), &state).unwrap();

    assert_eq!(state.catalog.filter_runs(), 1);
}

#[test]
fn unknown_route_is_not_found() {
    let (state, _) = test_state(sample_catalog());

    let err = handle(get("/static/main.css"), &state).unwrap_err();
    assert_eq!(err.status(), 404);
}
