use crate::router::handle;
use crate::tests::utils::{body_string, get, sample_catalog, test_state};

#[test]
fn detail_page_served_from_catalog_cache() {
    let (state, backend) = test_state(sample_catalog());

    handle(get("/properties"), &state).unwrap();
    backend.fail_properties(true);

    let resp = handle(get("/properties/p2"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Family Home"));
    assert!(body.contains("₹45L"));
}

#[test]
fn detail_page_fetches_by_id_without_cache() {
    let (state, _) = test_state(sample_catalog());

    let body = body_string(handle(get("/properties/p3"), &state).unwrap());
    assert!(body.contains("Corner Plot"));
}

#[test]
fn missing_property_is_not_found() {
    let (state, _) = test_state(sample_catalog());

    let err = handle(get("/properties/nope"), &state).unwrap_err();
    assert_eq!(err.status(), 404);
}

#[test]
fn unreachable_backend_gives_retryable_detail_page() {
    let (state, backend) = test_state(sample_catalog());
    backend.fail_properties(true);

    let resp = handle(get("/properties/p1"), &state).unwrap();
    assert_eq!(resp.status(), 502);
    let body = body_string(resp);
    assert!(body.contains(r#"href="/properties/p1""#));
}
