use crate::router::handle;
use crate::tests::utils::{
    admin_cookie, body_string, get, get_with_cookie, location, post_form, sample_catalog, test_state,
};

#[test]
fn dashboard_requires_admin_session() {
    let (state, _) = test_state(sample_catalog());

    let resp = handle(get("/dashboard"), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/admin");

    let forged = handle(get_with_cookie("/dashboard", "admin_session=forged"), &state).unwrap();
    assert_eq!(forged.status(), 302);
}

#[test]
fn admin_login_sets_session_cookie() {
    let (state, _) = test_state(sample_catalog());

    let resp = handle(
        post_form("/admin", "email=admin%40example.com&password=admin123", None),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/dashboard");

    let cookie = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("admin_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));

    let pair = cookie.split(';').next().unwrap();
    let dashboard = handle(get_with_cookie("/dashboard", pair), &state).unwrap();
    assert_eq!(dashboard.status(), 200);
}

#[test]
fn wrong_admin_password_is_rejected() {
    let (state, _) = test_state(sample_catalog());

    let resp = handle(post_form("/admin", "email=admin%40example.com&password=guess", None), &state).unwrap();
    assert_eq!(resp.status(), 401);
    assert!(body_string(resp).contains("Invalid email or password"));
}

#[test]
fn dashboard_lists_all_resources() {
    let (state, _) = test_state(sample_catalog());
    let cookie = admin_cookie(&state);

    let resp = handle(get_with_cookie("/dashboard", &cookie), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Admin Dashboard"));
    assert!(body.contains("asha@example.com"));
    assert!(body.contains("Corner Plot"));
    assert!(body.contains("Is the Patia flat still available?"));
    assert!(body.contains("height: 50%"));
    assert!(body.contains("height: 100%"));
}

#[test]
fn one_failed_resource_does_not_hide_the_others() {
    let (state, backend) = test_state(sample_catalog());
    backend.fail_users(true);
    let cookie = admin_cookie(&state);

    let body = body_string(handle(get_with_cookie("/dashboard", &cookie), &state).unwrap());
    assert!(body.contains("load this right now"));
    assert!(body.contains("Corner Plot"));
    assert!(body.contains("Site visit"));
}

#[test]
fn admin_updates_listing() {
    let (state, backend) = test_state(sample_catalog());
    let cookie = admin_cookie(&state);

    let resp = handle(
        post_form(
            "/dashboard/listings/p2",
            "title=Family+Home&price=4200000&location=Nayapalli&featured=on",
            Some(&cookie),
        ),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/dashboard?done=listing-updated");

    let updates = backend.listing_updates.lock().unwrap();
    assert_eq!(updates[0].0, "p2");
    assert_eq!(updates[0].1.price, 4_200_000);
    assert!(updates[0].1.featured);
}

#[test]
fn invalid_listing_update_is_not_sent() {
    let (state, backend) = test_state(sample_catalog());
    let cookie = admin_cookie(&state);

    let resp = handle(
        post_form("/dashboard/listings/p2", "title=&price=0", Some(&cookie)),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 422);
    assert!(backend.listing_updates.lock().unwrap().is_empty());
}

#[test]
fn admin_deletes_user_and_listing() {
    let (state, backend) = test_state(sample_catalog());
    let cookie = admin_cookie(&state);

    handle(post_form("/dashboard/users/u1/delete", "", Some(&cookie)), &state).unwrap();
    handle(post_form("/dashboard/listings/p3/delete", "", Some(&cookie)), &state).unwrap();

    let deleted = backend.deleted.lock().unwrap();
    assert_eq!(*deleted, vec!["user:u1".to_string(), "listing:p3".to_string()]);
}

#[test]
fn deleted_listing_detail_is_not_served_from_cache() {
    let (state, _) = test_state(sample_catalog());
    let cookie = admin_cookie(&state);

    let before = handle(get("/properties/p2"), &state).unwrap();
    assert_eq!(before.status(), 200);
    handle(get("/properties"), &state).unwrap();

    let resp = handle(post_form("/dashboard/listings/p2/delete", "", Some(&cookie)), &state).unwrap();
    assert_eq!(resp.status(), 302);

    let err = handle(get("/properties/p2"), &state).unwrap_err();
    assert_eq!(err.status(), 404);

    let catalog = body_string(handle(get("/properties"), &state).unwrap());
    assert!(!catalog.contains("Family Home"));
}

#[test]
fn mutations_without_session_are_refused() {
    let (state, backend) = test_state(sample_catalog());

    let resp = handle(post_form("/dashboard/users/u1/delete", "", None), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert!(backend.deleted.lock().unwrap().is_empty());
}

#[test]
fn failed_mutation_maps_to_bad_gateway() {
    let (state, backend) = test_state(sample_catalog());
    backend.fail_mutations(true);
    let cookie = admin_cookie(&state);

    let err = handle(post_form("/dashboard/users/u1/delete", "", Some(&cookie)), &state).unwrap_err();
    assert_eq!(err.status(), 502);
}

#[test]
fn logout_revokes_session() {
    let (state, _) = test_state(sample_catalog());
    let cookie = admin_cookie(&state);

    let resp = handle(post_form("/admin/logout", "", Some(&cookie)), &state).unwrap();
    assert_eq!(location(&resp), "/admin");

    let after = handle(get_with_cookie("/dashboard", &cookie), &state).unwrap();
    assert_eq!(after.status(), 302);
}
