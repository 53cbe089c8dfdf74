use crate::router::handle;
use crate::tests::utils::{body_string, location, post_form, sample_catalog, test_state};

#[test]
fn contact_form_errors_are_shown_inline() {
    let (state, backend) = test_state(sample_catalog());

    let resp = handle(
        post_form("/contact", "name=&email=not-an-email&phone=123&subject=Hi&message=", None),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains("Name is required"));
    assert!(body.contains("Enter a valid email address"));
    assert!(body.contains("Enter valid 10-digit phone number"));
    assert!(backend.sent_messages.lock().unwrap().is_empty());
}

#[test]
fn contact_form_is_sent_upstream() {
    let (state, backend) = test_state(sample_catalog());

    let resp = handle(
        post_form(
            "/contact",
            "name=Ravi&email=ravi%40example.com&phone=&subject=Visit&message=Is+it+free%3F",
            None,
        ),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Thank you for your message!"));

    let sent = backend.sent_messages.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].message, "Is it free?");
    assert_eq!(sent[0].phone, None);
}

#[test]
fn contact_failure_keeps_the_form() {
    let (state, backend) = test_state(sample_catalog());
    backend.fail_mutations(true);

    let resp = handle(
        post_form("/contact", "name=Ravi&email=ravi%40example.com&message=Hello", None),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 502);
    let body = body_string(resp);
    assert!(body.contains("send your message"));
    assert!(body.contains(r#"value="Ravi""#));
}

#[test]
fn property_submission_validates_and_posts() {
    let (state, backend) = test_state(sample_catalog());

    let bad = handle(post_form("/submit-property", "title=&price=abc", None), &state).unwrap();
    assert_eq!(bad.status(), 422);
    assert!(body_string(bad).contains("Enter valid price"));

    let form = "title=Lake+view&location=Patia&price=25000&category=rent&property_type=&bedrooms=2\
                &owner_name=Mina&owner_phone=9876543210&owner_email=mina%40example.com\
                &image_urls=https%3A%2F%2Fimg.example.com%2F1.jpg%0Aftp%3A%2F%2Fbad";
    let ok = handle(post_form("/submit-property", form, None), &state).unwrap();
    assert_eq!(ok.status(), 200);

    let submitted = backend.submitted.lock().unwrap();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].property_type, "2BHK");
    assert_eq!(submitted[0].pictures, vec!["https://img.example.com/1.jpg".to_string()]);
}

#[test]
fn register_requires_matching_passwords_and_consent() {
    let (state, _) = test_state(sample_catalog());

    let resp = handle(
        post_form(
            "/register",
            "name=Mina&email=mina%40example.com&password=secret1&confirm_password=secret2",
            None,
        ),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains("Passwords do not match"));
    assert!(body.contains("Agree to Terms &amp; Privacy first"));
}

#[test]
fn customer_login_redirects_home() {
    let (state, _) = test_state(sample_catalog());

    let resp = handle(post_form("/login", "email=mina%40example.com&password=pw", None), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/");
}

#[test]
fn checkout_creates_order_in_paise() {
    let (state, backend) = test_state(sample_catalog());

    let resp = handle(post_form("/checkout", "plan=3-house", None), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("order_test_1"));
    assert!(body.contains("₹499.00"));

    let orders = backend.orders.lock().unwrap();
    assert_eq!(orders[0].amount, 49_900);
    assert_eq!(orders[0].currency, "INR");
    assert!(orders[0].receipt.starts_with("receipt_"));
}

#[test]
fn checkout_rejects_unknown_plan() {
    let (state, _) = test_state(sample_catalog());

    let err = handle(post_form("/checkout", "plan=gold", None), &state).unwrap_err();
    assert_eq!(err.status(), 400);
}
