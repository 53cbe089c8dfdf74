use std::io::Read;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use astra::{Body, Response};
use http::{Method, Request};

use crate::config::Config;
use crate::domain::forms::{ContactForm, ListingUpdate, NewProperty, UserUpdate};
use crate::domain::pricing::{Order, OrderRequest};
use crate::domain::property::{price_label, Category, PropertyRecord};
use crate::domain::records::{MessageRecord, MonthlySeries, Role, UserRecord};
use crate::remote::{Backend, RemoteError};
use crate::state::AppState;

/// A minimal listing: a sale flat in Bhubaneswar.
pub fn record(id: &str, price: u64, featured: bool) -> PropertyRecord {
    listing(id, &format!("Listing {id}"), "Bhubaneswar", price, Category::Sale, "2BHK", featured)
}

pub fn listing(
    id: &str,
    title: &str,
    location: &str,
    price: u64,
    category: Category,
    property_type: &str,
    featured: bool,
) -> PropertyRecord {
    PropertyRecord {
        id: id.to_string(),
        title: title.to_string(),
        price,
        price_label: price_label(price, category),
        location: location.to_string(),
        category,
        property_type: property_type.to_string(),
        featured,
        image: "/static/images/placeholder.png".to_string(),
        beds: None,
        baths: None,
        area: None,
        description: None,
    }
}

/// The catalog used by the router tests.
pub fn sample_catalog() -> Vec<PropertyRecord> {
    vec![
        listing("p1", "Sunny 2BHK Flat", "Patia", 15_000, Category::Rent, "2BHK", true),
        listing("p2", "Family Home", "Nayapalli", 4_500_000, Category::Sale, "3BHK", false),
        listing("p3", "Corner Plot", "Khandagiri", 1_200_000, Category::Sale, "Land", false),
        listing("p4", "Compact 2BHK", "Saheed Nagar", 9_000, Category::Rent, "2BHK", false),
    ]
}

fn offline() -> RemoteError {
    RemoteError::Network("connection refused".to_string())
}

/// In-memory backend with switchable failures and a log of what was sent.
#[derive(Default)]
pub struct StubBackend {
    records: Mutex<Vec<PropertyRecord>>,
    fail_properties: AtomicBool,
    fail_users: AtomicBool,
    fail_mutations: AtomicBool,
    property_calls: AtomicUsize,
    pub sent_messages: Mutex<Vec<ContactForm>>,
    pub submitted: Mutex<Vec<NewProperty>>,
    pub orders: Mutex<Vec<OrderRequest>>,
    pub deleted: Mutex<Vec<String>>,
    pub listing_updates: Mutex<Vec<(String, ListingUpdate)>>,
    pub user_updates: Mutex<Vec<(String, UserUpdate)>>,
}

impl StubBackend {
    pub fn with_records(records: Vec<PropertyRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn fail_properties(&self, fail: bool) {
        self.fail_properties.store(fail, Ordering::SeqCst);
    }

    pub fn fail_users(&self, fail: bool) {
        self.fail_users.store(fail, Ordering::SeqCst);
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    pub fn property_calls(&self) -> usize {
        self.property_calls.load(Ordering::SeqCst)
    }

    fn mutation(&self) -> Result<(), RemoteError> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            Err(RemoteError::Rejected("write refused".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Backend for StubBackend {
    fn properties(&self) -> Result<Vec<PropertyRecord>, RemoteError> {
        self.property_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_properties.load(Ordering::SeqCst) {
            return Err(offline());
        }
        Ok(self.records.lock().unwrap().clone())
    }

    fn property(&self, id: &str) -> Result<PropertyRecord, RemoteError> {
        if self.fail_properties.load(Ordering::SeqCst) {
            return Err(offline());
        }
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| RemoteError::NotFound(id.to_string()))
    }

    fn submit_property(&self, property: &NewProperty) -> Result<(), RemoteError> {
        self.mutation()?;
        self.submitted.lock().unwrap().push(property.clone());
        Ok(())
    }

    fn users(&self) -> Result<Vec<UserRecord>, RemoteError> {
        if self.fail_users.load(Ordering::SeqCst) {
            return Err(offline());
        }
        Ok(vec![UserRecord {
            id: "u1".to_string(),
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            role: Role::User,
        }])
    }

    fn admin_listings(&self) -> Result<Vec<PropertyRecord>, RemoteError> {
        Ok(self.records.lock().unwrap().clone())
    }

    fn messages(&self) -> Result<Vec<MessageRecord>, RemoteError> {
        Ok(vec![MessageRecord {
            id: "m1".to_string(),
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            subject: "Site visit".to_string(),
            body: "Is the Patia flat still available?".to_string(),
            received_at: None,
        }])
    }

    fn monthly_listings(&self) -> Result<MonthlySeries, RemoteError> {
        Ok(MonthlySeries {
            labels: vec!["Jan".to_string(), "Feb".to_string()],
            data: vec![4, 8],
        })
    }

    fn update_user(&self, id: &str, update: &UserUpdate) -> Result<(), RemoteError> {
        self.mutation()?;
        self.user_updates.lock().unwrap().push((id.to_string(), update.clone()));
        Ok(())
    }

    fn delete_user(&self, id: &str) -> Result<(), RemoteError> {
        self.mutation()?;
        self.deleted.lock().unwrap().push(format!("user:{id}"));
        Ok(())
    }

    fn update_listing(&self, id: &str, update: &ListingUpdate) -> Result<(), RemoteError> {
        self.mutation()?;
        self.listing_updates.lock().unwrap().push((id.to_string(), update.clone()));
        Ok(())
    }

    fn delete_listing(&self, id: &str) -> Result<(), RemoteError> {
        self.mutation()?;
        self.records.lock().unwrap().retain(|r| r.id != id);
        self.deleted.lock().unwrap().push(format!("listing:{id}"));
        Ok(())
    }

    fn send_message(&self, message: &ContactForm) -> Result<(), RemoteError> {
        self.mutation()?;
        self.sent_messages.lock().unwrap().push(message.clone());
        Ok(())
    }

    fn create_order(&self, order: &OrderRequest) -> Result<Order, RemoteError> {
        self.mutation()?;
        self.orders.lock().unwrap().push(order.clone());
        Ok(Order {
            id: "order_test_1".to_string(),
            amount: order.amount,
            currency: order.currency.clone(),
            receipt: Some(order.receipt.clone()),
        })
    }
}

/// App state over a stub backend; the stub stays reachable for assertions.
pub fn test_state(records: Vec<PropertyRecord>) -> (AppState, Arc<StubBackend>) {
    let backend = Arc::new(StubBackend::with_records(records));
    let state = AppState::new(Config::default(), backend.clone());
    (state, backend)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Logs in as the configured admin and returns the `Cookie` header value.
pub fn admin_cookie(state: &AppState) -> String {
    let token = state.sessions.create(chrono::Utc::now().timestamp());
    format!("{}={token}", crate::auth::SESSION_COOKIE)
}
