// client.rs
use std::time::{Duration, Instant};

use reqwest::blocking::{Client, RequestBuilder};
use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

use crate::domain::forms::{ContactForm, ListingUpdate, NewProperty, UserUpdate};
use crate::domain::pricing::{Order, OrderRequest};
use crate::domain::property::PropertyRecord;
use crate::domain::records::{MessageRecord, MonthlySeries, UserRecord};
use crate::remote::models::Envelope;
use crate::remote::{normalize, Backend, RemoteError};

const USER_AGENT: &str = concat!("amaghara-web/", env!("CARGO_PKG_VERSION"));

/// Talks to the listings REST backend over blocking HTTP.
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| RemoteError::Network(format!("invalid backend url {base_url}: {e}")))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Base URL plus path segments, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RemoteError::Network(format!("backend url cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a request and parses the JSON envelope, mapping transport and
    /// HTTP failures onto `RemoteError`.
    fn send(&self, label: &str, request: RequestBuilder) -> Result<Envelope, RemoteError> {
        let start = Instant::now();

        let resp = request.send().map_err(|e| {
            warn!("{label} failed after {:?}: {e}", start.elapsed());
            RemoteError::from(e)
        })?;

        let status = resp.status();
        let text = resp.text()?;

        if status == reqwest::StatusCode::NOT_FOUND {
            debug!("{label} -> 404 in {:?}", start.elapsed());
            return Err(RemoteError::NotFound(label.to_string()));
        }

        if !status.is_success() {
            warn!("{label} -> HTTP {status} in {:?}", start.elapsed());
            // Prefer the backend's own message when it sent an envelope.
            if let Ok(env) = Envelope::parse(&text) {
                if let Some(msg) = env.message {
                    return Err(RemoteError::Rejected(msg));
                }
            }
            return Err(RemoteError::Http {
                status: status.as_u16(),
                body: text.chars().take(200).collect(),
            });
        }

        debug!("{label} -> {status} in {:?}", start.elapsed());
        Envelope::parse(&text)
    }

    fn get(&self, segments: &[&str]) -> Result<Envelope, RemoteError> {
        let url = self.endpoint(segments)?;
        let label = format!("GET {}", url.path());
        self.send(&label, self.client.get(url))
    }

    fn send_json<B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        segments: &[&str],
        body: &B,
    ) -> Result<Envelope, RemoteError> {
        let url = self.endpoint(segments)?;
        let label = format!("{method} {}", url.path());
        let env = self.send(&label, self.client.request(method, url).json(body))?;
        env.ensure_success()?;
        info!("{label} ok");
        Ok(env)
    }

    fn delete(&self, segments: &[&str]) -> Result<(), RemoteError> {
        let url = self.endpoint(segments)?;
        let label = format!("DELETE {}", url.path());
        self.send(&label, self.client.delete(url))?.ensure_success()?;
        info!("{label} ok");
        Ok(())
    }
}

impl Backend for HttpBackend {
    fn properties(&self) -> Result<Vec<PropertyRecord>, RemoteError> {
        let items = self.get(&["property", "property"])?.into_list("properties")?;
        let records = normalize::properties(items);
        info!("Fetched {} properties", records.len());
        Ok(records)
    }

    fn property(&self, id: &str) -> Result<PropertyRecord, RemoteError> {
        let value = self.get(&["property", "property", id])?.into_payload("property")?;
        normalize::single_property(value)
    }

    fn submit_property(&self, property: &NewProperty) -> Result<(), RemoteError> {
        self.send_json(reqwest::Method::POST, &["property", "property"], property)?;
        Ok(())
    }

    fn users(&self) -> Result<Vec<UserRecord>, RemoteError> {
        let items = self.get(&["api", "admin", "users"])?.into_list("users")?;
        Ok(normalize::users(items))
    }

    fn admin_listings(&self) -> Result<Vec<PropertyRecord>, RemoteError> {
        let items = self.get(&["api", "admin", "listings"])?.into_list("listings")?;
        Ok(normalize::properties(items))
    }

    fn messages(&self) -> Result<Vec<MessageRecord>, RemoteError> {
        let items = self.get(&["api", "admin", "messages"])?.into_list("messages")?;
        Ok(normalize::messages(items))
    }

    fn monthly_listings(&self) -> Result<MonthlySeries, RemoteError> {
        let value = self
            .get(&["api", "admin", "statistics", "monthly-listings"])?
            .into_payload("statistics")?;
        normalize::series(value)
    }

    fn update_user(&self, id: &str, update: &UserUpdate) -> Result<(), RemoteError> {
        self.send_json(reqwest::Method::PUT, &["api", "admin", "users", id], update)?;
        Ok(())
    }

    fn delete_user(&self, id: &str) -> Result<(), RemoteError> {
        self.delete(&["api", "admin", "users", id])
    }

    fn update_listing(&self, id: &str, update: &ListingUpdate) -> Result<(), RemoteError> {
        self.send_json(reqwest::Method::PUT, &["api", "admin", "listings", id], update)?;
        Ok(())
    }

    fn delete_listing(&self, id: &str) -> Result<(), RemoteError> {
        self.delete(&["api", "admin", "listings", id])
    }

    fn send_message(&self, message: &ContactForm) -> Result<(), RemoteError> {
        self.send_json(reqwest::Method::POST, &["api", "contact"], message)?;
        Ok(())
    }

    fn create_order(&self, order: &OrderRequest) -> Result<Order, RemoteError> {
        let env = self.send_json(reqwest::Method::POST, &["api", "order"], order)?;
        normalize::order(env.into_payload("order")?)
    }
}
