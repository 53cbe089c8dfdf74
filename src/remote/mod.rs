mod client;
mod dashboard;
mod error;
pub mod models;
pub mod normalize;
mod state;

pub use client::HttpBackend;
pub use dashboard::{load_dashboard, DashboardData};
pub use error::RemoteError;
pub use state::{FetchState, RequestTracker, Ticket};

use crate::domain::forms::{ContactForm, ListingUpdate, NewProperty, UserUpdate};
use crate::domain::pricing::{Order, OrderRequest};
use crate::domain::property::PropertyRecord;
use crate::domain::records::{MessageRecord, MonthlySeries, UserRecord};

/// The listings backend as seen by the pages. Every call returns normalized
/// domain records or a `RemoteError`; none of them panic on bad payloads.
pub trait Backend: Send + Sync {
    fn properties(&self) -> Result<Vec<PropertyRecord>, RemoteError>;
    fn property(&self, id: &str) -> Result<PropertyRecord, RemoteError>;
    fn submit_property(&self, property: &NewProperty) -> Result<(), RemoteError>;

    fn users(&self) -> Result<Vec<UserRecord>, RemoteError>;
    fn admin_listings(&self) -> Result<Vec<PropertyRecord>, RemoteError>;
    fn messages(&self) -> Result<Vec<MessageRecord>, RemoteError>;
    fn monthly_listings(&self) -> Result<MonthlySeries, RemoteError>;

    fn update_user(&self, id: &str, update: &UserUpdate) -> Result<(), RemoteError>;
    fn delete_user(&self, id: &str) -> Result<(), RemoteError>;
    fn update_listing(&self, id: &str, update: &ListingUpdate) -> Result<(), RemoteError>;
    fn delete_listing(&self, id: &str) -> Result<(), RemoteError>;

    fn send_message(&self, message: &ContactForm) -> Result<(), RemoteError>;
    fn create_order(&self, order: &OrderRequest) -> Result<Order, RemoteError>;
}
