pub mod account;
pub mod admin;
pub mod contact;
pub mod dashboard;
pub mod error;
pub mod home;
pub mod pricing;
pub mod properties;
pub mod property;
pub mod submit;

pub use account::{login_page, register_page};
pub use admin::admin_login_page;
pub use contact::contact_page;
pub use dashboard::dashboard_page;
pub use error::error_page;
pub use home::{home_page, HomeView};
pub use pricing::{checkout_page, pricing_page};
pub use properties::{catalog_page, results_fragment, CatalogResults};
pub use property::{property_page, property_unavailable_page};
pub use submit::submit_property_page;
