pub mod card;
pub mod error;
pub mod fields;
pub mod filters;

pub use card::listing_card;
pub use error::{empty_results, error_panel};
pub use fields::{checkbox_field, field, notice, select_field, textarea_field, Notice};
pub use filters::filter_panel;
