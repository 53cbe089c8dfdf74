pub mod criteria;
pub mod filter;
pub mod forms;
pub mod memo;
pub mod pricing;
pub mod property;
pub mod records;
pub mod url_sync;

pub use criteria::{FilterCriteria, SortOrder, TabKey};
pub use filter::{featured_rail, filter_listings, ListingCounts};
pub use memo::{FilterMemo, RecordSet};
pub use property::{Category, PropertyRecord};
pub use url_sync::seed_criteria;
