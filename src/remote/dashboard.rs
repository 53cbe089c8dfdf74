use std::thread;

use tracing::{info, warn};

use crate::domain::property::PropertyRecord;
use crate::domain::records::{MessageRecord, MonthlySeries, UserRecord};
use crate::remote::{Backend, FetchState, RemoteError};

/// Everything the admin dashboard shows, one independent state per resource.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub users: FetchState<Vec<UserRecord>>,
    pub listings: FetchState<Vec<PropertyRecord>>,
    pub messages: FetchState<Vec<MessageRecord>>,
    pub monthly: FetchState<MonthlySeries>,
}

impl DashboardData {
    pub fn any_failed(&self) -> bool {
        self.users.error().is_some()
            || self.listings.error().is_some()
            || self.messages.error().is_some()
            || self.monthly.error().is_some()
    }
}

fn settle<T>(name: &str, joined: thread::Result<Result<T, RemoteError>>) -> FetchState<T> {
    match joined {
        Ok(result) => {
            if let Err(e) = &result {
                warn!("Dashboard {name} fetch failed: {e}");
            }
            FetchState::from_result(result)
        }
        Err(_) => {
            warn!("Dashboard {name} fetch panicked");
            FetchState::Failed(format!("{name} could not be loaded"))
        }
    }
}

/// Fetches the four dashboard resources concurrently. They complete in any
/// order and fail independently.
pub fn load_dashboard(backend: &dyn Backend) -> DashboardData {
    let data = thread::scope(|s| {
        let users = s.spawn(|| backend.users());
        let listings = s.spawn(|| backend.admin_listings());
        let messages = s.spawn(|| backend.messages());
        let monthly = s.spawn(|| backend.monthly_listings());

        DashboardData {
            users: settle("users", users.join()),
            listings: settle("listings", listings.join()),
            messages: settle("messages", messages.join()),
            monthly: settle("statistics", monthly.join()),
        }
    });

    if data.any_failed() {
        warn!("Dashboard loaded with missing sections");
    }
    info!(
        "Dashboard loaded (users: {}, listings: {}, messages: {})",
        data.users.ready().map_or(0, Vec::len),
        data.listings.ready().map_or(0, Vec::len),
        data.messages.ready().map_or(0, Vec::len),
    );

    data
}
