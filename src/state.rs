use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::auth::AdminSessions;
use crate::config::Config;
use crate::domain::{FilterCriteria, FilterMemo, PropertyRecord, RecordSet};
use crate::remote::{Backend, RemoteError, RequestTracker, Ticket};

/// Shared by every worker thread.
pub struct AppState {
    pub config: Config,
    pub backend: Arc<dyn Backend>,
    pub sessions: AdminSessions,
    pub catalog: CatalogCache,
}

impl AppState {
    pub fn new(config: Config, backend: Arc<dyn Backend>) -> Self {
        let catalog = CatalogCache::new(config.catalog_ttl);
        Self {
            config,
            backend,
            sessions: AdminSessions::new(),
            catalog,
        }
    }
}

#[derive(Debug, Default)]
struct CatalogInner {
    set: Option<RecordSet>,
    fetched_at: Option<Instant>,
    next_version: u64,
    memo: FilterMemo,
}

/// The last fetched listing set, shared by the catalog, home and detail pages.
pub struct CatalogCache {
    inner: Mutex<CatalogInner>,
    tracker: RequestTracker,
    ttl: Duration,
}

impl CatalogCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(CatalogInner::default()),
            tracker: RequestTracker::new(),
            ttl,
        }
    }

    fn inner(&self) -> MutexGuard<'_, CatalogInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn fresh(&self) -> Option<RecordSet> {
        let inner = self.inner();
        match (&inner.set, inner.fetched_at) {
            (Some(set), Some(at)) if at.elapsed() < self.ttl => Some(set.clone()),
            _ => None,
        }
    }

    /// Current records, refetching once the TTL has run out. When a refetch
    /// fails and an older set exists, the older set is served.
    pub fn records(&self, backend: &dyn Backend) -> Result<RecordSet, RemoteError> {
        if let Some(set) = self.fresh() {
            return Ok(set);
        }

        let ticket = self.begin_fetch();
        match backend.properties() {
            // Overtaken by a newer fetch: prefer whatever that one stored.
            Ok(records) => Ok(self.store(ticket, records).unwrap_or_else(|records| {
                self.inner()
                    .set
                    .clone()
                    .unwrap_or_else(|| RecordSet::provisional(records))
            })),
            Err(e) => {
                let stale = self.inner().set.clone();
                match stale {
                    Some(set) => {
                        warn!("Catalog refresh failed, serving version {}: {e}", set.version);
                        Ok(set)
                    }
                    None => Err(e),
                }
            }
        }
    }

    /// Stores a fetch result unless a newer fetch was issued after `ticket`.
    /// Hands the records back when the ticket has been overtaken.
    fn store(&self, ticket: Ticket, records: Vec<PropertyRecord>) -> Result<RecordSet, Vec<PropertyRecord>> {
        if !self.tracker.is_current(ticket) {
            debug!("Discarding stale catalog response ({} records)", records.len());
            return Err(records);
        }

        let mut inner = self.inner();
        inner.next_version += 1;
        let version = inner.next_version;
        info!("Catalog updated to version {version} ({} records)", records.len());
        let set = RecordSet::new(version, records);
        inner.set = Some(set.clone());
        inner.fetched_at = Some(Instant::now());
        Ok(set)
    }

    /// Issues a ticket for a fetch the caller performs itself.
    pub fn begin_fetch(&self) -> Ticket {
        self.tracker.issue()
    }

    pub fn filtered(&self, set: &RecordSet, criteria: &FilterCriteria) -> Arc<Vec<PropertyRecord>> {
        self.inner().memo.get(set, criteria)
    }

    /// Looks a record up in the cached set without touching the backend.
    /// Misses once the set has been invalidated by a write.
    pub fn find(&self, id: &str) -> Option<PropertyRecord> {
        let inner = self.inner();
        inner.fetched_at?;
        inner
            .set
            .as_ref()
            .and_then(|set| set.records.iter().find(|r| r.id == id).cloned())
    }

    /// Forces the next read to refetch. Until then `find` misses, so the
    /// detail page asks the backend.
    pub fn invalidate(&self) {
        self.inner().fetched_at = None;
    }

    #[cfg(test)]
    pub fn filter_runs(&self) -> u64 {
        self.inner().memo.misses()
    }
}
