use std::sync::atomic::{AtomicU64, Ordering};

use crate::remote::RemoteError;

/// What a page knows about one remote resource.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Pages are rendered after their fetches settle, so a server-rendered
    /// page never carries this state. Templates still give it a placeholder.
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<T, RemoteError>) -> Self {
        match result {
            Ok(v) => FetchState::Ready(v),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Ticket handed out when a request for a resource is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Orders requests for one resource so a slow, older response can be
/// recognized and dropped once a newer request has been issued.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// True if no request was issued after `ticket`.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}
