// src/auth/sessions.rs
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};

use crate::auth::token::{hash_token, hashes_equal, new_session_token};

pub const SESSION_COOKIE: &str = "admin_session";

/// Admin sessions live for 12 hours.
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 12;

/// In-memory admin sessions, keyed by token hash. Sessions do not survive a
/// restart.
#[derive(Debug, Default)]
pub struct AdminSessions {
    // token hash -> expires_at (unix seconds)
    live: Mutex<HashMap<[u8; 32], i64>>,
}

impl AdminSessions {
    pub fn new() -> Self {
        Self::default()
    }

    fn live(&self) -> MutexGuard<'_, HashMap<[u8; 32], i64>> {
        self.live.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Starts a session and returns the raw token for the cookie.
    pub fn create(&self, now: i64) -> String {
        let token = new_session_token();
        let mut live = self.live();
        live.retain(|_, expires_at| *expires_at > now);
        live.insert(hash_token(&token), now + SESSION_TTL_SECS);
        info!("Admin session created ({} live)", live.len());
        token
    }

    pub fn is_valid(&self, raw_token: &str, now: i64) -> bool {
        let hash = hash_token(raw_token);
        let mut live = self.live();
        match live.get(&hash) {
            Some(expires_at) if *expires_at > now => true,
            Some(_) => {
                debug!("Admin session expired");
                live.remove(&hash);
                false
            }
            None => false,
        }
    }

    pub fn revoke(&self, raw_token: &str) {
        if self.live().remove(&hash_token(raw_token)).is_some() {
            info!("Admin session revoked");
        }
    }
}

/// Checks submitted admin credentials against the configured pair.
pub fn credentials_match(expected_email: &str, expected_password: &str, email: &str, password: &str) -> bool {
    let email_ok = email.trim().eq_ignore_ascii_case(expected_email.trim());
    let password_ok = hashes_equal(&hash_token(password), &hash_token(expected_password));
    email_ok && password_ok
}

/// Pulls the admin token out of a `Cookie` header.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_TTL_SECS}")
}

pub fn cleared_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
