// src/domain/records.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub received_at: Option<DateTime<Utc>>,
}

/// New listings per month, as plotted on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthlySeries {
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}

impl MonthlySeries {
    /// Label/value pairs; surplus entries on either side are dropped.
    pub fn points(&self) -> impl Iterator<Item = (&str, u64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().copied())
    }

    pub fn peak(&self) -> u64 {
        self.points().map(|(_, v)| v).max().unwrap_or(0)
    }

    /// Bar height as a percentage of the tallest bar.
    pub fn percent_of_peak(&self, value: u64) -> u64 {
        match self.peak() {
            0 => 0,
            peak => u64::try_from(u128::from(value) * 100 / u128::from(peak)).unwrap_or(u64::MAX),
        }
    }
}
