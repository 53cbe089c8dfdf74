// src/domain/property.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Listing category. Upstream data that names neither falls back to `Sale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Rent,
    Sale,
}

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Category::Rent => "rent",
            Category::Sale => "sale",
        }
    }

    /// Recognizes the spellings different endpoints use for the two categories.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "rent" | "for_rent" | "for rent" | "rental" | "lease" => Some(Category::Rent),
            "sale" | "for_sale" | "for sale" | "sell" | "buy" => Some(Category::Sale),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Rent => write!(f, "Rent"),
            Category::Sale => write!(f, "Sale"),
        }
    }
}

/// A listing as the rest of the app sees it, after the remote adapter has
/// flattened whatever shape the backend sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: String,
    pub title: String,
    /// Whole rupees.
    pub price: u64,
    pub price_label: String,
    pub location: String,
    pub category: Category,
    /// Open vocabulary: "1RK", "2BHK", "Land", ...
    pub property_type: String,
    pub featured: bool,
    pub image: String,

    // Display-only details
    pub beds: Option<u32>,
    pub baths: Option<u32>,
    pub area: Option<String>,
    pub description: Option<String>,
}

impl PropertyRecord {
    pub fn detail_href(&self) -> String {
        format!("/properties/{}", self.id)
    }

    pub fn badge(&self) -> String {
        format!("{} • {}", self.property_type, self.category)
    }
}

const LAKH: u64 = 100_000;
const CRORE: u64 = 100 * LAKH;

/// Builds the card price label: "₹6,500/mo" for rentals, "₹45L" / "₹1.2Cr"
/// for large sale prices.
pub fn price_label(price: u64, category: Category) -> String {
    match category {
        Category::Rent => format!("₹{}/mo", group_indian(price)),
        Category::Sale if price >= CRORE => format!("₹{}Cr", one_decimal(price, CRORE)),
        Category::Sale if price >= LAKH => format!("₹{}L", one_decimal(price, LAKH)),
        Category::Sale => format!("₹{}", group_indian(price)),
    }
}

fn one_decimal(value: u64, unit: u64) -> String {
    let tenths = value / unit * 10 + (value % unit * 10 + unit / 2) / unit;
    if tenths % 10 == 0 {
        format!("{}", tenths / 10)
    } else {
        format!("{}.{}", tenths / 10, tenths % 10)
    }
}

/// Indian digit grouping: last three digits, then pairs (12,34,567).
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
