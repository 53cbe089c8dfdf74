// src/domain/pricing.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Whole rupees.
    pub price: u64,
    pub house_visits: u32,
    pub popular: bool,
    pub features: &'static [&'static str],
}

pub const PLANS: &[Plan] = &[
    Plan {
        id: "one-time",
        name: "One-Time Visit",
        description: "Perfect for limited customers",
        price: 99,
        house_visits: 1,
        popular: false,
        features: &[
            "Single property visit",
            "Basic property details",
            "Owner contact information",
            "Location details",
        ],
    },
    Plan {
        id: "3-house",
        name: "3 House Plan",
        description: "Visit 3 houses",
        price: 499,
        house_visits: 3,
        popular: true,
        features: &[
            "3 house visits included",
            "Priority customer support",
            "Direct owner contact",
            "Virtual tour access",
        ],
    },
    Plan {
        id: "6-house",
        name: "6 House Plan",
        description: "Visit 6 houses",
        price: 799,
        house_visits: 6,
        popular: false,
        features: &[
            "6 house visits included",
            "Site visit scheduling",
            "Legal document assistance",
            "Negotiation support",
        ],
    },
    Plan {
        id: "9-house",
        name: "9 House Plan",
        description: "Visit 9 houses",
        price: 999,
        house_visits: 9,
        popular: false,
        features: &[
            "9 house visits included",
            "24/7 dedicated support",
            "Custom property alerts",
            "Document verification support",
        ],
    },
];

pub fn find_plan(id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.id == id)
}

/// Order request for the payment backend. Amounts are in paise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    pub amount: u64,
    pub currency: String,
    pub receipt: String,
}

impl OrderRequest {
    pub fn for_plan(plan: &Plan, now: DateTime<Utc>) -> Self {
        Self {
            amount: plan.price * 100,
            currency: "INR".to_string(),
            receipt: format!("receipt_{}", now.timestamp_millis()),
        }
    }
}

/// Order created by the payment backend, handed to the checkout page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    /// Paise.
    pub amount: u64,
    pub currency: String,
    pub receipt: Option<String>,
}

impl Order {
    pub fn amount_label(&self) -> String {
        format!("₹{}.{:02}", self.amount / 100, self.amount % 100)
    }
}
