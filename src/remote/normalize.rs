use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::domain::pricing::Order;
use crate::domain::property::{price_label, Category, PropertyRecord};
use crate::domain::records::{MessageRecord, MonthlySeries, Role, UserRecord};
use crate::remote::models::{
    Numeric, RawArea, RawId, RawLocation, RawMessage, RawOrder, RawProperty, RawSeries, RawUser,
};
use crate::remote::RemoteError;

pub const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.png";

/// Decodes each item on its own so one malformed entry does not sink the list.
fn decode_each<T: DeserializeOwned>(items: Vec<Value>, what: &str) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| match serde_json::from_value(v) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping {what} #{i}: {e}");
                None
            }
        })
        .collect()
}

fn first_id(candidates: [Option<RawId>; 3]) -> Option<String> {
    candidates.into_iter().flatten().find_map(RawId::into_string)
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Normalizes a property list. Records without an id are dropped, and a
/// repeated id keeps its first occurrence.
pub fn properties(items: Vec<Value>) -> Vec<PropertyRecord> {
    let mut seen = HashSet::new();
    decode_each::<RawProperty>(items, "property")
        .into_iter()
        .filter_map(property)
        .filter(|r| {
            let fresh = seen.insert(r.id.clone());
            if !fresh {
                warn!("Duplicate property id {}, keeping first", r.id);
            }
            fresh
        })
        .collect()
}

pub fn single_property(value: Value) -> Result<PropertyRecord, RemoteError> {
    let raw: RawProperty =
        serde_json::from_value(value).map_err(|e| RemoteError::UnexpectedShape(e.to_string()))?;
    property(raw).ok_or_else(|| RemoteError::UnexpectedShape("property has no id".to_string()))
}

/// Maps one raw property onto the canonical record.
pub fn property(mut raw: RawProperty) -> Option<PropertyRecord> {
    let Some(id) = first_id([raw.id.take(), raw.mongo_id.take(), raw.property_id.take()]) else {
        warn!("Dropping property without id: {:?}", raw.title);
        return None;
    };

    let category = [&raw.category, &raw.listing_type, &raw.purpose]
        .into_iter()
        .flatten()
        .find_map(|c| Category::parse(c))
        .unwrap_or(Category::Sale);

    let price = raw.price.as_ref().and_then(Numeric::as_u64).unwrap_or(0);
    let beds = raw
        .bedrooms
        .as_ref()
        .or(raw.bhk.as_ref())
        .and_then(Numeric::as_u64)
        .and_then(|n| u32::try_from(n).ok());

    let property_type = property_type(&raw);

    let image = raw
        .images
        .iter()
        .flatten()
        .find_map(|img| img.url().map(str::to_string))
        .or_else(|| {
            raw.pictures
                .iter()
                .flatten()
                .map(|p| p.trim())
                .find(|p| !p.is_empty())
                .map(str::to_string)
        })
        .or_else(|| non_empty(raw.image.clone()))
        .or_else(|| non_empty(raw.img.clone()))
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    Some(PropertyRecord {
        id,
        title: non_empty(raw.title).unwrap_or_else(|| "Untitled property".to_string()),
        price,
        price_label: price_label(price, category),
        location: raw.location.map(location_text).unwrap_or_default(),
        category,
        property_type,
        featured: raw.featured.map(|f| f.is_set()).unwrap_or(false),
        image,
        beds,
        baths: raw
            .bathrooms
            .as_ref()
            .and_then(Numeric::as_u64)
            .and_then(|n| u32::try_from(n).ok()),
        area: raw.area.or(raw.super_builtup_area).and_then(area_text),
        description: non_empty(raw.description),
    })
}

/// `type` wins, then a bedroom count, then a land-ish `propertyType`.
fn property_type(raw: &RawProperty) -> String {
    if let Some(t) = raw.kind.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        if t.eq_ignore_ascii_case("land") {
            return "Land".to_string();
        }
        return t.to_string();
    }
    if let Some(n) = raw.bhk.as_ref().and_then(Numeric::as_u64).filter(|n| *n > 0) {
        return format!("{n}BHK");
    }
    match raw.property_type.as_deref().map(str::trim) {
        Some(pt) if pt.to_ascii_lowercase().contains("land") || pt.to_ascii_lowercase().contains("plot") => {
            "Land".to_string()
        }
        Some(pt) if !pt.is_empty() => pt.to_string(),
        _ => "Other".to_string(),
    }
}

/// Joins whichever address parts are present: "Patia, Bhubaneswar".
fn location_text(loc: RawLocation) -> String {
    match loc {
        RawLocation::Text(s) => s.trim().to_string(),
        RawLocation::Parts(p) => [p.address, p.locality, p.city, p.state]
            .into_iter()
            .filter_map(non_empty)
            .fold(Vec::<String>::new(), |mut acc, part| {
                if !acc.iter().any(|a| a.eq_ignore_ascii_case(&part)) {
                    acc.push(part);
                }
                acc
            })
            .join(", "),
    }
}

fn area_text(area: RawArea) -> Option<String> {
    match area {
        RawArea::Text(s) => non_empty(Some(s)),
        RawArea::Number(n) if n > 0.0 => Some(format!("{} sqft", n.round() as u64)),
        RawArea::Number(_) => None,
        RawArea::Measure { value, unit } => {
            let v = value.as_ref().and_then(Numeric::as_u64).filter(|v| *v > 0)?;
            Some(format!("{v} {}", non_empty(unit).unwrap_or_else(|| "sqft".to_string())))
        }
    }
}

pub fn users(items: Vec<Value>) -> Vec<UserRecord> {
    decode_each::<RawUser>(items, "user")
        .into_iter()
        .filter_map(|raw| {
            let id = first_id([raw.id, raw.mongo_id, None])?;
            let role = match (raw.role.as_deref(), raw.is_admin.as_ref()) {
                (Some(r), _) => Role::parse(r),
                (None, Some(flag)) if flag.is_set() => Role::Admin,
                _ => Role::User,
            };
            Some(UserRecord {
                id,
                name: non_empty(raw.name).unwrap_or_default(),
                email: non_empty(raw.email).unwrap_or_default(),
                role,
            })
        })
        .collect()
}

pub fn messages(items: Vec<Value>) -> Vec<MessageRecord> {
    decode_each::<RawMessage>(items, "message")
        .into_iter()
        .filter_map(|raw| {
            Some(MessageRecord {
                id: first_id([raw.id, raw.mongo_id, None])?,
                name: non_empty(raw.name).unwrap_or_default(),
                email: non_empty(raw.email).unwrap_or_default(),
                subject: non_empty(raw.subject).unwrap_or_default(),
                body: non_empty(raw.message).unwrap_or_default(),
                received_at: raw.created_at.as_deref().and_then(parse_timestamp),
            })
        })
        .collect()
}

/// Accepts RFC 3339, "YYYY-MM-DD HH:MM:SS" and bare dates.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|n| n.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|n| n.and_utc())
        })
}

pub fn series(value: Value) -> Result<MonthlySeries, RemoteError> {
    let raw: RawSeries =
        serde_json::from_value(value).map_err(|e| RemoteError::UnexpectedShape(e.to_string()))?;
    Ok(MonthlySeries {
        labels: raw.labels,
        data: raw
            .data
            .iter()
            .map(|n| n.as_u64().unwrap_or(0))
            .collect(),
    })
}

pub fn order(value: Value) -> Result<Order, RemoteError> {
    let raw: RawOrder =
        serde_json::from_value(value).map_err(|e| RemoteError::UnexpectedShape(e.to_string()))?;
    let id = raw
        .id
        .and_then(RawId::into_string)
        .ok_or_else(|| RemoteError::UnexpectedShape("order has no id".to_string()))?;
    Ok(Order {
        id,
        amount: raw.amount.as_ref().and_then(Numeric::as_u64).unwrap_or(0),
        currency: non_empty(raw.currency).unwrap_or_else(|| "INR".to_string()),
        receipt: non_empty(raw.receipt),
    })
}
