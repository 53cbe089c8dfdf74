use serde::Deserialize;
use serde_json::{Map, Value};

use crate::remote::RemoteError;

// Raw backend shapes. Different endpoints disagree on field names and on
// whether numbers are numbers or strings, so almost everything is optional
// and loosely typed here; `normalize` turns these into domain records.
//
// envelope
//  ├── success
//  ├── message
//  └── <resource>  (properties | property | users | listings | messages | statistics | order)
//
// property
//  ├── id | _id | propertyId
//  ├── title
//  ├── price                   (number or numeric string)
//  ├── location                (string, or {address, locality, city, state, zipCode})
//  ├── category | listingType | purpose
//  ├── type | bhk | propertyType
//  ├── images[] | pictures[] | image | img
//  └── featured

#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Envelope {
    /// Parses a response body. A body that is not a JSON object is a shape error.
    pub fn parse(body: &str) -> Result<Self, RemoteError> {
        serde_json::from_str(body).map_err(|e| RemoteError::JsonParse(e.to_string()))
    }

    /// Fails unless the backend reported success.
    pub fn ensure_success(&self) -> Result<(), RemoteError> {
        if self.success {
            Ok(())
        } else {
            Err(RemoteError::Rejected(
                self.message
                    .clone()
                    .unwrap_or_else(|| "request was not successful".to_string()),
            ))
        }
    }

    /// Takes `<resource>` out of a successful envelope, falling back to `data`.
    pub fn into_payload(mut self, resource: &str) -> Result<Value, RemoteError> {
        self.ensure_success()?;
        self.rest
            .remove(resource)
            .or_else(|| self.rest.remove("data"))
            .filter(|v| !v.is_null())
            .ok_or_else(|| RemoteError::UnexpectedShape(format!("{resource} missing")))
    }

    /// Payload that must be a JSON array.
    pub fn into_list(self, resource: &str) -> Result<Vec<Value>, RemoteError> {
        match self.into_payload(resource)? {
            Value::Array(items) => Ok(items),
            other => Err(RemoteError::UnexpectedShape(format!(
                "{resource} is not a list: {}",
                type_name(&other)
            ))),
        }
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A number that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Numeric {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Numeric::Int(n) => u64::try_from(*n).ok(),
            Numeric::Float(f) if f.is_finite() && *f >= 0.0 => Some(f.round() as u64),
            Numeric::Float(_) => None,
            Numeric::Text(s) => {
                let cleaned: String = s
                    .trim()
                    .chars()
                    .filter(|c| *c != ',' && *c != '₹' && !c.is_whitespace())
                    .collect();
                cleaned
                    .parse::<u64>()
                    .ok()
                    .or_else(|| Numeric::Float(cleaned.parse().ok()?).as_u64())
            }
        }
    }
}

/// Identifiers: strings, integers, or Mongo-style `{"$oid": "..."}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Int(i64),
    Oid {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

impl RawId {
    pub fn into_string(self) -> Option<String> {
        let id = match self {
            RawId::Text(s) => s.trim().to_string(),
            RawId::Int(n) => n.to_string(),
            RawId::Oid { oid } => oid.trim().to_string(),
        };
        Some(id).filter(|s| !s.is_empty())
    }
}

/// Booleans sometimes come back as "true"/"1".
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Flag {
    pub fn is_set(&self) -> bool {
        match self {
            Flag::Bool(b) => *b,
            Flag::Int(n) => *n != 0,
            Flag::Text(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawLocation {
    Text(String),
    Parts(LocationParts),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationParts {
    pub address: Option<String>,
    pub locality: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawImage {
    Url(String),
    Object {
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        secure_url: Option<String>,
    },
}

impl RawImage {
    pub fn url(&self) -> Option<&str> {
        let url = match self {
            RawImage::Url(u) => Some(u.as_str()),
            RawImage::Object { url, secure_url } => url.as_deref().or(secure_url.as_deref()),
        };
        url.map(str::trim).filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawArea {
    Text(String),
    Number(f64),
    Measure {
        #[serde(default)]
        value: Option<Numeric>,
        #[serde(default)]
        unit: Option<String>,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProperty {
    pub id: Option<RawId>,
    #[serde(rename = "_id")]
    pub mongo_id: Option<RawId>,
    pub property_id: Option<RawId>,

    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Numeric>,
    pub location: Option<RawLocation>,

    pub category: Option<String>,
    pub listing_type: Option<String>,
    pub purpose: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub property_type: Option<String>,
    pub bhk: Option<Numeric>,

    #[serde(alias = "beds")]
    pub bedrooms: Option<Numeric>,
    #[serde(alias = "baths")]
    pub bathrooms: Option<Numeric>,
    pub area: Option<RawArea>,
    pub super_builtup_area: Option<RawArea>,

    pub featured: Option<Flag>,

    pub images: Option<Vec<RawImage>>,
    pub pictures: Option<Vec<String>>,
    pub image: Option<String>,
    pub img: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawUser {
    pub id: Option<RawId>,
    #[serde(rename = "_id")]
    pub mongo_id: Option<RawId>,
    #[serde(alias = "fullName", alias = "username")]
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub is_admin: Option<Flag>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMessage {
    pub id: Option<RawId>,
    #[serde(rename = "_id")]
    pub mongo_id: Option<RawId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    #[serde(alias = "body")]
    pub message: Option<String>,
    #[serde(alias = "date", alias = "receivedAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSeries {
    pub labels: Vec<String>,
    pub data: Vec<Numeric>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOrder {
    pub id: Option<RawId>,
    pub amount: Option<Numeric>,
    pub currency: Option<String>,
    pub receipt: Option<String>,
}
