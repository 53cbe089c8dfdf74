// src/domain/forms.rs

use crate::domain::property::Category;
use crate::domain::records::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::{Validate, ValidationError, ValidationErrors};

/// Field name -> first failing message, in a stable order for rendering.
pub type FieldErrors = BTreeMap<String, String>;

/// Flattens validator output into one message per field.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let first = errs.first()?;
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));
            Some((field.to_string(), message))
        })
        .collect()
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let phone = phone.trim();
    if phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(invalid("phone", "Enter valid 10-digit phone number"))
    }
}

fn validate_price(price: &str) -> Result<(), ValidationError> {
    match price.trim().parse::<u64>() {
        Ok(p) if p > 0 => Ok(()),
        _ => Err(invalid("price", "Enter valid price")),
    }
}

fn validate_category(category: &str) -> Result<(), ValidationError> {
    Category::parse(category)
        .map(|_| ())
        .ok_or_else(|| invalid("category", "Choose rent or sale"))
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,

    pub subject: String,

    #[validate(length(min = 1, max = 2000, message = "Message is required"))]
    pub message: String,
}

impl ContactForm {
    /// Empty optional inputs arrive as "" from the browser.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.phone = self.phone.filter(|p| !p.trim().is_empty());
        self.message = self.message.trim().to_string();
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct SubmitPropertyForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    #[validate(custom = "validate_price")]
    pub price: String,

    #[validate(custom = "validate_category")]
    pub category: String,

    pub property_type: String,

    pub description: String,

    pub bedrooms: String,

    pub bathrooms: String,

    pub area: String,

    #[validate(length(min = 1, message = "Owner name is required"))]
    pub owner_name: String,

    #[validate(custom = "validate_phone")]
    pub owner_phone: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub owner_email: String,

    /// One URL per line; images themselves are hosted elsewhere.
    pub image_urls: String,
}

/// Payload sent to the backend for a new listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: u64,
    pub category: Category,
    #[serde(rename = "type")]
    pub property_type: String,
    pub bhk: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area: Option<String>,
    pub location: String,
    pub contact_name: String,
    pub contact_number: String,
    pub contact_email: String,
    pub pictures: Vec<String>,
}

impl SubmitPropertyForm {
    /// Validates and converts into the backend payload.
    pub fn into_new_property(self) -> Result<NewProperty, FieldErrors> {
        self.validate().map_err(|e| field_errors(&e))?;

        let price = self.price.trim().parse().unwrap_or_default();
        let category = Category::parse(&self.category).unwrap_or(Category::Sale);
        let bhk = self.bedrooms.trim().parse().ok();
        let property_type = match self.property_type.trim() {
            "" => bhk.map(|n| format!("{n}BHK")).unwrap_or_else(|| "Land".to_string()),
            t => t.to_string(),
        };

        Ok(NewProperty {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            category,
            property_type,
            bhk,
            bathrooms: self.bathrooms.trim().parse().ok(),
            area: Some(self.area.trim().to_string()).filter(|a| !a.is_empty()),
            location: self.location.trim().to_string(),
            contact_name: self.owner_name.trim().to_string(),
            contact_number: self.owner_phone.trim().to_string(),
            contact_email: self.owner_email.trim().to_string(),
            pictures: self
                .image_urls
                .lines()
                .map(str::trim)
                .filter(|l| l.starts_with("http://") || l.starts_with("https://"))
                .map(str::to_string)
                .collect(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,

    /// Checkbox: present ("on") only when ticked.
    pub agreed: Option<String>,
}

impl RegisterForm {
    pub fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => field_errors(&e),
        };
        if self.agreed.is_none() {
            errors.insert(
                "agreed".to_string(),
                "Agree to Terms & Privacy first".to_string(),
            );
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Admin edits to a listing row.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ListingUpdateForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(custom = "validate_price")]
    pub price: String,

    pub location: String,

    pub featured: Option<String>,
}

/// Listing fields the back office can change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingUpdate {
    pub title: String,
    pub price: u64,
    pub location: String,
    pub featured: bool,
}

impl ListingUpdateForm {
    pub fn into_update(self) -> Result<ListingUpdate, FieldErrors> {
        self.validate().map_err(|e| field_errors(&e))?;
        Ok(ListingUpdate {
            title: self.title.trim().to_string(),
            price: self.price.trim().parse().unwrap_or_default(),
            location: self.location.trim().to_string(),
            featured: self.featured.is_some(),
        })
    }
}

/// Admin edits to a user row.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct UserUpdateForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UserUpdateForm {
    pub fn into_update(self) -> Result<UserUpdate, FieldErrors> {
        self.validate().map_err(|e| field_errors(&e))?;
        Ok(UserUpdate {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: Role::parse(&self.role),
        })
    }
}

/// Plan picked on the pricing page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub plan: String,
}
