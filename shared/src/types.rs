use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// User Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    Student,
    Instructor,
    Admin,
}

impl AccountType {
    /// Instructors sell courses; they never buy them.
    pub fn can_use_cart(&self) -> bool {
        !matches!(self, AccountType::Instructor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub account_type: AccountType,
    #[serde(default)]
    pub image: Option<String>,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

// ============================================================================
// Catalog Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Response body is not a JSON object")]
    NotAnObject,
    #[error("Response body has no `data` array")]
    MissingData,
    #[error("Category at index {0} has no string `name`")]
    InvalidCategory(usize),
}

/// Extracts the category list from a `{ "data": [ { "name": .. }, .. ] }` body.
///
/// The payload comes from outside the app, so every level is checked
/// instead of trusting a typed deserialize to fail cleanly.
pub fn parse_category_envelope(body: &str) -> Result<Vec<Category>, EnvelopeError> {
    let value: Value = serde_json::from_str(body)?;
    let object = value.as_object().ok_or(EnvelopeError::NotAnObject)?;
    let items = object
        .get("data")
        .and_then(Value::as_array)
        .ok_or(EnvelopeError::MissingData)?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let name = item
                .get("name")
                .and_then(Value::as_str)
                .ok_or(EnvelopeError::InvalidCategory(index))?;
            let description = item
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string);
            Ok(Category {
                name: name.to_string(),
                description,
            })
        })
        .collect()
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
