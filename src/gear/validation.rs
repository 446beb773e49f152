//! Field validation for gear inputs
//!
//! Schema-level guards that run before any aggregate is loaded. Every
//! failing field is reported; a single bad field does not hide the others.

use serde::{Deserialize, Serialize};

pub const GEAR_NAME_MIN_CHARS: usize = 3;
pub const GEAR_NAME_MAX_CHARS: usize = 30;
pub const GEAR_QUANTITY_MIN: i64 = 1;
pub const GEAR_QUANTITY_MAX: i64 = 99;

/// A user-facing validation failure addressed to one input field
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Check a gear label
pub fn validate_gear_name(name: &str) -> Option<FieldError> {
    let chars = name.chars().count();
    let message = if name.trim().is_empty() {
        "You must provide a label".to_string()
    } else if chars < GEAR_NAME_MIN_CHARS {
        format!("Gear name cannot be less than {} characters", GEAR_NAME_MIN_CHARS)
    } else if chars > GEAR_NAME_MAX_CHARS {
        format!("Gear name cannot be more than {} characters", GEAR_NAME_MAX_CHARS)
    } else {
        return None;
    };
    Some(FieldError::new("name", message))
}

/// Check a gear target quantity
pub fn validate_gear_quantity(quantity: i64) -> Option<FieldError> {
    if quantity < GEAR_QUANTITY_MIN {
        Some(FieldError::new(
            "quantity",
            format!("Quantity cannot be less than {}", GEAR_QUANTITY_MIN),
        ))
    } else if quantity > GEAR_QUANTITY_MAX {
        Some(FieldError::new(
            "quantity",
            format!("Quantity cannot be more than {}", GEAR_QUANTITY_MAX),
        ))
    } else {
        None
    }
}

/// Check an amount a user offers to bring
pub fn validate_volunteer_amount(amount: i64) -> Option<FieldError> {
    if amount < 1 {
        Some(FieldError::new(
            "volunteerAmount",
            "Volunteer amount must be at least 1",
        ))
    } else {
        None
    }
}

/// Validate a new gear record, collecting every failing field
pub fn validate_new_gear(name: &str, quantity: i64) -> Vec<FieldError> {
    [validate_gear_name(name), validate_gear_quantity(quantity)]
        .into_iter()
        .flatten()
        .collect()
}
