//! Input validation for mutation arguments.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ShopError};

/// Maximum allowed length for any single text argument.
pub const MAX_TEXT_LENGTH: usize = 2_000;

/// Smallest quantity an order line may carry.
pub const MIN_QUANTITY: i32 = 1;

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("decimal pattern compiles"));

/// Validates a required text argument.
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShopError::Validation(format!("{} cannot be empty", field)));
    }
    validate_length(field, value)
}

/// Validates an optional text argument. Absent values always pass.
pub fn validate_optional(field: &str, value: Option<&str>) -> Result<()> {
    value.map_or(Ok(()), |v| validate_length(field, v))
}

fn validate_length(field: &str, value: &str) -> Result<()> {
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(ShopError::Validation(format!(
            "{} exceeds maximum length of {} characters",
            field, MAX_TEXT_LENGTH
        )));
    }
    Ok(())
}

/// Validates an email address. Only the shape is checked.
pub fn validate_email(email: &str) -> Result<()> {
    validate_required("email", email)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ShopError::Validation(format!(
            "email '{}' is not a valid address",
            email
        ))),
    }
}

/// Validates a money amount given as a decimal literal.
pub fn validate_decimal(field: &str, value: &str) -> Result<()> {
    validate_required(field, value)?;
    if !DECIMAL.is_match(value) {
        return Err(ShopError::Validation(format!(
            "{} must be a decimal number like 19.99, got '{}'",
            field, value
        )));
    }
    Ok(())
}

/// Validates an order line quantity.
pub fn validate_quantity(quantity: i32) -> Result<()> {
    if quantity < MIN_QUANTITY {
        return Err(ShopError::Validation(format!(
            "quantity must be at least {}, got {}",
            MIN_QUANTITY, quantity
        )));
    }
    Ok(())
}
