//! Field validators shared by the write DTOs.
//!
//! The functions with a `ValidationError` return type plug into
//! `#[validate(custom(function = ...))]` attributes.

use std::borrow::Cow;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use validator::{ValidateEmail, ValidationError, ValidationErrors};

use crate::review::{is_valid_rating, MAX_RATING, MIN_RATING};

/// Reject negative money or hour amounts.
pub fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("non_negative")
            .with_message(Cow::Borrowed("Must be zero or greater")));
    }
    Ok(())
}

/// Largest money amount a `NUMERIC(10,2)` column holds, exclusive.
const MONEY_LIMIT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// Largest hour count a `NUMERIC(8,2)` column holds, exclusive.
const HOURS_LIMIT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

fn below(value: &Decimal, limit: Decimal) -> Result<(), ValidationError> {
    // The column rounds to two places before checking its precision.
    if value.round_dp(2).abs() >= limit {
        return Err(ValidationError::new("max_amount")
            .with_message(Cow::Owned(format!("Must be less than {limit}"))));
    }
    Ok(())
}

/// Non-negative amount that fits a budget or price column.
pub fn money_amount(value: &Decimal) -> Result<(), ValidationError> {
    non_negative(value)?;
    below(value, MONEY_LIMIT)
}

/// Non-negative amount that fits the hours-spent column.
pub fn hours_amount(value: &Decimal) -> Result<(), ValidationError> {
    non_negative(value)?;
    below(value, HOURS_LIMIT)
}

/// Accept an empty string or a well-formed email address.
pub fn optional_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        return Ok(());
    }
    Err(ValidationError::new("email").with_message(Cow::Borrowed("Enter a valid email address")))
}

/// Reject strings that are empty once surrounding whitespace is removed.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("This field may not be blank")));
    }
    Ok(())
}

/// Reject review ratings outside the 1..=5 scale.
pub fn rating_in_range(rating: i16) -> Result<(), ValidationError> {
    if !is_valid_rating(rating) {
        return Err(ValidationError::new("range").with_message(Cow::Owned(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}"
        ))));
    }
    Ok(())
}

/// Flatten [`ValidationErrors`] into `field -> [messages]`.
///
/// Uses the error message when one is attached, otherwise the validator
/// code (e.g. `"email"`, `"length"`).
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
