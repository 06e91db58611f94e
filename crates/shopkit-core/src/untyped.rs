//! # Untyped Boundary
//!
//! Entry points for values that arrive as unchecked JSON from a host
//! application. Each function checks the *type* of its arguments first,
//! then hands off to the typed rule.
//!
//! ```text
//! serde_json::Value ──► type guard ──► typed rule (validation / pricing / eligibility)
//!        "100"              │
//!                           └── wrong type → "Invalid ..." error or `false`
//! ```

use serde_json::Value;

use crate::eligibility::DrivingAgeTable;
use crate::error::{EligibilityError, PricingError, ValidationError};
use crate::pricing;
use crate::validation::{self, InputOutcome};

/// Username check for untyped input: anything but a string is invalid.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use shopkit_core::untyped::is_valid_username;
///
/// assert!(is_valid_username(&json!("alice")));
/// assert!(!is_valid_username(&json!(null)));
/// assert!(!is_valid_username(&json!(1)));
/// ```
pub fn is_valid_username(username: &Value) -> bool {
    username.as_str().is_some_and(validation::is_valid_username)
}

/// Composite user-input check for untyped input.
pub fn validate_user_input(username: &Value, age: &Value) -> InputOutcome {
    let username_error = match username.as_str() {
        Some(text) => validation::check_username(text),
        None => Some(ValidationError::UsernameNotText),
    };

    let age_error = match age.as_f64() {
        Some(number) => validation::check_age(number),
        None => Some(ValidationError::AgeNotNumber),
    };

    InputOutcome::from_errors(username_error.into_iter().chain(age_error).collect())
}

/// Discount calculation for untyped input.
pub fn calculate_discount(price: &Value, code: &Value) -> Result<f64, PricingError> {
    let price = price.as_f64().ok_or_else(|| PricingError::InvalidPrice {
        reason: "must be a number".to_string(),
    })?;
    let code = code.as_str().ok_or(PricingError::InvalidCode)?;

    pricing::calculate_discount(price, code)
}

/// Driving eligibility for untyped input.
pub fn can_drive(age: &Value, country_code: &Value) -> Result<bool, EligibilityError> {
    let age = age.as_f64().ok_or_else(|| EligibilityError::InvalidAge {
        reason: "must be a number".to_string(),
    })?;
    let country_code = country_code
        .as_str()
        .ok_or_else(|| EligibilityError::InvalidCountryCode(country_code.to_string()))?;

    DrivingAgeTable::default().can_drive_at(age, country_code)
}

// =============================================================================
// Unit Tests
// =============================================================================
