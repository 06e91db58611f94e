//! # Validation Module
//!
//! Input validation utilities for Shopkit.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Untyped boundary (see `untyped`)                             │
//! │  ├── serde_json::Value from a host application                         │
//! │  └── Type checks: is it a string? is it a number?                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Range checks (price, username length, age)                        │
//! │  └── Format checks (email)                                             │
//! │                                                                         │
//! │  Boolean checks answer yes/no. `validate_user_input` answers with an   │
//! │  `InputOutcome` whose text names every failing field.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopkit_core::validation::{is_price_in_range, validate_user_input};
//!
//! assert!(is_price_in_range(50.0, 0.0, 100.0));
//!
//! let outcome = validate_user_input("sam", 20.0);
//! assert!(outcome.message().contains("successful"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use ts_rs::TS;

use crate::error::ValidationError;

/// Username length accepted by [`validate_user_input`].
pub const USER_INPUT_USERNAME_LEN: RangeInclusive<usize> = 3..=256;

/// Age accepted by [`validate_user_input`].
pub const USER_INPUT_AGE: RangeInclusive<u32> = 18..=100;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Checks that `price` lies in `[min, max]`, both ends inclusive.
///
/// ## Rules
/// - NaN or infinite prices are never in range
/// - A NaN bound makes every price out of range
///
/// ## Example
/// ```rust
/// use shopkit_core::validation::is_price_in_range;
///
/// assert!(is_price_in_range(0.0, 0.0, 100.0));
/// assert!(is_price_in_range(100.0, 0.0, 100.0));
/// assert!(!is_price_in_range(-10.0, 0.0, 100.0));
/// assert!(!is_price_in_range(f64::NAN, 0.0, 100.0));
/// ```
pub fn is_price_in_range(price: f64, min: f64, max: f64) -> bool {
    if !price.is_finite() {
        return false;
    }

    min <= price && price <= max
}

// =============================================================================
// Username Policy
// =============================================================================

/// Inclusive length range for usernames, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UsernamePolicy {
    /// Shortest accepted username.
    pub min_len: usize,
    /// Longest accepted username.
    pub max_len: usize,
}

impl UsernamePolicy {
    /// Creates a policy accepting `min_len..=max_len` characters.
    pub const fn new(min_len: usize, max_len: usize) -> Self {
        UsernamePolicy { min_len, max_len }
    }

    /// Checks whether `username` has an accepted length.
    pub fn accepts(&self, username: &str) -> bool {
        let len = username.chars().count();
        self.min_len <= len && len <= self.max_len
    }
}

/// Default policy: 5 to 15 characters.
impl Default for UsernamePolicy {
    fn default() -> Self {
        UsernamePolicy::new(5, 15)
    }
}

/// Validates a username against the default policy (5 to 15 characters).
///
/// ## Example
/// ```rust
/// use shopkit_core::validation::is_valid_username;
///
/// assert!(is_valid_username("alice"));
/// assert!(!is_valid_username("bob"));
/// ```
pub fn is_valid_username(username: &str) -> bool {
    UsernamePolicy::default().accepts(username)
}

// =============================================================================
// Email Validator
// =============================================================================

/// Checks that `email` looks like `local@domain.tld`.
///
/// ## Rules
/// - Exactly one `@`, with something on both sides
/// - No whitespace anywhere
/// - The domain contains a `.` that is neither its first nor last character
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1 && !domain.starts_with('.'),
        None => false,
    }
}

// =============================================================================
// Composite User Input
// =============================================================================

/// Result of validating a username/age pair.
///
/// Host code matches on the rendered text, so `Display` is the contract:
/// - valid input contains "successful"
/// - every failure contributes its "Invalid username ..." or
///   "Invalid age ..." line
#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    /// Both fields passed.
    Valid,
    /// One or more fields failed, in username-then-age order.
    Invalid(Vec<ValidationError>),
}

impl InputOutcome {
    /// Builds an outcome from collected failures.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        if errors.is_empty() {
            InputOutcome::Valid
        } else {
            InputOutcome::Invalid(errors)
        }
    }

    /// Returns true if every field passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, InputOutcome::Valid)
    }

    /// Failures carried by this outcome (empty when valid).
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            InputOutcome::Valid => &[],
            InputOutcome::Invalid(errors) => errors,
        }
    }

    /// Renders the outcome as the message shown to users.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InputOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputOutcome::Valid => write!(f, "Validation successful"),
            InputOutcome::Invalid(errors) => {
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{err}")?;
                }
                Ok(())
            }
        }
    }
}

/// A username/age pair submitted by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserInput {
    pub username: String,
    pub age: f64,
}

impl UserInput {
    /// Validates this input. See [`validate_user_input`].
    pub fn validate(&self) -> InputOutcome {
        validate_user_input(&self.username, self.age)
    }
}

pub(crate) fn check_username(username: &str) -> Option<ValidationError> {
    let len = username.chars().count();
    if len < *USER_INPUT_USERNAME_LEN.start() {
        return Some(ValidationError::UsernameTooShort {
            min: *USER_INPUT_USERNAME_LEN.start(),
        });
    }
    if len > *USER_INPUT_USERNAME_LEN.end() {
        return Some(ValidationError::UsernameTooLong {
            max: *USER_INPUT_USERNAME_LEN.end(),
        });
    }
    None
}

pub(crate) fn check_age(age: f64) -> Option<ValidationError> {
    if age.is_nan() {
        return Some(ValidationError::AgeNotNumber);
    }

    let min = *USER_INPUT_AGE.start();
    let max = *USER_INPUT_AGE.end();
    if age < f64::from(min) || age > f64::from(max) {
        return Some(ValidationError::AgeOutOfRange { min, max });
    }
    None
}

/// Validates a username/age pair and reports every failing field.
///
/// ## Rules
/// - Username: 3 to 256 characters
/// - Age: a number from 18 to 100
///
/// ## User Workflow
/// ```text
/// validate_user_input("", 2)
///      │
///      ├── username "" → Invalid username: must be at least 3 characters
///      │
///      ├── age 2       → Invalid age: must be between 18 and 100
///      │
///      ▼
/// "Invalid username: ..., Invalid age: ..."
/// ```
pub fn validate_user_input(username: &str, age: f64) -> InputOutcome {
    let errors = check_username(username)
        .into_iter()
        .chain(check_age(age))
        .collect();

    InputOutcome::from_errors(errors)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_price_in_range() {
        let cases = [
            (-10.0, false), // below min
            (0.0, true),    // equals min
            (50.0, true),   // between
            (100.0, true),  // equals max
            (200.0, false), // above max
        ];
        for (price, expected) in cases {
            assert_eq!(is_price_in_range(price, 0.0, 100.0), expected, "price {price}");
        }
    }

    #[test]
    fn test_is_price_in_range_non_finite() {
        assert!(!is_price_in_range(f64::NAN, 0.0, 100.0));
        assert!(!is_price_in_range(f64::INFINITY, 0.0, f64::INFINITY));
        assert!(!is_price_in_range(f64::NEG_INFINITY, f64::NEG_INFINITY, 0.0));
        assert!(!is_price_in_range(5.0, f64::NAN, 100.0));
    }

    #[test]
    fn test_is_valid_username_bounds() {
        let min = 5;
        let max = 15;

        assert!(!is_valid_username(&"a".repeat(min - 1)));
        assert!(!is_valid_username(&"a".repeat(max + 1)));

        assert!(is_valid_username(&"a".repeat(min)));
        assert!(is_valid_username(&"a".repeat(max)));

        assert!(is_valid_username(&"a".repeat(min + 1)));
        assert!(is_valid_username(&"a".repeat(max - 1)));
    }

    #[test]
    fn test_username_counts_characters_not_bytes() {
        // 5 characters, 10 bytes
        assert!(is_valid_username("ééééé"));
    }

    #[test]
    fn test_custom_username_policy() {
        let policy = UsernamePolicy::new(2, 3);
        assert!(policy.accepts("ab"));
        assert!(policy.accepts("abc"));
        assert!(!policy.accepts("abcd"));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("name@domain.com"));
        assert!(is_valid_email("first.last@mail.example.org"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a"));
        assert!(!is_valid_email("name@domain"));
        assert!(!is_valid_email("@domain.com"));
        assert!(!is_valid_email("name@.com"));
        assert!(!is_valid_email("name@domain."));
        assert!(!is_valid_email("na me@domain.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_validate_user_input_success() {
        let outcome = validate_user_input("sam", 20.0);
        assert!(outcome.is_valid());
        assert!(outcome.message().contains("successful"));
    }

    #[test]
    fn test_validate_user_input_username_rules() {
        assert!(validate_user_input("pi", 19.0).message().contains("Invalid username"));
        assert!(validate_user_input(&"a".repeat(257), 19.0)
            .message()
            .contains("Invalid username"));
        assert!(validate_user_input(&"a".repeat(256), 19.0).is_valid());
    }

    #[test]
    fn test_validate_user_input_age_rules() {
        assert!(validate_user_input("john", 17.0).message().contains("Invalid age"));
        assert!(validate_user_input("john", 101.0).message().contains("Invalid age"));
        assert!(validate_user_input("john", f64::NAN).message().contains("Invalid age"));
        assert!(validate_user_input("john", 18.0).is_valid());
        assert!(validate_user_input("john", 100.0).is_valid());
    }

    #[test]
    fn test_validate_user_input_both_invalid() {
        let outcome = validate_user_input("", 2.0);
        let message = outcome.message().to_lowercase();

        assert!(message.contains("invalid username"));
        assert!(message.contains("invalid age"));
        assert_eq!(outcome.errors().len(), 2);
    }

    #[test]
    fn test_user_input_struct() {
        let input = UserInput {
            username: "john".into(),
            age: 30.0,
        };
        assert!(input.validate().is_valid());
    }
}
