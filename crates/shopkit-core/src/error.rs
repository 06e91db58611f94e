//! # Error Types
//!
//! Domain-specific error types for shopkit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopkit-core errors (this file)                                       │
//! │  ├── StackError        - Misuse of a Stack (pop/peek on empty)         │
//! │  ├── ValidationError   - Username / age input failures                 │
//! │  ├── PricingError      - Bad price or coupon code input                │
//! │  ├── EligibilityError  - Unknown country code, bad age input           │
//! │  └── CoreError         - Wraps all of the above                        │
//! │                                                                         │
//! │  shopkit-services errors (separate crate)                              │
//! │  └── ServiceError      - Collaborator failures, config problems        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Error Styles
//! - `StackError` is a programmer-logic violation: the caller popped an
//!   empty stack and must handle the `Err`.
//! - The validation/pricing/eligibility errors are domain answers. Their
//!   `Display` text always contains "Invalid" so host UIs can match on it.

use thiserror::Error;

// =============================================================================
// Stack Error
// =============================================================================

/// Errors raised by [`crate::stack::Stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// `pop` or `peek` was called with no items on the stack.
    #[error("Stack is empty")]
    Empty,
}

// =============================================================================
// Validation Error
// =============================================================================

/// User input validation failures.
///
/// Each variant names the field it rejects, so a combined message for a
/// bad username AND a bad age carries both "Invalid username" and
/// "Invalid age".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Username arrived as something other than a string.
    #[error("Invalid username: must be a string")]
    UsernameNotText,

    /// Username is shorter than the allowed minimum.
    #[error("Invalid username: must be at least {min} characters")]
    UsernameTooShort { min: usize },

    /// Username is longer than the allowed maximum.
    #[error("Invalid username: must be at most {max} characters")]
    UsernameTooLong { max: usize },

    /// Age arrived as something other than a number (or NaN).
    #[error("Invalid age: must be a number")]
    AgeNotNumber,

    /// Age is outside the accepted range.
    #[error("Invalid age: must be between {min} and {max}")]
    AgeOutOfRange { min: u32, max: u32 },
}

impl ValidationError {
    /// Returns true if this failure is about the username field.
    pub fn is_username(&self) -> bool {
        matches!(
            self,
            ValidationError::UsernameNotText
                | ValidationError::UsernameTooShort { .. }
                | ValidationError::UsernameTooLong { .. }
        )
    }

    /// Returns true if this failure is about the age field.
    pub fn is_age(&self) -> bool {
        !self.is_username()
    }
}

// =============================================================================
// Pricing Error
// =============================================================================

/// Failures from discount calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Price is not a finite, non-negative number.
    #[error("Invalid price: {reason}")]
    InvalidPrice { reason: String },

    /// Coupon code arrived as something other than a string.
    #[error("Invalid discount code: must be a string")]
    InvalidCode,
}

// =============================================================================
// Eligibility Error
// =============================================================================

/// Failures from eligibility rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EligibilityError {
    /// Country code has no entry in the driving-age table.
    ///
    /// ## Why an error and not `false`?
    /// A missing table entry means "we don't know", not "not allowed".
    /// Callers must see the difference.
    #[error("Invalid country code: {0}")]
    InvalidCountryCode(String),

    /// Age is not a finite, non-negative number.
    #[error("Invalid age: {reason}")]
    InvalidAge { reason: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Any error raised by shopkit-core.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Stack(#[from] StackError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Eligibility(#[from] EligibilityError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_error_message() {
        assert_eq!(StackError::Empty.to_string(), "Stack is empty");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::UsernameTooShort { min: 3 };
        assert_eq!(
            err.to_string(),
            "Invalid username: must be at least 3 characters"
        );

        let err = ValidationError::AgeOutOfRange { min: 18, max: 100 };
        assert_eq!(err.to_string(), "Invalid age: must be between 18 and 100");
    }

    #[test]
    fn test_validation_error_field() {
        assert!(ValidationError::UsernameNotText.is_username());
        assert!(ValidationError::UsernameTooLong { max: 256 }.is_username());
        assert!(ValidationError::AgeNotNumber.is_age());
        assert!(!ValidationError::AgeNotNumber.is_username());
    }

    #[test]
    fn test_domain_errors_mention_invalid() {
        let errors: Vec<String> = vec![
            PricingError::InvalidCode.to_string(),
            PricingError::InvalidPrice {
                reason: "must not be negative".into(),
            }
            .to_string(),
            EligibilityError::InvalidCountryCode("NG".into()).to_string(),
        ];
        for message in errors {
            assert!(message.contains("Invalid"), "{message}");
        }
    }

    #[test]
    fn test_converts_to_core_error() {
        let core_err: CoreError = StackError::Empty.into();
        assert!(matches!(core_err, CoreError::Stack(StackError::Empty)));

        let core_err: CoreError = EligibilityError::InvalidCountryCode("NG".into()).into();
        assert_eq!(core_err.to_string(), "Invalid country code: NG");
    }
}
