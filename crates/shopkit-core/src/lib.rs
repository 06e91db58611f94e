//! # shopkit-core: Pure Storefront Rules
//!
//! This crate holds the storefront's business rules as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopkit Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Host application                             │   │
//! │  │    forms, checkout, sign-up, login screens                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               shopkit-services (Storefront)                     │   │
//! │  │    payment, email, analytics, rates, quotes via traits          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shopkit-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────┐  ┌──────────┐  │   │
//! │  │   │   stack   │  │  pricing  │  │ eligibility │  │validation│  │   │
//! │  │   │  Stack<T> │  │  Coupon   │  │ can_drive   │  │ username │  │   │
//! │  │   │           │  │ discount  │  │ is_online   │  │ age, mail│  │   │
//! │  │   └───────────┘  └───────────┘  └─────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK READS • NO NETWORK • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`stack`] - Generic LIFO container
//! - [`validation`] - Price range, username, email and user-input checks
//! - [`pricing`] - Coupon catalog and discount calculation
//! - [`eligibility`] - Driving age, opening hours, seasonal discount
//! - [`untyped`] - Type-guarded entry points for raw JSON input
//! - [`arithmetic`] - Small numeric helpers
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output
//! 2. **Time Is Input**: callers pass "now", nothing reads the clock
//! 3. **Errors Are Values**: domain failures render as text containing "Invalid"
//!
//! ## Example Usage
//!
//! ```rust
//! use shopkit_core::{calculate_discount, can_drive, Stack};
//!
//! assert_eq!(calculate_discount(100.0, "SAVE10"), Ok(90.0));
//! assert_eq!(can_drive(17, "UK"), Ok(true));
//!
//! let mut stack = Stack::new();
//! stack.push("order-1");
//! assert_eq!(stack.pop(), Ok("order-1"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod arithmetic;
pub mod eligibility;
pub mod error;
pub mod pricing;
pub mod stack;
pub mod untyped;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use eligibility::{
    can_drive, get_discount, is_online, BusinessHours, DrivingAgeTable, SeasonalDiscount,
};
pub use error::{
    CoreError, CoreResult, EligibilityError, PricingError, StackError, ValidationError,
};
pub use pricing::{calculate_discount, get_coupons, Coupon};
pub use stack::Stack;
pub use validation::{
    is_price_in_range, is_valid_email, is_valid_username, validate_user_input, InputOutcome,
    UserInput, UsernamePolicy,
};
