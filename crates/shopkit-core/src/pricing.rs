//! # Pricing Module
//!
//! Coupon catalog and discount calculation.
//!
//! ## Discount Flow
//! ```text
//! calculate_discount(100.0, "SAVE10")
//!      │
//!      ├── price NaN / infinite / negative? → PricingError::InvalidPrice
//!      │
//!      ├── code in catalog? → 100.0 × (1 − 0.10) = 90.0
//!      │
//!      └── unknown code     → 100.0 (no discount, not an error)
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::PricingError;

// =============================================================================
// Coupon
// =============================================================================

/// A discount code and the fraction it takes off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coupon {
    /// Code typed by the customer, e.g. "SAVE10".
    pub code: String,
    /// Fraction of the price removed, strictly between 0 and 1.
    pub discount: f64,
}

impl Coupon {
    fn new(code: &str, discount: f64) -> Self {
        Coupon {
            code: code.to_string(),
            discount,
        }
    }

    /// Applies this coupon to `price`.
    #[inline]
    pub fn apply(&self, price: f64) -> f64 {
        price * (1.0 - self.discount)
    }
}

/// Returns the coupon catalog.
///
/// ## Example
/// ```rust
/// use shopkit_core::pricing::get_coupons;
///
/// let coupons = get_coupons();
/// assert!(!coupons.is_empty());
/// assert!(coupons.iter().all(|c| c.discount > 0.0 && c.discount < 1.0));
/// ```
pub fn get_coupons() -> Vec<Coupon> {
    vec![Coupon::new("SAVE10", 0.1), Coupon::new("SAVE20", 0.2)]
}

/// Looks up a coupon by exact code.
pub fn find_coupon(code: &str) -> Option<Coupon> {
    get_coupons().into_iter().find(|coupon| coupon.code == code)
}

// =============================================================================
// Discount Calculation
// =============================================================================

pub(crate) fn check_price(price: f64) -> Result<(), PricingError> {
    if !price.is_finite() {
        return Err(PricingError::InvalidPrice {
            reason: "must be a finite number".to_string(),
        });
    }

    if price < 0.0 {
        return Err(PricingError::InvalidPrice {
            reason: "must not be negative".to_string(),
        });
    }

    Ok(())
}

/// Calculates the price after applying coupon `code`.
///
/// ## Example
/// ```rust
/// use shopkit_core::pricing::calculate_discount;
///
/// assert_eq!(calculate_discount(100.0, "SAVE20"), Ok(80.0));
/// assert_eq!(calculate_discount(50.0, "SAVE2"), Ok(50.0));
/// assert!(calculate_discount(-10.0, "SAVE10").is_err());
/// ```
pub fn calculate_discount(price: f64, code: &str) -> Result<f64, PricingError> {
    check_price(price)?;

    Ok(match find_coupon(code) {
        Some(coupon) => coupon.apply(price),
        None => price,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
