//! # Collaborator Ports
//!
//! Traits for the external services the storefront talks to, plus the
//! value objects passed across them.
//!
//! ```text
//! Storefront ──► ExchangeRateProvider    exchange_rate(from, to)
//!            ──► ShippingQuoteProvider   shipping_quote(destination)
//!            ──► AnalyticsReporter       track_page_view(path)
//!            ──► PaymentProcessor        charge(card, amount)      async
//!            ──► EmailSender             send_email(to, subject)   async
//!            ──► SecurityCodeGenerator   generate_code()
//! ```
//!
//! Tests swap in fakes; hosts wire real clients.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CollaboratorError;

// =============================================================================
// Value Objects
// =============================================================================

/// Shipping price and delivery estimate for a destination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShippingQuote {
    pub cost: f64,
    pub estimated_days: u32,
}

/// An order waiting for payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    pub total_amount: f64,
}

/// Card details forwarded to the payment processor as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreditCard {
    pub credit_card_number: String,
}

/// Status reported by the payment processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Success,
    /// Any status other than "success".
    #[serde(other)]
    Failed,
}

/// Result of a charge attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeReceipt {
    pub status: ChargeStatus,
}

impl ChargeReceipt {
    pub const fn success() -> Self {
        ChargeReceipt {
            status: ChargeStatus::Success,
        }
    }

    pub const fn failed() -> Self {
        ChargeReceipt {
            status: ChargeStatus::Failed,
        }
    }
}

// =============================================================================
// Ports
// =============================================================================

/// Currency-rate provider.
pub trait ExchangeRateProvider: Send + Sync {
    /// Units of `to` per one unit of `from`.
    fn exchange_rate(&self, from: &str, to: &str) -> Result<f64, CollaboratorError>;
}

/// Shipping-quote provider.
pub trait ShippingQuoteProvider: Send + Sync {
    /// Quote for `destination`, or `None` when it cannot be shipped to.
    fn shipping_quote(&self, destination: &str) -> Result<Option<ShippingQuote>, CollaboratorError>;
}

/// Analytics reporter.
pub trait AnalyticsReporter: Send + Sync {
    fn track_page_view(&self, path: &str) -> Result<(), CollaboratorError>;
}

/// Payment processor.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn charge(
        &self,
        card: &CreditCard,
        amount: f64,
    ) -> Result<ChargeReceipt, CollaboratorError>;
}

/// Email sender.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, address: &str, subject: &str) -> Result<(), CollaboratorError>;
}

/// One-time security code generator.
pub trait SecurityCodeGenerator: Send + Sync {
    fn generate_code(&self) -> Result<u32, CollaboratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_status_parsing() {
        let receipt: ChargeReceipt = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(receipt, ChargeReceipt::success());

        let receipt: ChargeReceipt = serde_json::from_str(r#"{"status":"failed"}"#).unwrap();
        assert_eq!(receipt, ChargeReceipt::failed());

        // Unknown statuses are treated as failures
        let receipt: ChargeReceipt = serde_json::from_str(r#"{"status":"pending"}"#).unwrap();
        assert_eq!(receipt.status, ChargeStatus::Failed);
    }

    #[test]
    fn test_value_object_shapes() {
        let quote: ShippingQuote =
            serde_json::from_str(r#"{"cost":18,"estimatedDays":4}"#).unwrap();
        assert_eq!(quote.cost, 18.0);
        assert_eq!(quote.estimated_days, 4);

        let order: Order = serde_json::from_str(r#"{"totalAmount":200}"#).unwrap();
        assert_eq!(order.total_amount, 200.0);
    }
}
