//! # Storefront
//!
//! Thin orchestration over the external collaborators in [`crate::ports`].
//!
//! ## Call Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit_order(order, card)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  payment.charge(card, order.total_amount) ── Err ──► ServiceError       │
//! │       │                                                                 │
//! │       ├── Success → { success: true }                                  │
//! │       └── other   → { success: false, error: "payment_error" }         │
//! │                                                                         │
//! │  sign_up(email)                                                         │
//! │       ├── bad format → false (nothing sent)                            │
//! │       └── ok         → email.send_email(email, welcome) → true         │
//! │                                                                         │
//! │  login(email)                                                           │
//! │       └── security.generate_code() → email.send_email(email, code)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every call awaits its collaborators exactly once and passes their
//! errors back unchanged.

use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};
use shopkit_core::validation::is_valid_email;
use std::sync::Arc;
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::config::StorefrontConfig;
use crate::error::ServiceResult;
use crate::ports::{
    AnalyticsReporter, ChargeStatus, CreditCard, EmailSender, ExchangeRateProvider, Order,
    PaymentProcessor, SecurityCodeGenerator, ShippingQuoteProvider,
};

/// Static body returned by [`Storefront::render_page`].
pub const HOME_PAGE_CONTENT: &str = "<div>content</div>";

// =============================================================================
// Order Outcome
// =============================================================================

/// Why an order did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OrderFailure {
    PaymentError,
}

/// Result of [`Storefront::submit_order`].
///
/// Serializes as `{"success":true}` or
/// `{"success":false,"error":"payment_error"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<OrderFailure>,
}

impl OrderOutcome {
    pub const fn succeeded() -> Self {
        OrderOutcome {
            success: true,
            error: None,
        }
    }

    pub const fn failed(reason: OrderFailure) -> Self {
        OrderOutcome {
            success: false,
            error: Some(reason),
        }
    }
}

// =============================================================================
// Collaborators
// =============================================================================

/// The external services a [`Storefront`] calls out to.
#[derive(Clone)]
pub struct Collaborators {
    pub rates: Arc<dyn ExchangeRateProvider>,
    pub shipping: Arc<dyn ShippingQuoteProvider>,
    pub analytics: Arc<dyn AnalyticsReporter>,
    pub payment: Arc<dyn PaymentProcessor>,
    pub email: Arc<dyn EmailSender>,
    pub security: Arc<dyn SecurityCodeGenerator>,
}

// =============================================================================
// Storefront
// =============================================================================

/// Storefront operations wired to injected collaborators.
pub struct Storefront {
    config: Arc<StorefrontConfig>,
    services: Collaborators,
}

impl Storefront {
    /// Creates a storefront with default configuration.
    pub fn new(services: Collaborators) -> Self {
        Self::with_config(services, StorefrontConfig::default())
    }

    /// Creates a storefront with a custom configuration.
    pub fn with_config(services: Collaborators, config: StorefrontConfig) -> Self {
        Storefront {
            config: Arc::new(config),
            services,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    /// Converts a base-currency `price` into `currency`.
    pub fn price_in_currency(&self, price: f64, currency: &str) -> ServiceResult<f64> {
        let base = &self.config.currency.base;
        let rate = self.services.rates.exchange_rate(base, currency)?;
        debug!(from = %base, to = %currency, rate, "Converted price");
        Ok(price * rate)
    }

    /// Human-readable shipping line for `destination`.
    ///
    /// ## Output
    /// - quote available: `Shipping Cost: $18 (4 Days)`
    /// - no quote: `Shipping Unavailable`
    pub fn shipping_info(&self, destination: &str) -> ServiceResult<String> {
        match self.services.shipping.shipping_quote(destination)? {
            Some(quote) => Ok(format!(
                "Shipping Cost: ${} ({} Days)",
                quote.cost, quote.estimated_days
            )),
            None => {
                debug!(destination = %destination, "No shipping quote");
                Ok("Shipping Unavailable".to_string())
            }
        }
    }

    // =========================================================================
    // Pages
    // =========================================================================

    /// Renders the home page and reports a page view.
    pub async fn render_page(&self) -> ServiceResult<String> {
        self.services
            .analytics
            .track_page_view(&self.config.analytics.home_path)?;
        Ok(HOME_PAGE_CONTENT.to_string())
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Charges `card` for `order` and reports whether payment went through.
    pub async fn submit_order(
        &self,
        order: &Order,
        card: &CreditCard,
    ) -> ServiceResult<OrderOutcome> {
        let receipt = self
            .services
            .payment
            .charge(card, order.total_amount)
            .await?;

        match receipt.status {
            ChargeStatus::Success => {
                info!(amount = order.total_amount, "Order paid");
                Ok(OrderOutcome::succeeded())
            }
            ChargeStatus::Failed => {
                warn!(amount = order.total_amount, "Payment declined");
                Ok(OrderOutcome::failed(OrderFailure::PaymentError))
            }
        }
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Signs up `email`, sending a welcome email when the address is valid.
    ///
    /// Returns `false` without contacting anyone for malformed addresses.
    pub async fn sign_up(&self, email: &str) -> ServiceResult<bool> {
        if !is_valid_email(email) {
            debug!("Rejected sign-up with malformed email");
            return Ok(false);
        }

        self.services
            .email
            .send_email(email, &self.config.email.welcome_subject)
            .await?;

        info!("Sign-up welcome email sent");
        Ok(true)
    }

    /// Emails a fresh one-time code to `email`.
    pub async fn login(&self, email: &str) -> ServiceResult<()> {
        let code = self.services.security.generate_code()?;
        self.services
            .email
            .send_email(email, &code.to_string())
            .await?;

        debug!("Login code sent");
        Ok(())
    }

    // =========================================================================
    // Configured Rules
    // =========================================================================

    /// Whether the store is online at `now`, per the configured hours.
    pub fn is_online<T: Timelike>(&self, now: &T) -> bool {
        self.config.rules.hours.is_open(now)
    }

    /// Seasonal discount rate for `today`, per the configured day.
    pub fn seasonal_discount<D: Datelike>(&self, today: &D) -> f64 {
        self.config.rules.seasonal.rate_on(today)
    }

    /// Whether `username` fits the configured length policy.
    pub fn accepts_username(&self, username: &str) -> bool {
        self.config.rules.username.accepts(username)
    }

    /// Driving eligibility against the configured table.
    pub fn can_drive(&self, age: u32, country_code: &str) -> ServiceResult<bool> {
        let allowed = self
            .config
            .rules
            .driving
            .can_drive(age, country_code)
            .map_err(shopkit_core::CoreError::from)?;
        Ok(allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_outcome_json() {
        let ok = serde_json::to_value(OrderOutcome::succeeded()).unwrap();
        assert_eq!(ok, serde_json::json!({ "success": true }));

        let failed = serde_json::to_value(OrderOutcome::failed(OrderFailure::PaymentError)).unwrap();
        assert_eq!(
            failed,
            serde_json::json!({ "success": false, "error": "payment_error" })
        );
    }
}
