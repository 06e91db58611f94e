//! # shopkit-services: Storefront Orchestration
//!
//! This crate connects the pure rules in `shopkit-core` to the outside
//! world: payment, email, analytics, exchange rates, shipping quotes and
//! one-time codes. Every external service sits behind a trait in
//! [`ports`], so tests run against fakes and hosts plug in real clients.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Storefront Services                             │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                  Storefront (Main Orchestrator)                  │  │
//! │  │                                                                  │  │
//! │  │  price_in_currency • shipping_info • render_page                 │  │
//! │  │  submit_order • sign_up • login                                  │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                   │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │     Ports      │  │     Config     │  │     shopkit-core       │    │
//! │  │                │  │                │  │                        │    │
//! │  │ One trait per  │  │ TOML file +    │  │ Email format, hours,   │    │
//! │  │ collaborator   │  │ SHOPKIT_* env  │  │ seasonal day, driving  │    │
//! │  └────────────────┘  └────────────────┘  └────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`storefront`] - `Storefront` orchestrator and `OrderOutcome`
//! - [`ports`] - Collaborator traits and value objects
//! - [`config`] - Storefront configuration (rules, currency, analytics, email)
//! - [`error`] - Service error types
//! - [`telemetry`] - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod ports;
pub mod storefront;
pub mod telemetry;

pub use config::StorefrontConfig;
pub use error::{CollaboratorError, ServiceError, ServiceResult};
pub use ports::{
    AnalyticsReporter, ChargeReceipt, ChargeStatus, CreditCard, EmailSender,
    ExchangeRateProvider, Order, PaymentProcessor, SecurityCodeGenerator, ShippingQuote,
    ShippingQuoteProvider,
};
pub use storefront::{Collaborators, OrderFailure, OrderOutcome, Storefront};
pub use telemetry::init_tracing;
