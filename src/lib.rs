//! # Canada Post XML API Client
//!
//! A safe, async Rust client library for the Canada Post shipping web services.
//!
//! This library provides a typed interface to Canada Post's XML-over-HTTP
//! services: rate quotes for a mailing scenario, the list of available
//! shipping services, per-service details, and parcel tracking.
//!
//! ## Features
//!
//! - **Safe & Type-safe**: All API payloads are parsed into strongly-typed Rust structs
//! - **Async**: Built on tokio and reqwest for async/await support
//! - **Sandbox Support**: One flag switches between the production and test gateways
//! - **Error Handling**: Carrier-reported errors are surfaced as typed `code`/`description` pairs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use canadapost_xml::{CanadaPostClient, Environment};
//! use canadapost_xml::types::{Destination, MailingScenario, ParcelCharacteristics};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CanadaPostClient::new("your_api_key", Environment::Sandbox)?;
//!
//!     let scenario = MailingScenario {
//!         parcel_characteristics: ParcelCharacteristics::with_weight(1.5),
//!         origin_postal_code: Some("K2B8J6".to_string()),
//!         destination: Some(Destination::domestic("J0E1X0")),
//!         ..Default::default()
//!     };
//!
//!     let quotes = client.get_shipping_rates(&scenario).await?;
//!     for quote in &quotes.price_quote {
//!         println!("{}: ${}", quote.service_name, quote.price_details.due);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! You need a Canada Post Developer Program API key. The key is sent as an
//! HTTP Basic credential on every request; nothing else is negotiated and no
//! session is kept between calls.

pub mod client;
pub mod error;
pub mod types;

pub use client::{CanadaPostClient, CanadaPostClientConfig};
pub use error::{CanadaPostError, Result};
pub use types::{
    Environment, MailingScenario, Message, PriceQuotes, Service, Services, TrackingDetail,
};

/// Base URL of the production gateway
pub const PRODUCTION_BASE_URL: &str = "https://soa-gw.canadapost.ca";

/// Base URL of the sandbox (testing) gateway
pub const SANDBOX_BASE_URL: &str = "https://ct.soa-gw.canadapost.ca";

/// Media type for the rating services (rates, service list, service details)
pub const RATE_MEDIA_TYPE: &str = "application/vnd.cpc.ship.rate-v3+xml";

/// Media type for the tracking service
pub const TRACK_MEDIA_TYPE: &str = "application/vnd.cpc.track+xml";

/// Default user agent string for requests
pub const DEFAULT_USER_AGENT: &str = concat!("canadapost-xml-rs/", env!("CARGO_PKG_VERSION"));

#[allow(clippy::const_is_empty)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(!PRODUCTION_BASE_URL.is_empty());
        assert!(SANDBOX_BASE_URL.contains("ct."));
        assert!(RATE_MEDIA_TYPE.ends_with("+xml"));
        assert!(DEFAULT_USER_AGENT.contains("canadapost-xml-rs"));
    }
}
