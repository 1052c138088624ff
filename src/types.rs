//! Type definitions for Canada Post request and response payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// XML namespace of the rating (rate-v3) schemas
pub const RATE_NAMESPACE: &str = "http://www.canadapost.ca/ws/ship/rate-v3";

/// Gateway selector: production or the sandbox testing environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// The live gateway; requests create real quotes against real contracts
    #[default]
    Production,
    /// The developer testing gateway, functionally identical to production
    /// but without real shipments or charges
    Sandbox,
}

impl Environment {
    /// Base URL of the selected gateway
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => crate::PRODUCTION_BASE_URL,
            Environment::Sandbox => crate::SANDBOX_BASE_URL,
        }
    }

    /// Check whether the sandbox gateway is selected
    pub fn is_sandbox(self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
        }
    }
}

/// Rate quote type requested in a mailing scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum QuoteType {
    /// Contract rates for the given customer number
    #[serde(rename = "commercial")]
    Commercial,
    /// Retail (post office counter) rates
    #[serde(rename = "counter")]
    Counter,
}

/// Input structure for a rate quote request: what is being mailed, from
/// where, to where, and with which options.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename = "mailing-scenario", rename_all = "kebab-case")]
pub struct MailingScenario {
    /// Schema namespace, always [`RATE_NAMESPACE`]
    #[serde(rename = "@xmlns")]
    pub xmlns: String,

    /// Customer number of the mailed-by party
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_number: Option<String>,

    /// Contract number for commercial rates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,

    /// Promotional discount code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,

    /// Whether commercial (contract) or counter rates are quoted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_type: Option<QuoteType>,

    /// Date the item will be inducted, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_mailing_date: Option<String>,

    /// Add-on options to price with the quote (signature, coverage, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ScenarioOptions>,

    /// Physical characteristics of the parcel
    pub parcel_characteristics: ParcelCharacteristics,

    /// Restrict the quote to these service codes; all eligible services
    /// are quoted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<RequestedServices>,

    /// Postal code the parcel ships from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_postal_code: Option<String>,

    /// Where the parcel ships to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
}

impl Default for MailingScenario {
    fn default() -> Self {
        Self {
            xmlns: RATE_NAMESPACE.to_string(),
            customer_number: None,
            contract_id: None,
            promo_code: None,
            quote_type: None,
            expected_mailing_date: None,
            options: None,
            parcel_characteristics: ParcelCharacteristics::default(),
            services: None,
            origin_postal_code: None,
            destination: None,
        }
    }
}

/// Wrapper for the option entries of a mailing scenario
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScenarioOptions {
    /// Requested options
    #[serde(default, rename = "option")]
    pub option: Vec<ScenarioOption>,
}

/// A single requested add-on option
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScenarioOption {
    /// Option code, e.g. `SO` (signature) or `COV` (coverage)
    pub option_code: String,

    /// Declared amount for options priced by value, e.g. coverage dollars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_amount: Option<f64>,
}

impl ScenarioOption {
    /// Create an option with no qualifier amount
    pub fn new(option_code: impl Into<String>) -> Self {
        Self {
            option_code: option_code.into(),
            option_amount: None,
        }
    }
}

/// Weight and dimensions of the parcel being quoted
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ParcelCharacteristics {
    /// Weight in kilograms
    pub weight: f64,

    /// Outer dimensions in centimetres
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    /// Item is not packaged in a box
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unpackaged: Option<bool>,

    /// Item is shipped in a mailing tube
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_tube: Option<bool>,

    /// Item exceeds standard size limits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oversized: Option<bool>,
}

impl ParcelCharacteristics {
    /// Characteristics with only a weight in kilograms
    pub fn with_weight(weight: f64) -> Self {
        Self {
            weight,
            ..Default::default()
        }
    }
}

/// Parcel dimensions in centimetres, longest side first
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Dimensions {
    /// Longest dimension
    pub length: f64,
    /// Second-longest dimension
    pub width: f64,
    /// Shortest dimension
    pub height: f64,
}

/// Service codes to restrict a quote to
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RequestedServices {
    /// Service codes, e.g. `DOM.EP`
    #[serde(default, rename = "service-code")]
    pub service_code: Vec<String>,
}

/// Destination of the parcel. Exactly one of the three variants should be
/// populated; the constructors below enforce that.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Destination {
    /// Destination within Canada
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domestic: Option<Domestic>,

    /// Destination in the United States
    #[serde(skip_serializing_if = "Option::is_none")]
    pub united_states: Option<UnitedStates>,

    /// Destination anywhere else
    #[serde(skip_serializing_if = "Option::is_none")]
    pub international: Option<International>,
}

impl Destination {
    /// Destination within Canada
    pub fn domestic(postal_code: impl Into<String>) -> Self {
        Self {
            domestic: Some(Domestic {
                postal_code: postal_code.into(),
            }),
            ..Default::default()
        }
    }

    /// Destination in the United States
    pub fn united_states(zip_code: impl Into<String>) -> Self {
        Self {
            united_states: Some(UnitedStates {
                zip_code: zip_code.into(),
            }),
            ..Default::default()
        }
    }

    /// International destination, with an optional destination postal code
    pub fn international(country_code: impl Into<String>, postal_code: Option<String>) -> Self {
        Self {
            international: Some(International {
                country_code: country_code.into(),
                postal_code,
            }),
            ..Default::default()
        }
    }
}

/// Canadian destination
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Domestic {
    /// Destination postal code, no spaces
    pub postal_code: String,
}

/// United States destination
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UnitedStates {
    /// Destination ZIP code
    pub zip_code: String,
}

/// International destination
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct International {
    /// Two-letter ISO country code
    pub country_code: String,

    /// Destination postal code where the country uses them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Root response for a rate quote request: one quote per eligible service
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename = "price-quotes", rename_all = "kebab-case")]
pub struct PriceQuotes {
    /// Schema namespace
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,

    /// Quotes, one per service
    #[serde(default, rename = "price-quote")]
    pub price_quote: Vec<PriceQuote>,
}

impl PriceQuotes {
    /// The quote with the lowest amount due, if any were returned
    pub fn cheapest(&self) -> Option<&PriceQuote> {
        self.price_quote.iter().min_by(|a, b| {
            a.price_details
                .due
                .partial_cmp(&b.price_details.due)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

/// A priced service for the requested mailing scenario
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PriceQuote {
    /// Service code, e.g. `DOM.EP`
    pub service_code: String,

    /// Link to the service details resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_link: Option<Link>,

    /// Human-readable service name
    pub service_name: String,

    /// Price breakdown
    pub price_details: PriceDetails,

    /// Billed/cubed weight information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_details: Option<WeightDetails>,

    /// Delivery commitment for this service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_standard: Option<ServiceStandard>,
}

/// A typed hyperlink returned by the carrier
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Link {
    /// Link relation, e.g. `service`
    #[serde(rename = "@rel")]
    pub rel: String,

    /// Fully-qualified URL of the linked resource
    #[serde(rename = "@href")]
    pub href: String,

    /// Media type to request the linked resource with
    #[serde(rename = "@media-type")]
    pub media_type: String,
}

/// Price breakdown for a single quoted service
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PriceDetails {
    /// Base price before options, adjustments, and taxes
    pub base: f64,

    /// Taxes applied to this quote
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes: Option<Taxes>,

    /// Total amount due
    pub due: f64,

    /// Options priced into the quote
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<PricedOptions>,

    /// Automatic adjustments such as fuel surcharges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustments: Option<Adjustments>,
}

/// GST/PST/HST amounts for a quote
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Taxes {
    /// Goods and services tax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst: Option<Tax>,
    /// Provincial sales tax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pst: Option<Tax>,
    /// Harmonized sales tax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hst: Option<Tax>,
}

impl Taxes {
    /// Sum of all tax amounts present
    pub fn total(&self) -> f64 {
        [&self.gst, &self.pst, &self.hst]
            .into_iter()
            .flatten()
            .filter_map(|tax| tax.amount)
            .sum()
    }
}

/// A single tax amount with the rate it was charged at
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Tax {
    /// Tax rate as a percentage, e.g. `5`
    #[serde(rename = "@percent", skip_serializing_if = "Option::is_none")]
    pub percent: Option<String>,

    /// Tax amount in dollars; absent when the tax does not apply
    #[serde(rename = "$text", default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

/// Wrapper for options priced into a quote
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PricedOptions {
    /// Priced options
    #[serde(default, rename = "option")]
    pub option: Vec<PricedOption>,
}

/// An option priced into a quote
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PricedOption {
    /// Option code
    pub option_code: String,

    /// Human-readable option name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_name: Option<String>,

    /// Price of the option; zero when included with the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_price: Option<f64>,
}

/// Wrapper for quote adjustments
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Adjustments {
    /// Adjustments applied to the base price
    #[serde(default, rename = "adjustment")]
    pub adjustment: Vec<Adjustment>,
}

/// An automatic price adjustment, e.g. a fuel surcharge
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Adjustment {
    /// Adjustment code, e.g. `FUELSC`
    pub adjustment_code: String,

    /// Human-readable adjustment name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_name: Option<String>,

    /// Cost of the adjustment in dollars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_cost: Option<f64>,
}

/// Billed weight information for a quote
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WeightDetails {
    /// Volumetric-equivalent weight in kilograms, when it governs the price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cubed_weight: Option<f64>,
}

/// Delivery commitment for a quoted service
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServiceStandard {
    /// Morning delivery guaranteed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub am_delivery: Option<bool>,

    /// Delivery date is guaranteed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guaranteed_delivery: Option<bool>,

    /// Expected transit time in days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_transit_time: Option<u32>,

    /// Expected delivery date, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_delivery_date: Option<String>,
}

/// Root response for the service list
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename = "services", rename_all = "kebab-case")]
pub struct Services {
    /// Schema namespace
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,

    /// Available services
    #[serde(default, rename = "service")]
    pub service: Vec<ServiceLink>,
}

impl Services {
    /// Find a service entry by its service code
    pub fn find(&self, service_code: &str) -> Option<&ServiceLink> {
        self.service.iter().find(|s| s.service_code == service_code)
    }
}

/// A service list entry with the link to drill into its details
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServiceLink {
    /// Service code, e.g. `DOM.EP`
    pub service_code: String,

    /// Human-readable service name
    pub service_name: String,

    /// Link to the service details resource; pass its `href` and
    /// `media_type` to `get_service_details`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

/// Root response for service details
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename = "service", rename_all = "kebab-case")]
pub struct Service {
    /// Schema namespace
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,

    /// Service code, e.g. `DOM.EP`
    pub service_code: String,

    /// Human-readable service name
    pub service_name: String,

    /// Free-form comment about the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Options available with this service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ServiceOptions>,

    /// Weight and size limits for this service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Restrictions>,
}

/// Wrapper for the options available with a service
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServiceOptions {
    /// Available options
    #[serde(default, rename = "option")]
    pub option: Vec<ServiceOption>,
}

/// An option that may be requested with a service
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServiceOption {
    /// Option code
    pub option_code: String,

    /// Human-readable option name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_name: Option<String>,

    /// Option class, e.g. `coverage`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_class: Option<String>,

    /// Option is always applied to this service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandatory: Option<bool>,

    /// Option appears on the shipping label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prints_on_label: Option<bool>,

    /// Option requires a qualifier amount, e.g. coverage dollars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier_required: Option<bool>,

    /// Maximum qualifier amount accepted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier_max: Option<f64>,
}

/// Weight and dimension limits for a service
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Restrictions {
    /// Allowed weight range in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_restriction: Option<WeightRestriction>,

    /// Allowed dimensions in centimetres
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_restrictions: Option<DimensionRestrictions>,
}

/// Allowed weight range
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WeightRestriction {
    /// Minimum weight in grams
    #[serde(rename = "@min", skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Maximum weight in grams
    #[serde(rename = "@max", skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Allowed dimension limits
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DimensionRestrictions {
    /// Longest dimension limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<DimensionLimit>,

    /// Second-longest dimension limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<DimensionLimit>,

    /// Shortest dimension limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<DimensionLimit>,

    /// Maximum of length plus girth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_plus_girth_max: Option<f64>,

    /// Maximum of length plus height plus width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_height_width_sum_max: Option<f64>,
}

/// A single dimension limit
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DimensionLimit {
    /// Maximum in centimetres
    #[serde(rename = "@max", skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Root response for tracking details of one parcel
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename = "tracking-detail", rename_all = "kebab-case")]
pub struct TrackingDetail {
    /// Schema namespace
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,

    /// Tracking number (PIN) of the parcel
    pub pin: String,

    /// `"1"` when the parcel has active tracking data
    pub active_exists: Option<String>,

    /// `"1"` when the parcel has archived tracking data
    pub archive_exists: Option<String>,

    /// Reason the expected date changed, when it did
    pub changed_expected_delivery_reason: Option<String>,

    /// Revised expected delivery date
    pub changed_expected_date: Option<String>,

    /// Postal installation the parcel is addressed to
    pub destination_postal_id: Option<String>,

    /// Current expected delivery date, `YYYY-MM-DD`
    pub expected_delivery_date: Option<String>,

    /// Customer number of the mailer
    pub mailed_by_customer_number: Option<String>,

    /// Customer number the item was mailed on behalf of
    pub mailed_on_behalf_of_customer_number: Option<String>,

    /// Expected delivery date at induction time
    pub original_expected_date: Option<String>,

    /// Name of the service the parcel shipped with
    pub service_name: Option<String>,

    /// A delivery signature image is available
    pub signature_image_exists: Option<bool>,

    /// The mailer asked to suppress the signature requirement
    pub suppress_signature: Option<bool>,

    /// Scan events, newest first
    pub significant_events: Option<SignificantEvents>,
}

impl TrackingDetail {
    /// The most recent scan event, if any were reported
    pub fn latest_event(&self) -> Option<&Occurrence> {
        self.significant_events
            .as_ref()
            .and_then(|events| events.occurrence.first())
    }
}

/// Wrapper for the scan events of a parcel
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SignificantEvents {
    /// Scan events, newest first
    #[serde(default, rename = "occurrence")]
    pub occurrence: Vec<Occurrence>,
}

/// A single tracking scan event
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Occurrence {
    /// Numeric event code
    pub event_identifier: String,
    /// Date of the event, `YYYY-MM-DD`
    pub event_date: Option<String>,
    /// Local time of the event, `HH:MM:SS`
    pub event_time: Option<String>,
    /// Time zone of the event
    pub event_time_zone: Option<String>,
    /// Human-readable event description
    pub event_description: Option<String>,
    /// Name of the person who signed for the parcel
    pub signatory_name: Option<String>,
    /// City where the event occurred
    pub event_site: Option<String>,
    /// Province where the event occurred
    pub event_province: Option<String>,
    /// Retail location identifier, for retail events
    pub event_retail_location_id: Option<String>,
    /// Retail location name, for retail events
    pub event_retail_name: Option<String>,
}

/// Root of the carrier's error response body
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename = "messages")]
pub struct Messages {
    /// Schema namespace
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,

    /// Reported errors; the carrier may return several per request
    #[serde(default, rename = "message")]
    pub message: Vec<Message>,
}

/// A single carrier-reported error
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Message {
    /// Carrier error code
    pub code: String,
    /// Human-readable error description
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(
            Environment::Production.base_url(),
            "https://soa-gw.canadapost.ca"
        );
        assert_eq!(
            Environment::Sandbox.base_url(),
            "https://ct.soa-gw.canadapost.ca"
        );
        assert!(Environment::Sandbox.is_sandbox());
        assert!(!Environment::Production.is_sandbox());
        assert_eq!(Environment::Sandbox.to_string(), "sandbox");
    }

    #[test]
    fn test_scenario_round_trip() {
        let scenario = MailingScenario {
            customer_number: Some("2004381".to_string()),
            quote_type: Some(QuoteType::Counter),
            options: Some(ScenarioOptions {
                option: vec![ScenarioOption {
                    option_code: "COV".to_string(),
                    option_amount: Some(250.0),
                }],
            }),
            parcel_characteristics: ParcelCharacteristics {
                weight: 1.5,
                dimensions: Some(Dimensions {
                    length: 30.0,
                    width: 20.0,
                    height: 10.0,
                }),
                ..Default::default()
            },
            origin_postal_code: Some("K2B8J6".to_string()),
            destination: Some(Destination::domestic("J0E1X0")),
            ..Default::default()
        };

        let xml = quick_xml::se::to_string(&scenario).unwrap();
        assert!(xml.starts_with("<mailing-scenario"));
        assert!(xml.contains("<origin-postal-code>K2B8J6</origin-postal-code>"));
        assert!(xml.contains("<quote-type>counter</quote-type>"));
        assert!(xml.contains("<postal-code>J0E1X0</postal-code>"));

        let parsed: MailingScenario = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(parsed, scenario);
    }

    #[test]
    fn test_scenario_skips_absent_fields() {
        let scenario = MailingScenario {
            parcel_characteristics: ParcelCharacteristics::with_weight(0.5),
            ..Default::default()
        };

        let xml = quick_xml::se::to_string(&scenario).unwrap();
        assert!(!xml.contains("customer-number"));
        assert!(!xml.contains("destination"));
        assert!(xml.contains("<weight>0.5</weight>"));
    }

    #[test]
    fn test_parse_price_quotes() {
        let xml = r#"<price-quotes xmlns="http://www.canadapost.ca/ws/ship/rate-v3">
  <price-quote>
    <service-code>DOM.EP</service-code>
    <service-link rel="service" href="https://ct.soa-gw.canadapost.ca/rs/ship/service/DOM.EP" media-type="application/vnd.cpc.ship.rate-v3+xml"/>
    <service-name>Expedited Parcel</service-name>
    <price-details>
      <base>9.59</base>
      <taxes>
        <gst percent="5">0.51</gst>
        <pst>0</pst>
        <hst/>
      </taxes>
      <due>10.10</due>
      <adjustments>
        <adjustment>
          <adjustment-code>FUELSC</adjustment-code>
          <adjustment-name>Fuel surcharge</adjustment-name>
          <adjustment-cost>0.42</adjustment-cost>
        </adjustment>
      </adjustments>
    </price-details>
    <service-standard>
      <am-delivery>false</am-delivery>
      <guaranteed-delivery>true</guaranteed-delivery>
      <expected-transit-time>1</expected-transit-time>
      <expected-delivery-date>2016-07-20</expected-delivery-date>
    </service-standard>
  </price-quote>
  <price-quote>
    <service-code>DOM.XP</service-code>
    <service-name>Xpresspost</service-name>
    <price-details>
      <base>12.26</base>
      <due>12.88</due>
    </price-details>
  </price-quote>
</price-quotes>"#;

        let quotes: PriceQuotes = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(quotes.price_quote.len(), 2);

        let expedited = &quotes.price_quote[0];
        assert_eq!(expedited.service_code, "DOM.EP");
        assert_eq!(expedited.service_name, "Expedited Parcel");
        assert_eq!(expedited.price_details.base, 9.59);
        assert_eq!(expedited.price_details.due, 10.10);

        let taxes = expedited.price_details.taxes.as_ref().unwrap();
        assert_eq!(taxes.gst.as_ref().unwrap().percent.as_deref(), Some("5"));
        assert_eq!(taxes.gst.as_ref().unwrap().amount, Some(0.51));
        assert_eq!(taxes.hst.as_ref().unwrap().amount, None);
        assert!((taxes.total() - 0.51).abs() < f64::EPSILON);

        let link = expedited.service_link.as_ref().unwrap();
        assert_eq!(link.rel, "service");
        assert!(link.href.ends_with("/rs/ship/service/DOM.EP"));

        let standard = expedited.service_standard.as_ref().unwrap();
        assert_eq!(standard.guaranteed_delivery, Some(true));
        assert_eq!(standard.expected_transit_time, Some(1));

        assert_eq!(quotes.cheapest().unwrap().service_code, "DOM.EP");
    }

    #[test]
    fn test_parse_services() {
        let xml = r#"<services xmlns="http://www.canadapost.ca/ws/ship/rate-v3">
  <service>
    <service-code>DOM.EP</service-code>
    <service-name>Expedited Parcel</service-name>
    <link rel="service" href="https://ct.soa-gw.canadapost.ca/rs/ship/service/DOM.EP" media-type="application/vnd.cpc.ship.rate-v3+xml"/>
  </service>
  <service>
    <service-code>DOM.RP</service-code>
    <service-name>Regular Parcel</service-name>
    <link rel="service" href="https://ct.soa-gw.canadapost.ca/rs/ship/service/DOM.RP" media-type="application/vnd.cpc.ship.rate-v3+xml"/>
  </service>
</services>"#;

        let services: Services = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(services.service.len(), 2);
        assert_eq!(services.service[0].service_name, "Expedited Parcel");

        let regular = services.find("DOM.RP").unwrap();
        assert!(regular.link.as_ref().unwrap().href.ends_with("DOM.RP"));
        assert!(services.find("USA.EP").is_none());
    }

    #[test]
    fn test_parse_service_details() {
        let xml = r#"<service xmlns="http://www.canadapost.ca/ws/ship/rate-v3">
  <service-code>DOM.EP</service-code>
  <service-name>Expedited Parcel</service-name>
  <comment>Prepaid delivery standards apply only if items dropped off before cut-off time</comment>
  <options>
    <option>
      <option-code>SO</option-code>
      <option-name>Signature option</option-name>
      <mandatory>false</mandatory>
      <qualifier-required>false</qualifier-required>
    </option>
    <option>
      <option-code>COV</option-code>
      <option-name>Coverage</option-name>
      <qualifier-required>true</qualifier-required>
      <qualifier-max>5000</qualifier-max>
    </option>
  </options>
  <restrictions>
    <weight-restriction min="1" max="30000"/>
    <dimension-restrictions>
      <length max="200"/>
      <width max="200"/>
      <height max="200"/>
      <length-plus-girth-max>300</length-plus-girth-max>
    </dimension-restrictions>
  </restrictions>
</service>"#;

        let service: Service = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(service.service_code, "DOM.EP");
        assert!(service.comment.as_deref().unwrap().contains("cut-off"));

        let options = service.options.as_ref().unwrap();
        assert_eq!(options.option.len(), 2);
        assert_eq!(options.option[0].mandatory, Some(false));
        assert_eq!(options.option[1].qualifier_required, Some(true));
        assert_eq!(options.option[1].qualifier_max, Some(5000.0));

        let restrictions = service.restrictions.as_ref().unwrap();
        let weight = restrictions.weight_restriction.as_ref().unwrap();
        assert_eq!(weight.min, Some(1.0));
        assert_eq!(weight.max, Some(30000.0));
        let dimensions = restrictions.dimension_restrictions.as_ref().unwrap();
        assert_eq!(dimensions.length.as_ref().unwrap().max, Some(200.0));
        assert_eq!(dimensions.length_plus_girth_max, Some(300.0));
    }

    #[test]
    fn test_parse_tracking_detail() {
        let xml = r#"<tracking-detail xmlns="http://www.canadapost.ca/ws/track">
  <pin>1371134583769923</pin>
  <active-exists>1</active-exists>
  <archive-exists/>
  <changed-expected-date/>
  <destination-postal-id>K1G</destination-postal-id>
  <expected-delivery-date>2011-04-05</expected-delivery-date>
  <mailed-by-customer-number>0007023211</mailed-by-customer-number>
  <original-expected-date>2011-04-05</original-expected-date>
  <service-name>Expedited Parcels</service-name>
  <signature-image-exists>true</signature-image-exists>
  <suppress-signature>false</suppress-signature>
  <significant-events>
    <occurrence>
      <event-identifier>1496</event-identifier>
      <event-date>2011-04-04</event-date>
      <event-time>13:34:59</event-time>
      <event-time-zone>EDT</event-time-zone>
      <event-description>Item successfully delivered</event-description>
      <signatory-name>HETU</signatory-name>
      <event-site>OTTAWA</event-site>
      <event-province>ON</event-province>
    </occurrence>
    <occurrence>
      <event-identifier>0100</event-identifier>
      <event-date>2011-04-04</event-date>
      <event-time>08:27:43</event-time>
      <event-time-zone>EDT</event-time-zone>
      <event-description>Item processed at postal facility</event-description>
      <event-site>OTTAWA</event-site>
      <event-province>ON</event-province>
    </occurrence>
  </significant-events>
</tracking-detail>"#;

        let detail: TrackingDetail = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(detail.pin, "1371134583769923");
        assert_eq!(detail.active_exists.as_deref(), Some("1"));
        assert_eq!(detail.expected_delivery_date.as_deref(), Some("2011-04-05"));
        assert_eq!(detail.signature_image_exists, Some(true));
        assert_eq!(detail.suppress_signature, Some(false));

        let events = detail.significant_events.as_ref().unwrap();
        assert_eq!(events.occurrence.len(), 2);

        let latest = detail.latest_event().unwrap();
        assert_eq!(latest.event_identifier, "1496");
        assert_eq!(
            latest.event_description.as_deref(),
            Some("Item successfully delivered")
        );
        assert_eq!(latest.signatory_name.as_deref(), Some("HETU"));
    }

    #[test]
    fn test_parse_messages() {
        let xml = r#"<messages xmlns="http://www.canadapost.ca/ws/messages">
  <message>
    <code>AA004</code>
    <description>Missing or invalid value: postal-code</description>
  </message>
  <message>
    <code>9110</code>
    <description>Contract number is invalid</description>
  </message>
</messages>"#;

        let messages: Messages = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(messages.message.len(), 2);
        assert_eq!(messages.message[0].code, "AA004");
        assert_eq!(messages.message[1].description, "Contract number is invalid");
    }
}
