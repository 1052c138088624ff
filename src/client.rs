//! Canada Post XML API client implementation.

use crate::error::{CanadaPostError, Result};
use crate::types::{
    Environment, MailingScenario, Messages, PriceQuotes, Service, Services, TrackingDetail,
};
use crate::{DEFAULT_USER_AGENT, RATE_MEDIA_TYPE, TRACK_MEDIA_TYPE};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

/// Processing instruction prepended to every serialized request document
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Configuration for the Canada Post client
#[derive(Debug, Clone)]
pub struct CanadaPostClientConfig {
    /// Override for the gateway base URL derived from the environment;
    /// mainly used to point the client at a mock server in tests
    pub base_url: Option<String>,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for CanadaPostClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Main Canada Post XML API client.
///
/// The client holds no state beyond the HTTP transport and the credential:
/// every operation is a single request/response round trip, and nothing is
/// shared or remembered between calls.
pub struct CanadaPostClient {
    /// HTTP client
    http_client: Client,
    /// API key issued by the Canada Post Developer Program
    api_key: String,
    /// Selected gateway
    environment: Environment,
    /// Client configuration
    config: CanadaPostClientConfig,
}

impl CanadaPostClient {
    /// Create a new client with default configuration
    pub fn new(api_key: impl Into<String>, environment: Environment) -> Result<Self> {
        Self::with_config(api_key, environment, CanadaPostClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        api_key: impl Into<String>,
        environment: Environment,
        config: CanadaPostClientConfig,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http_client,
            api_key: api_key.into(),
            environment,
            config,
        })
    }

    /// The gateway this client talks to
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Get rate quotes for a mailing scenario.
    ///
    /// Serializes the scenario to XML, POSTs it to the rating service, and
    /// returns one quote per eligible service.
    pub async fn get_shipping_rates(&self, scenario: &MailingScenario) -> Result<PriceQuotes> {
        let body = format!("{}{}", XML_DECLARATION, quick_xml::se::to_string(scenario)?);
        let url = format!("{}/rs/ship/price", self.base_url());

        let xml = self
            .request(Method::POST, &url, RATE_MEDIA_TYPE, Some(body))
            .await?;
        let quotes: PriceQuotes = parse_response(&xml)?;

        info!(quotes = quotes.price_quote.len(), "Received rate quotes");
        Ok(quotes)
    }

    /// Get the list of available shipping services.
    ///
    /// When a destination country code is supplied, only services shipping
    /// to that country are listed.
    pub async fn get_services(&self, country_code: Option<&str>) -> Result<Services> {
        let url = self.services_url(country_code)?;

        let xml = self
            .request(Method::GET, url.as_str(), RATE_MEDIA_TYPE, None)
            .await?;
        let services: Services = parse_response(&xml)?;

        info!(services = services.service.len(), "Received service list");
        Ok(services)
    }

    /// Get the details of a single service.
    ///
    /// `url` and `accept_type` come from the `link` entry of a
    /// [`Services`] response; the URL is used verbatim.
    pub async fn get_service_details(&self, url: &str, accept_type: &str) -> Result<Service> {
        let xml = self.request(Method::GET, url, accept_type, None).await?;
        parse_response(&xml)
    }

    /// Get the tracking details for a parcel PIN.
    ///
    /// The PIN format is not validated here; a malformed PIN comes back as
    /// a carrier error.
    pub async fn get_tracking_details(&self, pin: &str) -> Result<TrackingDetail> {
        let url = format!("{}/vis/track/pin/{}/detail", self.base_url(), pin);

        let xml = self
            .request(Method::GET, &url, TRACK_MEDIA_TYPE, None)
            .await?;
        parse_response(&xml)
    }

    /// Perform one authenticated round trip and return the response body.
    ///
    /// A non-2xx status is expected to carry a `messages` document; its
    /// entries become a [`CanadaPostError::Carrier`] error.
    async fn request(
        &self,
        method: Method,
        url: &str,
        accept_type: &str,
        body: Option<String>,
    ) -> Result<String> {
        debug!(%method, url, "Sending request to Canada Post");

        let mut request = self
            .http_client
            .request(method, url)
            .header(AUTHORIZATION, self.authorization_header())
            .header(ACCEPT, accept_type)
            .header(ACCEPT_LANGUAGE, "en-CA");

        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, accept_type).body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(text);
        }

        let messages: Messages = parse_response(&text)?;
        warn!(
            status = %status,
            errors = messages.message.len(),
            "Canada Post reported errors"
        );
        Err(CanadaPostError::carrier(messages.message))
    }

    /// Build the service list URL, appending the country filter only when a
    /// non-empty code is given
    fn services_url(&self, country_code: Option<&str>) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/rs/ship/service", self.base_url()))?;
        if let Some(code) = country_code.filter(|code| !code.is_empty()) {
            url.query_pairs_mut().append_pair("country", code);
        }
        Ok(url)
    }

    /// The raw API key encoded as a Basic credential, matching what the
    /// carrier gateway expects
    fn authorization_header(&self) -> String {
        format!("Basic {}", STANDARD.encode(self.api_key.as_bytes()))
    }

    fn base_url(&self) -> &str {
        self.config
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }
}

/// Parse an XML response body, logging the offending content on failure
fn parse_response<T: DeserializeOwned>(xml: &str) -> Result<T> {
    quick_xml::de::from_str(xml).map_err(|e| {
        warn!("Failed to parse XML response: {}", e);
        warn!("Response content: {}", xml);
        CanadaPostError::from(e)
    })
}
