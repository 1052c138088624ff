//! Error types for the Canada Post client library.

use crate::types::Message;
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CanadaPostError>;

/// Comprehensive error type for all Canada Post API operations
#[derive(Error, Debug)]
pub enum CanadaPostError {
    /// Network or HTTP-related errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// XML parsing errors
    #[error("XML parsing error: {0}")]
    XmlParsing(#[from] quick_xml::DeError),

    /// XML serialization errors (request payloads)
    #[error("XML serialization error: {0}")]
    XmlSerialization(#[from] quick_xml::SeError),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    UrlParsing(#[from] url::ParseError),

    /// The carrier rejected the request with one or more structured messages
    #[error("{}", render_messages(.messages))]
    Carrier {
        /// Error messages exactly as reported by the carrier
        messages: Vec<Message>,
    },
}

/// Render carrier messages the way the shipping plugin reports them, one
/// `Canada Post error {code}: {description}` line per message.
fn render_messages(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| format!("Canada Post error {}: {}", m.code, m.description))
        .collect::<Vec<_>>()
        .join("\n")
}

impl CanadaPostError {
    /// Create a carrier error from a parsed message list
    pub fn carrier(messages: Vec<Message>) -> Self {
        Self::Carrier { messages }
    }

    /// Check if this error was reported by the carrier (non-2xx with a
    /// well-formed error body)
    pub fn is_carrier_error(&self) -> bool {
        matches!(self, CanadaPostError::Carrier { .. })
    }

    /// Check if this error happened at the transport layer
    pub fn is_network_error(&self) -> bool {
        matches!(self, CanadaPostError::Network(_))
    }

    /// The carrier's (code, description) messages, if this is a carrier error
    pub fn carrier_messages(&self) -> Option<&[Message]> {
        match self {
            CanadaPostError::Carrier { messages } => Some(messages),
            _ => None,
        }
    }
}
