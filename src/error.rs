//! Error types for share-link parsing.
//!
//! Every failure carries its kind plus the field name (and offending value
//! where one exists), so callers and tests can match on the error kind
//! instead of message text:
//! - **MalformedUri**: The input cannot be decomposed into scheme, authority,
//!   query and fragment at all.
//! - **UnsupportedProtocol**: The scheme is not in the link-expressible
//!   protocol set (`vless`, `vmess`, `trojan`, `shadowsocks`).
//! - **UnimplementedProtocol**: The scheme is recognized but its parser is a
//!   permanent stub (Trojan, Shadowsocks).
//! - **MissingField** / **EmptyField** / **InvalidEnumValue** /
//!   **OutOfRangeValue** / **InvalidCombination**: Per-field validation
//!   failures; the first one encountered aborts the whole parse.

use std::fmt;

use crate::tags::ProtocolTag;

/// Result type for share-link parsing operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while parsing a share link into an outbound
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The link cannot be decomposed into its URI components.
    MalformedUri,
    /// The URI scheme does not name any link-expressible protocol.
    UnsupportedProtocol(String),
    /// The protocol is recognized but link parsing for it is a permanent
    /// stub. Distinct from [`ConfigError::UnsupportedProtocol`]: the scheme
    /// itself is valid.
    UnimplementedProtocol(ProtocolTag),
    /// A required field or query key is absent and has no default.
    MissingField(&'static str),
    /// A query key is present with an empty value where empty is disallowed.
    EmptyField(&'static str),
    /// A query value does not map to any tag in its closed domain.
    InvalidEnumValue(&'static str, String),
    /// A numeric field is outside its valid bounds (port).
    OutOfRangeValue(&'static str),
    /// A cross-field rule is violated (e.g. QUIC `key` without
    /// `quicSecurity`).
    InvalidCombination(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MalformedUri => write!(f, "Malformed share link"),
            ConfigError::UnsupportedProtocol(scheme) => {
                write!(f, "Unsupported protocol: {}", scheme)
            }
            ConfigError::UnimplementedProtocol(tag) => {
                write!(f, "Protocol not implemented yet: {}", tag)
            }
            ConfigError::MissingField(name) => write!(f, "Missing required field: {}", name),
            ConfigError::EmptyField(name) => write!(f, "Field cannot be empty: {}", name),
            ConfigError::InvalidEnumValue(name, value) => {
                write!(f, "Invalid value for {}: {}", name, value)
            }
            ConfigError::OutOfRangeValue(name) => write!(f, "Value out of range: {}", name),
            ConfigError::InvalidCombination(description) => {
                write!(f, "Invalid combination: {}", description)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
