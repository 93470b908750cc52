//! Per-transport stream settings parsers.
//!
//! Dispatch happens on the `type` tag resolved during decomposition; each
//! parser consumes only its own query keys and applies its own defaults.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::query;
use crate::error::{ConfigError, Result};
use crate::tags::{Encryption, HeaderType, TransportTag};
use crate::uri::RawComponents;

/// Obfuscation header carried by mKCP and QUIC settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Camouflage type.
    pub r#type: HeaderType,
}

/// Plain-TCP stream settings. TCP links consume no query keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpSettings {}

/// mKCP stream settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KcpSettings {
    /// Obfuscation header.
    pub header: Header,
    /// Obfuscation seed, empty when unset.
    pub seed: String,
}

impl KcpSettings {
    fn parse(components: &RawComponents) -> Result<Self> {
        let header_type = parse_header_type(components)?;
        let seed = components
            .query_non_empty(query::SEED)?
            .unwrap_or_default()
            .to_string();
        Ok(KcpSettings {
            header: Header { r#type: header_type },
            seed,
        })
    }
}

/// WebSocket stream settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WsSettings {
    /// Request headers; `Host` defaults to the authority host.
    pub headers: HashMap<String, String>,
    /// Request path, default `/`.
    pub path: String,
}

impl WsSettings {
    fn parse(components: &RawComponents) -> Result<Self> {
        let host = components
            .query_non_empty(query::HOST)?
            .unwrap_or(&components.host)
            .to_string();
        let path = components
            .query_non_empty(query::PATH)?
            .unwrap_or("/")
            .to_string();
        let mut headers = HashMap::new();
        headers.insert("Host".to_string(), host);
        Ok(WsSettings { headers, path })
    }
}

/// HTTP/2 stream settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Host list; a single element, defaulting to the authority host.
    pub host: Vec<String>,
    /// Request path, default `/`.
    pub path: String,
}

impl HttpSettings {
    fn parse(components: &RawComponents) -> Result<Self> {
        let host = components
            .query_non_empty(query::HOST)?
            .unwrap_or(&components.host)
            .to_string();
        let path = components
            .query_non_empty(query::PATH)?
            .unwrap_or("/")
            .to_string();
        Ok(HttpSettings {
            host: vec![host],
            path,
        })
    }
}

/// QUIC stream settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuicSettings {
    /// QUIC payload encryption, default none.
    pub security: Encryption,
    /// Encryption key, empty when security is none.
    pub key: String,
    /// Obfuscation header.
    pub header: Header,
}

impl QuicSettings {
    fn parse(components: &RawComponents) -> Result<Self> {
        let security = match components.query_non_empty(query::QUIC_SECURITY)? {
            None => Encryption::None,
            Some(value) => Encryption::from_tag(value).ok_or_else(|| {
                ConfigError::InvalidEnumValue(query::QUIC_SECURITY, value.to_string())
            })?,
        };
        // The combination rule fires on key presence alone, before the
        // empty check.
        let key = match components.query.get(query::KEY) {
            Some(value) => {
                if security == Encryption::None {
                    return Err(ConfigError::InvalidCombination(
                        "QUIC key requires quicSecurity other than none",
                    ));
                }
                if value.is_empty() {
                    return Err(ConfigError::EmptyField(query::KEY));
                }
                value.clone()
            }
            None => String::new(),
        };
        let header_type = parse_header_type(components)?;
        Ok(QuicSettings {
            security,
            key,
            header: Header { r#type: header_type },
        })
    }
}

/// gRPC stream settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrpcSettings {
    /// Service name, empty when unset.
    #[serde(rename = "serviceName")]
    pub service_name: String,
    /// Multiplexed mode.
    #[serde(rename = "multiMode")]
    pub multi_mode: bool,
}

impl GrpcSettings {
    fn parse(components: &RawComponents) -> Result<Self> {
        let service_name = components
            .query_non_empty(query::SERVICE_NAME)?
            .unwrap_or_default()
            .to_string();
        // Literal equality: any value other than "multi" means false.
        let multi_mode = match components.query_non_empty(query::MODE)? {
            None => false,
            Some(value) => value == "multi",
        };
        Ok(GrpcSettings {
            service_name,
            multi_mode,
        })
    }
}

/// The shared `headerType` policy of mKCP and QUIC.
fn parse_header_type(components: &RawComponents) -> Result<HeaderType> {
    match components.query_non_empty(query::HEADER_TYPE)? {
        None => Ok(HeaderType::None),
        Some(value) => HeaderType::from_tag(value)
            .ok_or_else(|| ConfigError::InvalidEnumValue(query::HEADER_TYPE, value.to_string())),
    }
}

/// Transport-specific settings, exactly one variant per configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportSettings {
    /// Plain TCP.
    Tcp(TcpSettings),
    /// mKCP.
    Kcp(KcpSettings),
    /// WebSocket.
    Ws(WsSettings),
    /// HTTP/2.
    Http(HttpSettings),
    /// QUIC.
    Quic(QuicSettings),
    /// gRPC.
    Grpc(GrpcSettings),
}

impl TransportSettings {
    /// Dispatch to the parser for the transport resolved from `type`.
    pub fn parse(components: &RawComponents) -> Result<Self> {
        match components.transport {
            TransportTag::Tcp => Ok(TransportSettings::Tcp(TcpSettings::default())),
            TransportTag::Kcp => Ok(TransportSettings::Kcp(KcpSettings::parse(components)?)),
            TransportTag::Ws => Ok(TransportSettings::Ws(WsSettings::parse(components)?)),
            TransportTag::Http => Ok(TransportSettings::Http(HttpSettings::parse(components)?)),
            TransportTag::Quic => Ok(TransportSettings::Quic(QuicSettings::parse(components)?)),
            TransportTag::Grpc => Ok(TransportSettings::Grpc(GrpcSettings::parse(components)?)),
        }
    }

    /// The transport tag matching the active settings variant.
    pub fn transport_type(&self) -> TransportTag {
        match self {
            TransportSettings::Tcp(_) => TransportTag::Tcp,
            TransportSettings::Kcp(_) => TransportTag::Kcp,
            TransportSettings::Ws(_) => TransportTag::Ws,
            TransportSettings::Http(_) => TransportTag::Http,
            TransportSettings::Quic(_) => TransportTag::Quic,
            TransportSettings::Grpc(_) => TransportTag::Grpc,
        }
    }
}
