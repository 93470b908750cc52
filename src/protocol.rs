//! Per-protocol outbound settings parsers.
//!
//! One parser per link protocol. VLESS and VMess produce real settings;
//! Trojan and Shadowsocks are recognized schemes whose parsers are
//! permanent stubs returning
//! [`ConfigError::UnimplementedProtocol`], a stable contract callers can
//! distinguish from an unknown scheme.

use serde::{Deserialize, Serialize};

use crate::constants::query;
use crate::error::{ConfigError, Result};
use crate::tags::{Encryption, Flow, LinkProtocol, ProtocolTag};
use crate::uri::RawComponents;

/// VLESS user credentials and per-user options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlessUser {
    /// User UUID taken from the link authority.
    pub id: String,
    /// Encryption algorithm; VLESS only ever accepts the literal `"none"`.
    pub encryption: String,
    /// Flow control mode.
    pub flow: Flow,
}

/// VLESS outbound settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlessSettings {
    /// Server address.
    pub address: String,
    /// Server port.
    pub port: u16,
    /// User settings.
    pub user: VlessUser,
}

impl VlessSettings {
    fn parse(components: &RawComponents) -> Result<Self> {
        let encryption = match components.query_non_empty(query::ENCRYPTION)? {
            None => "none".to_string(),
            Some("none") => "none".to_string(),
            Some(value) => {
                return Err(ConfigError::InvalidEnumValue(
                    query::ENCRYPTION,
                    value.to_string(),
                ));
            }
        };
        let flow = match components.query_non_empty(query::FLOW)? {
            None => Flow::None,
            Some(value) => Flow::from_tag(value)
                .ok_or_else(|| ConfigError::InvalidEnumValue(query::FLOW, value.to_string()))?,
        };
        Ok(VlessSettings {
            address: components.host.clone(),
            port: components.port,
            user: VlessUser {
                id: components.user.clone(),
                encryption,
                flow,
            },
        })
    }
}

/// VMess user credentials and per-user options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmessUser {
    /// User UUID taken from the link authority.
    pub id: String,
    /// Encryption algorithm, default `auto`.
    pub security: Encryption,
}

/// VMess outbound settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmessSettings {
    /// Server address.
    pub address: String,
    /// Server port.
    pub port: u16,
    /// User settings.
    pub user: VmessUser,
}

impl VmessSettings {
    fn parse(components: &RawComponents) -> Result<Self> {
        let security = match components.query_non_empty(query::ENCRYPTION)? {
            None => Encryption::Auto,
            Some(value) => Encryption::from_tag(value).ok_or_else(|| {
                ConfigError::InvalidEnumValue(query::ENCRYPTION, value.to_string())
            })?,
        };
        Ok(VmessSettings {
            address: components.host.clone(),
            port: components.port,
            user: VmessUser {
                id: components.user.clone(),
                security,
            },
        })
    }
}

/// Protocol-specific settings, exactly one variant per configuration.
///
/// Trojan and Shadowsocks never appear here: their parsers fail before a
/// settings value exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolSettings {
    /// VLESS outbound.
    Vless(VlessSettings),
    /// VMess outbound.
    Vmess(VmessSettings),
}

impl ProtocolSettings {
    /// Dispatch to the parser for the link's protocol.
    pub fn parse(components: &RawComponents) -> Result<Self> {
        match components.protocol {
            LinkProtocol::Vless => Ok(ProtocolSettings::Vless(VlessSettings::parse(components)?)),
            LinkProtocol::Vmess => Ok(ProtocolSettings::Vmess(VmessSettings::parse(components)?)),
            LinkProtocol::Trojan | LinkProtocol::Shadowsocks => Err(
                ConfigError::UnimplementedProtocol(components.protocol.tag()),
            ),
        }
    }

    /// The protocol tag matching the active settings variant.
    pub fn protocol_type(&self) -> ProtocolTag {
        match self {
            ProtocolSettings::Vless(_) => ProtocolTag::Vless,
            ProtocolSettings::Vmess(_) => ProtocolTag::Vmess,
        }
    }
}
