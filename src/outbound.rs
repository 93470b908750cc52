//! Outbound configuration assembly.
//!
//! Runs the three dispatch stages in fixed order (protocol, then
//! transport, then security), short-circuiting on the first error. No
//! partial configuration is ever returned.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::protocol::ProtocolSettings;
use crate::security::SecuritySettings;
use crate::tags::{ProtocolTag, SecurityTag, TransportTag};
use crate::transport::TransportSettings;
use crate::uri::RawComponents;

/// Transport and security layers of an outbound.
///
/// The security value is present iff the link's security tag is not
/// `none`, so "settings present ⇔ security layer requested" holds by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamSettings {
    /// Transport settings, one active variant.
    pub transport: TransportSettings,
    /// Security-layer settings, absent when security is `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecuritySettings>,
}

impl StreamSettings {
    /// The transport tag of the active transport variant.
    pub fn transport_type(&self) -> TransportTag {
        self.transport.transport_type()
    }

    /// The security tag of the active security variant, `none` when no
    /// security layer is configured.
    pub fn security_type(&self) -> SecurityTag {
        self.security
            .as_ref()
            .map(SecuritySettings::security_type)
            .unwrap_or(SecurityTag::None)
    }
}

/// A fully validated outbound proxy configuration.
///
/// Produced once per parse call and handed to the caller by value; the
/// parser retains nothing across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundConfiguration {
    /// Protocol settings, one active variant.
    pub protocol: ProtocolSettings,
    /// Transport and security layers.
    #[serde(rename = "streamSettings")]
    pub stream: StreamSettings,
    /// Descriptive label from the link fragment, default empty.
    pub descriptive: String,
}

impl OutboundConfiguration {
    /// Assemble a configuration from decomposed link components.
    pub fn from_components(components: &RawComponents) -> Result<Self> {
        let protocol = ProtocolSettings::parse(components)?;
        let transport = TransportSettings::parse(components)?;
        let security = SecuritySettings::parse(components)?;
        Ok(OutboundConfiguration {
            protocol,
            stream: StreamSettings {
                transport,
                security,
            },
            descriptive: components.descriptive.clone(),
        })
    }

    /// The protocol tag of the active protocol variant.
    pub fn protocol_type(&self) -> ProtocolTag {
        self.protocol.protocol_type()
    }
}
