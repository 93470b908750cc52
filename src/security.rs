//! Per-security-layer stream settings parsers.
//!
//! `security=none` produces no settings value at all; TLS and Reality each
//! read their own query keys. Two policies here deliberately diverge from
//! the strict absent/empty/unknown rule used everywhere else:
//!
//! - TLS `alpn` silently drops tokens that match no known ALPN tag
//!   instead of rejecting them.
//! - Reality `sid` and `spx` treat an explicitly empty value the same as
//!   an absent one.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::query;
use crate::error::{ConfigError, Result};
use crate::tags::{Alpn, Fingerprint, SecurityTag};
use crate::uri::RawComponents;

/// TLS stream settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsSettings {
    /// Server name sent in the handshake, default authority host.
    #[serde(rename = "serverName")]
    pub server_name: String,
    /// Client-hello impersonation profile, default chrome.
    pub fingerprint: Fingerprint,
    /// Advertised ALPN tokens, default all known tokens.
    pub alpn: BTreeSet<Alpn>,
}

impl TlsSettings {
    fn parse(components: &RawComponents) -> Result<Self> {
        let server_name = components
            .query_non_empty(query::SNI)?
            .unwrap_or(&components.host)
            .to_string();
        let fingerprint = parse_fingerprint(components)?;
        let alpn = match components.query_non_empty(query::ALPN)? {
            None => Alpn::all().into_iter().collect(),
            Some(value) => value.split(',').filter_map(Alpn::from_tag).collect(),
        };
        Ok(TlsSettings {
            server_name,
            fingerprint,
            alpn,
        })
    }
}

/// Reality stream settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealitySettings {
    /// Server public key, required.
    #[serde(rename = "publicKey")]
    pub public_key: String,
    /// Short ID, empty when unset.
    #[serde(rename = "shortId")]
    pub short_id: String,
    /// Spider X, empty when unset.
    #[serde(rename = "spiderX")]
    pub spider_x: String,
    /// Server name sent in the handshake, default authority host.
    #[serde(rename = "serverName")]
    pub server_name: String,
    /// Client-hello impersonation profile, default chrome.
    pub fingerprint: Fingerprint,
}

impl RealitySettings {
    fn parse(components: &RawComponents) -> Result<Self> {
        let public_key = match components.query.get(query::PBK) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => return Err(ConfigError::MissingField(query::PBK)),
        };
        let short_id = components.query_or_empty(query::SID);
        let spider_x = components.query_or_empty(query::SPX);
        let server_name = components
            .query_non_empty(query::SNI)?
            .unwrap_or(&components.host)
            .to_string();
        let fingerprint = parse_fingerprint(components)?;
        Ok(RealitySettings {
            public_key,
            short_id,
            spider_x,
            server_name,
            fingerprint,
        })
    }
}

/// The shared `fp` policy of TLS and Reality.
fn parse_fingerprint(components: &RawComponents) -> Result<Fingerprint> {
    match components.query_non_empty(query::FP)? {
        None => Ok(Fingerprint::default()),
        Some(value) => Fingerprint::from_tag(value)
            .ok_or_else(|| ConfigError::InvalidEnumValue(query::FP, value.to_string())),
    }
}

/// Security-layer settings, exactly one variant per configuration.
///
/// `security=none` is represented by the absence of this value, not by a
/// variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecuritySettings {
    /// TLS.
    Tls(TlsSettings),
    /// Reality.
    Reality(RealitySettings),
}

impl SecuritySettings {
    /// Dispatch to the parser for the security layer resolved from
    /// `security`; `None` means no security layer was requested.
    pub fn parse(components: &RawComponents) -> Result<Option<Self>> {
        match components.security {
            SecurityTag::None => Ok(None),
            SecurityTag::Tls => Ok(Some(SecuritySettings::Tls(TlsSettings::parse(components)?))),
            SecurityTag::Reality => Ok(Some(SecuritySettings::Reality(RealitySettings::parse(
                components,
            )?))),
        }
    }

    /// The security tag matching the active settings variant.
    pub fn security_type(&self) -> SecurityTag {
        match self {
            SecuritySettings::Tls(_) => SecurityTag::Tls,
            SecuritySettings::Reality(_) => SecurityTag::Reality,
        }
    }
}
