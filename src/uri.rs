//! Share-link decomposition.
//!
//! Splits a raw link into scheme, user, host, port, query mapping and
//! fragment, and resolves the two dispatch-critical query keys (`type`,
//! `security`) up front since they select the transport and security
//! parsers. The result is consumed once by
//! [`OutboundConfiguration::from_components`](crate::OutboundConfiguration::from_components)
//! and discarded.
//!
//! ## Parsing rules
//!
//! 1. Scheme is case-insensitive; a link without `://` is `MalformedUri`,
//!    an unknown scheme is `UnsupportedProtocol`.
//! 2. The authority must read `user@host:port` with user and host
//!    non-empty and port in 1–65535.
//! 3. Query pairs are `application/x-www-form-urlencoded`; names are
//!    case-sensitive and on duplicates the last occurrence wins.
//! 4. The fragment is percent-decoded into a free-text descriptive label.

use std::collections::HashMap;

use crate::constants::query;
use crate::error::{ConfigError, Result};
use crate::tags::{LinkProtocol, SecurityTag, TransportTag};

/// The decomposed parts of a share link, plus the three tags resolved
/// during decomposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawComponents {
    /// Link protocol resolved from the scheme.
    pub protocol: LinkProtocol,
    /// Identity token (UUID or password), non-empty.
    pub user: String,
    /// Server domain name or address, non-empty.
    pub host: String,
    /// Server port, 1–65535.
    pub port: u16,
    /// Query mapping, last occurrence wins on duplicate keys.
    pub query: HashMap<String, String>,
    /// Transport resolved from the required `type` key.
    pub transport: TransportTag,
    /// Security layer resolved from the optional `security` key.
    pub security: SecurityTag,
    /// Descriptive label from the fragment, default empty.
    pub descriptive: String,
}

impl RawComponents {
    /// Decompose a share link and resolve its dispatch tags.
    pub fn parse(link: &str) -> Result<Self> {
        let (scheme_part, body) = link.split_once("://").ok_or(ConfigError::MalformedUri)?;
        let protocol = LinkProtocol::from_scheme(&scheme_part.to_lowercase())
            .ok_or_else(|| ConfigError::UnsupportedProtocol(scheme_part.to_string()))?;

        // Split into parts: user@host:port[?query][#fragment]
        let (before_hash, fragment) = match body.find('#') {
            Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
            None => (body, None),
        };
        let (main_part, query_part) = match before_hash.find('?') {
            Some(pos) => (&before_hash[..pos], Some(&before_hash[pos + 1..])),
            None => (before_hash, None),
        };

        let (user, host_port) = match main_part.find('@') {
            Some(pos) => (&main_part[..pos], &main_part[pos + 1..]),
            None => return Err(ConfigError::MissingField("user")),
        };
        if user.is_empty() {
            return Err(ConfigError::MissingField("user"));
        }

        let (host, port_str) = match host_port.rfind(':') {
            Some(pos) => (&host_port[..pos], &host_port[pos + 1..]),
            None => return Err(ConfigError::MissingField("port")),
        };
        if host.is_empty() {
            return Err(ConfigError::MissingField("host"));
        }
        if port_str.is_empty() {
            return Err(ConfigError::MissingField("port"));
        }
        // A non-numeric port means the authority never decomposed.
        let port: u32 = port_str.parse().map_err(|_| ConfigError::MalformedUri)?;
        if !(1..=65535).contains(&port) {
            return Err(ConfigError::OutOfRangeValue("port"));
        }

        let query_map: HashMap<String, String> = match query_part {
            Some(q) => url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect(),
            None => HashMap::new(),
        };

        let transport = match query_map.get(query::TYPE) {
            None => return Err(ConfigError::MissingField(query::TYPE)),
            Some(value) if value.is_empty() => return Err(ConfigError::EmptyField(query::TYPE)),
            Some(value) => TransportTag::from_tag(value)
                .ok_or_else(|| ConfigError::InvalidEnumValue(query::TYPE, value.clone()))?,
        };
        let security = match query_map.get(query::SECURITY) {
            None => SecurityTag::None,
            Some(value) if value.is_empty() => {
                return Err(ConfigError::EmptyField(query::SECURITY));
            }
            Some(value) => SecurityTag::from_tag(value)
                .ok_or_else(|| ConfigError::InvalidEnumValue(query::SECURITY, value.clone()))?,
        };

        let descriptive = fragment
            .map(|s| urlencoding::decode(s).unwrap_or_default().into_owned())
            .unwrap_or_default();

        Ok(RawComponents {
            protocol,
            user: user.to_string(),
            host: host.to_string(),
            port: port as u16,
            query: query_map,
            transport,
            security,
            descriptive,
        })
    }

    /// A query value under the shared absent/empty policy: absent is
    /// `None` (caller applies its default), present-but-empty is an
    /// [`ConfigError::EmptyField`] error, anything else is the value.
    pub fn query_non_empty(&self, key: &'static str) -> Result<Option<&str>> {
        match self.query.get(key) {
            None => Ok(None),
            Some(value) if value.is_empty() => Err(ConfigError::EmptyField(key)),
            Some(value) => Ok(Some(value.as_str())),
        }
    }

    /// A query value used verbatim, where absent and explicitly empty
    /// both mean `""` (Reality `sid`/`spx` only).
    pub fn query_or_empty(&self, key: &str) -> String {
        self.query.get(key).cloned().unwrap_or_default()
    }
}
