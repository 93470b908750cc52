//! # Share Link Config
//!
//! A validating parser that turns proxy share links into structured
//! outbound configurations for a downstream proxy engine.
//! Supports VLESS and VMess links; Trojan and Shadowsocks schemes are
//! recognized but permanently unimplemented.
//!
//! ## Features
//!
//! - Parse share links into fully validated, structured Rust types
//! - Closed tagged unions for protocol, transport and security dispatch;
//!   a configuration can never hold a mismatched or partially populated
//!   settings variant
//! - Structured errors carrying the error kind, field name and offending
//!   value
//! - Serde support on every configuration type
//!
//! ## Link format and parsing rules (unified)
//!
//! - **Grammar**: `scheme://user@host:port?query#fragment` with
//!   `scheme ∈ {vless, vmess, trojan, shadowsocks}` (case-insensitive).
//! - **Authority**: `user` and `host` must be non-empty; `port` must be
//!   in 1–65535.
//! - **Query string**: Parsed as `application/x-www-form-urlencoded`;
//!   parameter names are case-sensitive and on duplicate keys the last
//!   occurrence wins. `type` is required and selects the transport;
//!   `security` is optional and defaults to `none`. Unrecognized keys are
//!   ignored.
//! - **Fragment (`#`)**: Decoded as a free-text descriptive label.
//! - **Errors**: The first failure at any stage aborts the parse; see
//!   [`ConfigError`] for the taxonomy.
//!
//! Parsing is a pure, synchronous computation: no I/O, no shared state,
//! and nothing outlives a single call, so concurrent callers need no
//! coordination.
//!
//! ## Example
//!
//! ```rust
//! use share_link_config::parse_share_link;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let outbound =
//!     parse_share_link("vless://uuid@example.com:443?type=tcp&security=none#My%20Server")?;
//! assert_eq!(outbound.descriptive, "My Server");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod constants;
mod error;
mod outbound;
mod protocol;
mod security;
mod tags;
mod transport;
mod uri;


pub use error::{ConfigError, Result};
pub use outbound::{OutboundConfiguration, StreamSettings};
pub use protocol::{ProtocolSettings, VlessSettings, VlessUser, VmessSettings, VmessUser};
pub use security::{RealitySettings, SecuritySettings, TlsSettings};
pub use tags::{
    Alpn, Encryption, Fingerprint, Flow, HeaderType, LinkProtocol, ProtocolTag, SecurityTag,
    TransportTag,
};
pub use transport::{
    GrpcSettings, Header, HttpSettings, KcpSettings, QuicSettings, TcpSettings, TransportSettings,
    WsSettings,
};
pub use uri::RawComponents;

/// Parse a share link into an outbound configuration.
///
/// Decomposes the link, then dispatches in fixed order (protocol,
/// transport, security), returning the assembled configuration or the
/// first error encountered.
///
/// # Errors
///
/// Returns [`ConfigError`] if the link is malformed, names an unknown or
/// unimplemented protocol, or fails any field's validation.
///
/// # Example
///
/// ```rust
/// use share_link_config::{parse_share_link, ProtocolTag};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let outbound = parse_share_link("vmess://uuid@example.com:443?type=ws&security=tls")?;
/// assert_eq!(outbound.protocol_type(), ProtocolTag::Vmess);
/// # Ok(())
/// # }
/// ```
pub fn parse_share_link(link: &str) -> Result<OutboundConfiguration> {
    let components = RawComponents::parse(link)?;
    OutboundConfiguration::from_components(&components)
}
