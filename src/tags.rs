//! Closed value domains used throughout link parsing.
//!
//! Each enum is a fixed string-to-tag mapping with no members outside the
//! listed set. `from_tag` resolves the link spelling of a value;
//! unrecognized spellings are rejected at the dispatch site (or, for ALPN
//! tokens only, silently dropped; see
//! [`TlsSettings`](crate::TlsSettings)). Defaults are per field, not per
//! domain: `Fingerprint` defaults to `chrome` under TLS/Reality, while
//! `Encryption` defaults to `auto` for VMess but `none` for QUIC.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::scheme;

/// Outbound protocol kinds known to the proxy engine.
///
/// Only the first four are link-expressible; `Dns`, `Freedom` and
/// `Blackhole` are engine-internal outbounds with no link representation
/// and are never produced by link parsing (see [`LinkProtocol`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolTag {
    /// VLESS
    Vless,
    /// VMess
    Vmess,
    /// Trojan
    Trojan,
    /// Shadowsocks
    Shadowsocks,
    /// Engine-internal DNS outbound
    Dns,
    /// Engine-internal direct outbound
    Freedom,
    /// Engine-internal sink outbound
    Blackhole,
}

impl ProtocolTag {
    /// The engine spelling of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolTag::Vless => "vless",
            ProtocolTag::Vmess => "vmess",
            ProtocolTag::Trojan => "trojan",
            ProtocolTag::Shadowsocks => "shadowsocks",
            ProtocolTag::Dns => "dns",
            ProtocolTag::Freedom => "freedom",
            ProtocolTag::Blackhole => "blackhole",
        }
    }
}

impl fmt::Display for ProtocolTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four protocols a share link can name.
///
/// Keeping this separate from [`ProtocolTag`] means the assembler's
/// dispatch is exhaustive over exactly the link-expressible set: the
/// engine-internal tags are unrepresentable on this path rather than
/// guarded by a runtime assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkProtocol {
    /// `vless://`
    Vless,
    /// `vmess://`
    Vmess,
    /// `trojan://` (recognized, parsing permanently unimplemented)
    Trojan,
    /// `shadowsocks://` (recognized, parsing permanently unimplemented)
    Shadowsocks,
}

impl LinkProtocol {
    /// Resolve a lowercase URI scheme to a link protocol.
    pub fn from_scheme(value: &str) -> Option<Self> {
        match value {
            scheme::VLESS => Some(LinkProtocol::Vless),
            scheme::VMESS => Some(LinkProtocol::Vmess),
            scheme::TROJAN => Some(LinkProtocol::Trojan),
            scheme::SHADOWSOCKS => Some(LinkProtocol::Shadowsocks),
            _ => None,
        }
    }

    /// The engine-level tag this link protocol maps to.
    pub fn tag(&self) -> ProtocolTag {
        match self {
            LinkProtocol::Vless => ProtocolTag::Vless,
            LinkProtocol::Vmess => ProtocolTag::Vmess,
            LinkProtocol::Trojan => ProtocolTag::Trojan,
            LinkProtocol::Shadowsocks => ProtocolTag::Shadowsocks,
        }
    }
}

/// Byte-stream carrier beneath the proxy protocol (`type` query key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportTag {
    /// Plain TCP
    #[serde(rename = "tcp")]
    Tcp,
    /// Obfuscated-UDP mKCP
    #[serde(rename = "kcp")]
    Kcp,
    /// WebSocket
    #[serde(rename = "ws")]
    Ws,
    /// HTTP/2
    #[serde(rename = "http")]
    Http,
    /// QUIC
    #[serde(rename = "quic")]
    Quic,
    /// gRPC
    #[serde(rename = "grpc")]
    Grpc,
}

impl TransportTag {
    /// Resolve the link spelling of a transport.
    pub fn from_tag(value: &str) -> Option<Self> {
        match value {
            "tcp" => Some(TransportTag::Tcp),
            "kcp" => Some(TransportTag::Kcp),
            "ws" => Some(TransportTag::Ws),
            "http" => Some(TransportTag::Http),
            "quic" => Some(TransportTag::Quic),
            "grpc" => Some(TransportTag::Grpc),
            _ => None,
        }
    }

    /// The link spelling of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportTag::Tcp => "tcp",
            TransportTag::Kcp => "kcp",
            TransportTag::Ws => "ws",
            TransportTag::Http => "http",
            TransportTag::Quic => "quic",
            TransportTag::Grpc => "grpc",
        }
    }
}

impl fmt::Display for TransportTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional encryption/camouflage wrapper around the transport
/// (`security` query key). Absent defaults to `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityTag {
    /// No security layer
    #[default]
    None,
    /// TLS
    Tls,
    /// Reality (public-key/short-id TLS camouflage)
    Reality,
}

impl SecurityTag {
    /// Resolve the link spelling of a security layer.
    pub fn from_tag(value: &str) -> Option<Self> {
        match value {
            "none" => Some(SecurityTag::None),
            "tls" => Some(SecurityTag::Tls),
            "reality" => Some(SecurityTag::Reality),
            _ => None,
        }
    }

    /// The link spelling of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityTag::None => "none",
            SecurityTag::Tls => "tls",
            SecurityTag::Reality => "reality",
        }
    }
}

impl fmt::Display for SecurityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encryption algorithms accepted by VMess (`encryption`) and QUIC
/// (`quicSecurity`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encryption {
    /// No encryption
    #[serde(rename = "none")]
    None,
    /// Negotiated automatically
    #[serde(rename = "auto")]
    Auto,
    /// No encryption, no authentication
    #[serde(rename = "zero")]
    Zero,
    /// AES-128-GCM
    #[serde(rename = "aes-128-gcm")]
    Aes128Gcm,
    /// ChaCha20-Poly1305
    #[serde(rename = "chacha20-poly1305")]
    Chacha20Poly1305,
}

impl Encryption {
    /// Resolve the link spelling of an encryption algorithm.
    pub fn from_tag(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Encryption::None),
            "auto" => Some(Encryption::Auto),
            "zero" => Some(Encryption::Zero),
            "aes-128-gcm" => Some(Encryption::Aes128Gcm),
            "chacha20-poly1305" => Some(Encryption::Chacha20Poly1305),
            _ => None,
        }
    }

    /// The link spelling of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encryption::None => "none",
            Encryption::Auto => "auto",
            Encryption::Zero => "zero",
            Encryption::Aes128Gcm => "aes-128-gcm",
            Encryption::Chacha20Poly1305 => "chacha20-poly1305",
        }
    }
}

impl fmt::Display for Encryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// VLESS flow control modes (`flow` query key).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flow {
    /// No flow control
    #[default]
    #[serde(rename = "none")]
    None,
    /// XTLS Vision
    #[serde(rename = "xtls-rprx-vision")]
    XtlsRprxVision,
    /// XTLS Vision with UDP-over-443 passthrough
    #[serde(rename = "xtls-rprx-vision-udp443")]
    XtlsRprxVisionUdp443,
}

impl Flow {
    /// Resolve the link spelling of a flow mode.
    pub fn from_tag(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Flow::None),
            "xtls-rprx-vision" => Some(Flow::XtlsRprxVision),
            "xtls-rprx-vision-udp443" => Some(Flow::XtlsRprxVisionUdp443),
            _ => None,
        }
    }

    /// The link spelling of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Flow::None => "none",
            Flow::XtlsRprxVision => "xtls-rprx-vision",
            Flow::XtlsRprxVisionUdp443 => "xtls-rprx-vision-udp443",
        }
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header obfuscation types for mKCP and QUIC (`headerType` query key).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderType {
    /// No obfuscation
    #[default]
    #[serde(rename = "none")]
    None,
    /// SRTP (video call) camouflage
    #[serde(rename = "srtp")]
    Srtp,
    /// uTP (BitTorrent) camouflage
    #[serde(rename = "utp")]
    Utp,
    /// WeChat video call camouflage
    #[serde(rename = "wechat-video")]
    WechatVideo,
    /// DTLS 1.2 camouflage
    #[serde(rename = "dtls")]
    Dtls,
    /// WireGuard camouflage
    #[serde(rename = "wireguard")]
    Wireguard,
}

impl HeaderType {
    /// Resolve the link spelling of a header obfuscation type.
    pub fn from_tag(value: &str) -> Option<Self> {
        match value {
            "none" => Some(HeaderType::None),
            "srtp" => Some(HeaderType::Srtp),
            "utp" => Some(HeaderType::Utp),
            "wechat-video" => Some(HeaderType::WechatVideo),
            "dtls" => Some(HeaderType::Dtls),
            "wireguard" => Some(HeaderType::Wireguard),
            _ => None,
        }
    }

    /// The link spelling of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderType::None => "none",
            HeaderType::Srtp => "srtp",
            HeaderType::Utp => "utp",
            HeaderType::WechatVideo => "wechat-video",
            HeaderType::Dtls => "dtls",
            HeaderType::Wireguard => "wireguard",
        }
    }
}

impl fmt::Display for HeaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// TLS client-hello impersonation profiles (`fp` query key).
///
/// Defaults to `chrome` when the key is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fingerprint {
    /// Chrome
    #[default]
    Chrome,
    /// Firefox
    Firefox,
    /// Safari
    Safari,
    /// iOS
    Ios,
    /// Android
    Android,
    /// Edge
    Edge,
    /// 360 Secure Browser
    #[serde(rename = "360")]
    Qihoo360,
    /// QQ Browser
    Qq,
    /// One fixed random profile
    Random,
    /// Fully randomized profile
    Randomized,
}

impl Fingerprint {
    /// Resolve the link spelling of a fingerprint.
    pub fn from_tag(value: &str) -> Option<Self> {
        match value {
            "chrome" => Some(Fingerprint::Chrome),
            "firefox" => Some(Fingerprint::Firefox),
            "safari" => Some(Fingerprint::Safari),
            "ios" => Some(Fingerprint::Ios),
            "android" => Some(Fingerprint::Android),
            "edge" => Some(Fingerprint::Edge),
            "360" => Some(Fingerprint::Qihoo360),
            "qq" => Some(Fingerprint::Qq),
            "random" => Some(Fingerprint::Random),
            "randomized" => Some(Fingerprint::Randomized),
            _ => None,
        }
    }

    /// The link spelling of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Fingerprint::Chrome => "chrome",
            Fingerprint::Firefox => "firefox",
            Fingerprint::Safari => "safari",
            Fingerprint::Ios => "ios",
            Fingerprint::Android => "android",
            Fingerprint::Edge => "edge",
            Fingerprint::Qihoo360 => "360",
            Fingerprint::Qq => "qq",
            Fingerprint::Random => "random",
            Fingerprint::Randomized => "randomized",
        }
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ALPN tokens advertised during the TLS handshake (`alpn` query key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Alpn {
    /// HTTP/3
    #[serde(rename = "h3")]
    H3,
    /// HTTP/2
    #[serde(rename = "h2")]
    H2,
    /// HTTP/1.1
    #[serde(rename = "http/1.1")]
    Http11,
}

impl Alpn {
    /// Resolve an ALPN token. Unknown tokens yield `None` and are dropped
    /// by the TLS parser rather than rejected.
    pub fn from_tag(value: &str) -> Option<Self> {
        match value {
            "h3" => Some(Alpn::H3),
            "h2" => Some(Alpn::H2),
            "http/1.1" => Some(Alpn::Http11),
            _ => None,
        }
    }

    /// The link spelling of this token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Alpn::H3 => "h3",
            Alpn::H2 => "h2",
            Alpn::Http11 => "http/1.1",
        }
    }

    /// Every known ALPN token, the default set when the `alpn` key is
    /// absent.
    pub fn all() -> [Alpn; 3] {
        [Alpn::H3, Alpn::H2, Alpn::Http11]
    }
}

impl fmt::Display for Alpn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
