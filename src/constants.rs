//! Shared constants for link schemes and query parameter names.
//!
//! Centralizes magic strings to improve maintainability and consistency
//! (Clean Code: avoid magic strings, use named constants).

/// Link URI scheme names (lowercase, without `://`).
pub mod scheme {
    /// VLESS: `vless://`
    pub const VLESS: &str = "vless";
    /// VMess: `vmess://`
    pub const VMESS: &str = "vmess";
    /// Trojan: `trojan://`
    pub const TROJAN: &str = "trojan";
    /// Shadowsocks: `shadowsocks://`
    pub const SHADOWSOCKS: &str = "shadowsocks";
}

/// Query parameter names recognized by the sub-parsers.
///
/// Parameter names are case-sensitive; anything outside this set is ignored.
pub mod query {
    /// Transport selector, required on every link.
    pub const TYPE: &str = "type";
    /// Security-layer selector, defaults to `none`.
    pub const SECURITY: &str = "security";
    /// VLESS/VMess encryption algorithm.
    pub const ENCRYPTION: &str = "encryption";
    /// VLESS flow control.
    pub const FLOW: &str = "flow";
    /// mKCP/QUIC header obfuscation type.
    pub const HEADER_TYPE: &str = "headerType";
    /// mKCP seed.
    pub const SEED: &str = "seed";
    /// WebSocket/HTTP host header.
    pub const HOST: &str = "host";
    /// WebSocket/HTTP path.
    pub const PATH: &str = "path";
    /// QUIC encryption.
    pub const QUIC_SECURITY: &str = "quicSecurity";
    /// QUIC key.
    pub const KEY: &str = "key";
    /// gRPC service name.
    pub const SERVICE_NAME: &str = "serviceName";
    /// gRPC mode.
    pub const MODE: &str = "mode";
    /// TLS/Reality server name indication.
    pub const SNI: &str = "sni";
    /// TLS/Reality client-hello fingerprint.
    pub const FP: &str = "fp";
    /// TLS ALPN token list.
    pub const ALPN: &str = "alpn";
    /// Reality public key.
    pub const PBK: &str = "pbk";
    /// Reality short ID.
    pub const SID: &str = "sid";
    /// Reality spider X.
    pub const SPX: &str = "spx";
}
