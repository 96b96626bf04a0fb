//! Syntax-based canonicalization (RFC 3986 §6.2.2).
//!
//! The canonical form of a URI has:
//! - a lower-case scheme
//! - a lower-case host
//! - upper-case hex digits in every percent-encoding
//! - percent-encoded unreserved characters decoded (configurable)
//! - no port when the port is empty or the scheme's default (configurable)
//!
//! Dot segments are not touched here; that is the job of
//! [`crate::dot_segments`].

use std::collections::HashMap;

use super::parse::is_unreserved;
use super::Uri;
use crate::config::{Config, ConfigValidator};
use crate::error::Result;

/// Default ports of well-known schemes.
///
/// # Examples
///
/// ```
/// use urinorm::uri::canonical::builtin_default_port;
///
/// assert_eq!(builtin_default_port("https"), Some(443));
/// assert_eq!(builtin_default_port("HTTP"), Some(80));
/// assert_eq!(builtin_default_port("urn"), None);
/// ```
#[must_use]
pub fn builtin_default_port(scheme: &str) -> Option<u16> {
    let port = match scheme.to_ascii_lowercase().as_str() {
        "http" | "ws" => 80,
        "https" | "wss" => 443,
        "ftp" => 21,
        "ssh" | "sftp" => 22,
        "telnet" => 23,
        "gopher" => 70,
        "nntp" => 119,
        "ldap" => 389,
        "rtsp" => 554,
        "ldaps" => 636,
        _ => return None,
    };
    Some(port)
}

/// Produces canonical copies of [`Uri`] values.
///
/// A `Canonicalizer` holds no per-call state and may be shared freely.
///
/// # Examples
///
/// ```
/// use urinorm::{Canonicalizer, Config, Uri};
/// use std::collections::HashMap;
///
/// let config = Config {
///     default_ports: Some(HashMap::from([("myproto".to_string(), 7000)])),
///     ..Default::default()
/// };
/// let canonicalizer = Canonicalizer::from_config(&config).unwrap();
///
/// let uri = Uri::parse("MyProto://Host:7000/%7e").unwrap();
/// assert_eq!(canonicalizer.canonicalize(&uri).unwrap().to_string(), "myproto://host/~");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonicalizer {
    default_ports: HashMap<String, u16>,
    decode_unreserved: bool,
    strip_default_port: bool,
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self {
            default_ports: HashMap::new(),
            decode_unreserved: true,
            strip_default_port: true,
        }
    }
}

impl Canonicalizer {
    /// Creates a canonicalizer with the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a canonicalizer from validated configuration.
    ///
    /// Entries in `default_ports` are added to, and take precedence over,
    /// the built-in table. Scheme names are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configuration is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        ConfigValidator::validate(config)?;

        let default_ports = config
            .default_ports
            .iter()
            .flatten()
            .map(|(scheme, port)| (scheme.to_ascii_lowercase(), *port))
            .collect();

        Ok(Self {
            default_ports,
            decode_unreserved: config.decode_unreserved.unwrap_or(true),
            strip_default_port: config.strip_default_port.unwrap_or(true),
        })
    }

    /// Whether percent-encoded unreserved characters are decoded.
    #[must_use]
    pub fn decodes_unreserved(&self) -> bool {
        self.decode_unreserved
    }

    /// Whether default and empty ports are removed.
    #[must_use]
    pub fn strips_default_port(&self) -> bool {
        self.strip_default_port
    }

    /// The default port for `scheme`, configured entries first.
    #[must_use]
    pub fn default_port(&self, scheme: &str) -> Option<u16> {
        self.default_ports
            .get(&scheme.to_ascii_lowercase())
            .copied()
            .or_else(|| builtin_default_port(scheme))
    }

    /// Returns the canonical form of `uri`. The input is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`](crate::Error::Parse) if the canonical
    /// components do not reassemble into a valid URI.
    pub fn canonicalize(&self, uri: &Uri) -> Result<Uri> {
        let scheme = uri.scheme().map(str::to_ascii_lowercase);
        let authority = self.canonical_authority(uri, scheme.as_deref());
        let query = uri.query().map(|q| self.percent(q));
        let fragment = uri.fragment().map(|f| self.percent(f));

        Uri::from_components(
            scheme.as_deref(),
            authority.as_deref(),
            &self.percent(uri.path()),
            query.as_deref(),
            fragment.as_deref(),
        )
    }

    fn canonical_authority(&self, uri: &Uri, scheme: Option<&str>) -> Option<String> {
        let host = uri.host()?;
        let mut authority = String::new();
        if let Some(userinfo) = uri.userinfo() {
            authority.push_str(&self.percent(userinfo));
            authority.push('@');
        }
        authority.push_str(&lowercase_host(&self.percent(host)));
        if let Some(port) = uri
            .port()
            .filter(|port| !self.is_redundant_port(scheme, port))
        {
            authority.push(':');
            authority.push_str(port);
        }
        Some(authority)
    }

    fn percent(&self, s: &str) -> String {
        normalize_percent_encoding(s, self.decode_unreserved)
    }

    fn is_redundant_port(&self, scheme: Option<&str>, port: &str) -> bool {
        if !self.strip_default_port {
            return false;
        }
        if port.is_empty() {
            return true;
        }
        let default = scheme.and_then(|s| self.default_port(s));
        matches!((default, port.parse::<u16>()), (Some(d), Ok(p)) if d == p)
    }
}

fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

enum Piece<'a> {
    Text(&'a str),
    Triplet(u8),
}

/// Splits `s` into plain text and well-formed `%XX` triplets, in order.
/// A `%` not followed by two hex digits is plain text.
fn for_each_piece<'a>(s: &'a str, mut f: impl FnMut(Piece<'a>)) {
    let mut rest = s;
    while let Some(pos) = rest.find('%') {
        f(Piece::Text(&rest[..pos]));
        let tail = &rest[pos..];
        match tail.as_bytes().get(1..3) {
            Some(&[hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                f(Piece::Triplet(hex_value(hi) * 16 + hex_value(lo)));
                rest = &tail[3..];
            }
            _ => {
                f(Piece::Text("%"));
                rest = &tail[1..];
            }
        }
    }
    f(Piece::Text(rest));
}

fn push_triplet(out: &mut String, value: u8) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    out.push('%');
    out.push(char::from(HEX[usize::from(value >> 4)]));
    out.push(char::from(HEX[usize::from(value & 0x0f)]));
}

/// Upper-cases percent-encoding hex digits and, when `decode_unreserved` is
/// set, decodes triplets that encode unreserved characters.
///
/// # Examples
///
/// ```
/// use urinorm::uri::canonical::normalize_percent_encoding;
///
/// assert_eq!(normalize_percent_encoding("%7e%2f%41", true), "~%2FA");
/// assert_eq!(normalize_percent_encoding("%7e%2f%41", false), "%7E%2F%41");
/// ```
#[must_use]
pub fn normalize_percent_encoding(s: &str, decode_unreserved: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for_each_piece(s, |piece| match piece {
        Piece::Text(text) => out.push_str(text),
        Piece::Triplet(value) if decode_unreserved && is_unreserved(value) => {
            out.push(char::from(value));
        }
        Piece::Triplet(value) => push_triplet(&mut out, value),
    });
    out
}

/// Lower-cases a host while keeping percent-encoding hex digits upper-case.
fn lowercase_host(host: &str) -> String {
    let mut out = String::with_capacity(host.len());
    for_each_piece(host, |piece| match piece {
        Piece::Text(text) => out.push_str(&text.to_ascii_lowercase()),
        Piece::Triplet(value) => push_triplet(&mut out, value),
    });
    out
}
