//! The URI value type.
//!
//! [`Uri`] wraps an owned [`fluent_uri::Uri`], which parses RFC 3986 URI
//! references without altering them and keeps the original string. It is the
//! collaborator the normalization operations delegate to: it parses strings,
//! serializes back to strings, produces its own canonical form, and lets
//! callers read and replace the path.
//!
//! Values are never changed in place by the normalization operations. Every
//! method that rewrites a component returns a new `Uri`.
//!
//! # Examples
//!
//! ```
//! use urinorm::Uri;
//!
//! let uri = Uri::parse("HTTP://Example.COM:80/a/%7euser")?;
//! assert_eq!(uri.scheme(), Some("HTTP"));
//! assert_eq!(uri.host(), Some("Example.COM"));
//! assert_eq!(uri.path(), "/a/%7euser");
//!
//! let canonical = uri.canonical()?;
//! assert_eq!(canonical.to_string(), "http://example.com/a/~user");
//! # Ok::<(), urinorm::Error>(())
//! ```

pub mod canonical;
mod parse;

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::dot_segments::remove_dot_segments_from_path;
use crate::error::{Error, Result};

pub use canonical::Canonicalizer;
pub use parse::ParseError;

pub(crate) use parse::is_scheme;

/// An RFC 3986 URI reference.
///
/// Equality and hashing compare the serialized form, so two values are equal
/// exactly when they are written the same way.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    inner: fluent_uri::Uri<String>,
}

impl Uri {
    /// Parses a URI reference.
    ///
    /// Absolute URIs (`scheme:...`) and relative references (`//host/path`,
    /// `/path`, `path`, `?query`, `#fragment`) are both accepted. The string
    /// is kept exactly as given.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the string does not match the
    /// `URI-reference` grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use urinorm::Uri;
    ///
    /// let uri = Uri::parse("../a/b?q#f").unwrap();
    /// assert!(uri.is_relative_reference());
    /// assert_eq!(uri.path(), "../a/b");
    ///
    /// assert!(Uri::parse("http://exa mple.com/").is_err());
    /// ```
    pub fn parse(input: &str) -> std::result::Result<Self, ParseError> {
        parse::parse(input).map(|inner| Self { inner })
    }

    /// Assembles a URI from its components (RFC 3986 §5.3) and parses the
    /// result.
    ///
    /// A path that would be misread gets a dot-segment prefix: `/.` before a
    /// `//` path with no authority, `./` before a scheme-less path whose
    /// first segment contains `:`.
    pub(crate) fn from_components(
        scheme: Option<&str>,
        authority: Option<&str>,
        path: &str,
        query: Option<&str>,
        fragment: Option<&str>,
    ) -> Result<Self> {
        let mut s = String::with_capacity(path.len() + 16);
        if let Some(scheme) = scheme {
            s.push_str(scheme);
            s.push(':');
        }
        if let Some(authority) = authority {
            s.push_str("//");
            s.push_str(authority);
        } else if path.starts_with("//") {
            s.push_str("/.");
        } else if scheme.is_none() && path.split('/').next().is_some_and(|seg| seg.contains(':')) {
            s.push_str("./");
        }
        s.push_str(path);
        if let Some(query) = query {
            s.push('?');
            s.push_str(query);
        }
        if let Some(fragment) = fragment {
            s.push('#');
            s.push_str(fragment);
        }
        Ok(Self::parse(&s)?)
    }

    /// The URI reference as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// The scheme exactly as written, if any.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.inner.scheme().map(|scheme| scheme.as_str())
    }

    /// The authority component without its leading `//`, if any.
    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        self.inner.authority().map(|authority| authority.as_str())
    }

    /// The userinfo subcomponent of the authority, if any.
    #[must_use]
    pub fn userinfo(&self) -> Option<&str> {
        self.inner
            .authority()?
            .userinfo()
            .map(|userinfo| userinfo.as_str())
    }

    /// The host subcomponent of the authority, including brackets for IP
    /// literals.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.inner.authority().map(|authority| authority.host())
    }

    /// The port subcomponent as written; `Some("")` for a bare `:`.
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.inner.authority()?.port()
    }

    /// The port as a number, if present, non-empty and within `u16`.
    #[must_use]
    pub fn port_u16(&self) -> Option<u16> {
        self.port().and_then(|port| port.parse().ok())
    }

    /// The path component. Always present, possibly empty.
    #[must_use]
    pub fn path(&self) -> &str {
        self.inner.path().as_str()
    }

    /// The query component without its leading `?`, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.inner.query().map(|query| query.as_str())
    }

    /// The fragment component without its leading `#`, if any.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.inner.fragment().map(|fragment| fragment.as_str())
    }

    /// Whether this is a relative reference (has no scheme).
    #[must_use]
    pub fn is_relative_reference(&self) -> bool {
        self.inner.is_relative_reference()
    }

    /// Returns a copy of this URI with its path replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path contains `?`, `#` or a
    /// character not allowed in a path, or if the URI has an authority and
    /// the path is neither empty nor starts with `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use urinorm::Uri;
    ///
    /// let uri = Uri::parse("http://example.com/old?q=1").unwrap();
    /// let moved = uri.with_path("/new").unwrap();
    /// assert_eq!(moved.to_string(), "http://example.com/new?q=1");
    /// assert_eq!(uri.path(), "/old");
    ///
    /// assert!(uri.with_path("relative").is_err());
    /// ```
    pub fn with_path(&self, path: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidPath {
            path: path.to_string(),
            reason,
        };
        if path.contains(|c: char| c == '?' || c == '#') {
            return Err(invalid("must not contain '?' or '#'".to_string()));
        }
        if self.authority().is_some() && !path.is_empty() && !path.starts_with('/') {
            return Err(invalid(
                "must be empty or begin with '/' when an authority is present".to_string(),
            ));
        }
        self.replace_path(path)
            .map_err(|err| invalid(err.to_string()))
    }

    fn replace_path(&self, path: &str) -> Result<Self> {
        Self::from_components(
            self.scheme(),
            self.authority(),
            path,
            self.query(),
            self.fragment(),
        )
    }

    /// Returns the canonical form of this URI using the default
    /// [`Canonicalizer`].
    ///
    /// The scheme and host are lower-cased, percent-encodings are upper-cased
    /// (and decoded where they encode unreserved characters), and a port that
    /// is empty or equal to the scheme's default is removed. The path is not
    /// otherwise touched; see [`Uri::normalized`] for full normalization.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the canonical components do not
    /// reassemble into a valid URI.
    pub fn canonical(&self) -> Result<Self> {
        Canonicalizer::default().canonicalize(self)
    }

    /// Returns this URI with `.` and `..` path segments removed.
    ///
    /// Every other component is left exactly as written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the rewritten path does not reassemble
    /// into a valid URI.
    ///
    /// # Examples
    ///
    /// ```
    /// use urinorm::Uri;
    ///
    /// let uri = Uri::parse("HTTP://Example.com:80/a/./b/../c").unwrap();
    /// assert_eq!(
    ///     uri.without_dot_segments().unwrap().to_string(),
    ///     "HTTP://Example.com:80/a/c"
    /// );
    /// ```
    pub fn without_dot_segments(&self) -> Result<Self> {
        let path = remove_dot_segments_from_path(self.path());
        if path == self.path() {
            return Ok(self.clone());
        }
        self.replace_path(&path)
    }

    /// Returns the syntax-normalized form of this URI: its canonical form
    /// with dot segments removed.
    ///
    /// # Errors
    ///
    /// Fails as [`Uri::canonical`] and [`Uri::without_dot_segments`] do.
    ///
    /// # Examples
    ///
    /// ```
    /// use urinorm::Uri;
    ///
    /// let uri = Uri::parse("HTTPS://www.Example.com:443/../test/../foo/index.html").unwrap();
    /// assert_eq!(
    ///     uri.normalized().unwrap().to_string(),
    ///     "https://www.example.com/foo/index.html"
    /// );
    /// ```
    pub fn normalized(&self) -> Result<Self> {
        self.canonical()?.without_dot_segments()
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Uri").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = ParseError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Serialize for Uri {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Uri {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
