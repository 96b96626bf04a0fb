//! Syntax-based URI normalization.
//!
//! Normalization is canonicalization (see [`crate::uri::canonical`])
//! followed by dot-segment removal (see [`crate::dot_segments`]). Two URIs
//! whose normalized forms are equal are syntactically equivalent.

use crate::config::{Config, ConfigMerger};
use crate::error::Result;
use crate::input::UriInput;
use crate::uri::{Canonicalizer, Uri};

/// Normalizes a URI with the default canonicalization rules.
///
/// The input is coerced as described in [`UriInput::coerce`], brought into
/// canonical form, and its path is cleared of `.` and `..` segments. A
/// [`Uri`] passed by reference is not modified; the result is a new value.
///
/// # Errors
///
/// Returns [`Error::MissingArgument`](crate::Error::MissingArgument) if the
/// input is missing and [`Error::Parse`](crate::Error::Parse) if a string
/// input cannot be parsed.
///
/// # Examples
///
/// ```
/// use urinorm::normalize_uri;
///
/// let uri = normalize_uri("HTTPS://www.Example.com:443/../test/../foo/index.html")?;
/// assert_eq!(uri.to_string(), "https://www.example.com/foo/index.html");
///
/// assert!(normalize_uri(None::<&str>).unwrap_err().is_missing_argument());
/// # Ok::<(), urinorm::Error>(())
/// ```
pub fn normalize_uri<'a>(input: impl Into<UriInput<'a>>) -> Result<Uri> {
    Normalizer::default().normalize(input)
}

/// Checks whether two URIs have the same normalized form.
///
/// # Errors
///
/// Fails as [`normalize_uri`] does if either input is missing or invalid.
///
/// # Examples
///
/// ```
/// use urinorm::are_equivalent;
///
/// assert!(are_equivalent("HTTP://Example.com:80/a/./b/../c", "http://example.com/a/c")?);
/// assert!(!are_equivalent("http://example.com/a", "http://example.com/b")?);
/// # Ok::<(), urinorm::Error>(())
/// ```
pub fn are_equivalent<'a, 'b>(
    a: impl Into<UriInput<'a>>,
    b: impl Into<UriInput<'b>>,
) -> Result<bool> {
    let normalizer = Normalizer::default();
    Ok(normalizer.normalize(a)? == normalizer.normalize(b)?)
}

/// A reusable normalizer with configurable canonicalization.
///
/// A `Normalizer` is immutable and holds no per-call state, so one instance
/// can serve any number of threads.
///
/// # Examples
///
/// ```
/// use urinorm::Normalizer;
///
/// let normalizer = Normalizer::builder()
///     .default_port("gemini", 1965)
///     .build()
///     .unwrap();
///
/// let uri = normalizer.normalize("GEMINI://Example.org:1965/a/../b").unwrap();
/// assert_eq!(uri.to_string(), "gemini://example.org/b");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalizer {
    canonicalizer: Canonicalizer,
}

impl Normalizer {
    /// Creates a normalizer with the default canonicalization rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a normalizer from configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configuration is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            canonicalizer: Canonicalizer::from_config(config)?,
        })
    }

    /// Starts building a normalizer.
    #[must_use]
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::new()
    }

    /// The canonicalizer applied before dot-segment removal.
    #[must_use]
    pub fn canonicalizer(&self) -> &Canonicalizer {
        &self.canonicalizer
    }

    /// Normalizes a URI: canonical form, then dot-segment removal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`](crate::Error::MissingArgument) if
    /// the input is missing and [`Error::Parse`](crate::Error::Parse) if a
    /// string input cannot be parsed.
    pub fn normalize<'a>(&self, input: impl Into<UriInput<'a>>) -> Result<Uri> {
        let uri = input.into().coerce()?;
        log::trace!("normalizing {uri}");

        let canonical = self.canonicalizer.canonicalize(&uri)?;
        let normalized = canonical.without_dot_segments()?;

        if normalized != *uri {
            log::debug!("normalized {uri} -> {normalized}");
        }
        Ok(normalized)
    }
}

/// Builder for [`Normalizer`].
///
/// Settings are collected into a [`Config`] and validated on
/// [`build`](NormalizerBuilder::build).
///
/// # Examples
///
/// ```
/// use urinorm::{Config, Normalizer};
///
/// let base = Config::from_yaml_str("decode_unreserved: false").unwrap();
/// let normalizer = Normalizer::builder()
///     .with_config(base)
///     .strip_default_port(false)
///     .build()
///     .unwrap();
///
/// let uri = normalizer.normalize("HTTP://h:80/%7e/./x").unwrap();
/// assert_eq!(uri.to_string(), "http://h:80/%7E/x");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NormalizerBuilder {
    config: Config,
}

impl NormalizerBuilder {
    /// Creates a builder with no settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers `config` over the settings collected so far.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        ConfigMerger::merge_into(&mut self.config, &config);
        self
    }

    /// Adds or overrides the default port of `scheme`.
    #[must_use]
    pub fn default_port(mut self, scheme: &str, port: u16) -> Self {
        self.config
            .default_ports
            .get_or_insert_with(Default::default)
            .insert(scheme.to_string(), port);
        self
    }

    /// Sets whether percent-encoded unreserved characters are decoded.
    #[must_use]
    pub fn decode_unreserved(mut self, enabled: bool) -> Self {
        self.config.decode_unreserved = Some(enabled);
        self
    }

    /// Sets whether empty and default ports are removed.
    #[must_use]
    pub fn strip_default_port(mut self, enabled: bool) -> Self {
        self.config.strip_default_port = Some(enabled);
        self
    }

    /// Validates the settings and builds the normalizer.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a scheme name is invalid or a port is 0.
    pub fn build(self) -> Result<Normalizer> {
        Normalizer::from_config(&self.config)
    }
}
