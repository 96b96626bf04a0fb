#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # urinorm
//!
//! A library for syntax-based URI normalization.
//!
//! Syntactically different but equivalent URI references normalize to the
//! same value, so they compare equal. Normalization combines two steps:
//!
//! 1. Canonicalization (RFC 3986 §6.2.2): lower-case scheme and host,
//!    upper-case percent-encodings, decode percent-encoded unreserved
//!    characters, remove empty and default ports.
//! 2. Dot-segment removal (RFC 3986 §5.2.3): resolve `.` and `..` path
//!    segments.
//!
//! Everything is pure and synchronous: no I/O, no global state, and inputs
//! are never modified.
//!
//! ## Core Types
//!
//! - [`normalize_uri`] and [`remove_dot_segments`]: the two operations
//! - [`Uri`]: the URI value type, with parsing and canonical form
//! - [`UriInput`]: accepts a [`Uri`], a string, or nothing
//! - [`Normalizer`] and [`Config`]: configurable canonicalization
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use urinorm::{normalize_uri, remove_dot_segments};
//!
//! let uri = normalize_uri("HTTPS://www.Example.com:443/../test/../foo/index.html")?;
//! assert_eq!(uri.to_string(), "https://www.example.com/foo/index.html");
//!
//! // Dot-segment removal alone leaves case and port untouched.
//! let uri = remove_dot_segments("HTTPS://www.Example.com:443/../test/../foo/index.html")?;
//! assert_eq!(uri.to_string(), "HTTPS://www.Example.com:443/foo/index.html");
//! # Ok::<(), urinorm::Error>(())
//! ```

pub mod config;
pub mod dot_segments;
pub mod error;
pub mod input;
pub mod normalize;
pub mod uri;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigValidator};
pub use dot_segments::{remove_dot_segments, remove_dot_segments_from_path};
pub use error::{Error, Result};
pub use input::UriInput;
pub use normalize::{are_equivalent, normalize_uri, Normalizer, NormalizerBuilder};
pub use uri::{Canonicalizer, ParseError, Uri};
