//! Shared helpers for integration tests.

use urinorm::Uri;

/// The end-to-end example input used across suites.
pub const MIXED_CASE_INPUT: &str = "HTTPS://www.Example.com:443/../test/../foo/index.html";

/// Parses `input`, panicking with the input in the message on failure.
pub fn parse(input: &str) -> Uri {
    Uri::parse(input).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
}
