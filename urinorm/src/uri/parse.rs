//! URI reference parsing.
//!
//! Parsing itself is done by [`fluent_uri`], which checks the string against
//! the `URI-reference` grammar of RFC 3986 without changing it. This module
//! wraps its error with the rejected input and holds the few character
//! classes the rest of the crate needs.

use std::str::FromStr;

use thiserror::Error;

/// Error returned when a string is not a valid URI reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid URI {input:?}: {reason}")]
pub struct ParseError {
    input: String,
    reason: String,
}

impl ParseError {
    fn new(input: &str, err: &fluent_uri::ParseError) -> Self {
        Self {
            input: input.to_string(),
            reason: err.to_string(),
        }
    }

    /// The string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// What was wrong with it, including the byte index of the problem.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Parses `input` into an owned [`fluent_uri::Uri`].
pub(crate) fn parse(input: &str) -> Result<fluent_uri::Uri<String>, ParseError> {
    let uri = fluent_uri::Uri::<String>::from_str(input)
        .map_err(|err| ParseError::new(input, &err))?;
    log::trace!("parsed URI {input:?}");
    Ok(uri)
}

pub(crate) fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Whether `s` matches `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
pub(crate) fn is_scheme(s: &str) -> bool {
    let mut bytes = s.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_input_verbatim() {
        for input in [
            "HTTPS://User@Example.COM:0443/a/./b/../c?Q=%3d#F",
            "mid/content=5/../6",
            "",
        ] {
            assert_eq!(parse(input).unwrap().as_str(), input);
        }
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        for input in [
            "http://example.com/a b",
            "/caf\u{e9}",
            "/a%2",
            "/a%zz",
            "http://example.com:80a/",
            "http://[::1/",
            "http://[]/",
            "http://example.com/[x]",
            ":nothing",
        ] {
            assert!(parse(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_error_keeps_input_and_reason() {
        let err = parse("http://exa mple.com").unwrap_err();
        assert_eq!(err.input(), "http://exa mple.com");
        assert!(!err.reason().is_empty());
        assert!(err.to_string().starts_with("invalid URI \"http://exa mple.com\""));
    }

    #[test]
    fn test_is_scheme() {
        assert!(is_scheme("http"));
        assert!(is_scheme("svn+ssh"));
        assert!(!is_scheme(""));
        assert!(!is_scheme("9p"));
        assert!(!is_scheme("a b"));
    }

    #[test]
    fn test_is_unreserved() {
        for b in b"azAZ09-._~" {
            assert!(is_unreserved(*b));
        }
        for b in b"%/?#[]@!$&'()*+,;=: " {
            assert!(!is_unreserved(*b));
        }
    }
}
