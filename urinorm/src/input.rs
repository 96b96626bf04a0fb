//! Input coercion for the normalization operations.
//!
//! The public operations accept either a parsed [`Uri`] or a string.
//! [`UriInput`] is the sum type that carries either one, plus an explicit
//! `Missing` case for callers passing an `Option` that turned out empty.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::uri::Uri;

/// A URI argument: a parsed value, a string to parse, or nothing.
///
/// Values are built through the `From` conversions, so the operations can be
/// called with `&Uri`, `Uri`, `&str`, `String` or an `Option` of any of
/// those.
///
/// # Examples
///
/// ```
/// use urinorm::{Uri, UriInput};
///
/// let parsed = Uri::parse("http://example.com/").unwrap();
///
/// let from_uri = UriInput::from(&parsed).coerce().unwrap();
/// let from_str = UriInput::from("http://example.com/").coerce().unwrap();
/// assert_eq!(from_uri, from_str);
///
/// let missing = UriInput::from(None::<&str>).coerce();
/// assert!(missing.unwrap_err().is_missing_argument());
/// ```
#[derive(Debug, Clone)]
pub enum UriInput<'a> {
    /// No argument was supplied.
    Missing,
    /// An already-parsed URI, borrowed or owned.
    Uri(Cow<'a, Uri>),
    /// A string to be parsed.
    Str(Cow<'a, str>),
}

impl<'a> UriInput<'a> {
    /// Produces the URI value this input denotes.
    ///
    /// A borrowed [`Uri`] is returned borrowed; callers clone before they
    /// change anything, so the caller's value is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`] for [`UriInput::Missing`] and
    /// [`Error::Parse`] if a string is not a valid URI reference.
    pub fn coerce(self) -> Result<Cow<'a, Uri>> {
        match self {
            Self::Missing => Err(Error::MissingArgument { name: "uri" }),
            Self::Uri(uri) => Ok(uri),
            Self::Str(s) => Ok(Cow::Owned(Uri::parse(&s)?)),
        }
    }

    /// Whether no argument was supplied.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl<'a> From<&'a Uri> for UriInput<'a> {
    fn from(uri: &'a Uri) -> Self {
        Self::Uri(Cow::Borrowed(uri))
    }
}

impl From<Uri> for UriInput<'_> {
    fn from(uri: Uri) -> Self {
        Self::Uri(Cow::Owned(uri))
    }
}

impl<'a> From<&'a str> for UriInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for UriInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Str(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for UriInput<'_> {
    fn from(s: String) -> Self {
        Self::Str(Cow::Owned(s))
    }
}

impl<'a, T> From<Option<T>> for UriInput<'a>
where
    T: Into<UriInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}
