//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;

/// Canonicalization options.
///
/// Every field is optional; an unset field takes the built-in default.
///
/// # Examples
///
/// ```
/// use urinorm::config::Config;
/// use std::collections::HashMap;
///
/// let config = Config {
///     default_ports: Some(HashMap::from([("gemini".to_string(), 1965)])),
///     ..Default::default()
/// };
/// assert_eq!(config.strip_default_port, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default ports added to, or overriding, the built-in table.
    ///
    /// Keys are scheme names and are matched case-insensitively.
    pub default_ports: Option<HashMap<String, u16>>,

    /// Decode percent-encoded unreserved characters (default: true).
    pub decode_unreserved: Option<bool>,

    /// Remove a port that is empty or the scheme's default (default: true).
    pub strip_default_port: Option<bool>,
}

impl Config {
    /// Deserializes configuration from a YAML document.
    ///
    /// The result is not validated; see
    /// [`ConfigValidator`](crate::config::ConfigValidator).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) if the
    /// document is malformed or names an unknown field.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
