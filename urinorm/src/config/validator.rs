//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::uri::is_scheme;

/// Validates canonicalization options.
///
/// # Examples
///
/// ```
/// use urinorm::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a `default_ports` key is not a valid
    /// scheme name or a port is 0.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref ports) = config.default_ports {
            for (scheme, port) in ports {
                Self::validate_default_port(scheme, *port)?;
            }
        }
        Ok(())
    }

    fn validate_default_port(scheme: &str, port: u16) -> Result<()> {
        if !is_scheme(scheme) {
            return Err(Error::Validation {
                field: format!("default_ports.{scheme}"),
                message: format!("Invalid scheme name: {scheme:?}"),
            });
        }

        if port == 0 {
            return Err(Error::Validation {
                field: format!("default_ports.{scheme}"),
                message: "Port must be greater than 0".into(),
            });
        }

        Ok(())
    }
}
