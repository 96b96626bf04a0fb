//! Configuration for canonicalization.
//!
//! This module provides the options that tune the canonical form produced
//! before dot-segment removal:
//! - extra or overriding default ports per scheme
//! - whether percent-encoded unreserved characters are decoded
//! - whether default and empty ports are removed
//!
//! The library reads no files and no environment variables. [`Config`] is
//! serde-deserializable so that host applications can embed it in their own
//! configuration; [`Config::from_yaml_str`] is provided for convenience.
//! [`NormalizerBuilder::with_config`](crate::NormalizerBuilder::with_config)
//! layers several of them with [`ConfigMerger`].
//!
//! # Examples
//!
//! ```
//! use urinorm::config::{Config, ConfigValidator};
//!
//! let config = Config::from_yaml_str(
//!     "default_ports:\n  gemini: 1965\ndecode_unreserved: false\n",
//! )
//! .unwrap();
//!
//! ConfigValidator::validate(&config).unwrap();
//! assert_eq!(config.default_ports.unwrap()["gemini"], 1965);
//! assert_eq!(config.decode_unreserved, Some(false));
//! ```

pub mod merger;
pub mod schema;
pub mod validator;

pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
