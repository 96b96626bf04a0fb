//! Configuration merging and precedence handling.

use crate::config::schema::Config;

/// Layers one configuration over another.
///
/// # Examples
///
/// ```
/// use urinorm::config::{Config, ConfigMerger};
///
/// let low = Config { decode_unreserved: Some(true), ..Default::default() };
/// let high = Config { decode_unreserved: Some(false), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.decode_unreserved, Some(false));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Flags: source overwrites if Some
    /// - Default ports: accumulated, source entries win per scheme
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.decode_unreserved.is_some() {
            target.decode_unreserved = source.decode_unreserved;
        }

        if source.strip_default_port.is_some() {
            target.strip_default_port = source.strip_default_port;
        }

        if let Some(ref ports) = source.default_ports {
            target
                .default_ports
                .get_or_insert_with(Default::default)
                .extend(ports.iter().map(|(scheme, port)| (scheme.clone(), *port)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_merge_overwrites_flags() {
        let mut target = Config {
            decode_unreserved: Some(true),
            strip_default_port: Some(true),
            ..Default::default()
        };
        let source = Config {
            strip_default_port: Some(false),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.decode_unreserved, Some(true));
        assert_eq!(target.strip_default_port, Some(false));
    }

    #[test]
    fn test_merge_default_ports_accumulate() {
        let mut target = Config {
            default_ports: Some(HashMap::from([
                ("gemini".to_string(), 1965),
                ("http".to_string(), 8000),
            ])),
            ..Default::default()
        };
        let source = Config {
            default_ports: Some(HashMap::from([("http".to_string(), 8080)])),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        let ports = target.default_ports.unwrap();
        assert_eq!(ports.len(), 2);
        assert_eq!(ports["gemini"], 1965);
        assert_eq!(ports["http"], 8080);
    }

    #[test]
    fn test_merge_none_values_dont_overwrite() {
        let mut target = Config {
            decode_unreserved: Some(false),
            default_ports: Some(HashMap::from([("gemini".to_string(), 1965)])),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.decode_unreserved, Some(false));
        assert_eq!(target.default_ports.unwrap().len(), 1);
    }
}
