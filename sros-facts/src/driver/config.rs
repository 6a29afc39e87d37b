//! Facade configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// Settings applied to every command the facade sends.
///
/// Deserializable so it can live in an inventory file; missing keys take
/// the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FactsConfig {
    /// Prefix each compound command with `paging_command`.
    pub disable_paging: bool,

    /// Command that turns off `--More--` paging.
    pub paging_command: String,

    /// Key used for the base routing instance in `get_bgp_neighbors`.
    pub default_vrf_id: String,

    /// Reported as `SystemFacts::vendor`.
    pub vendor: String,

    /// Output markers of a rejected command. Transcripts containing one are
    /// logged; parsing still goes ahead.
    pub failure_patterns: Vec<String>,
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            disable_paging: true,
            paging_command: "/environment no more".to_string(),
            default_vrf_id: "global".to_string(),
            vendor: "Nokia".to_string(),
            failure_patterns: ["MINOR:", "MAJOR:", "CRITICAL:", "Error:", "Bad Command:"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl FactsConfig {
    /// Check settings that must not be empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.disable_paging && self.paging_command.trim().is_empty() {
            return Err(ConfigError::InvalidConfig {
                message: "paging command is required when paging is disabled".to_string(),
            });
        }
        if self.default_vrf_id.trim().is_empty() {
            return Err(ConfigError::InvalidConfig {
                message: "default VRF id must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Wrap `command` into the text actually sent: the optional paging
    /// prefix, the command, and a trailing newline.
    pub(crate) fn compose(&self, command: &str) -> String {
        let mut text = String::with_capacity(self.paging_command.len() + command.len() + 2);
        if self.disable_paging {
            text.push_str(&self.paging_command);
            text.push('\n');
        }
        text.push_str(command.trim_end_matches(['\r', '\n']));
        text.push('\n');
        text
    }

    /// First failure marker present in `output`.
    pub(crate) fn detect_failure(&self, output: &str) -> Option<&str> {
        self.failure_patterns
            .iter()
            .find(|p| output.contains(p.as_str()))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FactsConfig::default();
        assert!(config.disable_paging);
        assert_eq!(config.default_vrf_id, "global");
        assert_eq!(config.vendor, "Nokia");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_compose() {
        let config = FactsConfig::default();
        assert_eq!(
            config.compose("/show router arp"),
            "/environment no more\n/show router arp\n"
        );
        assert_eq!(
            config.compose("/show router arp\n"),
            "/environment no more\n/show router arp\n"
        );

        let config = FactsConfig {
            disable_paging: false,
            ..Default::default()
        };
        assert_eq!(config.compose("/show chassis"), "/show chassis\n");
    }

    #[test]
    fn test_detect_failure() {
        let config = FactsConfig::default();
        assert_eq!(
            config.detect_failure("MINOR: CLI Command not allowed for this user."),
            Some("MINOR:")
        );
        assert_eq!(config.detect_failure("Peer : 10.0.0.1"), None);
    }

    #[test]
    fn test_validate() {
        let config = FactsConfig {
            paging_command: " ".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = FactsConfig {
            default_vrf_id: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: FactsConfig =
            serde_json::from_str(r#"{"default_vrf_id": "base", "disable_paging": false}"#)
                .unwrap();
        assert_eq!(config.default_vrf_id, "base");
        assert!(!config.disable_paging);
        assert_eq!(config.vendor, "Nokia");
        assert_eq!(config.failure_patterns.len(), 5);
    }
}
