//! Builder for the facts facade.

use super::config::FactsConfig;
use super::sros::SrosFacts;
use super::CommandSession;
use crate::error::ConfigError;

/// Builder for constructing an [`SrosFacts`] facade over a session.
///
/// # Example
///
/// ```rust,no_run
/// use sros_facts::driver::{CommandSession, SrosFactsBuilder};
///
/// # async fn example<S: CommandSession>(session: S) -> Result<(), Box<dyn std::error::Error>> {
/// let mut facts = SrosFactsBuilder::new(session)
///     .default_vrf_id("base")
///     .build()?;
///
/// let arp = facts.get_arp_table().await?;
/// # Ok(())
/// # }
/// ```
pub struct SrosFactsBuilder<S> {
    session: S,
    config: FactsConfig,
}

impl<S: CommandSession> SrosFactsBuilder<S> {
    /// Start from the default configuration.
    pub fn new(session: S) -> Self {
        Self {
            session,
            config: FactsConfig::default(),
        }
    }

    /// Replace the whole configuration, e.g. one loaded from a file.
    pub fn config(mut self, config: FactsConfig) -> Self {
        self.config = config;
        self
    }

    /// Prefix commands with the paging command (default: true).
    pub fn disable_paging(mut self, disable: bool) -> Self {
        self.config.disable_paging = disable;
        self
    }

    /// Set the paging command (default: `/environment no more`).
    pub fn paging_command(mut self, command: impl Into<String>) -> Self {
        self.config.paging_command = command.into();
        self
    }

    /// Set the key used for the base router in `get_bgp_neighbors`
    /// (default: `global`).
    pub fn default_vrf_id(mut self, id: impl Into<String>) -> Self {
        self.config.default_vrf_id = id.into();
        self
    }

    /// Set the reported vendor (default: `Nokia`).
    pub fn vendor(mut self, vendor: impl Into<String>) -> Self {
        self.config.vendor = vendor.into();
        self
    }

    /// Add an output marker of a rejected command.
    pub fn failure_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.failure_patterns.push(pattern.into());
        self
    }

    /// Validate the configuration and build the facade.
    ///
    /// Nothing is sent to the session here.
    pub fn build(self) -> Result<SrosFacts<S>, ConfigError> {
        self.config.validate()?;
        Ok(SrosFacts::new(self.session, self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    struct Silent;

    impl CommandSession for Silent {
        type Error = Infallible;

        async fn command(&mut self, _command: &str) -> Result<String, Infallible> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_builder_defaults() {
        let facts = SrosFactsBuilder::new(Silent).build().unwrap();
        assert_eq!(facts.config(), &FactsConfig::default());
    }

    #[test]
    fn test_builder_setters() {
        let facts = SrosFactsBuilder::new(Silent)
            .default_vrf_id("base")
            .vendor("Alcatel-Lucent")
            .disable_paging(false)
            .failure_pattern("INFO:")
            .build()
            .unwrap();
        let config = facts.config();
        assert_eq!(config.default_vrf_id, "base");
        assert_eq!(config.vendor, "Alcatel-Lucent");
        assert!(!config.disable_paging);
        assert_eq!(config.failure_patterns.last().map(String::as_str), Some("INFO:"));
    }

    #[test]
    fn test_builder_rejects_empty_vrf_id() {
        let result = SrosFactsBuilder::new(Silent).default_vrf_id("").build();
        assert!(matches!(result, Err(ConfigError::InvalidConfig { .. })));
    }

    #[test]
    fn test_empty_paging_command_allowed_when_paging_kept() {
        let result = SrosFactsBuilder::new(Silent)
            .disable_paging(false)
            .paging_command("")
            .build();
        assert!(result.is_ok());
    }
}
