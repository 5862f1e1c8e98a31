//! Configuration management for siterecon.
//!
//! Centralizes timeout settings and useragent preferences. Values are
//! resolved in three layers: built-in defaults, `SITERECON_*` environment
//! variables, then command-line arguments (highest precedence).

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::{Cli, UaPolicy};
use crate::errors::{Result, SiteReconError};

/// Main configuration structure for siterecon.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Network operation settings
    pub network: NetworkConfig,

    /// Useragent selection preferences
    pub useragent: UseragentConfig,
}

/// Network-related configuration options
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Timeout for each page fetch
    pub fetch_timeout: Duration,

    /// Timeout for each WHOIS query
    pub whois_timeout: Duration,

    /// Maximum number of WHOIS referral hops
    pub max_whois_referrals: usize,
}

/// Useragent selection configuration
#[derive(Debug, Clone)]
pub struct UseragentConfig {
    /// Literal User-Agent value, or the sentinel "random"
    pub value: String,

    /// Sidecar list file for random mode
    pub list_file: PathBuf,

    /// Re-sampling policy in random mode
    pub policy: UaPolicy,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(5),
            whois_timeout: Duration::from_secs(10),
            max_whois_referrals: 4,
        }
    }
}

impl Default for UseragentConfig {
    fn default() -> Self {
        Self {
            value: "random".to_string(),
            list_file: PathBuf::from("useragents.txt"),
            policy: UaPolicy::PerCall,
        }
    }
}

impl Config {
    /// Build configuration from environment variables over defaults.
    ///
    /// Recognized variables:
    ///   SITERECON_FETCH_TIMEOUT   - page fetch timeout in seconds
    ///   SITERECON_WHOIS_TIMEOUT   - WHOIS query timeout in seconds
    ///   SITERECON_WHOIS_REFERRALS - maximum WHOIS referral hops
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Some(secs) = env_u64("SITERECON_FETCH_TIMEOUT") {
            config.network.fetch_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = env_u64("SITERECON_WHOIS_TIMEOUT") {
            config.network.whois_timeout = Duration::from_secs(secs);
        }
        if let Some(hops) = env_u64("SITERECON_WHOIS_REFERRALS") {
            config.network.max_whois_referrals = hops as usize;
        }

        config
    }

    /// Overlay command-line arguments onto this configuration.
    pub fn merge_with_cli(&mut self, cli: &Cli) {
        if let Some(secs) = cli.timeout {
            self.network.fetch_timeout = Duration::from_secs(secs);
        }
        self.useragent.value = cli.useragent.clone();
        self.useragent.list_file = cli.useragent_file.clone();
        self.useragent.policy = cli.ua_policy;
    }

    /// Validate the merged configuration.
    pub fn validate(&self) -> Result<()> {
        if self.network.fetch_timeout.is_zero() {
            return Err(SiteReconError::configuration(
                "fetch timeout must be greater than zero",
            ));
        }
        if self.network.whois_timeout.is_zero() {
            return Err(SiteReconError::configuration(
                "WHOIS timeout must be greater than zero",
            ));
        }
        if self.useragent.value.is_empty() {
            return Err(SiteReconError::configuration(
                "useragent must be a non-empty string or \"random\"",
            ));
        }
        Ok(())
    }
}

fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.network.fetch_timeout, Duration::from_secs(5));
        assert_eq!(config.network.max_whois_referrals, 4);
        assert_eq!(config.useragent.value, "random");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn cli_overrides_defaults() {
        let cli = Cli::parse_from([
            "siterecon",
            "https://example.com",
            "--useragent",
            "TestUA/1.0",
            "--timeout",
            "9",
        ]);
        let mut config = Config::default();
        config.merge_with_cli(&cli);
        assert_eq!(config.network.fetch_timeout, Duration::from_secs(9));
        assert_eq!(config.useragent.value, "TestUA/1.0");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_timeout() {
        let cli = Cli::parse_from(["siterecon", "https://example.com", "--timeout", "0"]);
        let mut config = Config::default();
        config.merge_with_cli(&cli);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_useragent() {
        let cli = Cli::parse_from(["siterecon", "https://example.com", "--useragent", ""]);
        let mut config = Config::default();
        config.merge_with_cli(&cli);
        assert!(config.validate().is_err());
    }
}
