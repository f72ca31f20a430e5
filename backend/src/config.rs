//! Server configuration.
//!
//! Settings come from an optional YAML file named by `CLINIC_CONFIG`, then
//! individual environment overrides. Anything left unset keeps its default.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use tracing::info;

use crate::domain::models::DEFAULT_TAX_RATE;

pub const CONFIG_PATH_VAR: &str = "CLINIC_CONFIG";
pub const BIND_ADDRESS_VAR: &str = "CLINIC_BIND_ADDRESS";
pub const TAX_RATE_VAR: &str = "CLINIC_TAX_RATE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    /// Address the REST server listens on
    pub bind_address: SocketAddr,
    /// Fraction added on top of fee plus items, e.g. 0.10 for 10%
    pub tax_rate: f64,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Origin allowed by CORS
    pub allowed_origin: String,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3000)),
            tax_rate: DEFAULT_TAX_RATE,
            log_level: "info".to_string(),
            allowed_origin: "http://localhost:8080".to_string(),
        }
    }
}

impl ClinicConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config = Self::from_yaml_str(&yaml_content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    pub fn from_yaml_str(yaml_content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml_content)?)
    }

    /// Apply `CLINIC_BIND_ADDRESS` and `CLINIC_TAX_RATE` as returned by `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(address) = lookup(BIND_ADDRESS_VAR) {
            self.bind_address = address
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {}", BIND_ADDRESS_VAR, address))?;
        }
        if let Some(rate) = lookup(TAX_RATE_VAR) {
            self.tax_rate = rate
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {}", TAX_RATE_VAR, rate))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.tax_rate.is_finite() || !(0.0..=1.0).contains(&self.tax_rate) {
            bail!("Tax rate must be between 0 and 1, got {}", self.tax_rate);
        }
        if self.log_level.trim().is_empty() {
            bail!("Log level cannot be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClinicConfig::default();
        assert_eq!(config.bind_address.to_string(), "127.0.0.1:3000");
        assert_eq!(config.tax_rate, 0.10);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.allowed_origin, "http://localhost:8080");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ClinicConfig::from_yaml_str("tax_rate: 0.2\nlog_level: debug\n").unwrap();
        assert_eq!(config.tax_rate, 0.2);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.bind_address, ClinicConfig::default().bind_address);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(ClinicConfig::from_yaml_str("bind_address: not-an-address").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ClinicConfig::default();
        config
            .apply_overrides(lookup_from(&[
                (BIND_ADDRESS_VAR, "0.0.0.0:8081"),
                (TAX_RATE_VAR, " 0.05 "),
            ]))
            .unwrap();

        assert_eq!(config.bind_address.to_string(), "0.0.0.0:8081");
        assert_eq!(config.tax_rate, 0.05);
    }

    #[test]
    fn test_bad_override_is_an_error() {
        let mut config = ClinicConfig::default();
        let result = config.apply_overrides(lookup_from(&[(TAX_RATE_VAR, "ten percent")]));
        assert!(result.is_err());
        assert_eq!(config.tax_rate, 0.10);
    }

    #[test]
    fn test_tax_rate_bounds() {
        for rate in [-0.1, 1.5, f64::NAN] {
            let config = ClinicConfig {
                tax_rate: rate,
                ..ClinicConfig::default()
            };
            assert!(config.validate().is_err(), "rate {} should be rejected", rate);
        }
        let config = ClinicConfig {
            tax_rate: 0.0,
            ..ClinicConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
