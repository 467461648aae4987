//! Deployment configuration.
//!
//! The host environment provisions the core from a TOML document naming
//! the authorized root updater and the harvest staleness threshold.

use serde::{Deserialize, Serialize};

use crate::Address;

/// Default harvest staleness threshold in seconds (24 hours).
pub const DEFAULT_STALENESS_THRESHOLD_SECS: u64 = 86_400;

/// Errors raised while loading a deployment configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// An address field is not 20 hex-encoded bytes.
    #[error("invalid address '{value}': {reason}")]
    InvalidAddress {
        /// The offending field value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Convenience result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Complete deployment configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// Drop ledger settings.
    #[serde(default)]
    pub drop: DropConfig,
    /// Oracle settings.
    #[serde(default)]
    pub oracle: OracleConfig,
}

/// Drop ledger configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DropConfig {
    /// Hex-encoded address of the sole principal allowed to rotate roots.
    /// Empty = must be supplied programmatically.
    #[serde(default)]
    pub updater: String,
}

/// Oracle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Seconds without a harvest before keeper tooling alarms.
    #[serde(default = "default_staleness_threshold")]
    pub staleness_threshold_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            staleness_threshold_secs: DEFAULT_STALENESS_THRESHOLD_SECS,
        }
    }
}

fn default_staleness_threshold() -> u64 {
    DEFAULT_STALENESS_THRESHOLD_SECS
}

impl DeploymentConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Decode the configured updater address.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidAddress`] if the field is not exactly
    ///   20 hex-encoded bytes (an optional `0x` prefix is accepted)
    pub fn updater_address(&self) -> Result<Address> {
        parse_address(&self.drop.updater)
    }
}

/// Decode a 20-byte address from a hex string.
pub fn parse_address(input: &str) -> Result<Address> {
    let stripped = input.strip_prefix("0x").unwrap_or(input);
    let bytes = hex::decode(stripped).map_err(|e| ConfigError::InvalidAddress {
        value: input.to_string(),
        reason: e.to_string(),
    })?;
    let mut address = Address::default();
    if bytes.len() != address.len() {
        return Err(ConfigError::InvalidAddress {
            value: input.to_string(),
            reason: format!("expected 20 bytes, got {}", bytes.len()),
        });
    }
    address.copy_from_slice(&bytes);
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = DeploymentConfig::from_toml_str("").expect("parse");
        assert_eq!(
            config.oracle.staleness_threshold_secs,
            DEFAULT_STALENESS_THRESHOLD_SECS
        );
        assert!(config.drop.updater.is_empty());
    }

    #[test]
    fn test_full_document() {
        let doc = r#"
            [drop]
            updater = "0x00112233445566778899aabbccddeeff00112233"

            [oracle]
            staleness_threshold_secs = 3600
        "#;
        let config = DeploymentConfig::from_toml_str(doc).expect("parse");
        assert_eq!(config.oracle.staleness_threshold_secs, 3600);

        let updater = config.updater_address().expect("address");
        assert_eq!(updater[0], 0x00);
        assert_eq!(updater[3], 0x33);
        assert_eq!(updater[19], 0x33);
    }

    #[test]
    fn test_address_without_prefix() {
        let address = parse_address("00112233445566778899aabbccddeeff00112233")
            .expect("bare hex address");
        assert_eq!(address[1], 0x11);
    }

    #[test]
    fn test_address_wrong_length_rejected() {
        let result = parse_address("0011223344");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_address_bad_hex_rejected() {
        let result = parse_address("zz112233445566778899aabbccddeeff00112233");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = DeploymentConfig::from_toml_str("[drop\nupdater = 3");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
