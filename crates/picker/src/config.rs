//! Picker configuration loaded from environment variables.
//!
//! The host normally supplies installation parameters directly; this loader
//! exists for the CLI and for running the adapter outside the host.
//!
//! # Environment Variables
//!
//! ## Required
//! - `COMMERCELAYER_CLIENT_ID` - Integration client ID
//! - `COMMERCELAYER_CLIENT_SECRET` - Integration client secret
//! - `COMMERCELAYER_API_ENDPOINT` - Organization endpoint (e.g., <https://my-org.commercelayer.io>)
//!
//! ## Optional
//! - `SKU_PICKER_HTTP_TIMEOUT_SECS` - Per-request timeout (default: none)

use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;

use crate::commercelayer::ClientOptions;
use crate::params::InstallationParameters;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "insert",
    "put-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Picker configuration.
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Installation parameters (client secret redacted in `Debug`)
    pub parameters: InstallationParameters,
    /// Per-request HTTP timeout
    pub http_timeout: Option<Duration>,
}

impl PickerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Values
    /// are not validated here beyond presence; see
    /// [`crate::params::validate_parameters`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or the
    /// timeout is not a whole number of seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let client_id = get_required_env("COMMERCELAYER_CLIENT_ID")?;
        let client_secret = get_required_env("COMMERCELAYER_CLIENT_SECRET")?;
        let api_endpoint = get_required_env("COMMERCELAYER_API_ENDPOINT")?;

        if let Err(e) = validate_secret_strength(&client_secret, "COMMERCELAYER_CLIENT_SECRET") {
            tracing::warn!("COMMERCELAYER_CLIENT_SECRET validation warning: {e}");
        }

        let http_timeout = get_optional_env("SKU_PICKER_HTTP_TIMEOUT_SECS")
            .map(|secs| {
                secs.parse::<u64>().map(Duration::from_secs).map_err(|e| {
                    ConfigError::InvalidEnvVar(
                        "SKU_PICKER_HTTP_TIMEOUT_SECS".to_string(),
                        e.to_string(),
                    )
                })
            })
            .transpose()?;

        Ok(Self {
            parameters: InstallationParameters::new(client_id, client_secret, api_endpoint),
            http_timeout,
        })
    }

    /// Options for building a client from this configuration.
    #[must_use]
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: self.http_timeout,
            origin_override: None,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Check that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lower.contains(*p)) {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("appears to be a placeholder (contains '{pattern}')"),
        ));
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
            ),
        ));
    }

    Ok(())
}
