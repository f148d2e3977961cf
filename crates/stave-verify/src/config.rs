//! Configuration for verification runs
//!
//! Chooses the tolerance for continuous fields and where mismatch
//! diagnostics go.

use crate::error::{Result, VerifyError};
use serde::{Deserialize, Serialize};
use stave_domain::{Tolerance, EQUALITY_EPSILON};
use std::fs;
use std::path::Path;

/// Destination for mismatch diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticsMode {
    /// Discard diagnostics
    Silent,
    /// One line per mismatch on standard error
    #[default]
    Stderr,
    /// Forward to `tracing` as DEBUG events
    Tracing,
}

/// Configuration for a [`Verifier`](crate::Verifier)
///
/// # Examples
///
/// ```
/// use stave_verify::{DiagnosticsMode, VerifyConfig};
///
/// let config = VerifyConfig::from_toml_str(r#"
///     epsilon = 1e-6
///     diagnostics = "tracing"
/// "#).unwrap();
/// assert_eq!(config.epsilon, 1e-6);
/// assert_eq!(config.diagnostics, DiagnosticsMode::Tracing);
///
/// // Everything is optional
/// let config = VerifyConfig::from_toml_str("").unwrap();
/// assert_eq!(config.diagnostics, DiagnosticsMode::Stderr);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Epsilon for continuous fields
    /// Default: `EQUALITY_EPSILON` (1e-8)
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Where mismatch diagnostics go
    /// Default: stderr
    #[serde(default)]
    pub diagnostics: DiagnosticsMode,
}

fn default_epsilon() -> f64 {
    EQUALITY_EPSILON
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            epsilon: EQUALITY_EPSILON,
            diagnostics: DiagnosticsMode::Stderr,
        }
    }
}

impl VerifyConfig {
    /// Standard tolerance, diagnostics discarded
    pub fn quiet() -> Self {
        Self {
            diagnostics: DiagnosticsMode::Silent,
            ..Self::default()
        }
    }

    /// Standard tolerance, diagnostics forwarded to `tracing`
    pub fn traced() -> Self {
        Self {
            diagnostics: DiagnosticsMode::Tracing,
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: VerifyConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| VerifyError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.tolerance().map(|_| ())
    }

    /// Get the tolerance described by `epsilon`
    pub fn tolerance(&self) -> Result<Tolerance> {
        Tolerance::new(self.epsilon).map_err(VerifyError::InvalidTolerance)
    }
}
