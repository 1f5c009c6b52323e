//! File-based configuration for the command-line surface.
//!
//! ```toml
//! [labels]
//! name_a = "objA"
//! name_b = "objB"
//!
//! [logging]
//! profile = "production"
//! ```
//!
//! Every section and field is optional; missing values fall back to the
//! defaults (`expected`/`actual`, development logging).

use crate::compare::ComparisonConfig;
use crate::errors::{DeepCmpError, ExError, Result};
use crate::logging_facility::Profile;
use crate::{log_op_end, log_op_error, log_op_start};
use deepcmp_core_types::schema::OP_LOAD_CONFIG;
use serde::Deserialize;
use std::path::Path;
use std::time::Instant;

/// Logging section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub profile: Profile,
}

/// Top-level configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub labels: ComparisonConfig,
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// `Config` when the text is not valid TOML or has unknown sections
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| {
            ExError::from(DeepCmpError::ConfigParse {
                message: e.message().to_string(),
            })
        })
    }

    /// Replace labels with explicitly supplied overrides
    pub fn with_label_overrides(mut self, name_a: Option<String>, name_b: Option<String>) -> Self {
        if let Some(name) = name_a {
            self.labels.name_a = name;
        }
        if let Some(name) = name_b {
            self.labels.name_b = name;
        }
        self
    }
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// - `Io` when the file cannot be read
/// - `Config` when its contents are invalid
pub fn load_config(path: impl AsRef<Path>) -> Result<CliConfig> {
    let path = path.as_ref();
    let file = path.display().to_string();
    log_op_start!(OP_LOAD_CONFIG, file = file.as_str());
    let start = Instant::now();

    let loaded = std::fs::read_to_string(path)
        .map_err(|e| {
            ExError::from(DeepCmpError::FileRead {
                path: file.clone(),
                message: e.to_string(),
            })
        })
        .and_then(|text| CliConfig::from_toml_str(&text));

    let duration_ms = start.elapsed().as_millis() as u64;
    match loaded {
        Ok(config) => {
            log_op_end!(OP_LOAD_CONFIG, duration_ms = duration_ms);
            Ok(config)
        }
        Err(err) => {
            log_op_error!(OP_LOAD_CONFIG, err.clone(), duration_ms = duration_ms);
            Err(err)
        }
    }
}
