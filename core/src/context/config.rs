//! Analysis configuration
//!
//! This module re-exports the shared config type from buildorama-types and
//! provides loading, saving and validation for it.

use std::path::Path;

pub use buildorama_types::AnalysisConfig;

use super::error::ConfigError;

const APP_NAME: &str = "buildorama";
const CONFIG_NAME: &str = "config";

// ─────────────────────────────────────────────────────────────────────────────
// AnalysisConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for AnalysisConfig persistence and validation
pub trait AnalysisConfigExt: Sized {
    fn load() -> Self;
    fn load_from(path: &Path) -> Result<Self, ConfigError>;
    fn save_to(&self, path: &Path) -> Result<(), ConfigError>;
    fn validate(&self) -> Result<(), ConfigError>;
}

impl AnalysisConfigExt for AnalysisConfig {
    /// Load from the platform config directory, falling back to defaults
    /// when the file is missing, unreadable or invalid.
    fn load() -> Self {
        let loaded: Result<AnalysisConfig, ConfigError> =
            confy::load(APP_NAME, CONFIG_NAME).map_err(ConfigError::from);

        match loaded.and_then(|config| config.validate().map(|_| config)) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "Using default analysis config");
                Self::default()
            }
        }
    }

    /// Load from an explicit TOML file. A missing file yields defaults.
    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: AnalysisConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;

        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.dps_min_count == 0 {
            return Err(ConfigError::Invalid {
                field: "dps_min_count",
                reason: "must be at least 1",
            });
        }
        if self.support_min_count == 0 {
            return Err(ConfigError::Invalid {
                field: "support_min_count",
                reason: "must be at least 1",
            });
        }
        if self.signature_set_min_pieces == 0 {
            return Err(ConfigError::Invalid {
                field: "signature_set_min_pieces",
                reason: "must be at least 1",
            });
        }
        if self.signature_set_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "signature_set_limit",
                reason: "must be at least 1",
            });
        }
        if self.max_subclasses == 0 {
            return Err(ConfigError::Invalid {
                field: "max_subclasses",
                reason: "must be at least 1",
            });
        }
        if !(self.healer_ratio > 0.0 && self.healer_ratio <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "healer_ratio",
                reason: "must be in (0, 1]",
            });
        }
        Ok(())
    }
}
