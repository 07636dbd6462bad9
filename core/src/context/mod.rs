mod config;
mod error;

pub use config::{AnalysisConfig, AnalysisConfigExt};
pub use error::ConfigError;
