//! Top-level configuration

use crate::components::{InstructionsConfig, LoggingConfig};
use crate::ConfigResult;
use serde::{Deserialize, Serialize};

/// Complete quire configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuireConfig {
    /// Instruction document discovery settings
    #[serde(default)]
    pub instructions: InstructionsConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl QuireConfig {
    /// Validate every component
    pub fn validate(&self) -> ConfigResult<()> {
        self.instructions.validate()
    }
}
