//! Decoder limits.
//!
//! Encoders always enforce the consensus script bound. Decoders can be handed
//! a tighter [`CodecLimits`], e.g. by a relay that refuses large scripts
//! before they reach validation. Limits deserialize from configuration files
//! with missing fields taking their consensus defaults.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::leaf::MAX_SCRIPT_SIZE;

/// Error surfaced when a [`CodecLimits`] value is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured script limit would accept scripts consensus rejects.
    ScriptLimitAboveConsensus {
        /// Configured value.
        requested: usize,
        /// Consensus maximum.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ScriptLimitAboveConsensus { requested, max } => write!(
                f,
                "max_script_size {requested} exceeds the consensus maximum {max}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Hard bounds applied while decoding leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecLimits {
    /// Longest `pk_script` accepted.
    pub max_script_size: usize,
}

impl CodecLimits {
    /// The consensus limits.
    pub const CONSENSUS: CodecLimits = CodecLimits {
        max_script_size: MAX_SCRIPT_SIZE,
    };

    /// Checks that the limits only tighten consensus.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_script_size > MAX_SCRIPT_SIZE {
            return Err(ConfigError::ScriptLimitAboveConsensus {
                requested: self.max_script_size,
                max: MAX_SCRIPT_SIZE,
            });
        }
        Ok(())
    }

    /// Script bound decoders actually apply: the configured value, never
    /// above [`MAX_SCRIPT_SIZE`].
    pub fn script_size_bound(&self) -> usize {
        self.max_script_size.min(MAX_SCRIPT_SIZE)
    }
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self::CONSENSUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let limits: CodecLimits = serde_json::from_str("{}").unwrap();
        assert_eq!(limits, CodecLimits::CONSENSUS);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn loosening_consensus_is_rejected() {
        let limits: CodecLimits = serde_json::from_str(r#"{"max_script_size": 20000}"#).unwrap();
        assert_eq!(
            limits.validate(),
            Err(ConfigError::ScriptLimitAboveConsensus {
                requested: 20_000,
                max: MAX_SCRIPT_SIZE,
            })
        );
        assert_eq!(limits.script_size_bound(), MAX_SCRIPT_SIZE);
    }

    #[test]
    fn tighter_bound_is_kept() {
        let limits = CodecLimits { max_script_size: 25 };
        assert_eq!(limits.script_size_bound(), 25);
    }
}
