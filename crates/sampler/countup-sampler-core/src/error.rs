//! Error types for the sampler

use serde::{Deserialize, Serialize};

/// Errors raised while building sampler configuration or props.
/// Sampling itself never fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SamplerError {
    /// Tick interval must be finite and positive
    #[error("Invalid tick interval: {interval_ms} ms")]
    InvalidTickInterval { interval_ms: f64 },

    /// Frame rate must be finite and positive
    #[error("Invalid frame rate: {fps} fps")]
    InvalidFps { fps: f64 },

    /// JSON input could not be parsed
    #[error("JSON error: {reason}")]
    Json { reason: String },
}

impl From<serde_json::Error> for SamplerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_convert() {
        let err: SamplerError = serde_json::from_str::<f64>("not json").unwrap_err().into();
        assert!(matches!(err, SamplerError::Json { .. }));
    }

    #[test]
    fn messages() {
        let err = SamplerError::InvalidTickInterval { interval_ms: 0.0 };
        assert_eq!(err.to_string(), "Invalid tick interval: 0 ms");
    }
}
