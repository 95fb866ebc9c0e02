//! Error types for the easing library

use serde::{Deserialize, Serialize};

/// Errors from the strict lookup paths. Evaluation itself never fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EasingError {
    /// No curve is registered under this name
    #[error("Unknown easing function: {name}")]
    UnknownName { name: String },
}
