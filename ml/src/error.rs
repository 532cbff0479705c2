//! Memlog error types

use thiserror::Error;

/// Errors that can occur during memory log operations
#[derive(Debug, Error)]
pub enum MemlogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line} not found (log has {len} lines)")]
    NotFound { line: usize, len: usize },

    #[error("Selector '{expr}' contains no line numbers")]
    InvalidSelector { expr: String },

    #[error("Selector '{expr}' matches nothing (log has {len} lines)")]
    NoneInRange { expr: String, len: usize },
}

impl MemlogError {
    /// Check whether this is a lookup miss rather than a real failure
    pub fn is_miss(&self) -> bool {
        matches!(
            self,
            MemlogError::NotFound { .. } | MemlogError::NoneInRange { .. }
        )
    }
}
