//! Error types for generation and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum TilingError {
    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A scheduled vertex offered no legal continuation
    ///
    /// The candidate sets of every open vertex are refreshed after each
    /// attach and detach, so an empty gap side at scheduling time means the
    /// occupancy ordering was corrupted earlier.
    NoCandidates {
        /// Growth iteration when this occurred
        iteration: usize,
        /// Position of the scheduled vertex
        position: [f64; 2],
    },

    /// A committed open vertex matches no window of any vertex rule
    RuleExhaustion {
        /// Growth iteration when this occurred
        iteration: usize,
        /// The unmatchable occupancy, rendered clockwise-first
        occupancy: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NoCandidates {
                iteration,
                position,
            } => {
                write!(
                    f,
                    "No candidates for scheduled vertex at ({:.2}, {:.2}) on iteration {iteration}",
                    position[0], position[1]
                )
            }
            Self::RuleExhaustion {
                iteration,
                occupancy,
            } => {
                write!(
                    f,
                    "Vertex occupancy [{occupancy}] matches no rule on iteration {iteration}"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TilingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
