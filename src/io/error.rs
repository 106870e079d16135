//! Error types for catalog construction, sampling, annealing and output

use std::fmt;
use std::path::{Path, PathBuf};

use crate::catalog::Category;

/// Main error type for all texture and header operations
#[derive(Debug)]
pub enum SnowError {
    /// A symbol was assigned to two different categories
    DuplicateSymbol {
        /// The offending symbol
        symbol: char,
        /// Category the symbol was first assigned to
        first: Category,
        /// Category that tried to claim it again
        second: Category,
    },

    /// Grid dimensions must both be positive
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Category frequencies cannot be resolved into a probability table
    InvalidFrequencies {
        /// Description of what's wrong with the frequencies
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
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

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for SnowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSymbol {
                symbol,
                first,
                second,
            } => {
                write!(
                    f,
                    "Symbol {symbol:?} assigned to both '{first}' and '{second}'"
                )
            }
            Self::InvalidDimensions { rows, cols } => {
                write!(
                    f,
                    "Invalid grid dimensions {rows}x{cols}: rows and cols must be positive"
                )
            }
            Self::InvalidFrequencies { reason } => {
                write!(f, "Invalid category frequencies: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for SnowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, SnowError>;

impl From<std::io::Error> for SnowError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Attaches the path and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O result into a crate result naming the file involved
    ///
    /// # Errors
    ///
    /// Propagates the original I/O error wrapped as [`SnowError::FileSystem`]
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| SnowError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SnowError {
    SnowError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid frequencies error
pub fn invalid_frequencies(reason: &impl ToString) -> SnowError {
    SnowError::InvalidFrequencies {
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> SnowError {
    SnowError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
