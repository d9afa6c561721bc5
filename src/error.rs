//! Error types for the lexalign library.
//!
//! All fallible operations return [`LexalignError`] through the crate-wide
//! [`Result`] alias. Two outcomes that callers frequently confuse are kept
//! apart on purpose:
//!
//! - [`LexalignError::UnavailableMapping`]: no supported path exists between
//!   two editions, so no mapper can be produced at all.
//! - A per-synset lookup miss, which is not an error and is reported as
//!   `Ok(None)` by [`crate::mapper::SynsetMapper::map_synset`].
//!
//! # Examples
//!
//! ```
//! use lexalign::error::{LexalignError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexalignError::invalid_argument("unknown part of speech"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::edition::EditionDescriptor;

/// The main error type for lexalign operations.
#[derive(Error, Debug)]
pub enum LexalignError {
    /// I/O errors outside of a named resource
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A bundled resource expected to exist could not be read
    #[error("Resource error: {0}")]
    Resource(String),

    /// A bundled resource row violates its expected format
    #[error("Malformed resource {resource} at line {line}: {message}")]
    MalformedResource {
        resource: String,
        line: usize,
        message: String,
    },

    /// A data file entry does not start at the byte offset it reports
    #[error(
        "Inconsistent offset in {resource} at line {line}: \
         entry reports {reported}, actual byte position is {actual}"
    )]
    InconsistentOffset {
        resource: String,
        line: usize,
        reported: u64,
        actual: u64,
    },

    /// No supported alignment path exists between two editions
    #[error("No mapping available from {from} to {to}")]
    UnavailableMapping {
        from: EditionDescriptor,
        to: EditionDescriptor,
    },

    /// Operation not supported for this kind of value
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure reported by the host dictionary library
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

}

/// Result type alias for operations that may fail with LexalignError.
pub type Result<T> = std::result::Result<T, LexalignError>;

impl LexalignError {
    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        LexalignError::Resource(msg.into())
    }

    /// Create a new malformed resource error.
    pub fn malformed<R: Into<String>, S: Into<String>>(resource: R, line: usize, msg: S) -> Self {
        LexalignError::MalformedResource {
            resource: resource.into(),
            line,
            message: msg.into(),
        }
    }

    /// Create a new unavailable mapping error.
    pub fn unavailable(source: &EditionDescriptor, target: &EditionDescriptor) -> Self {
        LexalignError::UnavailableMapping {
            from: source.clone(),
            to: target.clone(),
        }
    }

    /// Create a new unsupported operation error.
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        LexalignError::UnsupportedOperation(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexalignError::InvalidArgument(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        LexalignError::Dictionary(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LexalignError::Config(msg.into())
    }

    /// Whether this error means "no alignment path", as opposed to a failure.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, LexalignError::UnavailableMapping { .. })
    }
}
