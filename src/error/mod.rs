//! Error types for caffe-mean-npy
//!
//! This module defines all error types used throughout the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for mean file conversion
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Wrong number of command-line arguments
    #[error("Usage: {program} <input-mean-file> <output-array-file>")]
    Usage {
        /// Program name as invoked
        program: String,
    },

    /// Input file has zero bytes
    #[error("Input file '{}' is empty", path.display())]
    EmptyInput {
        /// Path of the empty file
        path: PathBuf,
    },

    /// Bytes do not describe a usable blob
    #[error("Malformed blob: {0}")]
    MalformedInput(String),

    /// Requested sample is past the end of the batch axis
    #[error("Sample index {index} out of range for batch of {batch}")]
    SampleOutOfRange {
        /// Requested index
        index: usize,
        /// Length of the batch axis
        batch: usize,
    },

    /// Filesystem access failed
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Array shape error
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// `.npy` encode error
    #[error("NPY write error: {0}")]
    NpyWrite(#[from] ndarray_npy::WriteNpyError),

    /// `.npy` decode error
    #[error("NPY read error: {0}")]
    NpyRead(#[from] ndarray_npy::ReadNpyError),
}

impl ConvertError {
    /// Wrap an IO error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from bad input content
    pub fn is_malformed(&self) -> bool {
        matches!(self, ConvertError::MalformedInput(_))
    }
}

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
