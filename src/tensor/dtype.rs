//! Blob payload data types
//!
//! Maps the payload fields of a Caffe blob to NumPy element types.

use std::fmt;

/// Floating-point precision of a blob payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// `data` / `diff`, 32-bit floats
    F32,
    /// `double_data` / `double_diff`, 64-bit floats
    F64,
}

impl Precision {
    /// NumPy type descriptor written in the `.npy` header
    pub fn npy_descr(self) -> &'static str {
        match self {
            Precision::F32 => "<f4",
            Precision::F64 => "<f8",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::F32 => f.write_str("float32"),
            Precision::F64 => f.write_str("float64"),
        }
    }
}

/// Which payload of the blob to convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlobField {
    /// Blob values
    #[default]
    Data,
    /// Blob gradients
    Diff,
}
