//! Shape utilities for Caffe blobs
//!
//! Functions for resolving and checking blob dimensions.

use crate::error::{ConvertError, ConvertResult};
use crate::proto::BlobProto;

/// Calculate total number of elements from shape
///
/// Returns `None` when the product of the non-zero dims exceeds `isize::MAX`,
/// which ndarray rejects even if another dim is zero.
pub fn numel(shape: &[usize]) -> Option<usize> {
    let nonzero = shape
        .iter()
        .filter(|&&d| d != 0)
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))?;
    if nonzero > isize::MAX as usize {
        return None;
    }
    if shape.contains(&0) {
        Some(0)
    } else {
        Some(nonzero)
    }
}

/// Check if shape contains negative dimensions
pub fn has_negative(dims: &[i64]) -> bool {
    dims.iter().any(|&d| d < 0)
}

/// Convert declared dims to array dims, rejecting negative values
pub fn to_usize_dims(dims: &[i64]) -> ConvertResult<Vec<usize>> {
    dims.iter()
        .map(|&d| {
            usize::try_from(d).map_err(|_| {
                ConvertError::MalformedInput(format!("Negative dimension {} in shape {:?}", d, dims))
            })
        })
        .collect()
}

/// Resolve the array shape of a blob
///
/// Fails if the blob declares no shape, a rank-0 shape or a negative dim.
pub fn blob_shape(blob: &BlobProto) -> ConvertResult<Vec<usize>> {
    let dims = blob
        .declared_dims()
        .ok_or_else(|| ConvertError::MalformedInput("Blob carries no shape".to_string()))?;

    if dims.is_empty() {
        return Err(ConvertError::MalformedInput(
            "Blob shape has no dimensions".to_string(),
        ));
    }

    to_usize_dims(&dims)
}
