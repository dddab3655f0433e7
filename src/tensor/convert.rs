//! Tensor conversion utilities
//!
//! Convert between Caffe `BlobProto` and ndarray types.

use ndarray::{ArrayD, Axis, IxDyn};

use crate::error::{ConvertError, ConvertResult};
use crate::proto::BlobProto;

use super::dtype::{BlobField, Precision};
use super::shape::{blob_shape, numel};

/// In-memory blob tensor at its source precision
#[derive(Debug, Clone, PartialEq)]
pub enum MeanArray {
    /// Single-precision values
    F32(ArrayD<f32>),
    /// Double-precision values
    F64(ArrayD<f64>),
}

impl MeanArray {
    /// Array dimensions
    pub fn shape(&self) -> &[usize] {
        match self {
            MeanArray::F32(a) => a.shape(),
            MeanArray::F64(a) => a.shape(),
        }
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        match self {
            MeanArray::F32(a) => a.len(),
            MeanArray::F64(a) => a.len(),
        }
    }

    /// Check if the array holds no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element precision
    pub fn precision(&self) -> Precision {
        match self {
            MeanArray::F32(_) => Precision::F32,
            MeanArray::F64(_) => Precision::F64,
        }
    }

    /// Borrow the single-precision array, if that is what this holds
    pub fn as_f32(&self) -> Option<&ArrayD<f32>> {
        match self {
            MeanArray::F32(a) => Some(a),
            MeanArray::F64(_) => None,
        }
    }

    /// Borrow the double-precision array, if that is what this holds
    pub fn as_f64(&self) -> Option<&ArrayD<f64>> {
        match self {
            MeanArray::F64(a) => Some(a),
            MeanArray::F32(_) => None,
        }
    }

    /// Select one sample along the leading (batch) axis
    ///
    /// The result has one dimension fewer than `self`.
    pub fn select_sample(&self, index: usize) -> ConvertResult<MeanArray> {
        let batch = *self.shape().first().ok_or_else(|| {
            ConvertError::MalformedInput("Cannot select a sample from a rank-0 array".to_string())
        })?;

        if batch == 0 {
            return Err(ConvertError::MalformedInput(
                "Batch axis is empty".to_string(),
            ));
        }
        if index >= batch {
            return Err(ConvertError::SampleOutOfRange { index, batch });
        }

        Ok(match self {
            MeanArray::F32(a) => MeanArray::F32(a.index_axis(Axis(0), index).to_owned()),
            MeanArray::F64(a) => MeanArray::F64(a.index_axis(Axis(0), index).to_owned()),
        })
    }
}

impl From<ArrayD<f32>> for MeanArray {
    fn from(array: ArrayD<f32>) -> Self {
        MeanArray::F32(array)
    }
}

impl From<ArrayD<f64>> for MeanArray {
    fn from(array: ArrayD<f64>) -> Self {
        MeanArray::F64(array)
    }
}

/// Convert a blob payload to an ndarray shaped by the blob's dims
///
/// `double_data` (or `double_diff`) is used when present, otherwise the
/// single-precision payload.
pub fn blob_to_array(blob: &BlobProto, field: BlobField) -> ConvertResult<MeanArray> {
    let shape = blob_shape(blob)?;
    let expected_len = numel(&shape).ok_or_else(|| {
        ConvertError::MalformedInput(format!("Shape {:?} overflows the element count", shape))
    })?;
    let precision = blob.precision(field);
    let actual_len = blob.payload_len(field);

    if actual_len != expected_len {
        return Err(ConvertError::MalformedInput(format!(
            "{:?} payload has {} values, shape {:?} expects {}",
            field, actual_len, shape, expected_len
        )));
    }

    let ix = IxDyn(&shape);
    let array = match (field, precision) {
        (BlobField::Data, Precision::F32) => {
            MeanArray::F32(ArrayD::from_shape_vec(ix, blob.data.clone())?)
        }
        (BlobField::Data, Precision::F64) => {
            MeanArray::F64(ArrayD::from_shape_vec(ix, blob.double_data.clone())?)
        }
        (BlobField::Diff, Precision::F32) => {
            MeanArray::F32(ArrayD::from_shape_vec(ix, blob.diff.clone())?)
        }
        (BlobField::Diff, Precision::F64) => {
            MeanArray::F64(ArrayD::from_shape_vec(ix, blob.double_diff.clone())?)
        }
    };

    Ok(array)
}
