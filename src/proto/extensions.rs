//! Extension methods for Caffe protobuf types
//!
//! Provides convenient helper methods for working with `BlobProto`.

use super::caffe::*;
use crate::tensor::{BlobField, Precision};

// ============================================================================
// BlobProto extensions
// ============================================================================

impl BlobProto {
    /// Check if any of the legacy `num/channels/height/width` fields is set
    pub fn has_legacy_shape(&self) -> bool {
        self.num.is_some()
            || self.channels.is_some()
            || self.height.is_some()
            || self.width.is_some()
    }

    /// Legacy 4-D shape, absent fields read as their default of 0
    pub fn legacy_dims(&self) -> [i64; 4] {
        [
            self.num() as i64,
            self.channels() as i64,
            self.height() as i64,
            self.width() as i64,
        ]
    }

    /// Dimensions declared by the blob
    ///
    /// The legacy header wins over `shape` when both are present, the same
    /// way Caffe's python helpers read mean files.
    pub fn declared_dims(&self) -> Option<Vec<i64>> {
        if self.has_legacy_shape() {
            Some(self.legacy_dims().to_vec())
        } else {
            self.shape.as_ref().map(|s| s.dim.clone())
        }
    }

    /// Precision of the payload stored for `field`
    ///
    /// Double payloads take precedence over single-precision ones.
    pub fn precision(&self, field: BlobField) -> Precision {
        let has_double = match field {
            BlobField::Data => !self.double_data.is_empty(),
            BlobField::Diff => !self.double_diff.is_empty(),
        };
        if has_double {
            Precision::F64
        } else {
            Precision::F32
        }
    }

    /// Number of values stored for `field` at its effective precision
    pub fn payload_len(&self, field: BlobField) -> usize {
        match (field, self.precision(field)) {
            (BlobField::Data, Precision::F64) => self.double_data.len(),
            (BlobField::Data, Precision::F32) => self.data.len(),
            (BlobField::Diff, Precision::F64) => self.double_diff.len(),
            (BlobField::Diff, Precision::F32) => self.diff.len(),
        }
    }

    /// Check if the blob carries a gradient payload
    pub fn has_diff(&self) -> bool {
        !self.diff.is_empty() || !self.double_diff.is_empty()
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Create a single-precision blob with a modern `shape`
pub fn make_blob(dims: &[i64], data: Vec<f32>) -> BlobProto {
    BlobProto {
        shape: Some(BlobShape { dim: dims.to_vec() }),
        data,
        ..Default::default()
    }
}

/// Create a double-precision blob with a modern `shape`
pub fn make_blob_f64(dims: &[i64], double_data: Vec<f64>) -> BlobProto {
    BlobProto {
        shape: Some(BlobShape { dim: dims.to_vec() }),
        double_data,
        ..Default::default()
    }
}

/// Create a single-precision blob with the legacy 4-D header
pub fn make_legacy_blob(
    num: i32,
    channels: i32,
    height: i32,
    width: i32,
    data: Vec<f32>,
) -> BlobProto {
    BlobProto {
        num: Some(num),
        channels: Some(channels),
        height: Some(height),
        width: Some(width),
        data,
        ..Default::default()
    }
}
