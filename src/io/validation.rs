//! Blob validation
//!
//! Validate decoded blobs for structural consistency before conversion.

use crate::error::{ConvertError, ConvertResult};
use crate::proto::BlobProto;
use crate::tensor::shape::{has_negative, numel, to_usize_dims};
use crate::tensor::BlobField;

/// Validation result with detailed issues
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the blob is valid
    pub is_valid: bool,
    /// List of errors (critical issues)
    pub errors: Vec<String>,
    /// List of warnings (non-critical issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error
    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
        self.is_valid = false;
    }

    /// Add a warning
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }
}

/// Validate a blob for conversion of `field`
///
/// Checks:
/// - a shape is declared and has at least one dimension
/// - no dimension is negative and the batch axis is not empty
/// - the payload length matches the shape
pub fn validate_blob(blob: &BlobProto, field: BlobField) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if blob.has_legacy_shape() {
        result.add_warning("Blob uses the deprecated num/channels/height/width header");
        if blob.shape.is_some() {
            result.add_warning(
                "Blob declares both a legacy header and a shape; using the legacy header",
            );
        }
    }

    match (field, blob.has_diff()) {
        (BlobField::Data, true) => result.add_warning("Blob diff payload is ignored"),
        (BlobField::Diff, _) if !blob.data.is_empty() || !blob.double_data.is_empty() => {
            result.add_warning("Blob data payload is ignored")
        }
        _ => {}
    }

    let (single, double) = match field {
        BlobField::Data => (blob.data.len(), blob.double_data.len()),
        BlobField::Diff => (blob.diff.len(), blob.double_diff.len()),
    };
    if single > 0 && double > 0 {
        result.add_warning(format!(
            "Blob carries both single and double precision {:?} payloads; using double",
            field
        ));
    }

    let dims = match blob.declared_dims() {
        Some(dims) => dims,
        None => {
            result.add_error("Blob carries no shape");
            return result;
        }
    };

    if dims.is_empty() {
        result.add_error("Blob shape has no dimensions");
        return result;
    }

    if has_negative(&dims) {
        result.add_error(format!("Blob shape {:?} has negative dimensions", dims));
        return result;
    }

    if dims[0] == 0 {
        result.add_error(format!("Blob shape {:?} has an empty batch axis", dims));
    }

    let expected = match to_usize_dims(&dims).ok().as_deref().and_then(numel) {
        Some(n) => n,
        None => {
            result.add_error(format!("Blob shape {:?} overflows the element count", dims));
            return result;
        }
    };
    let actual = blob.payload_len(field);
    if actual != expected {
        result.add_error(format!(
            "{:?} payload has {} values, shape {:?} expects {}",
            field, actual, dims, expected
        ));
    }

    result
}

/// Check a blob and return an error if validation fails
///
/// Warnings are returned to the caller for reporting.
pub fn check_blob(blob: &BlobProto, field: BlobField) -> ConvertResult<Vec<String>> {
    let result = validate_blob(blob, field);

    if !result.is_valid {
        return Err(ConvertError::MalformedInput(result.errors.join("; ")));
    }

    Ok(result.warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::extensions::{make_blob, make_blob_f64, make_legacy_blob};
    use crate::proto::BlobShape;

    #[test]
    fn test_valid_blob() {
        let blob = make_blob(&[1, 3, 2, 2], vec![0.0; 12]);
        let result = validate_blob(&blob, BlobField::Data);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_legacy_header_warns() {
        let blob = make_legacy_blob(1, 3, 2, 2, vec![0.0; 12]);
        let result = validate_blob(&blob, BlobField::Data);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_legacy_and_shape_warns_twice() {
        let mut blob = make_legacy_blob(1, 1, 1, 2, vec![0.0; 2]);
        blob.shape = Some(BlobShape { dim: vec![2] });
        let result = validate_blob(&blob, BlobField::Data);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_missing_shape() {
        let blob = BlobProto {
            data: vec![1.0],
            ..Default::default()
        };
        let result = validate_blob(&blob, BlobField::Data);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("no shape"));
    }

    #[test]
    fn test_negative_dim() {
        let blob = make_blob(&[1, -3], vec![]);
        assert!(!validate_blob(&blob, BlobField::Data).is_valid);
    }

    #[test]
    fn test_empty_batch() {
        let blob = make_blob(&[0, 3], vec![]);
        let result = validate_blob(&blob, BlobField::Data);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("batch"));
    }

    #[test]
    fn test_length_mismatch() {
        let blob = make_blob(&[1, 3, 2, 2], vec![0.0; 10]);
        let result = validate_blob(&blob, BlobField::Data);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("expects 12"));
    }

    #[test]
    fn test_overflowing_shape() {
        let blob = make_blob(&[i64::MAX, 2], vec![]);
        let result = validate_blob(&blob, BlobField::Data);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("overflows"));
    }

    #[test]
    fn test_overflowing_shape_behind_zero_dim() {
        let blob = make_blob(&[1, 0, i64::MAX, i64::MAX], vec![]);
        let result = validate_blob(&blob, BlobField::Data);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("overflows"));
    }

    #[test]
    fn test_diff_ignored_warning() {
        let mut blob = make_blob(&[1, 2], vec![0.0; 2]);
        blob.diff = vec![1.0; 2];
        let result = validate_blob(&blob, BlobField::Data);
        assert!(result.is_valid);
        assert!(result.warnings.iter().any(|w| w.contains("diff")));
    }

    #[test]
    fn test_diff_field_checks_diff_length() {
        let blob = make_blob(&[1, 2], vec![0.0; 2]);
        let result = validate_blob(&blob, BlobField::Diff);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_mixed_precision_warns() {
        let mut blob = make_blob_f64(&[2], vec![1.0, 2.0]);
        blob.data = vec![1.0, 2.0];
        let result = validate_blob(&blob, BlobField::Data);
        assert!(result.is_valid);
        assert!(result.warnings.iter().any(|w| w.contains("double")));
    }

    #[test]
    fn test_check_blob() {
        let good = make_blob(&[1, 1], vec![0.0]);
        assert!(check_blob(&good, BlobField::Data).unwrap().is_empty());

        let bad = make_blob(&[1, 2], vec![0.0]);
        assert!(check_blob(&bad, BlobField::Data).unwrap_err().is_malformed());
    }
}
