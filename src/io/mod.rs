//! Mean file I/O module
//!
//! This module provides functions for loading Caffe blobs, validating them and
//! saving the converted arrays as `.npy` files.
//!
//! # Example
//!
//! ```ignore
//! use caffe_mean_npy::io::{convert_file, load_blob, save_array};
//!
//! // One-shot conversion
//! let stats = convert_file("mean.binaryproto", "mean.npy")?;
//! println!("Wrote {:?} ({} bytes)", stats.output_shape, stats.output_size);
//! ```

pub mod reader;
pub mod validation;
pub mod writer;

// Re-exports
pub use reader::{
    blob_from_bytes, get_blob_info, load_blob, load_blob_with_size, read_bytes, BlobInfo,
};
pub use validation::{check_blob, validate_blob, ValidationResult};
pub use writer::{array_from_npy_bytes, array_to_npy_bytes, load_array, save_array, SaveStats};

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::ConvertResult;
use crate::proto::BlobProto;
use crate::tensor::{blob_to_array, BlobField, MeanArray, Precision};

/// Conversion statistics
#[derive(Debug, Clone, Default)]
pub struct ConvertStats {
    /// Input file size
    pub input_size: usize,
    /// Blob shape before sample selection
    pub source_shape: Vec<usize>,
    /// Array shape written
    pub output_shape: Vec<usize>,
    /// Element precision written
    pub precision: Option<Precision>,
    /// Output file size
    pub output_size: usize,
}

/// Conversion options
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Blob payload to convert
    pub field: BlobField,
    /// Index along the batch axis
    pub sample: usize,
    /// Validate the blob before conversion
    pub validate: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            field: BlobField::Data,
            sample: 0,
            validate: true,
        }
    }
}

/// Convert a decoded blob into the selected sample array
///
/// Returns the array and the blob's full shape.
pub fn convert_blob(
    blob: &BlobProto,
    options: &ConvertOptions,
) -> ConvertResult<(MeanArray, Vec<usize>)> {
    if options.validate {
        for warning in check_blob(blob, options.field)? {
            warn!("{}", warning);
        }
    }

    let array = blob_to_array(blob, options.field)?;
    debug!(shape = ?array.shape(), precision = %array.precision(), "decoded blob");

    let sample = array.select_sample(options.sample)?;
    Ok((sample, array.shape().to_vec()))
}

/// Convert a mean file and save to an `.npy` file
///
/// This is the main entry point for file-based conversion. Nothing is written
/// unless the input decodes and converts cleanly.
///
/// # Example
///
/// ```ignore
/// use caffe_mean_npy::io::{convert_file_with, ConvertOptions};
///
/// let stats = convert_file_with("mean.binaryproto", "mean.npy", &ConvertOptions::default())?;
/// println!("{:?} -> {:?}", stats.source_shape, stats.output_shape);
/// ```
pub fn convert_file_with<P1: AsRef<Path>, P2: AsRef<Path>>(
    input: P1,
    output: P2,
    options: &ConvertOptions,
) -> ConvertResult<ConvertStats> {
    let input = input.as_ref();
    let output = output.as_ref();

    let (blob, input_size) = load_blob_with_size(input)?;
    debug!(info = ?BlobInfo::from_blob(&blob), "loaded blob");

    let (sample, source_shape) = convert_blob(&blob, options)?;
    let saved = save_array(&sample, output)?;

    let stats = ConvertStats {
        input_size,
        source_shape,
        output_shape: saved.shape,
        precision: Some(saved.precision),
        output_size: saved.size_bytes,
    };

    info!(
        input = %input.display(),
        output = %output.display(),
        source_shape = ?stats.source_shape,
        output_shape = ?stats.output_shape,
        dtype = saved.precision.npy_descr(),
        "converted mean file"
    );

    Ok(stats)
}

/// Convert with default settings
pub fn convert_file<P1: AsRef<Path>, P2: AsRef<Path>>(
    input: P1,
    output: P2,
) -> ConvertResult<ConvertStats> {
    convert_file_with(input, output, &ConvertOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use crate::proto::extensions::{make_blob, make_blob_f64};
    use prost::Message;

    fn counting_blob() -> BlobProto {
        make_blob(&[1, 3, 2, 2], (1..=12).map(|v| v as f32).collect())
    }

    #[test]
    fn test_convert_blob() {
        let (sample, source) = convert_blob(&counting_blob(), &ConvertOptions::default()).unwrap();

        assert_eq!(source, vec![1, 3, 2, 2]);
        assert_eq!(sample.shape(), &[3, 2, 2]);
        assert_eq!(sample.as_f32().unwrap()[[1, 0, 1]], 6.0);
    }

    #[test]
    fn test_convert_blob_sample_option() {
        let blob = make_blob_f64(&[2, 2], vec![1.0, 2.0, 3.0, 4.0]);
        let options = ConvertOptions {
            sample: 1,
            ..Default::default()
        };
        let (sample, _) = convert_blob(&blob, &options).unwrap();
        assert_eq!(sample.as_f64().unwrap().as_slice().unwrap(), &[3.0, 4.0]);
    }

    #[test]
    fn test_convert_blob_without_validation() {
        let blob = make_blob(&[1, 2], vec![1.0]);
        let options = ConvertOptions {
            validate: false,
            ..Default::default()
        };
        // Conversion itself still rejects the mismatch
        assert!(convert_blob(&blob, &options).unwrap_err().is_malformed());
    }

    #[test]
    fn test_convert_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("mean.binaryproto");
        let output = dir.path().join("mean.npy");
        std::fs::write(&input, counting_blob().encode_to_vec()).unwrap();

        let stats = convert_file(&input, &output).unwrap();
        assert_eq!(stats.source_shape, vec![1, 3, 2, 2]);
        assert_eq!(stats.output_shape, vec![3, 2, 2]);
        assert_eq!(stats.precision, Some(Precision::F32));
        assert_eq!(stats.input_size, std::fs::metadata(&input).unwrap().len() as usize);

        let loaded = load_array(&output).unwrap();
        assert_eq!(loaded.shape(), &[3, 2, 2]);
    }

    #[test]
    fn test_convert_file_malformed_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("mean.binaryproto");
        let output = dir.path().join("mean.npy");
        std::fs::write(&input, make_blob(&[1, 3], vec![1.0]).encode_to_vec()).unwrap();

        let err = convert_file(&input, &output).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedInput(_)));
        assert!(!output.exists());
    }
}
