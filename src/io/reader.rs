//! Caffe blob reader
//!
//! Load `BlobProto` messages from files or bytes.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use prost::Message;
use tracing::debug;

use crate::error::{ConvertError, ConvertResult};
use crate::proto::BlobProto;
use crate::tensor::{BlobField, Precision};

/// Read the raw bytes of a file
pub fn read_bytes<P: AsRef<Path>>(path: P) -> ConvertResult<Vec<u8>> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;

    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();

    reader
        .read_to_end(&mut buffer)
        .map_err(|e| ConvertError::io(path, e))?;

    debug!(path = %path.display(), bytes = buffer.len(), "read input file");
    Ok(buffer)
}

/// Load a blob from a `.binaryproto` file
///
/// # Example
///
/// ```ignore
/// use caffe_mean_npy::io::load_blob;
///
/// let blob = load_blob("mean.binaryproto")?;
/// println!("Legacy header: {}", blob.has_legacy_shape());
/// ```
pub fn load_blob<P: AsRef<Path>>(path: P) -> ConvertResult<BlobProto> {
    load_blob_with_size(path).map(|(blob, _)| blob)
}

/// Load a blob and also return the size of the file it came from
pub fn load_blob_with_size<P: AsRef<Path>>(path: P) -> ConvertResult<(BlobProto, usize)> {
    let path = path.as_ref();
    let bytes = read_bytes(path)?;

    if bytes.is_empty() {
        return Err(ConvertError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    Ok((decode_blob(&bytes)?, bytes.len()))
}

/// Load a blob from bytes
///
/// Zero-length input is rejected: protobuf would happily decode it as an
/// all-default message.
pub fn blob_from_bytes(bytes: &[u8]) -> ConvertResult<BlobProto> {
    if bytes.is_empty() {
        return Err(ConvertError::EmptyInput {
            path: PathBuf::from("<memory>"),
        });
    }

    decode_blob(bytes)
}

fn decode_blob(bytes: &[u8]) -> ConvertResult<BlobProto> {
    BlobProto::decode(bytes)
        .map_err(|e| ConvertError::MalformedInput(format!("Failed to decode BlobProto: {}", e)))
}

/// Blob metadata extracted from a mean file
#[derive(Debug, Clone)]
pub struct BlobInfo {
    /// Declared dims, if any
    pub dims: Option<Vec<i64>>,
    /// Whether the dims come from the legacy N/C/H/W header
    pub legacy_shape: bool,
    /// Precision of the `data` payload
    pub precision: Precision,
    /// Number of values in the effective `data` payload
    pub data_len: usize,
    /// Number of values in the effective `diff` payload
    pub diff_len: usize,
    /// Encoded message size in bytes
    pub encoded_size: usize,
}

impl BlobInfo {
    /// Extract metadata from a blob
    pub fn from_blob(blob: &BlobProto) -> Self {
        Self {
            dims: blob.declared_dims(),
            legacy_shape: blob.has_legacy_shape(),
            precision: blob.precision(BlobField::Data),
            data_len: blob.payload_len(BlobField::Data),
            diff_len: blob.payload_len(BlobField::Diff),
            encoded_size: blob.encoded_len(),
        }
    }
}

/// Get blob information from a file
pub fn get_blob_info<P: AsRef<Path>>(path: P) -> ConvertResult<BlobInfo> {
    let blob = load_blob(path)?;
    Ok(BlobInfo::from_blob(&blob))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::extensions::{make_blob, make_legacy_blob};

    #[test]
    fn test_load_from_bytes() {
        let blob = make_blob(&[1, 3, 2, 2], vec![0.5; 12]);
        let bytes = blob.encode_to_vec();

        let loaded = blob_from_bytes(&bytes).unwrap();
        assert_eq!(loaded, blob);
    }

    #[test]
    fn test_load_empty_bytes() {
        match blob_from_bytes(&[]) {
            Err(ConvertError::EmptyInput { .. }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_bytes() {
        // Truncated varint
        let err = blob_from_bytes(&[0xff, 0xff, 0xff]).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_load_truncated_message() {
        let bytes = make_blob(&[1, 3, 2, 2], vec![1.0; 12]).encode_to_vec();
        let err = blob_from_bytes(&bytes[..bytes.len() - 3]).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.binaryproto");
        match load_blob(&path) {
            Err(ConvertError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.binaryproto");
        std::fs::write(&path, b"").unwrap();

        match load_blob(&path) {
            Err(ConvertError::EmptyInput { path: p }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_load_blob_with_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mean.binaryproto");
        let bytes = make_blob(&[1, 4], vec![0.0; 4]).encode_to_vec();
        std::fs::write(&path, &bytes).unwrap();

        let (blob, size) = load_blob_with_size(&path).unwrap();
        assert_eq!(size, bytes.len());
        assert_eq!(blob.declared_dims(), Some(vec![1, 4]));
    }

    #[test]
    fn test_blob_info() {
        let blob = make_legacy_blob(1, 3, 2, 2, vec![0.0; 12]);
        let info = BlobInfo::from_blob(&blob);

        assert_eq!(info.dims, Some(vec![1, 3, 2, 2]));
        assert!(info.legacy_shape);
        assert_eq!(info.precision, Precision::F32);
        assert_eq!(info.data_len, 12);
        assert_eq!(info.diff_len, 0);
        assert_eq!(info.encoded_size, blob.encode_to_vec().len());
    }

    #[test]
    fn test_get_blob_info_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mean.binaryproto");
        std::fs::write(&path, make_blob(&[1, 2], vec![1.0, 2.0]).encode_to_vec()).unwrap();

        let info = get_blob_info(&path).unwrap();
        assert_eq!(info.dims, Some(vec![1, 2]));
        assert!(!info.legacy_shape);
    }
}
