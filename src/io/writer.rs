//! `.npy` array writer
//!
//! Save arrays as NumPy `.npy` files and read them back.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ndarray::ArrayD;
use ndarray_npy::{ReadNpyError, ReadNpyExt, WriteNpyExt};

use crate::error::{ConvertError, ConvertResult};
use crate::tensor::{MeanArray, Precision};

use super::reader::read_bytes;

/// Encode an array as an in-memory `.npy` image
///
/// # Example
///
/// ```ignore
/// use caffe_mean_npy::io::array_to_npy_bytes;
///
/// let bytes = array_to_npy_bytes(&mean)?;
/// assert!(bytes.starts_with(b"\x93NUMPY"));
/// ```
pub fn array_to_npy_bytes(array: &MeanArray) -> ConvertResult<Vec<u8>> {
    let mut bytes = Vec::new();
    match array {
        MeanArray::F32(a) => a.write_npy(&mut bytes)?,
        MeanArray::F64(a) => a.write_npy(&mut bytes)?,
    }
    Ok(bytes)
}

/// Decode an `.npy` image holding `<f4` or `<f8` values
pub fn array_from_npy_bytes(bytes: &[u8]) -> ConvertResult<MeanArray> {
    match ArrayD::<f32>::read_npy(bytes) {
        Ok(a) => Ok(MeanArray::F32(a)),
        Err(ReadNpyError::WrongDescriptor(_)) => {
            Ok(MeanArray::F64(ArrayD::<f64>::read_npy(bytes)?))
        }
        Err(e) => Err(e.into()),
    }
}

/// Statistics about a saved array
#[derive(Debug, Clone)]
pub struct SaveStats {
    /// Size in bytes
    pub size_bytes: usize,
    /// Saved array shape
    pub shape: Vec<usize>,
    /// Saved element precision
    pub precision: Precision,
}

/// Save an array to a `.npy` file
///
/// The file is only created once the whole image has been encoded, and an
/// existing file at `path` is overwritten.
pub fn save_array<P: AsRef<Path>>(array: &MeanArray, path: P) -> ConvertResult<SaveStats> {
    let bytes = array_to_npy_bytes(array)?;
    let stats = SaveStats {
        size_bytes: bytes.len(),
        shape: array.shape().to_vec(),
        precision: array.precision(),
    };

    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| ConvertError::io(path, e))?;
    writer.flush().map_err(|e| ConvertError::io(path, e))?;

    Ok(stats)
}

/// Load a `.npy` file written by [`save_array`]
pub fn load_array<P: AsRef<Path>>(path: P) -> ConvertResult<MeanArray> {
    let bytes = read_bytes(path)?;
    array_from_npy_bytes(&bytes)
}
