//! # Caffe Mean NPY
//!
//! Convert Caffe `.binaryproto` mean images into NumPy `.npy` arrays.
//!
//! A mean file is a single serialized `BlobProto`, usually shaped
//! `[1, C, H, W]`. The converter decodes it, drops the batch axis by taking
//! sample 0 and writes the resulting `[C, H, W]` array.
//!
//! ## Example
//!
//! ```ignore
//! use caffe_mean_npy::prelude::*;
//!
//! let stats = convert_file("mean.binaryproto", "mean.npy")?;
//! assert_eq!(stats.output_shape.len(), 3);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod cli;
pub mod error;
pub mod io;
pub mod proto;
pub mod tensor;

/// Prelude module - import commonly used types with `use caffe_mean_npy::prelude::*`
pub mod prelude {
    pub use crate::cli::ConvertArgs;
    pub use crate::error::{ConvertError, ConvertResult};
    pub use crate::io::{
        convert_blob, convert_file, convert_file_with, load_array, load_blob, save_array,
        ConvertOptions, ConvertStats,
    };
    pub use crate::proto::{BlobProto, BlobShape};
    pub use crate::tensor::{BlobField, MeanArray, Precision};
}

pub use error::{ConvertError, ConvertResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
