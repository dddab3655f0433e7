//! Tensor utilities for Caffe blobs
//!
//! This module provides utilities for working with blob tensors:
//! - Payload precision and field selection (`dtype`)
//! - Shape utilities (`shape`)
//! - Conversion between BlobProto and ndarray (`convert`)
//!
//! # Example
//!
//! ```ignore
//! use caffe_mean_npy::tensor::{blob_to_array, BlobField};
//!
//! let array = blob_to_array(&blob, BlobField::Data)?;
//! let mean = array.select_sample(0)?;
//! ```

pub mod convert;
pub mod dtype;
pub mod shape;

// Re-export commonly used items
pub use convert::{blob_to_array, MeanArray};
pub use dtype::{BlobField, Precision};
pub use shape::{blob_shape, numel};
