//! Caffe Protocol Buffer types
//!
//! This module re-exports the generated protobuf types from `prost-build`.
//! Additional extension methods are provided in the `extensions` submodule.

/// Generated Caffe protobuf types
#[allow(missing_docs)]
#[allow(clippy::all)]
pub mod caffe {
    include!(concat!(env!("OUT_DIR"), "/caffe.rs"));
}

pub use caffe::{BlobProto, BlobShape};

/// Extension methods for Caffe protobuf types
pub mod extensions;
