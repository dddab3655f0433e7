//! Build script for caffe-mean-npy
//!
//! Generates Rust code from the Caffe blob protobuf definitions using prost-build.

use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_path = PathBuf::from("proto/caffe.proto");

    if !proto_path.exists() {
        return Err(format!(
            "Caffe proto file not found at: {}\n\
             Please ensure proto/caffe.proto exists.",
            proto_path.display()
        )
        .into());
    }

    // Fall back to the bundled protoc when the host does not provide one
    if env::var_os("PROTOC").is_none() {
        env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    let mut config = prost_build::Config::new();
    config.out_dir(&out_dir);
    config.compile_protos(&[&proto_path], &["proto/"])?;

    println!("cargo:rerun-if-changed=proto/caffe.proto");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=PROTOC");

    Ok(())
}
