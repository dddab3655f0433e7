//! Convert a Caffe mean file to a NumPy array
//!
//! # Usage
//!
//! ```bash
//! convert mean.binaryproto mean.npy
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) to see what was converted.

use std::env;
use std::process;

use tracing_subscriber::EnvFilter;

use caffe_mean_npy::prelude::*;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = ConvertArgs::parse(env::args_os())
        .and_then(|args| convert_file(&args.input, &args.output));

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}
