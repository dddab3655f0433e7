//! Command-line arguments
//!
//! The `convert` binary takes exactly two positional arguments.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{ConvertError, ConvertResult};

const DEFAULT_PROGRAM: &str = "convert";

/// Validated command-line arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertArgs {
    /// Caffe `.binaryproto` mean file
    pub input: PathBuf,
    /// Destination `.npy` file
    pub output: PathBuf,
}

impl ConvertArgs {
    /// Parse `argv`, program name first
    ///
    /// Arguments are taken as OS strings so paths need not be UTF-8.
    /// Anything other than exactly two arguments after the program name is a
    /// [`ConvertError::Usage`].
    pub fn parse<I, S>(argv: I) -> ConvertResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::<OsString>::into);
        let program = argv
            .next()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
        let rest: Vec<OsString> = argv.collect();

        match <[OsString; 2]>::try_from(rest) {
            Ok([input, output]) => Ok(Self {
                input: PathBuf::from(input),
                output: PathBuf::from(output),
            }),
            Err(_) => Err(ConvertError::Usage { program }),
        }
    }
}
