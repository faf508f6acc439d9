#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// HTTP fetch failure.
    #[display("Fetch Error: {_0}")]
    Http(Box<ureq::Error>),

    /// Error bubbled up from the core translator.
    #[display("Core Error: {_0}")]
    Core(tsgen_core::Error),

    /// Two definitions map to the same output file name.
    #[from(ignore)]
    #[display("Duplicate output file name: {_0}")]
    DuplicateFileName(String),

    /// General failure message.
    #[display("Operation failed: {_0}")]
    General(String),
}

impl From<ureq::Error> for CliError {
    fn from(e: ureq::Error) -> Self {
        CliError::Http(Box::new(e))
    }
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because the
/// `General(String)` and `DuplicateFileName(String)` variants contain a
/// `String`, which does not implement `std::error::Error`, causing
/// auto-derived `source()` implementations to fail compilation.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
