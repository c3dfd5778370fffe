//! Error handling for the Stubsmith application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Stubsmith operations.
///
/// This enum represents all possible errors that can occur while resolving
/// recipes and generating files. It implements the standard Error trait
/// through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents underlying I/O failures during write, delete or rename,
    /// surfaced verbatim
    #[error("IO error: {0}.")]
    Io(#[from] io::Error),

    /// Represents invalid or incomplete recipe configuration, including
    /// unknown name-transform identifiers and missing stub files
    #[error("Configuration error: {0}.")]
    Config(String),

    /// Represents an attempt to read or substitute in a file that does not exist
    #[error("File {0} does not exist.")]
    NotFound(String),

    /// Represents a target file that already exists while neither overwrite
    /// nor backup was requested
    #[error("Target file {0} already exists.")]
    TargetExists(String),
}

impl Error {
    /// Recoverable errors are reported per recipe without aborting the batch;
    /// everything else is fatal to the whole run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::TargetExists(_))
    }
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
