//! Error handling for forge.
//! Defines the error taxonomy shared by every stage of the generation pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while finding, rendering or writing a generator.
///
/// Every variant is fatal for the current invocation. Declining an overwrite
/// is not an error and never shows up here.
#[derive(Error, Debug)]
pub enum Error {
    /// No definition under the root directory declares the requested name.
    #[error("generator '{name}' not found")]
    NotFound { name: String },

    /// A definition file under the root directory is not valid structured data.
    #[error("failed to parse definition '{}': {message}", path.display())]
    ParseError { path: PathBuf, message: String },

    /// An input template named by a mapping is missing or has a syntax error.
    #[error("failed to load template '{input}': {message}")]
    TemplateLoadError { input: String, message: String },

    /// Rendering a path or file template failed.
    #[error("template error: {0}")]
    TemplateError(#[from] minijinja::Error),

    /// The mapping list could not be serialized, or its rendered form does
    /// not read back as the same mappings (count, field values, empty output).
    #[error("invalid rendered mappings: {0}")]
    PathListError(String),

    /// Prompt values passed on the command line are malformed or unknown.
    #[error("{0}")]
    ArgumentError(String),

    /// Traversal of the root directory failed.
    #[error("failed to read definitions: {0}")]
    WalkError(#[from] walkdir::Error),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with forge's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
