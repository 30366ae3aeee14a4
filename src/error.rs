//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain value-object validation has its own hand-written error in `domain::errors`;
//! everything here wraps or sits above it.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a parsed command.
///
/// These are rendered to user-facing strings at the dispatch boundary and
/// never propagate out of the session loop.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A field value failed validation
    #[error("Wrong format: {0}")]
    Validation(#[from] ValidationError),

    /// A phone number was not present on the record
    #[error("Phone number '{0}' not found")]
    PhoneNotFound(String),

    /// The command was given the wrong number of arguments
    #[error("Wrong number of arguments: expected {expected}, got {actual}")]
    WrongArguments { expected: String, actual: usize },
}

/// Errors that can occur while saving or loading the address book.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Reading or writing the book file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The book file did not decode as a valid record list
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
