//! Contact Book - a console-driven contact manager.
//!
//! Stores named contacts with validated phone numbers and optional
//! birthdays, supports add/change/lookup/delete/search, persists the
//! whole book to a local JSON file, and loops reading textual commands
//! until an exit command is issued.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The record and the insertion-ordered address book
//! - **storage**: Whole-book save/load
//! - **router**: Prefix parsing and command dispatch
//! - **session**: The read-route-print loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration from environment variables

// Re-export commonly used types
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod router;
pub mod session;
pub mod storage;

pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, PersistenceError};
pub use models::{AddressBook, Record};
pub use router::{Command, CommandRouter, GOODBYE};
pub use session::Session;
