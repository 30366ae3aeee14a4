//! Data models for the contact book.
//!
//! This module contains the record structure for a single contact and the
//! address book that holds all of them in insertion order.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
