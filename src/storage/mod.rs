//! Whole-book persistence.
//!
//! The book is written as a JSON array of records, in iteration order.
//! The encoding is self-describing and round-trips exactly: names, phone
//! order, and birthdays all survive a save followed by a load. No
//! cross-version compatibility is promised.

use crate::error::PersistenceResult;
use crate::models::{AddressBook, Record};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

impl AddressBook {
    /// Serialize the whole book to `path`, replacing any existing file.
    ///
    /// The file is opened and closed within this call; nothing is held
    /// open across operations.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> PersistenceResult<()> {
        let path = path.as_ref();
        let records: Vec<&Record> = self.iter().collect();

        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &records)?;

        debug!(path = %path.display(), records = records.len(), "address book saved");
        Ok(())
    }

    /// Deserialize a whole book from `path`.
    ///
    /// Every field is re-validated on the way in, so a tampered file
    /// with a malformed phone or birthday fails to decode rather than
    /// smuggling invalid values into the book.
    pub fn load_from_file(path: impl AsRef<Path>) -> PersistenceResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let records: Vec<Record> = serde_json::from_reader(BufReader::new(file))?;

        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }

        debug!(path = %path.display(), records = book.len(), "address book loaded");
        Ok(book)
    }
}
