//! AddressBook: the in-memory directory of all records, keyed by name.

use crate::models::Record;
use std::collections::HashMap;

/// Mapping from contact name to [`Record`], preserving insertion order.
///
/// Keys are unique; one record per name. Iteration, pagination, and
/// search all follow the order records were first added in. The order
/// is tracked in a side vector since the standard map types either
/// hash-scramble or sort their keys.
///
/// Invariant: for every `(key, record)` pair, `record.name().as_str() == key`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name, overwriting any existing
    /// record with that name. An overwrite keeps the original position
    /// in iteration order.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name. Returns `true` if a record was removed,
    /// `false` if the name was absent (no-op).
    pub fn delete(&mut self, name: &str) -> bool {
        if self.records.remove(name).is_some() {
            self.order.retain(|n| n != name);
            true
        } else {
            false
        }
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Lazy pagination: pages of up to `page_size` records in insertion
    /// order, each materialized only as the iterator advances; the last
    /// page may be shorter. Each call starts a fresh pass. A
    /// `page_size` of zero is treated as one.
    pub fn pages(&self, page_size: usize) -> impl Iterator<Item = Vec<&Record>> {
        self.order.chunks(page_size.max(1)).map(|chunk| {
            chunk
                .iter()
                .filter_map(|name| self.records.get(name))
                .collect()
        })
    }

    /// All records whose name or any phone contains `query` as a
    /// substring, case-insensitively. Each record appears at most once,
    /// in insertion order.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query = query.to_lowercase();
        self.iter()
            .filter(|record| {
                record.name().as_str().to_lowercase().contains(&query)
                    || record.phones().iter().any(|p| p.as_str().contains(&query))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Name;

    fn record_with_phone(name: &str, phone: &str) -> Record {
        let mut record = Record::new(Name::new(name).unwrap());
        record.add_phone(phone).unwrap();
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));
        assert_eq!(book.find("John").unwrap().name().as_str(), "John");
        assert!(book.find("Jane").is_none());
    }

    #[test]
    fn test_add_overwrites_same_name_keeping_position() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));
        book.add_record(record_with_phone("Jane", "9876543210"));
        book.add_record(record_with_phone("John", "5555555555"));

        assert_eq!(book.len(), 2);
        assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "5555555555");
        let names: Vec<_> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["John", "Jane"]);
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("Jane", "9876543210"));
        assert!(book.delete("Jane"));
        assert!(book.is_empty());
        // deleting a missing name is a no-op
        assert!(!book.delete("Jane"));
    }

    #[test]
    fn test_iter_insertion_order() {
        let mut book = AddressBook::new();
        for name in ["Zoe", "Adam", "Mia"] {
            book.add_record(record_with_phone(name, "1234567890"));
        }
        let names: Vec<_> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Adam", "Mia"]);
    }

    #[test]
    fn test_pages_sizes_and_coverage() {
        let mut book = AddressBook::new();
        for name in ["A1", "B2", "C3", "D4", "E5"] {
            book.add_record(record_with_phone(name, "1234567890"));
        }

        let pages: Vec<Vec<&Record>> = book.pages(2).collect();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].len(), 2);
        assert_eq!(pages[1].len(), 2);
        assert_eq!(pages[2].len(), 1);

        let seen: Vec<_> = pages
            .iter()
            .flatten()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(seen, vec!["A1", "B2", "C3", "D4", "E5"]);
    }

    #[test]
    fn test_pages_restart_fresh() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));

        assert_eq!(book.pages(2).count(), 1);
        // a fresh call restarts from the beginning
        assert_eq!(book.pages(2).count(), 1);
    }

    #[test]
    fn test_pages_first_page_without_full_consumption() {
        let mut book = AddressBook::new();
        for name in ["A1", "B2", "C3"] {
            book.add_record(record_with_phone(name, "1234567890"));
        }

        let mut pages = book.pages(2);
        let first = pages.next().unwrap();
        let names: Vec<_> = first.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["A1", "B2"]);
        // the remaining pages need never be produced
        drop(pages);
    }

    #[test]
    fn test_pages_zero_page_size() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));
        book.add_record(record_with_phone("Jane", "9876543210"));

        let pages: Vec<_> = book.pages(0).collect();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 1);
    }

    #[test]
    fn test_search_by_name_and_phone() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1235554321"));
        book.add_record(record_with_phone("Jane", "9876543210"));
        let mut johnny = Record::new(Name::new("Johnny").unwrap());
        johnny.add_phone("0005550000").unwrap();
        johnny.add_phone("1115551111").unwrap();
        book.add_record(johnny);

        let by_phone: Vec<_> = book.search("555").iter().map(|r| r.name().as_str()).collect();
        // Johnny matches on two phones but appears once
        assert_eq!(by_phone, vec!["John", "Johnny"]);

        let by_name: Vec<_> = book.search("john").iter().map(|r| r.name().as_str()).collect();
        assert_eq!(by_name, vec!["John", "Johnny"]);
    }

    #[test]
    fn test_search_no_matches() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));
        assert!(book.search("zzz").is_empty());
    }
}
