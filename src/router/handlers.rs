//! Command handlers.
//!
//! Each handler takes the shared book plus the parsed positional
//! arguments and returns either a reply string or a [`CommandError`]
//! that the dispatcher renders for the user.

use crate::domain::Name;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use std::path::Path;
use tracing::{error, info};

/// The sentinel reply that terminates the session loop.
pub const GOODBYE: &str = "Good bye!";

fn expect_args(args: &[String], expected: usize) -> CommandResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CommandError::WrongArguments {
            expected: expected.to_string(),
            actual: args.len(),
        })
    }
}

pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// `add <name> <phone>` — create a record, or append the phone to an
/// existing record of the same name (duplicates allowed).
pub fn add(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    expect_args(args, 2)?;
    let (name, phone) = (&args[0], &args[1]);

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(format!(
            "Added phone number '{}' to existing contact '{}'.",
            phone, name
        ));
    }

    let mut record = Record::new(Name::new(name.clone())?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok(format!(
        "Contact '{}' with phone number '{}' added successfully.",
        name, phone
    ))
}

/// `change <name> <old_phone> <new_phone>`
pub fn change(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    expect_args(args, 3)?;
    let (name, old, new) = (&args[0], &args[1], &args[2]);

    let Some(record) = book.find_mut(name) else {
        return Ok("Name not found in contacts!".to_string());
    };
    record.edit_phone(old, new)?;
    Ok(format!("Phone number for '{}' changed to '{}'.", name, new))
}

/// `phone <name>`
pub fn phone(book: &AddressBook, args: &[String]) -> CommandResult<String> {
    expect_args(args, 1)?;
    let name = &args[0];

    let Some(record) = book.find(name) else {
        return Ok("Name not found in contacts!".to_string());
    };
    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Ok(format!("The phone number for '{}' is {}.", name, phones))
}

/// `show all` — every contact, one line each, in insertion order.
pub fn show_all(book: &AddressBook, page_size: usize) -> String {
    if book.is_empty() {
        return "No contacts available.".to_string();
    }

    let mut result = String::from("All contacts:");
    for page in book.pages(page_size) {
        for record in page {
            result.push('\n');
            result.push_str(&record.to_string());
        }
    }
    result
}

/// `search <text>` — records whose name or any phone contains the text.
pub fn search(book: &AddressBook, args: &[String]) -> CommandResult<String> {
    expect_args(args, 1)?;

    let matches = book.search(&args[0]);
    if matches.is_empty() {
        return Ok("Contacts not found".to_string());
    }

    let mut result = String::from("Contacts found:");
    for record in matches {
        result.push('\n');
        result.push_str(&record.to_string());
    }
    Ok(result)
}

/// `del <name>`
pub fn delete(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    expect_args(args, 1)?;
    let name = &args[0];

    if book.delete(name) {
        Ok(format!("Contact '{}' deleted.", name))
    } else {
        Ok("Contacts not found".to_string())
    }
}

/// `birthday <name> [date]` — with a date, sets the birthday; without,
/// reports the countdown to the next occurrence.
pub fn birthday(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    match args {
        [name] => {
            let Some(record) = book.find(name) else {
                return Ok("Name not found in contacts!".to_string());
            };
            Ok(match record.days_to_birthday() {
                None => format!("No birthday set for '{}'.", name),
                Some(0) => format!("{}'s birthday is today!", name),
                Some(days) => format!("{}'s birthday is in {} days.", name, days),
            })
        }
        [name, date] => {
            let Some(record) = book.find_mut(name) else {
                return Ok("Name not found in contacts!".to_string());
            };
            record.set_birthday(date)?;
            Ok(format!("Birthday for '{}' set to {}.", name, date))
        }
        _ => Err(CommandError::WrongArguments {
            expected: "1 or 2".to_string(),
            actual: args.len(),
        }),
    }
}

pub fn help() -> String {
    "You can use these commands:\n\
     hello\n\
     add name phone\n\
     change name old_phone new_phone\n\
     phone name\n\
     show all\n\
     search text\n\
     del name\n\
     birthday name [YYYY-MM-DD]\n\
     help\n\
     good bye\n\
     close\n\
     exit"
        .to_string()
}

/// `good bye` / `close` / `exit` — persist the book and return the
/// sentinel. A failed save is logged but does not block shutdown.
pub fn good_bye(book: &AddressBook, path: &Path) -> String {
    match book.save_to_file(path) {
        Ok(()) => info!(path = %path.display(), "address book saved to disk"),
        Err(e) => error!(path = %path.display(), "failed to save address book: {}", e),
    }
    GOODBYE.to_string()
}

pub fn default_handler() -> String {
    "Unknown command. Please try again.".to_string()
}
