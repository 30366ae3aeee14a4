//! Command parsing and dispatch.
//!
//! Raw input is matched against an ordered table of command prefixes and
//! routed to a handler bound to the shared [`AddressBook`]. The table is
//! built per router instance and sorted by descending prefix length, so
//! the longest matching prefix always wins and matching is deterministic.

pub mod handlers;

pub use handlers::GOODBYE;

use crate::models::AddressBook;
use std::path::PathBuf;

/// A recognized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    ShowAll,
    Search,
    Delete,
    Birthday,
    Help,
    Exit,
}

/// Prefix router: parses free-text input into a command plus positional
/// arguments and dispatches it to the matching handler.
///
/// Stateless per invocation; the only bound state is the configuration
/// the handlers need (page size for listings, storage path for exit).
#[derive(Debug)]
pub struct CommandRouter {
    routes: Vec<(&'static str, Command)>,
    page_size: usize,
    storage_path: PathBuf,
}

impl CommandRouter {
    /// Build a router with the full command table.
    ///
    /// Prefixes that take arguments carry a trailing space, so `add` on
    /// its own does not match `add `.
    pub fn new(page_size: usize, storage_path: PathBuf) -> Self {
        let mut routes = vec![
            ("hello", Command::Hello),
            ("add ", Command::Add),
            ("change ", Command::Change),
            ("phone ", Command::Phone),
            ("show all", Command::ShowAll),
            ("search ", Command::Search),
            ("del ", Command::Delete),
            ("birthday ", Command::Birthday),
            ("help", Command::Help),
            ("good bye", Command::Exit),
            ("close", Command::Exit),
            ("exit", Command::Exit),
        ];
        // Longest prefix wins; stable sort keeps table order within a length.
        routes.sort_by_key(|(prefix, _)| std::cmp::Reverse(prefix.len()));

        Self {
            routes,
            page_size,
            storage_path,
        }
    }

    /// Parse raw input into a command and its positional arguments.
    ///
    /// Input is lower-cased (line endings stripped, other whitespace
    /// kept so `phone ` still routes to an arity error rather than to
    /// the unknown-command handler), then matched against the route
    /// table. Text after the matched prefix splits on whitespace; the
    /// first argument, when present, is capitalized on the assumption
    /// it is a contact name. No match yields `(None, [])`.
    pub fn parse(&self, input: &str) -> (Option<Command>, Vec<String>) {
        let input = input.trim_end_matches(['\r', '\n']).to_lowercase();

        let Some((prefix, command)) = self
            .routes
            .iter()
            .find(|(prefix, _)| input.starts_with(prefix))
        else {
            return (None, Vec::new());
        };

        let mut args: Vec<String> = input[prefix.len()..]
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if let Some(first) = args.first_mut() {
            *first = capitalize(first);
        }

        (Some(*command), args)
    }

    /// Dispatch a parsed command to its handler and render the outcome.
    ///
    /// An absent command goes to the default handler. Handler errors
    /// (validation, lookups, arity) are rendered as display strings
    /// here and never propagate to the session loop.
    pub fn dispatch(
        &self,
        book: &mut AddressBook,
        command: Option<Command>,
        args: &[String],
    ) -> String {
        let Some(command) = command else {
            return handlers::default_handler();
        };

        let result = match command {
            Command::Hello => Ok(handlers::hello()),
            Command::Add => handlers::add(book, args),
            Command::Change => handlers::change(book, args),
            Command::Phone => handlers::phone(book, args),
            Command::ShowAll => Ok(handlers::show_all(book, self.page_size)),
            Command::Search => handlers::search(book, args),
            Command::Delete => handlers::delete(book, args),
            Command::Birthday => handlers::birthday(book, args),
            Command::Help => Ok(handlers::help()),
            Command::Exit => Ok(handlers::good_bye(book, &self.storage_path)),
        };

        result.unwrap_or_else(|e| e.to_string())
    }

    /// Parse and dispatch in one step.
    pub fn handle(&self, book: &mut AddressBook, input: &str) -> String {
        let (command, args) = self.parse(input);
        self.dispatch(book, command, &args)
    }
}

/// First letter upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
