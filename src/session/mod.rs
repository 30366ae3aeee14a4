//! The interactive session loop.
//!
//! Single-threaded read-route-print cycle: read one line, parse and
//! dispatch it, print the reply, and stop exactly when the reply equals
//! the "Good bye!" sentinel. Generic over the input and output streams
//! so tests can drive a whole session through in-memory buffers.

use crate::config::Config;
use crate::models::AddressBook;
use crate::router::{handlers, CommandRouter, GOODBYE};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// One interactive session over an address book.
pub struct Session {
    book: AddressBook,
    router: CommandRouter,
    storage_path: PathBuf,
}

impl Session {
    /// Create a session around an already-loaded book.
    pub fn new(book: AddressBook, config: &Config) -> Self {
        Self {
            book,
            router: CommandRouter::new(config.page_size, config.data_file.clone()),
            storage_path: config.data_file.clone(),
        }
    }

    /// Run the loop until the exit sentinel (or end of input, which
    /// behaves like `exit`: the book is saved and the session ends).
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        let mut lines = input.lines();

        loop {
            write!(output, "Enter command: ")?;
            output.flush()?;

            let Some(line) = lines.next().transpose()? else {
                let reply = handlers::good_bye(&self.book, &self.storage_path);
                writeln!(output, "{}", reply)?;
                return Ok(());
            };

            let reply = self.router.handle(&mut self.book, &line);
            writeln!(output, "{}", reply)?;

            if reply == GOODBYE {
                return Ok(());
            }
        }
    }

    /// The book as it currently stands in this session.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn test_config(dir: &tempfile::TempDir) -> Config {
        Config {
            data_file: dir.path().join("book.json"),
            page_size: 10,
            log_level: "error".to_string(),
        }
    }

    fn run_script(config: &Config, script: &str) -> String {
        let mut session = Session::new(AddressBook::new(), config);
        let mut output = Vec::new();
        session.run(Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_loop_terminates_on_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let transcript = run_script(&test_config(&dir), "hello\ngood bye\nhello\n");

        assert!(transcript.contains("How can I help you?"));
        assert!(transcript.contains(GOODBYE));
        // nothing after the sentinel is processed
        assert_eq!(transcript.matches("How can I help you?").count(), 1);
    }

    #[test]
    fn test_exit_saves_book() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        run_script(&config, "add alice 1234567890\nexit\n");

        let loaded = AddressBook::load_from_file(&config.data_file).unwrap();
        assert!(loaded.find("Alice").is_some());
    }

    #[test]
    fn test_eof_behaves_like_exit() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let transcript = run_script(&config, "add alice 1234567890\n");

        assert!(transcript.ends_with("Good bye!\n"));
        assert!(config.data_file.exists());
    }

    #[test]
    fn test_prompt_precedes_every_read() {
        let dir = tempfile::tempdir().unwrap();
        let transcript = run_script(&test_config(&dir), "hello\nclose\n");
        assert_eq!(transcript.matches("Enter command: ").count(), 2);
    }
}
