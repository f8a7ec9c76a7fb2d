//! Sources of input lines: the interactive line editor, or any buffered reader.

use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, BufRead};

/// Something the session can read lines from.
pub trait Input {
    /// Shows `prompt` (if the source is interactive) and reads the next line, without its line
    /// terminator. Returns [`None`] once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Creates the interactive line editor.
pub fn editor() -> io::Result<DefaultEditor> {
    DefaultEditor::new().map_err(readline_to_io)
}

fn readline_to_io(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(err) => err,
        err => io::Error::new(io::ErrorKind::Other, err),
    }
}

impl Input for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.add_history_entry(&line).map_err(readline_to_io)?;
                }
                Ok(Some(line))
            },
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(err) => Err(readline_to_io(err)),
        }
    }
}

/// Reads lines from a script or a pipe. Prompts are not shown.
pub struct Lines<R> {
    reader: R,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Input for Lines<R> {
    fn read_line(&mut self, _: &str) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn lines_strip_terminators() {
        let mut input = Lines::new("7\r\n2.5\nlast".as_bytes());
        assert_eq!(input.read_line("> ").unwrap(), Some("7".to_string()));
        assert_eq!(input.read_line("> ").unwrap(), Some("2.5".to_string()));
        assert_eq!(input.read_line("> ").unwrap(), Some("last".to_string()));
        assert_eq!(input.read_line("> ").unwrap(), None);
    }
}
