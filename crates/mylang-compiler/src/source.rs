//! Line sources feeding the translator.

use std::io::{self, BufRead};
use std::str::Lines;

/// A forward-only supply of source lines.
///
/// The translator pulls from a single source both at the top level and while
/// reading a block body, so an implementation never needs to rewind.
pub trait LineSource {
    /// The next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> Option<String>;
}

/// Lines of an in-memory source text, split on `\n` or `\r\n`.
pub struct SourceLines<'a> {
    lines: Lines<'a>,
}

impl<'a> SourceLines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
        }
    }
}

impl LineSource for SourceLines<'_> {
    fn next_line(&mut self) -> Option<String> {
        self.lines.next().map(str::to_string)
    }
}

/// Lines read one at a time from a buffered reader.
///
/// A read error ends the stream; it is kept so the caller can tell a short
/// read from a real end of input.
pub struct ReaderLines<R> {
    reader: R,
    error: Option<io::Error>,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            error: None,
        }
    }

    /// The error that stopped the stream, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> Option<String> {
        if self.error.is_some() {
            return None;
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(line)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}
