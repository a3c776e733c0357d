// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The console handle.
//!
//! Every helper in this crate writes to and reads from a [`Console`] rather
//! than touching the process streams directly. The live handle wraps stdout
//! and stdin; tests build one over in-memory buffers.
//!
//! A console owns exactly one output sink at a time. Capture sessions (see
//! [`crate::capture`]) temporarily swap that sink for a buffer.

use std::io::{self, BufRead, BufReader, Write};

use crate::error::Result;

/// A text console: one output sink and one line-oriented input source.
pub struct Console {
    pub(crate) out: Box<dyn Write>,
    input: Box<dyn BufRead>,
    pub(crate) capture_depth: usize,
}

impl Console {
    /// Creates a console over arbitrary streams.
    pub fn new<W, R>(out: W, input: R) -> Self
    where
        W: Write + 'static,
        R: BufRead + 'static,
    {
        Self {
            out: Box::new(out),
            input: Box::new(input),
            capture_depth: 0,
        }
    }

    /// Creates a console attached to the process stdout and stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), BufReader::new(io::stdin()))
    }

    /// Writes `text` without a trailing newline. The sink is not flushed.
    pub fn write_str(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Reads one line of input with the line terminator removed.
    ///
    /// # Errors
    ///
    /// Returns an [`io::ErrorKind::UnexpectedEof`] error if the input stream
    /// is exhausted, so that prompt loops cannot spin forever on a closed
    /// stdin.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "console input closed").into());
        }

        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);

        Ok(line)
    }

    /// Writes `question`, flushes, and reads the answer line.
    pub fn prompt(&mut self, question: &str) -> Result<String> {
        self.write_str(question)?;
        self.out.flush()?;
        self.read_line()
    }

    /// Whether output is currently being redirected into a capture buffer.
    pub fn is_capturing(&self) -> bool {
        self.capture_depth > 0
    }
}

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Builds a console reading `input` and writing into a shared buffer.
#[cfg(test)]
pub(crate) fn test_console(input: &str) -> (Console, crate::capture::SharedBuffer) {
    let output = crate::capture::SharedBuffer::default();
    let console = Console::new(output.clone(), io::Cursor::new(input.as_bytes().to_vec()));
    (console, output)
}
