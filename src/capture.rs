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

//! Output capture sessions.
//!
//! A [`CaptureSession`] redirects a [`Console`]'s output into an in-memory
//! buffer for as long as the session lives. The previous sink is put back
//! when the session is stopped or dropped, so an early return or a panic
//! inside the captured region still leaves the console usable.
//!
//! ```ignore
//! let mut session = console.capture();
//! session.write_str("hello")?;
//! assert_eq!(session.stop(), "hello");
//! ```

use std::{
    io::{self, Write},
    mem,
    ops::{Deref, DerefMut},
    sync::{Arc, Mutex, PoisonError},
};

use tracing::{debug, warn};

use crate::console::Console;

/// An append-only byte buffer that can be shared between a console sink and
/// whoever wants to read it back.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Returns everything written so far, decoded lossily as UTF-8.
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A scoped redirection of console output into memory.
///
/// The session dereferences to the underlying [`Console`], so every helper
/// in the crate can be called on it while output is captured.
pub struct CaptureSession<'a> {
    console: &'a mut Console,
    buffer: SharedBuffer,
    previous: Option<Box<dyn Write>>,
}

impl Console {
    /// Starts capturing this console's output.
    ///
    /// Captures nest: capturing from inside a session redirects into a fresh
    /// buffer and the outer buffer becomes the sink again once the inner
    /// session ends.
    pub fn capture(&mut self) -> CaptureSession<'_> {
        // Anything still buffered belongs to the sink being replaced.
        if let Err(err) = self.out.flush() {
            warn!(%err, "failed to flush output before capture");
        }

        let buffer = SharedBuffer::default();
        let previous = mem::replace(&mut self.out, Box::new(buffer.clone()));
        self.capture_depth += 1;

        debug!(depth = self.capture_depth, "output capture started");

        CaptureSession {
            console: self,
            buffer,
            previous: Some(previous),
        }
    }

    /// Runs `f` with output captured and returns its result along with the
    /// text it printed.
    pub fn suppressed<T>(&mut self, f: impl FnOnce(&mut Console) -> T) -> (T, String) {
        let mut session = self.capture();
        let value = f(&mut session);
        (value, session.stop())
    }
}

impl CaptureSession<'_> {
    /// Returns the full contents captured so far.
    pub fn captured(&self) -> String {
        self.buffer.contents()
    }

    /// Ends the session, restoring the previous sink, and returns the
    /// captured text.
    pub fn stop(mut self) -> String {
        self.restore();
        self.buffer.contents()
    }

    fn restore(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.console.out = previous;
            self.console.capture_depth -= 1;

            debug!(depth = self.console.capture_depth, "output capture stopped");
        }
    }
}

impl Deref for CaptureSession<'_> {
    type Target = Console;

    fn deref(&self) -> &Console {
        self.console
    }
}

impl DerefMut for CaptureSession<'_> {
    fn deref_mut(&mut self) -> &mut Console {
        self.console
    }
}

impl Drop for CaptureSession<'_> {
    fn drop(&mut self) {
        self.restore();
    }
}
