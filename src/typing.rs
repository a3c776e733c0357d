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

//! Typewriter-style printing.
//!
//! Text is written one character at a time, flushed after each character,
//! with a pause in between. The calling thread is blocked for roughly
//! `chars * delay`.

use std::{io::Write, thread, time::Duration};

use crate::{console::Console, error::Result};

/// Pause between characters when the caller passes a zero delay.
pub const DEFAULT_TYPING_DELAY: Duration = Duration::from_millis(50);

/// Pause between sentences in [`write_sentences`] by default.
pub const DEFAULT_LINE_DELAY: Duration = Duration::from_millis(700);

fn effective_delay(delay: Duration) -> Duration {
    if delay.is_zero() {
        DEFAULT_TYPING_DELAY
    } else {
        delay
    }
}

/// Prints `text` with a typing effect.
pub fn typing_print(console: &mut Console, text: &str, delay: Duration) -> Result<()> {
    let delay = effective_delay(delay);
    let mut buf = [0u8; 4];

    for ch in text.chars() {
        console.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        console.flush()?;
        thread::sleep(delay);
    }

    Ok(())
}

/// Prints `text` with a typing effect, then waits for the user to enter a
/// line and returns it verbatim.
pub fn typing_input(console: &mut Console, text: &str, delay: Duration) -> Result<String> {
    typing_print(console, text, delay)?;
    console.read_line()
}

/// Types out each line in turn, pausing for `line_delay` after each one.
pub fn write_sentences<S: AsRef<str>>(
    console: &mut Console,
    lines: &[S],
    type_delay: Duration,
    line_delay: Duration,
) -> Result<()> {
    for line in lines {
        typing_print(console, line.as_ref(), type_delay)?;
        thread::sleep(line_delay);
    }

    Ok(())
}
