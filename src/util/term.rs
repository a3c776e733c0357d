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

//! Cursor and line control.
//!
//! These functions redraw console output in place by moving the cursor up
//! and erasing what was printed before. They emit plain ANSI sequences via
//! `crossterm` commands, so they work on any sink a [`Console`] writes to.
//!
//! # Compatibility
//!
//! The sequences used are `ESC[nF` (cursor to start of previous line),
//! `ESC[K` (erase to end of line) and `ESC[2J` (erase screen). Every
//! terminal emulator in common use understands them.

use std::io::Write;

use crossterm::{
    cursor::{MoveTo, MoveToPreviousLine},
    queue,
    terminal::{Clear, ClearType},
};

use crate::{console::Console, error::Result};

/// Moves the cursor up `num_lines` lines and erases the line it lands on.
///
/// With `move_front` the cursor then moves up one more line.
pub fn clear_lines(console: &mut Console, num_lines: u16, move_front: bool) -> Result<()> {
    if num_lines > 0 {
        queue!(console, MoveToPreviousLine(num_lines))?;
    }
    queue!(console, Clear(ClearType::UntilNewLine))?;
    if move_front {
        queue!(console, MoveToPreviousLine(1))?;
    }
    console.flush()?;
    Ok(())
}

/// Erases the whole screen and homes the cursor.
pub fn clear_screen(console: &mut Console) -> Result<()> {
    queue!(console, Clear(ClearType::All), MoveTo(0, 0))?;
    console.flush()?;
    Ok(())
}

/// Prints a blank line.
pub fn skip_line(console: &mut Console) -> Result<()> {
    console.write_str("\n\n")?;
    console.flush()?;
    Ok(())
}

/// Converts a line count into the width the cursor commands accept,
/// saturating at the largest value a terminal could display.
pub(crate) fn line_count(lines: usize) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::test_console;
    use pretty_assertions::assert_eq;

    #[test]
    fn clear_lines_moves_up_then_erases() {
        let (mut console, output) = test_console("");

        clear_lines(&mut console, 3, false).unwrap();

        assert_eq!(output.contents(), "\x1b[3F\x1b[K");
    }

    #[test]
    fn clear_lines_zero_only_erases() {
        let (mut console, output) = test_console("");

        clear_lines(&mut console, 0, false).unwrap();

        assert_eq!(output.contents(), "\x1b[K");
    }

    #[test]
    fn clear_lines_move_front_goes_one_further() {
        let (mut console, output) = test_console("");

        clear_lines(&mut console, 1, true).unwrap();

        assert_eq!(output.contents(), "\x1b[1F\x1b[K\x1b[1F");
    }

    #[test]
    fn clear_screen_homes_cursor() {
        let (mut console, output) = test_console("");

        clear_screen(&mut console).unwrap();

        assert_eq!(output.contents(), "\x1b[2J\x1b[1;1H");
    }

    #[test]
    fn line_count_saturates() {
        assert_eq!(line_count(12), 12);
        assert_eq!(line_count(usize::MAX), u16::MAX);
    }
}
