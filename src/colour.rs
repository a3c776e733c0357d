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

//! Text colouring with the classic 16-colour ANSI palette.
//!
//! The palette is a closed set: eight normal foreground colours, their bright
//! variants, and the matching background colours, plus `reset`. Colours are
//! looked up by their snake_case names (`"red"`, `"bright_cyan"`,
//! `"bg_bright_white"`, ...).

use std::{fmt, str::FromStr};

use crate::error::{ConsoleError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colour {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,

    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,

    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,

    BgBrightBlack,
    BgBrightRed,
    BgBrightGreen,
    BgBrightYellow,
    BgBrightBlue,
    BgBrightMagenta,
    BgBrightCyan,
    BgBrightWhite,

    Reset,
}

impl Colour {
    /// Every colour in the palette, `Reset` last.
    pub const ALL: [Colour; 33] = [
        Colour::Black,
        Colour::Red,
        Colour::Green,
        Colour::Yellow,
        Colour::Blue,
        Colour::Magenta,
        Colour::Cyan,
        Colour::White,
        Colour::BrightBlack,
        Colour::BrightRed,
        Colour::BrightGreen,
        Colour::BrightYellow,
        Colour::BrightBlue,
        Colour::BrightMagenta,
        Colour::BrightCyan,
        Colour::BrightWhite,
        Colour::BgBlack,
        Colour::BgRed,
        Colour::BgGreen,
        Colour::BgYellow,
        Colour::BgBlue,
        Colour::BgMagenta,
        Colour::BgCyan,
        Colour::BgWhite,
        Colour::BgBrightBlack,
        Colour::BgBrightRed,
        Colour::BgBrightGreen,
        Colour::BgBrightYellow,
        Colour::BgBrightBlue,
        Colour::BgBrightMagenta,
        Colour::BgBrightCyan,
        Colour::BgBrightWhite,
        Colour::Reset,
    ];

    /// The SGR parameter selecting this colour.
    pub const fn code(self) -> u8 {
        match self {
            Colour::Black => 30,
            Colour::Red => 31,
            Colour::Green => 32,
            Colour::Yellow => 33,
            Colour::Blue => 34,
            Colour::Magenta => 35,
            Colour::Cyan => 36,
            Colour::White => 37,
            Colour::BrightBlack => 90,
            Colour::BrightRed => 91,
            Colour::BrightGreen => 92,
            Colour::BrightYellow => 93,
            Colour::BrightBlue => 94,
            Colour::BrightMagenta => 95,
            Colour::BrightCyan => 96,
            Colour::BrightWhite => 97,
            Colour::BgBlack => 40,
            Colour::BgRed => 41,
            Colour::BgGreen => 42,
            Colour::BgYellow => 43,
            Colour::BgBlue => 44,
            Colour::BgMagenta => 45,
            Colour::BgCyan => 46,
            Colour::BgWhite => 47,
            Colour::BgBrightBlack => 100,
            Colour::BgBrightRed => 101,
            Colour::BgBrightGreen => 102,
            Colour::BgBrightYellow => 103,
            Colour::BgBrightBlue => 104,
            Colour::BgBrightMagenta => 105,
            Colour::BgBrightCyan => 106,
            Colour::BgBrightWhite => 107,
            Colour::Reset => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Colour::Black => "black",
            Colour::Red => "red",
            Colour::Green => "green",
            Colour::Yellow => "yellow",
            Colour::Blue => "blue",
            Colour::Magenta => "magenta",
            Colour::Cyan => "cyan",
            Colour::White => "white",
            Colour::BrightBlack => "bright_black",
            Colour::BrightRed => "bright_red",
            Colour::BrightGreen => "bright_green",
            Colour::BrightYellow => "bright_yellow",
            Colour::BrightBlue => "bright_blue",
            Colour::BrightMagenta => "bright_magenta",
            Colour::BrightCyan => "bright_cyan",
            Colour::BrightWhite => "bright_white",
            Colour::BgBlack => "bg_black",
            Colour::BgRed => "bg_red",
            Colour::BgGreen => "bg_green",
            Colour::BgYellow => "bg_yellow",
            Colour::BgBlue => "bg_blue",
            Colour::BgMagenta => "bg_magenta",
            Colour::BgCyan => "bg_cyan",
            Colour::BgWhite => "bg_white",
            Colour::BgBrightBlack => "bg_bright_black",
            Colour::BgBrightRed => "bg_bright_red",
            Colour::BgBrightGreen => "bg_bright_green",
            Colour::BgBrightYellow => "bg_bright_yellow",
            Colour::BgBrightBlue => "bg_bright_blue",
            Colour::BgBrightMagenta => "bg_bright_magenta",
            Colour::BgBrightCyan => "bg_bright_cyan",
            Colour::BgBrightWhite => "bg_bright_white",
            Colour::Reset => "reset",
        }
    }

    /// The escape sequence that switches the terminal to this colour.
    pub fn escape(self) -> String {
        format!("\x1b[{}m", self.code())
    }

    /// Wraps `text` in this colour, resetting afterwards.
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.escape(), text, Colour::Reset.escape())
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colour {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self> {
        Colour::ALL
            .into_iter()
            .find(|colour| colour.name() == s)
            .ok_or_else(|| ConsoleError::InvalidColour(s.to_string()))
    }
}

/// Colours `text` with the palette entry named `colour`.
///
/// # Errors
///
/// Returns [`ConsoleError::InvalidColour`] if `colour` is not a palette name.
pub fn colorize_text(text: &str, colour: &str) -> Result<String> {
    Ok(colour.parse::<Colour>()?.paint(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn colorize_wraps_in_code_and_reset() {
        assert_eq!(colorize_text("x", "red").unwrap(), "\x1b[31mx\x1b[0m");
        assert_eq!(colorize_text("x", "bg_bright_white").unwrap(), "\x1b[107mx\x1b[0m");
    }

    #[test]
    fn colorize_rejects_unknown_names() {
        let err = colorize_text("x", "bogus").unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidColour(ref name) if name == "bogus"));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("Red".parse::<Colour>().is_err());
    }

    #[test]
    fn every_name_parses_back() {
        for colour in Colour::ALL {
            assert_eq!(colour.name().parse::<Colour>().unwrap(), colour);
        }
    }

    #[test]
    fn palette_has_thirty_two_colours_and_reset() {
        let colours = Colour::ALL.iter().filter(|c| **c != Colour::Reset).count();
        assert_eq!(colours, 32);
        assert_eq!(Colour::Reset.escape(), "\x1b[0m");
    }
}
