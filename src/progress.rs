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

//! Single-line progress bars that redraw in place.
//!
//! A bar is drawn as
//!
//! ```text
//! Loading: [##########----------] 50%
//! ```
//!
//! preceded by a carriage return and without a trailing newline, so calling
//! [`ProgressBar::draw`] repeatedly overwrites the previous bar.
//!
//! Progress is passed 0-based: drawing step `current` shows `current + 1` of
//! `total` as complete.

use std::io::Write;

use crate::{
    console::Console,
    error::{ConsoleError, Result},
    util::format::format_percent,
};

/// How the percentage after the bar is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Truncated to one decimal place, e.g. `33.3%`.
    #[default]
    Float,
    /// Truncated to a whole number, e.g. `33%`.
    Integer,
}

impl DisplayMode {
    pub fn from_show_float(show_float: bool) -> Self {
        if show_float {
            DisplayMode::Float
        } else {
            DisplayMode::Integer
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressBar {
    name: String,
    total: u64,
    length: usize,
    display_mode: DisplayMode,
    empty_tile: char,
    full_tile: char,
}

impl ProgressBar {
    pub const DEFAULT_EMPTY_TILE: char = '-';
    pub const DEFAULT_FULL_TILE: char = '#';

    /// Creates an unnamed bar of `length` tiles tracking `total` steps.
    pub fn new(total: u64, length: usize) -> Self {
        Self {
            name: String::new(),
            total,
            length,
            display_mode: DisplayMode::default(),
            empty_tile: Self::DEFAULT_EMPTY_TILE,
            full_tile: Self::DEFAULT_FULL_TILE,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.display_mode = display_mode;
        self
    }

    pub fn with_tiles(mut self, empty_tile: char, full_tile: char) -> Self {
        self.empty_tile = empty_tile;
        self.full_tile = full_tile;
        self
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of full tiles shown after 0-based step `current`.
    pub fn filled_tiles(&self, current: u64) -> Result<usize> {
        if self.total == 0 {
            return Err(ConsoleError::ZeroTotal);
        }

        let done = u128::from(current) + 1;
        let filled = self.length as u128 * done / u128::from(self.total);

        Ok(usize::try_from(filled).unwrap_or(usize::MAX).min(self.length))
    }

    /// Renders the bar for 0-based step `current`, without the leading
    /// carriage return.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::ZeroTotal`] if the bar tracks zero steps.
    pub fn render(&self, current: u64) -> Result<String> {
        let filled = self.filled_tiles(current)?;
        let show_float = self.display_mode == DisplayMode::Float;
        let percent = format_percent(current.saturating_add(1), self.total, show_float);

        let mut line = String::with_capacity(self.name.len() + self.length + 12);
        if !self.name.is_empty() {
            line.push_str(&self.name);
            line.push_str(": ");
        }
        line.push('[');
        line.extend(std::iter::repeat_n(self.full_tile, filled));
        line.extend(std::iter::repeat_n(self.empty_tile, self.length - filled));
        line.push_str("] ");
        line.push_str(&percent);
        line.push('%');

        Ok(line)
    }

    /// Draws the bar for 0-based step `current` over the current line.
    pub fn draw(&self, console: &mut Console, current: u64) -> Result<()> {
        let line = self.render(current)?;
        console.write_str("\r")?;
        console.write_str(&line)?;
        console.flush()?;
        Ok(())
    }
}

/// Draws a one-off progress bar with the default tiles.
///
/// An empty `progress_name` omits the `"name: "` prefix. Custom tiles go
/// through [`ProgressBar::with_tiles`].
pub fn progress_bar(
    console: &mut Console,
    progress_name: &str,
    current: u64,
    total: u64,
    length: usize,
    show_float: bool,
) -> Result<()> {
    ProgressBar::new(total, length)
        .with_name(progress_name)
        .with_display_mode(DisplayMode::from_show_float(show_float))
        .draw(console, current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::test_console;
    use pretty_assertions::assert_eq;

    #[test]
    fn half_way_integer_bar() {
        let (mut console, output) = test_console("");

        progress_bar(&mut console, "", 49, 100, 20, false).unwrap();

        assert_eq!(output.contents(), "\r[##########----------] 50%");
    }

    #[test]
    fn named_float_bar() {
        let bar = ProgressBar::new(3, 9).with_name("Loading");

        assert_eq!(bar.render(0).unwrap(), "Loading: [###------] 33.3%");
        assert_eq!(bar.render(2).unwrap(), "Loading: [#########] 100.0%");
    }

    #[test]
    fn custom_tiles() {
        let bar = ProgressBar::new(4, 4)
            .with_tiles('.', '=')
            .with_display_mode(DisplayMode::Integer);

        assert_eq!(bar.render(1).unwrap(), "[==..] 50%");
    }

    #[test]
    fn tile_count_matches_formula_for_all_steps() {
        for total in 1..=12u64 {
            for length in 0..=15usize {
                let bar = ProgressBar::new(total, length).with_tiles('-', '#');
                for current in 0..total {
                    let line = bar.render(current).unwrap();
                    let expected = (length as u64 * (current + 1) / total) as usize;

                    let track: String = line
                        .chars()
                        .skip_while(|c| *c != '[')
                        .skip(1)
                        .take_while(|c| *c != ']')
                        .collect();

                    assert_eq!(track.chars().count(), length);
                    assert_eq!(track.chars().filter(|c| *c == '#').count(), expected);
                }
            }
        }
    }

    #[test]
    fn overshooting_is_clamped_to_the_track() {
        let bar = ProgressBar::new(10, 10);

        assert_eq!(bar.filled_tiles(25).unwrap(), 10);
    }

    #[test]
    fn zero_total_is_rejected() {
        let (mut console, output) = test_console("");

        let err = progress_bar(&mut console, "x", 0, 0, 10, true).unwrap_err();

        assert!(matches!(err, ConsoleError::ZeroTotal));
        assert_eq!(output.contents(), "");
    }
}
