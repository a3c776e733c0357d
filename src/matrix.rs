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

//! Matrix rain animation.
//!
//! The animation keeps a grid of characters. Every tick a fresh row of
//! random symbols is injected at the top, everything shifts down one row,
//! and the visible part of the grid is redrawn over the previous frame.
//!
//! Row 0 only holds the injection and is never drawn; the frame shows rows
//! `1..rows`.
//!
//! The loop stops once its duration has elapsed or its [`CancelToken`] is
//! cancelled, checked after each frame is drawn.

use std::{
    io::Write,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::{Duration, Instant},
};

use rand::{RngExt, rng, seq::IndexedRandom};
use tracing::debug;

use crate::{
    console::Console,
    error::Result,
    util::term::{clear_lines, line_count},
};

const BLANK: char = ' ';

/// Shared stop signal for a running animation.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixGrid {
    cells: Vec<Vec<char>>,
}

impl MatrixGrid {
    /// Creates a blank grid.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![vec![BLANK; columns]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn row(&self, idx: usize) -> &[char] {
        &self.cells[idx]
    }

    /// Advances the animation by one step.
    ///
    /// Each cell of row 0 becomes a random symbol with probability
    /// `density`, otherwise blank. Then every row from the bottom up to row 1
    /// copies the row above it.
    pub fn tick(&mut self, density: f64, symbols: &[char]) {
        let Some(top) = self.cells.first_mut() else {
            return;
        };

        let mut rng = rng();
        for cell in top.iter_mut() {
            *cell = if rng.random::<f64>() < density {
                symbols.choose(&mut rng).copied().unwrap_or(BLANK)
            } else {
                BLANK
            };
        }

        for idx in (1..self.cells.len()).rev() {
            let (above, below) = self.cells.split_at_mut(idx);
            below[0].copy_from_slice(&above[idx - 1]);
        }
    }

    /// The visible rows joined by newlines.
    pub fn frame(&self) -> String {
        self.cells
            .iter()
            .skip(1)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Animation settings.
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixRain {
    /// Grid height; `0` uses the terminal height.
    pub rows: usize,
    /// Grid width; `0` uses the terminal width.
    pub columns: usize,
    /// Pause between frames.
    pub speed: Duration,
    /// Chance of a symbol appearing in each column per tick, clamped to
    /// `0.0..=1.0`.
    pub density: f64,
    /// Stop after this long. Without it only the cancel token stops the
    /// animation.
    pub duration: Option<Duration>,
    pub symbols: Vec<char>,
}

impl Default for MatrixRain {
    fn default() -> Self {
        Self {
            rows: 0,
            columns: 0,
            speed: Duration::from_millis(100),
            density: 0.2,
            duration: None,
            symbols: vec!['0', '1'],
        }
    }
}

impl MatrixRain {
    // Falls back to a classic 80x24 screen when the sink is not a terminal.
    fn dimensions(&self) -> (usize, usize) {
        if self.rows > 0 && self.columns > 0 {
            return (self.rows, self.columns);
        }

        let (columns, rows) = crossterm::terminal::size().unwrap_or((80, 24));
        let rows = if self.rows > 0 {
            self.rows
        } else {
            usize::from(rows)
        };
        let columns = if self.columns > 0 {
            self.columns
        } else {
            usize::from(columns)
        };

        (rows, columns)
    }
}

/// Runs the animation until it times out or `cancel` is triggered.
///
/// Returns the number of frames drawn. At least one frame is always drawn.
pub fn matrix_rain(
    console: &mut Console,
    settings: &MatrixRain,
    cancel: &CancelToken,
) -> Result<u64> {
    let (rows, columns) = settings.dimensions();
    let density = settings.density.clamp(0.0, 1.0);
    let visible_rows = line_count(rows.saturating_sub(1));

    debug!(rows, columns, density, "matrix rain started");

    let started = Instant::now();
    let mut grid = MatrixGrid::new(rows, columns);
    let mut frames = 0u64;

    loop {
        grid.tick(density, &settings.symbols);

        if frames > 0 {
            clear_lines(console, visible_rows, false)?;
        }
        for line in grid.frame().lines() {
            writeln!(console, "{line}")?;
        }
        console.flush()?;
        frames += 1;

        let timed_out = settings
            .duration
            .is_some_and(|duration| started.elapsed() >= duration);
        if timed_out || cancel.is_cancelled() {
            break;
        }

        thread::sleep(settings.speed);
    }

    debug!(frames, "matrix rain stopped");

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::test_console;
    use pretty_assertions::assert_eq;

    const SYMBOLS: [char; 2] = ['0', '1'];

    #[test]
    fn new_grid_is_blank() {
        let grid = MatrixGrid::new(3, 4);

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.frame(), "    \n    ");
    }

    #[test]
    fn full_density_tick_fills_the_top_and_shifts_down() {
        let mut grid = MatrixGrid::new(5, 8);
        grid.tick(1.0, &SYMBOLS);
        grid.tick(1.0, &SYMBOLS);
        let before = grid.clone();

        grid.tick(1.0, &SYMBOLS);

        assert!(grid.row(0).iter().all(|c| SYMBOLS.contains(c)));
        assert_eq!(grid.row(1), grid.row(0));
        for idx in 2..grid.rows() {
            assert_eq!(grid.row(idx), before.row(idx - 1));
        }
    }

    #[test]
    fn zero_density_blanks_the_top() {
        let mut grid = MatrixGrid::new(2, 6);
        grid.tick(1.0, &SYMBOLS);

        grid.tick(0.0, &SYMBOLS);

        assert_eq!(grid.row(0), &[BLANK; 6]);
    }

    #[test]
    fn empty_alphabet_stays_blank() {
        let mut grid = MatrixGrid::new(2, 3);

        grid.tick(1.0, &[]);

        assert_eq!(grid.frame(), "   ");
    }

    #[test]
    fn density_outside_unit_range_saturates() {
        let mut grid = MatrixGrid::new(2, 16);

        grid.tick(5.0, &SYMBOLS);
        assert!(grid.row(0).iter().all(|c| SYMBOLS.contains(c)));

        grid.tick(-1.0, &SYMBOLS);
        assert_eq!(grid.row(0), &[BLANK; 16]);

        grid.tick(f64::NAN, &SYMBOLS);
        assert_eq!(grid.row(0), &[BLANK; 16]);
    }

    #[test]
    fn empty_grid_ticks_without_panicking() {
        let mut grid = MatrixGrid::new(0, 0);

        grid.tick(1.0, &SYMBOLS);

        assert_eq!(grid.frame(), "");
    }

    #[test]
    fn elapsed_duration_stops_after_one_frame() {
        let (mut console, output) = test_console("");
        let settings = MatrixRain {
            rows: 4,
            columns: 5,
            density: 1.0,
            duration: Some(Duration::ZERO),
            ..MatrixRain::default()
        };

        let frames = matrix_rain(&mut console, &settings, &CancelToken::new()).unwrap();

        assert_eq!(frames, 1);
        let text = output.contents();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.chars().count() == 5));
        assert!(lines[0].chars().all(|c| SYMBOLS.contains(&c)));
    }

    #[test]
    fn cancel_token_stops_the_loop() {
        let (mut console, output) = test_console("");
        let settings = MatrixRain {
            rows: 3,
            columns: 2,
            speed: Duration::from_millis(1),
            ..MatrixRain::default()
        };
        let cancel = CancelToken::new();
        let remote = cancel.clone();
        let stopper = thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            remote.cancel();
        });

        let frames = matrix_rain(&mut console, &settings, &cancel).unwrap();
        stopper.join().unwrap();

        assert!(frames >= 2);
        assert!(output.contents().contains("\x1b[2F\x1b[K"));
    }
}
