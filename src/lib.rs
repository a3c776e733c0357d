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

//! # Console rendering helpers.
//!
//! A toolbox of small utilities for interactive terminal programs that
//! print plain text rather than drawing a full-screen UI:
//!
//! * [`typing`]: typewriter-style printing and input.
//! * [`progress`]: single-line progress bars redrawn in place.
//! * [`prompt`]: numbered menus, yes/no and number questions with retry
//!   policies.
//! * [`matrix`]: the "matrix rain" animation.
//! * [`capture`]: scoped redirection of output into memory.
//! * [`colour`], [`table`], [`tree`]: text colouring, tables and directory
//!   trees.
//!
//! ## Architecture
//!
//! All helpers operate on an explicit [`Console`], which owns the output
//! sink and input source. Nothing writes to the process streams behind the
//! caller's back, and any helper can be exercised against in-memory buffers.
//!
//! Everything is synchronous: waits are plain sleeps on the calling thread
//! and input reads block until a line arrives. The only cross-thread hook is
//! [`CancelToken`], which stops a running animation.

pub mod capture;
pub mod colour;
pub mod config;
pub mod console;
pub mod error;
pub mod matrix;
pub mod progress;
pub mod prompt;
pub mod table;
pub mod tree;
pub mod typing;
pub mod util;

pub use capture::{CaptureSession, SharedBuffer};
pub use colour::{Colour, colorize_text};
pub use console::Console;
pub use error::{ConsoleError, Result};
pub use matrix::{CancelToken, MatrixGrid, MatrixRain, matrix_rain};
pub use progress::{DisplayMode, ProgressBar, progress_bar};
pub use prompt::{
    Answer, BoolPrompt, NumberPrompt, choose_from_text_menu, classify_answer, prompt_bool,
    prompt_number,
};
pub use table::{print_table, render_table};
pub use tree::visualize_directory;
pub use typing::{typing_input, typing_print, write_sentences};
pub use util::term::{clear_lines, clear_screen, skip_line};
