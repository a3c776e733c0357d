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

//! Error types shared by every console helper.

use thiserror::Error;

/// Failures surfaced by the console helpers.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// A colour name outside the fixed palette was requested.
    #[error("invalid colour specified: {0:?}")]
    InvalidColour(String),

    /// A progress bar was drawn against a total of zero.
    #[error("progress total must be greater than zero")]
    ZeroTotal,

    /// Writing to or reading from the console failed, including the input
    /// stream closing while a prompt was waiting.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] confy::ConfyError),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
