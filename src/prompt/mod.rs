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

//! Interactive prompts.
//!
//! Each prompt writes a question, blocks for one line of input and validates
//! it. Rejected answers are either retried (optionally erasing the rejected
//! line first) or resolved to a caller-supplied fallback once the allowed
//! number of tries is used up.
//!
//! A `tries` value of `0` means "retry forever". Every prompt also returns
//! an error if the input stream closes, so a loop never outlives its input.
//!
//! # Sub-modules
//!
//! * [`answer`]: Classifying free-text yes/no replies.
//! * [`menu`]: Numbered text menus.
//! * [`confirm`]: Yes/no questions.
//! * [`number`]: Integer questions with optional bounds.

pub mod answer;
pub mod confirm;
pub mod menu;
pub mod number;

pub use answer::{Answer, classify_answer};
pub use confirm::{BoolPrompt, prompt_bool};
pub use menu::choose_from_text_menu;
pub use number::{Fallback, NumberPrompt, prompt_number};

/// Whether a prompt that has used `attempts` tries out of `tries` must give
/// up. `tries == 0` never gives up.
pub(crate) fn tries_depleted(tries: u32, attempts: u32) -> bool {
    tries > 0 && attempts >= tries
}
