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

//! Numbered text menus.

use std::io::Write;

use tracing::{debug, trace};

use crate::{
    console::Console,
    error::Result,
    util::term::{clear_lines, line_count},
};

use super::tries_depleted;

/// Shows `options` as a 1-based numbered list and asks the user to pick one.
///
/// An answer is accepted if it is all digits and names an option by number,
/// or if it matches an option's text exactly. Anything else erases the menu
/// and asks again.
///
/// With `destroy` the menu is erased once an option has been chosen.
///
/// # Returns
///
/// The zero-based index of the chosen option, or `None` if `tries` is
/// non-zero and that many answers were rejected.
///
/// # Errors
///
/// Returns an error if writing the menu fails or the input stream closes.
pub fn choose_from_text_menu<S: AsRef<str>>(
    console: &mut Console,
    options: &[S],
    prompt: &str,
    destroy: bool,
    tries: u32,
) -> Result<Option<usize>> {
    let menu: String = options
        .iter()
        .enumerate()
        .map(|(idx, option)| format!("{}: {}\n", idx + 1, option.as_ref()))
        .collect();

    // The option lines, the blank line after them and the prompt with the
    // answer typed on it.
    let printed_lines = line_count(options.len() + prompt.matches('\n').count() + 2);

    let mut attempts = 0;
    loop {
        attempts += 1;

        writeln!(console, "{menu}")?;
        let answer = console.prompt(prompt)?;

        if let Some(idx) = match_option(options, &answer) {
            debug!(idx, attempts, "menu option chosen");
            if destroy {
                clear_lines(console, printed_lines, false)?;
            }
            return Ok(Some(idx));
        }

        trace!(answer = answer.as_str(), attempts, "menu answer rejected");
        clear_lines(console, printed_lines, false)?;

        if tries_depleted(tries, attempts) {
            debug!(tries, "menu tries depleted");
            return Ok(None);
        }
    }
}

fn match_option<S: AsRef<str>>(options: &[S], answer: &str) -> Option<usize> {
    if !answer.is_empty() && answer.bytes().all(|b| b.is_ascii_digit()) {
        return answer
            .parse::<usize>()
            .ok()
            .filter(|number| (1..=options.len()).contains(number))
            .map(|number| number - 1);
    }

    options.iter().position(|option| option.as_ref() == answer)
}
