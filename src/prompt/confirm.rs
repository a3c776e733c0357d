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

//! Yes/no questions.

use tracing::{debug, trace};

use crate::{console::Console, error::Result, util::term::clear_lines};

use super::{answer::classify_answer, tries_depleted};

/// Retry policy for [`prompt_bool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoolPrompt {
    /// Return `None` straight away for an unclear reply instead of asking
    /// again.
    pub allow_undeterminable: bool,
    /// Number of replies to accept before giving up, `0` for no limit.
    pub tries: u32,
    /// Erase the rejected reply's line before asking again.
    pub delete_lines: bool,
    /// Returned once `tries` replies have been unclear.
    pub when_depleted: Option<bool>,
}

impl Default for BoolPrompt {
    fn default() -> Self {
        Self {
            allow_undeterminable: false,
            tries: 0,
            delete_lines: true,
            when_depleted: None,
        }
    }
}

/// Asks a yes/no `question`.
///
/// Returns the classified answer together with the raw reply, lower-cased.
/// The answer is `None` when an unclear reply is allowed through, or the
/// policy's `when_depleted` value once the tries have run out.
pub fn prompt_bool(
    console: &mut Console,
    question: &str,
    policy: &BoolPrompt,
) -> Result<(Option<bool>, String)> {
    let mut attempts = 0;
    loop {
        attempts += 1;

        let reply = console.prompt(question)?.to_lowercase();
        let answer = classify_answer(&reply).as_bool();

        if answer.is_some() || policy.allow_undeterminable {
            return Ok((answer, reply));
        }

        if tries_depleted(policy.tries, attempts) {
            debug!(tries = policy.tries, "yes/no tries depleted");
            return Ok((policy.when_depleted, reply));
        }

        trace!(reply = reply.as_str(), attempts, "unclear yes/no reply");
        if policy.delete_lines {
            clear_lines(console, 1, false)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::test_console;
    use pretty_assertions::assert_eq;

    #[test]
    fn clear_replies_are_returned() {
        let (mut console, _) = test_console("Yes\n");

        let result = prompt_bool(&mut console, "q? ", &BoolPrompt::default()).unwrap();

        assert_eq!(result, (Some(true), "yes".to_string()));
    }

    #[test]
    fn depleted_tries_return_the_fallback() {
        let (mut console, _) = test_console("banana\n");
        let policy = BoolPrompt {
            tries: 1,
            when_depleted: Some(false),
            ..BoolPrompt::default()
        };

        let result = prompt_bool(&mut console, "q?", &policy).unwrap();

        assert_eq!(result, (Some(false), "banana".to_string()));
    }

    #[test]
    fn undeterminable_replies_can_be_allowed() {
        let (mut console, output) = test_console("maybe\n");
        let policy = BoolPrompt {
            allow_undeterminable: true,
            ..BoolPrompt::default()
        };

        let result = prompt_bool(&mut console, "q? ", &policy).unwrap();

        assert_eq!(result, (None, "maybe".to_string()));
        assert_eq!(output.contents(), "q? ");
    }

    #[test]
    fn unclear_replies_are_erased_and_asked_again() {
        let (mut console, output) = test_console("hmm\nno\n");

        let result = prompt_bool(&mut console, "q? ", &BoolPrompt::default()).unwrap();

        assert_eq!(result, (Some(false), "no".to_string()));
        assert_eq!(output.contents(), "q? \x1b[1F\x1b[Kq? ");
    }

    #[test]
    fn lines_are_kept_when_asked() {
        let (mut console, output) = test_console("hmm\ny\n");
        let policy = BoolPrompt {
            delete_lines: false,
            ..BoolPrompt::default()
        };

        prompt_bool(&mut console, "q? ", &policy).unwrap();

        assert_eq!(output.contents(), "q? q? ");
    }
}
