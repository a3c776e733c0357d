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

//! Integer questions.
//!
//! A reply that does not parse, or parses to a value outside the configured
//! range, is rejected. What happens next is decided by the
//! [`NumberPrompt`]'s callbacks:
//!
//! * once `tries` replies have been rejected, `try_return` (or `None`);
//! * otherwise the `error` (unparsable) or `incorrect` (out of range)
//!   callback decides the result;
//! * with no callback, the question is asked again.
//!
//! Callbacks receive the raw reply text.

use std::fmt;

use tracing::{debug, trace};

use crate::{console::Console, error::Result, util::term::clear_lines};

use super::tries_depleted;

/// Decides the result of a rejected reply.
pub type Fallback = Box<dyn Fn(&str) -> Option<i64>>;

pub struct NumberPrompt {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub incorrect: Option<Fallback>,
    pub error: Option<Fallback>,
    pub delete_lines: bool,
    pub tries: u32,
    pub try_return: Option<Fallback>,
}

impl Default for NumberPrompt {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            incorrect: None,
            error: None,
            delete_lines: true,
            tries: 0,
            try_return: None,
        }
    }
}

impl fmt::Debug for NumberPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberPrompt")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("incorrect", &self.incorrect.is_some())
            .field("error", &self.error.is_some())
            .field("delete_lines", &self.delete_lines)
            .field("tries", &self.tries)
            .field("try_return", &self.try_return.is_some())
            .finish()
    }
}

impl NumberPrompt {
    /// Only accepts values in `min..=max`. Bounds are checked only when both
    /// are set.
    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    pub fn delete_lines(mut self, delete_lines: bool) -> Self {
        self.delete_lines = delete_lines;
        self
    }

    pub fn on_incorrect(mut self, f: impl Fn(&str) -> Option<i64> + 'static) -> Self {
        self.incorrect = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl Fn(&str) -> Option<i64> + 'static) -> Self {
        self.error = Some(Box::new(f));
        self
    }

    pub fn on_depleted(mut self, f: impl Fn(&str) -> Option<i64> + 'static) -> Self {
        self.try_return = Some(Box::new(f));
        self
    }

    fn in_range(&self, value: i64) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => (min..=max).contains(&value),
            _ => true,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Rejection {
    Unparsable,
    OutOfRange,
}

/// Asks `question` until an acceptable integer is entered or a callback
/// resolves the rejection.
pub fn prompt_number(
    console: &mut Console,
    question: &str,
    policy: &NumberPrompt,
) -> Result<Option<i64>> {
    let mut attempts = 0;
    loop {
        attempts += 1;

        let reply = console.prompt(question)?;
        let rejection = match reply.trim().parse::<i64>() {
            Ok(value) if policy.in_range(value) => return Ok(Some(value)),
            Ok(_) => Rejection::OutOfRange,
            Err(_) => Rejection::Unparsable,
        };

        trace!(reply = reply.as_str(), ?rejection, attempts, "number reply rejected");

        if tries_depleted(policy.tries, attempts) {
            debug!(tries = policy.tries, "number tries depleted");
            return Ok(policy.try_return.as_ref().and_then(|f| f(&reply)));
        }

        if policy.delete_lines {
            clear_lines(console, 1, false)?;
        }

        let handler = match rejection {
            Rejection::Unparsable => &policy.error,
            Rejection::OutOfRange => &policy.incorrect,
        };
        if let Some(handler) = handler {
            return Ok(handler(&reply));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::test_console;
    use pretty_assertions::assert_eq;

    #[test]
    fn unbounded_accepts_any_integer() {
        let (mut console, _) = test_console(" -1200 \n");

        let value = prompt_number(&mut console, "n? ", &NumberPrompt::default()).unwrap();

        assert_eq!(value, Some(-1200));
    }

    #[test]
    fn a_single_bound_is_ignored() {
        let (mut console, _) = test_console("500\n");
        let policy = NumberPrompt {
            max: Some(10),
            ..NumberPrompt::default()
        };

        assert_eq!(prompt_number(&mut console, "", &policy).unwrap(), Some(500));
    }

    #[test]
    fn out_of_range_asks_again() {
        let (mut console, output) = test_console("11\nten\n7\n");
        let policy = NumberPrompt::default().range(1, 10);

        let value = prompt_number(&mut console, "n? ", &policy).unwrap();

        assert_eq!(value, Some(7));
        assert_eq!(output.contents().matches("\x1b[1F\x1b[K").count(), 2);
    }

    #[test]
    fn incorrect_callback_decides_out_of_range() {
        let (mut console, _) = test_console("99\n");
        let policy = NumberPrompt::default()
            .range(1, 10)
            .on_incorrect(|raw| raw.parse::<i64>().ok().map(|v| v.min(10)));

        assert_eq!(prompt_number(&mut console, "", &policy).unwrap(), Some(10));
    }

    #[test]
    fn error_callback_receives_the_raw_reply() {
        let (mut console, _) = test_console("abc\n");
        let policy = NumberPrompt::default().on_error(|raw| Some(raw.len() as i64));

        assert_eq!(prompt_number(&mut console, "", &policy).unwrap(), Some(3));
    }

    #[test]
    fn depleted_tries_take_precedence_over_callbacks() {
        let (mut console, output) = test_console("x\n");
        let policy = NumberPrompt::default()
            .tries(1)
            .on_error(|_| Some(1))
            .on_depleted(|_| Some(-1));

        assert_eq!(prompt_number(&mut console, "n? ", &policy).unwrap(), Some(-1));
        assert_eq!(output.contents(), "n? ");
    }

    #[test]
    fn depleted_without_callback_is_none() {
        let (mut console, _) = test_console("0\n0\n");
        let policy = NumberPrompt::default()
            .range(1, 5)
            .tries(2)
            .delete_lines(false);

        assert_eq!(prompt_number(&mut console, "", &policy).unwrap(), None);
    }
}
