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

//! Free-text yes/no classification.
//!
//! Replies are normalised (trimmed, lower-cased, trailing punctuation
//! dropped) and matched against fixed vocabularies. Anything not recognised
//! is [`Answer::Unclear`].

const AFFIRMATIVE: &[&str] = &[
    "y",
    "yes",
    "yeah",
    "yea",
    "yep",
    "yup",
    "ya",
    "sure",
    "ok",
    "okay",
    "k",
    "true",
    "1",
    "on",
    "affirmative",
    "certainly",
    "definitely",
    "absolutely",
    "of course",
    "correct",
    "right",
    "agreed",
    "indeed",
    "positive",
    "go ahead",
    "do it",
    "why not",
];

const NEGATIVE: &[&str] = &[
    "n",
    "no",
    "nope",
    "nah",
    "na",
    "false",
    "0",
    "off",
    "negative",
    "never",
    "no way",
    "not really",
    "not at all",
    "incorrect",
    "wrong",
    "cancel",
    "stop",
    "don't",
    "dont",
    "no thanks",
    "no thank you",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Unclear,
}

impl Answer {
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Answer::Yes => Some(true),
            Answer::No => Some(false),
            Answer::Unclear => None,
        }
    }
}

/// Classifies a free-text reply as yes, no, or unclear.
pub fn classify_answer(reply: &str) -> Answer {
    let normalised = reply
        .trim()
        .trim_end_matches(['.', '!', '?', ','])
        .trim()
        .to_lowercase();
    let words = normalised.split_whitespace().collect::<Vec<_>>().join(" ");

    if AFFIRMATIVE.contains(&words.as_str()) {
        Answer::Yes
    } else if NEGATIVE.contains(&words.as_str()) {
        Answer::No
    } else {
        Answer::Unclear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_affirmatives() {
        for reply in ["y", "Yes", " YEP ", "sure!", "of  course", "ok."] {
            assert_eq!(classify_answer(reply), Answer::Yes, "{reply:?}");
        }
    }

    #[test]
    fn recognises_negatives() {
        for reply in ["n", "No", "nope", "no way!", "False"] {
            assert_eq!(classify_answer(reply), Answer::No, "{reply:?}");
        }
    }

    #[test]
    fn everything_else_is_unclear() {
        for reply in ["banana", "", "maybe", "yes no"] {
            assert_eq!(classify_answer(reply), Answer::Unclear, "{reply:?}");
        }
    }

    #[test]
    fn converts_to_bool() {
        assert_eq!(Answer::Yes.as_bool(), Some(true));
        assert_eq!(Answer::No.as_bool(), Some(false));
        assert_eq!(Answer::Unclear.as_bool(), None);
    }
}
