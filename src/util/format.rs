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

/// Formats a completion ratio as a percentage, truncating rather than
/// rounding.
///
/// With `show_float` the value keeps one decimal place, otherwise it is cut
/// down to a whole number.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_percent(1, 3, true), "33.3");
/// assert_eq!(format_percent(1, 3, false), "33");
/// ```
pub(crate) fn format_percent(current: u64, total: u64, show_float: bool) -> String {
    let percent = current as f64 / total as f64 * 100.0;
    if show_float {
        format!("{:.1}", (percent * 10.0).trunc() / 10.0)
    } else {
        format!("{}", percent.trunc() as u64)
    }
}

/// Pads `text` with spaces on the right up to `width` characters.
pub(crate) fn pad_right(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_truncates_to_one_decimal() {
        assert_eq!(format_percent(1, 3, true), "33.3");
        assert_eq!(format_percent(2, 3, true), "66.6");
        assert_eq!(format_percent(50, 100, true), "50.0");
    }

    #[test]
    fn percent_truncates_to_integer() {
        assert_eq!(format_percent(50, 100, false), "50");
        assert_eq!(format_percent(2, 3, false), "66");
        assert_eq!(format_percent(100, 100, false), "100");
    }

    #[test]
    fn pad_right_counts_characters() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("héllo", 6), "héllo ");
        assert_eq!(pad_right("long", 2), "long");
    }
}
