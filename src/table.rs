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

//! Plain-text tables.

use std::io::Write;

use crate::{console::Console, error::Result, util::format::pad_right};

/// Renders `rows` as a bordered table, one line per row.
///
/// Column widths fit the longest cell in each column. Rows with fewer cells
/// than the widest row are padded with empty cells.
///
/// ```text
/// +-------+-----+
/// | Name  | Age |
/// | Emily | 32  |
/// +-------+-----+
/// ```
pub fn render_table<S: AsRef<str>>(rows: &[Vec<S>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return String::new();
    }

    let mut widths = vec![0; columns];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.as_ref().chars().count());
        }
    }

    let border: String = widths
        .iter()
        .map(|width| format!("+{}", "-".repeat(width + 2)))
        .chain(std::iter::once("+".to_string()))
        .collect();

    let mut table = String::new();
    table.push_str(&border);
    table.push('\n');

    for row in rows {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(idx, width)| {
                let cell = row.get(idx).map_or("", |cell| cell.as_ref());
                pad_right(cell, *width)
            })
            .collect::<Vec<_>>()
            .join(" | ");

        table.push_str("| ");
        table.push_str(&cells);
        table.push_str(" |\n");
    }

    table.push_str(&border);
    table.push('\n');

    table
}

/// Prints `rows` as a bordered table.
pub fn print_table<S: AsRef<str>>(console: &mut Console, rows: &[Vec<S>]) -> Result<()> {
    console.write_str(&render_table(rows))?;
    console.flush()?;
    Ok(())
}
