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

//! Directory tree visualisation.
//!
//! Produces an indented listing in the style of `tree(1)`:
//!
//! ```text
//! [project]
//! ├──[src]
//! │   └──/main.rs
//! └──/Cargo.toml
//! ```
//!
//! Directories are shown in square brackets, files with a leading `/`.
//! Entries are listed in file name order and symbolic links are not
//! followed. A directory that cannot be read because of permissions is
//! shown as `(Access Denied)` in place of its contents.

use std::{
    io::{self, ErrorKind},
    path::Path,
};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

const BRANCH: &str = "├──";
const LAST_BRANCH: &str = "└──";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// Returns the tree of `path` as lines, starting with `[<name>]`.
///
/// # Errors
///
/// Returns an error if a directory cannot be read for any reason other than
/// a permission failure, for example if `path` does not exist.
pub fn visualize_directory(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut lines = vec![format!("[{name}]")];
    walk(path, "", &mut lines)?;

    Ok(lines)
}

fn walk(dir: &Path, prefix: &str, lines: &mut Vec<String>) -> Result<()> {
    let entries = match list_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.io_error().map(io::Error::kind) == Some(ErrorKind::PermissionDenied) => {
            warn!(path = %dir.display(), "directory not readable");
            lines.push(format!("{prefix}{LAST_BRANCH}(Access Denied)"));
            return Ok(());
        }
        Err(err) => return Err(io::Error::from(err).into()),
    };

    let count = entries.len();
    for (idx, entry) in entries.into_iter().enumerate() {
        let is_last = idx + 1 == count;
        let marker = if is_last { LAST_BRANCH } else { BRANCH };
        let name = entry.file_name().to_string_lossy();

        if entry.file_type().is_dir() {
            lines.push(format!("{prefix}{marker}[{name}]"));
            let indent = if is_last { SPACE_INDENT } else { PIPE_INDENT };
            walk(entry.path(), &format!("{prefix}{indent}"), lines)?;
        } else {
            lines.push(format!("{prefix}{marker}/{name}"));
        }
    }

    Ok(())
}

// Immediate children of `dir`, sorted by name.
fn list_dir(dir: &Path) -> std::result::Result<Vec<DirEntry>, walkdir::Error> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn draws_nested_tree() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("a/inner")).unwrap();
        fs::write(root.path().join("a/file1.txt"), "").unwrap();
        fs::write(root.path().join("a/inner/deep.txt"), "").unwrap();
        fs::create_dir(root.path().join("b")).unwrap();
        fs::write(root.path().join("b/file2.txt"), "").unwrap();
        fs::write(root.path().join("c.txt"), "").unwrap();

        let lines = visualize_directory(root.path()).unwrap();

        let name = root.path().file_name().unwrap().to_string_lossy();
        assert_eq!(
            lines,
            vec![
                format!("[{name}]"),
                "├──[a]".to_string(),
                "│   ├──/file1.txt".to_string(),
                "│   └──[inner]".to_string(),
                "│       └──/deep.txt".to_string(),
                "├──[b]".to_string(),
                "│   └──/file2.txt".to_string(),
                "└──/c.txt".to_string(),
            ]
        );
    }

    #[test]
    fn empty_directory_is_just_the_root() {
        let root = tempfile::tempdir().unwrap();

        let lines = visualize_directory(root.path()).unwrap();

        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let root = tempfile::tempdir().unwrap();

        assert!(visualize_directory(root.path().join("missing")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_is_marked() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::tempdir().unwrap();
        let locked = root.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("secret.txt"), "").unwrap();
        fs::write(root.path().join("z.txt"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users read through the mode bits.
        let readable = fs::read_dir(&locked).is_ok();
        let lines = if readable {
            None
        } else {
            Some(visualize_directory(root.path()))
        };

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let Some(lines) = lines else {
            return;
        };
        let lines = lines.unwrap();
        assert_eq!(
            &lines[1..],
            &[
                "├──[locked]".to_string(),
                "│   └──(Access Denied)".to_string(),
                "└──/z.txt".to_string(),
            ]
        );
    }
}
