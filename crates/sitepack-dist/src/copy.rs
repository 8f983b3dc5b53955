//! Recursive merge copy.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Recursively copy `src` into `dst`, merging with existing content.
///
/// Directories are created as needed, files present in both trees are
/// overwritten, and files present only under `dst` are left untouched.
/// Returns the number of files copied.
pub fn copy_dir_merge(src: &Path, dst: &Path) -> io::Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(io::Error::other)?;
        let path = entry.path();

        let relative = path.strip_prefix(src).map_err(io::Error::other)?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}
