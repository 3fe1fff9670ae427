use super::RenameStore;
use crate::error::{RensubError, Result};
use std::fs;
use std::path::Path;

/// Production store: renames files on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl FsStore {
    pub fn new() -> Self {
        Self
    }
}

impl RenameStore for FsStore {
    fn destination_taken(&self, from: &Path, to: &Path) -> bool {
        // symlink_metadata so that a dangling link still counts as taken
        if fs::symlink_metadata(to).is_err() {
            return false;
        }
        // `to` resolving to `from` is a case-only rename, unless the directory
        // really holds an entry spelled `to` (a hard link to the same file)
        !(is_same_entry(from, to) && !has_exact_entry(to))
    }

    fn rename(&mut self, from: &Path, to: &Path) -> Result<()> {
        tracing::trace!(from = %from.display(), to = %to.display(), "fs::rename");
        fs::rename(from, to).map_err(|source| RensubError::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
    }
}

#[cfg(unix)]
fn is_same_entry(from: &Path, to: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    match (fs::symlink_metadata(from), fs::symlink_metadata(to)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_entry(from: &Path, to: &Path) -> bool {
    same_file::is_same_file(from, to).unwrap_or(false)
}

/// Whether the parent directory lists an entry whose name is exactly that of
/// `path`. Unreadable directories count as yes.
fn has_exact_entry(path: &Path) -> bool {
    let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
        return true;
    };
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    match fs::read_dir(parent) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .any(|entry| entry.file_name().as_os_str() == name),
        Err(_) => true,
    }
}
