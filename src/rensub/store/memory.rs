use super::RenameStore;
use crate::error::{RensubError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory store for testing.
/// Does NOT touch the filesystem.
///
/// Entries are keyed by their lookup form, so a case-insensitive store finds
/// `Report.txt` when asked for `report.txt`, like the macOS and Windows defaults.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: BTreeMap<String, PathBuf>,
    locked: BTreeSet<PathBuf>,
    case_insensitive: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose lookups ignore ASCII and Unicode case.
    pub fn case_insensitive() -> Self {
        Self {
            case_insensitive: true,
            ..Self::default()
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        let key = self.key(&path);
        self.files.insert(key, path);
    }

    /// Makes any rename of `path` fail with `PermissionDenied`.
    pub fn lock(&mut self, path: impl Into<PathBuf>) {
        self.locked.insert(path.into());
    }

    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.files.values().map(PathBuf::as_path)
    }

    /// Whether an entry with exactly this spelling exists.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.files.get(&self.key(path)).is_some_and(|p| p == path)
    }

    fn key(&self, path: &Path) -> String {
        let key = path.to_string_lossy();
        if self.case_insensitive {
            key.to_lowercase()
        } else {
            key.into_owned()
        }
    }
}

impl RenameStore for InMemoryStore {
    fn destination_taken(&self, from: &Path, to: &Path) -> bool {
        let to_key = self.key(to);
        self.files.contains_key(&to_key) && to_key != self.key(from)
    }

    fn rename(&mut self, from: &Path, to: &Path) -> Result<()> {
        let refuse = |kind: io::ErrorKind, message: &str| RensubError::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source: io::Error::new(kind, message.to_string()),
        };

        if self.locked.contains(from) {
            return Err(refuse(io::ErrorKind::PermissionDenied, "Permission denied"));
        }
        let from_key = self.key(from);
        if self.files.remove(&from_key).is_none() {
            return Err(refuse(io::ErrorKind::NotFound, "No such file or directory"));
        }
        let to_key = self.key(to);
        self.files.insert(to_key, to.to_path_buf());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::TargetSet;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub targets: TargetSet,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                targets: TargetSet::default(),
            }
        }

        pub fn case_insensitive() -> Self {
            Self {
                store: InMemoryStore::case_insensitive(),
                targets: TargetSet::default(),
            }
        }

        /// Adds each name as an existing file and as a target, in order.
        pub fn with_files<I, P>(mut self, names: I) -> Self
        where
            I: IntoIterator<Item = P>,
            P: Into<PathBuf>,
        {
            let mut paths = self.targets.into_paths();
            for name in names {
                let path = name.into();
                self.store.add_file(path.clone());
                paths.push(path);
            }
            self.targets = TargetSet::new(paths);
            self
        }

        /// Adds a file that exists in the store but is not a target.
        pub fn with_bystander(mut self, name: impl Into<PathBuf>) -> Self {
            self.store.add_file(name);
            self
        }
    }
}
