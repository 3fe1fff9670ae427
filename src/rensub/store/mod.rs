//! # Storage Layer
//!
//! The [`RenameStore`] trait is the only way the command layer touches files.
//!
//! ## Implementations
//!
//! - [`fs::FsStore`]: Production store backed by `std::fs`
//! - [`memory::InMemoryStore`]: A set of paths in memory for testing,
//!   with optional failure injection
//!
//! Both stores report a refused rename as [`RensubError::Rename`] carrying the
//! underlying `io::Error`, so callers see the same error shape either way.
//!
//! [`RensubError::Rename`]: crate::error::RensubError::Rename

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait RenameStore {
    /// Whether something other than `from` itself occupies `to`.
    ///
    /// On a case-insensitive filesystem `Report.txt` -> `report.txt` finds the
    /// source at the destination; that is not a collision.
    fn destination_taken(&self, from: &Path, to: &Path) -> bool;

    /// Move `from` to `to`. Must not be asked to cross directories.
    fn rename(&mut self, from: &Path, to: &Path) -> Result<()>;
}
