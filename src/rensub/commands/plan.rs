//! Rename planning: computes every destination for an iteration without
//! touching the store, so invalid names are caught before anything moves.

use crate::error::{RensubError, Result};
use crate::model::{SubstitutionRule, TargetSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl PlannedRename {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Plans one rename per target, in target order.
pub fn run(targets: &TargetSet, rule: &SubstitutionRule) -> Result<Vec<PlannedRename>> {
    targets.iter().map(|path| plan_one(path, rule)).collect()
}

fn plan_one(path: &Path, rule: &SubstitutionRule) -> Result<PlannedRename> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| RensubError::InvalidTarget(path.to_path_buf()))?;

    let new_name = rule.apply(name);
    validate_name(path, &new_name)?;

    Ok(PlannedRename {
        from: path.to_path_buf(),
        to: path.with_file_name(new_name),
    })
}

/// The new name must stay a plain sibling of the old one.
fn validate_name(path: &Path, name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.chars().any(std::path::is_separator);

    if invalid {
        return Err(RensubError::InvalidName {
            path: path.to_path_buf(),
            name: name.to_string(),
        });
    }
    Ok(())
}
