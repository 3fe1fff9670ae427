//! Core data types: the rule read each iteration and the set of files it applies to.

use std::path::{Path, PathBuf};

/// The `from` value that switches a rule into prefix mode unless configured otherwise.
pub const DEFAULT_PREFIX_MARKER: &str = "$";

/// A substitution read from the prompts. Lives for a single iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionRule {
    /// Prepend the text to every file name.
    Prefix(String),
    /// Replace every non-overlapping occurrence of `from` with `to`.
    Replace { from: String, to: String },
}

impl SubstitutionRule {
    /// Builds a rule from raw prompt answers. `from` equal to `prefix_marker`
    /// selects prefix mode; anything else, including the empty string, is a
    /// plain replacement.
    pub fn from_input(from: impl Into<String>, to: impl Into<String>, prefix_marker: &str) -> Self {
        let from = from.into();
        let to = to.into();
        if from == prefix_marker {
            SubstitutionRule::Prefix(to)
        } else {
            SubstitutionRule::Replace { from, to }
        }
    }

    /// Computes the new file name.
    ///
    /// An empty `from` matches at every character boundary, so `to` lands before
    /// each character and once at the end: `"ab"` with `to = "-"` becomes `"-a-b-"`.
    pub fn apply(&self, name: &str) -> String {
        match self {
            SubstitutionRule::Prefix(prefix) => format!("{}{}", prefix, name),
            SubstitutionRule::Replace { from, to } => name.replace(from.as_str(), to),
        }
    }
}

/// Ordered set of file paths the loop operates on, in argument order.
///
/// Never mutated in place: each applied iteration produces a new set with the
/// same length and order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSet {
    paths: Vec<PathBuf>,
}

impl TargetSet {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }
}

impl FromIterator<PathBuf> for TargetSet {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
