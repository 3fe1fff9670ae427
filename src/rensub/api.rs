//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! rename operations, whatever drives them.
//!
//! The facade turns raw prompt answers into a [`SubstitutionRule`] using the
//! session's [`RensubConfig`] and dispatches to [`commands::rename`]. It holds
//! no business logic and performs no terminal I/O.
//!
//! `RensubApi<S: RenameStore>` is generic over the store:
//! - Production: `RensubApi<FsStore>`
//! - Testing: `RensubApi<InMemoryStore>`

use crate::commands::{self, CmdResult};
use crate::config::RensubConfig;
use crate::error::Result;
use crate::model::{SubstitutionRule, TargetSet};
use crate::store::RenameStore;

pub use crate::commands::{CmdMessage, MessageLevel, RenamedFile};

pub struct RensubApi<S: RenameStore> {
    store: S,
    config: RensubConfig,
}

impl<S: RenameStore> RensubApi<S> {
    pub fn new(store: S, config: RensubConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &RensubConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Interprets a `from`/`to` answer pair under the configured prefix marker.
    pub fn rule(&self, from: &str, to: &str) -> SubstitutionRule {
        SubstitutionRule::from_input(from, to, &self.config.prefix_marker)
    }

    pub fn rename(&mut self, targets: &TargetSet, rule: &SubstitutionRule) -> Result<CmdResult> {
        commands::rename::run(&mut self.store, targets, rule)
    }
}
