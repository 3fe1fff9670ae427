//! # Rename Session
//!
//! The read-eval-apply loop. A [`RenameSession`] owns the current
//! [`TargetSet`] and swaps in the set returned by each applied iteration.
//!
//! The loop ends when:
//! - input ends at either prompt ([`ExitReason::EndOfInput`])
//! - the quit command is entered as the `from` answer ([`ExitReason::Quit`])
//! - an iteration fails, in which case the error is returned as-is
//!
//! Presentation of each iteration's [`CmdResult`] is delegated to a callback so
//! the session stays free of terminal concerns.

use crate::api::RensubApi;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::TargetSet;
use crate::prompt::{Prompter, Reply};
use crate::store::RenameStore;
use std::io::{BufRead, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    EndOfInput,
    Quit,
}

pub struct RenameSession<S: RenameStore> {
    api: RensubApi<S>,
    targets: TargetSet,
    iterations: usize,
}

impl<S: RenameStore> RenameSession<S> {
    pub fn new(api: RensubApi<S>, targets: TargetSet) -> Self {
        Self {
            api,
            targets,
            iterations: 0,
        }
    }

    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn api(&self) -> &RensubApi<S> {
        &self.api
    }

    /// Applies one answer pair and moves the session onto the new target set.
    pub fn apply(&mut self, from: &str, to: &str) -> Result<CmdResult> {
        let rule = self.api.rule(from, to);
        debug!(?rule, targets = self.targets.len(), "applying rule");

        let result = self.api.rename(&self.targets, &rule)?;
        self.targets = result.targets.clone();
        self.iterations += 1;
        Ok(result)
    }

    /// Runs the loop until input ends, the quit command is entered, or an
    /// iteration fails. `report` is called after every applied iteration.
    pub fn run<R, W, F>(&mut self, prompter: &mut Prompter<R, W>, mut report: F) -> Result<ExitReason>
    where
        R: BufRead,
        W: Write,
        F: FnMut(&CmdResult) -> Result<()>,
    {
        loop {
            let reply = prompter.read_rule(self.api.config())?;
            match reply {
                Reply::Rule { from, to } => {
                    let result = self.apply(&from, &to)?;
                    report(&result)?;
                }
                Reply::Quit => {
                    info!(iterations = self.iterations, "quit requested");
                    return Ok(ExitReason::Quit);
                }
                Reply::EndOfInput => {
                    info!(iterations = self.iterations, "end of input");
                    return Ok(ExitReason::EndOfInput);
                }
            }
        }
    }
}
