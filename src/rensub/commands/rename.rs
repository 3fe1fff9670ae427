use crate::commands::{plan, CmdMessage, CmdResult, RenamedFile};
use crate::error::{RensubError, Result};
use crate::model::{SubstitutionRule, TargetSet};
use crate::store::RenameStore;
use tracing::debug;

/// Applies `rule` to every target and returns the target set for the next
/// iteration.
///
/// The whole iteration is planned first, so a bad name fails before any file
/// moves. Renames are then applied one by one in target order; the first
/// refused rename aborts with its error and files already moved stay moved.
pub fn run<S: RenameStore>(
    store: &mut S,
    targets: &TargetSet,
    rule: &SubstitutionRule,
) -> Result<CmdResult> {
    let planned = plan::run(targets, rule)?;
    let mut result = CmdResult::default();
    let mut next = Vec::with_capacity(planned.len());

    for step in planned {
        if step.is_noop() {
            debug!(path = %step.from.display(), "name unchanged, skipping");
            result.unchanged += 1;
            next.push(step.from);
            continue;
        }

        if store.destination_taken(&step.from, &step.to) {
            return Err(RensubError::DestinationExists(step.to));
        }

        store.rename(&step.from, &step.to)?;
        debug!(from = %step.from.display(), to = %step.to.display(), "renamed");

        next.push(step.to.clone());
        result.renamed.push(RenamedFile {
            from: step.from,
            to: step.to,
        });
    }

    if result.unchanged > 0 && !result.renamed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{} of {} file(s) unchanged",
            result.unchanged,
            targets.len()
        )));
    } else if result.renamed.is_empty() && !targets.is_empty() {
        result.add_message(CmdMessage::warning("No file name matched"));
    }
    result.add_message(CmdMessage::success("Done."));

    Ok(result.with_targets(TargetSet::new(next)))
}
