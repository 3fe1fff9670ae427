use crate::model::TargetSet;
use std::path::PathBuf;

pub mod plan;
pub mod rename;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// One file that actually moved during an iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedFile {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Outcome of one applied iteration.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// The target set for the next iteration
    pub targets: TargetSet,
    pub renamed: Vec<RenamedFile>,
    /// Targets whose computed name equalled their current one
    pub unchanged: usize,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_targets(mut self, targets: TargetSet) -> Self {
        self.targets = targets;
        self
    }
}
