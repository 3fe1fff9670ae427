use crate::model::DEFAULT_PREFIX_MARKER;

const DEFAULT_QUIT_COMMAND: &str = ":q";

/// Runtime configuration for a rename session.
///
/// Nothing here is persisted; the CLI builds it from flags and environment
/// variables on every start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RensubConfig {
    /// `from` value that selects prefix mode
    pub prefix_marker: String,

    /// Answer to the `from` prompt that ends the loop. `None` disables it.
    pub quit_command: Option<String>,
}

impl Default for RensubConfig {
    fn default() -> Self {
        Self {
            prefix_marker: DEFAULT_PREFIX_MARKER.to_string(),
            quit_command: Some(DEFAULT_QUIT_COMMAND.to_string()),
        }
    }
}

impl RensubConfig {
    pub fn with_prefix_marker(mut self, marker: impl Into<String>) -> Self {
        self.prefix_marker = marker.into();
        self
    }

    /// Sets the quit command. An empty string disables it, so every answer is
    /// treated as a substitution.
    pub fn with_quit_command(mut self, command: impl Into<String>) -> Self {
        let command = command.into();
        self.quit_command = if command.is_empty() {
            None
        } else {
            Some(command)
        };
        self
    }

    pub fn is_quit(&self, answer: &str) -> bool {
        self.quit_command.as_deref() == Some(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RensubConfig::default();
        assert_eq!(config.prefix_marker, "$");
        assert_eq!(config.quit_command.as_deref(), Some(":q"));
    }

    #[test]
    fn test_quit_matches_exactly() {
        let config = RensubConfig::default();
        assert!(config.is_quit(":q"));
        assert!(!config.is_quit(":q "));
        assert!(!config.is_quit(""));
    }

    #[test]
    fn test_empty_quit_command_disables_quit() {
        let config = RensubConfig::default().with_quit_command("");
        assert_eq!(config.quit_command, None);
        assert!(!config.is_quit(""));
        assert!(!config.is_quit(":q"));
    }

    #[test]
    fn test_custom_prefix_marker() {
        let config = RensubConfig::default().with_prefix_marker("^");
        assert_eq!(config.prefix_marker, "^");
    }
}
