//! # Rendering
//!
//! Layout (width, padding) is computed here with Unicode-aware widths so file
//! names in any script line up. Colors come from `colored` and are dropped
//! automatically when stdout is not a terminal or `--no-color` is given.

use colored::Colorize;
use rensub::api::{CmdMessage, MessageLevel, RenamedFile};
use unicode_width::UnicodeWidthStr;

const ARROW: &str = "->";
const REPORT_INDENT: &str = "  ";

/// Renders messages one per line, styled by level.
///
/// Outside verbose mode only success lines are shown, so a plain run prints
/// nothing between the prompts but `Done.`.
pub fn render_messages(messages: &[CmdMessage], verbose: bool) -> String {
    let mut output = String::new();
    for message in messages {
        if !verbose && message.level != MessageLevel::Success {
            continue;
        }
        let styled = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        output.push_str(&format!("{}\n", styled));
    }
    output
}

/// Renders an `old -> new` line per renamed file with the arrows aligned.
pub fn render_report(renamed: &[RenamedFile]) -> String {
    let rows: Vec<(String, String)> = renamed
        .iter()
        .map(|r| (r.from.display().to_string(), r.to.display().to_string()))
        .collect();

    let width = rows.iter().map(|(from, _)| from.width()).max().unwrap_or(0);

    let mut output = String::new();
    for (from, to) in rows {
        let padding = width.saturating_sub(from.width());
        output.push_str(&format!(
            "{}{}{} {} {}\n",
            REPORT_INDENT,
            from.dimmed(),
            " ".repeat(padding),
            ARROW,
            to.bold()
        ));
    }
    output
}
