use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_LOG_LEVEL: &str = "warn";
const VERBOSE_LOG_LEVEL: &str = "debug";

#[derive(Parser, Debug)]
#[command(
    name = "rensub",
    bin_name = "rensub",
    version,
    about = "Interactively rename files by substring substitution",
    long_about = "Interactively rename files by substring substitution.\n\n\
        Each round asks what to replace and what to replace it with, then renames \
        every FILE in place. Answer the prefix marker ($ by default) to the first \
        prompt to prepend the second answer instead. End input (Ctrl-D) or enter \
        the quit command (:q by default) to stop."
)]
pub struct Cli {
    /// Files to rename (without files, waits for one line and exits)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// `from` answer that switches to prefix mode
    #[arg(long, env = "RENSUB_PREFIX_MARKER", default_value = "$")]
    pub prefix_marker: String,

    /// `from` answer that ends the loop (empty to disable)
    #[arg(long = "quit", env = "RENSUB_QUIT", default_value = ":q")]
    pub quit_command: String,

    /// List every rename after each round
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log filter when RUST_LOG is not set (e.g. warn, debug, rensub=trace)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    fn log_filter(&self) -> String {
        match (&self.log_level, self.verbose) {
            (Some(level), _) => level.clone(),
            (None, true) => VERBOSE_LOG_LEVEL.to_string(),
            (None, false) => DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Initializes tracing on stderr so log lines never mix with the prompts.
///
/// Priority: RUST_LOG env var > --log-level > --verbose > "warn"
pub fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

pub fn init_colors(cli: &Cli) {
    if cli.no_color {
        colored::control::set_override(false);
    }
}
