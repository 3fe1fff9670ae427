//! # Rensub CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ## Usage
//!
//! ```text
//! rensub [OPTIONS] <FILE>...
//! ```
//!
//! Each round prints `$ is prefix`, asks `Replace from: ` then `          to: `,
//! renames every file and prints `Done.`. Answering `$` to the first prompt
//! prepends the second answer instead of replacing. Input ends the loop on
//! Ctrl-D or `:q`.
//!
//! Started without files, rensub shows a single `D&D` prompt and exits once it
//! is answered, which keeps a console window open when files are dropped onto
//! the executable by mistake.
//!
//! ## Exit Status
//!
//! - `0`: end of input, quit command, or the no-file prompt was answered
//! - `1`: a rename (or reading input) failed; the message goes to stderr

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
