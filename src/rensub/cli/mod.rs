//! # CLI Layer
//!
//! One possible UI client for rensub. This is the only place that knows
//! about the process's stdin/stdout/stderr, logging setup and exit codes.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap, logging and color initialisation
//! - `commands`: Mode selection (loop or wait) and wiring of the session
//! - `render`: Output formatting (colored messages, aligned rename report)

mod commands;
mod render;
pub mod setup;

pub use commands::run;
