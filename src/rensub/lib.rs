//! # Rensub Architecture
//!
//! Rensub renames a fixed list of files by repeatedly asking for a substring to
//! replace and its replacement. The rename logic is a library; the interactive
//! terminal loop is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging and colors             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs, prompt.rs)                      │
//! │  - The read-eval-apply loop over any BufRead/Write pair     │
//! │  - Owns the current TargetSet between iterations            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Turns raw prompt answers into a SubstitutionRule         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Planning (pure) and applying (through the store)         │
//! │  - Returns a new TargetSet per iteration                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RenameStore trait                                        │
//! │  - FsStore (production), InMemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Terminal Assumptions in Core
//!
//! From `session.rs` inward, code never touches the process's stdout or stdin
//! directly and never calls `std::process::exit`. The session reads from and
//! prompts to whatever reader/writer it is given, which is how its tests drive it.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Rename planning and application
//! - [`store`]: Filesystem abstraction and implementations
//! - [`model`]: `SubstitutionRule` and `TargetSet`
//! - [`prompt`]: The line-oriented prompt protocol
//! - [`session`]: The rename loop
//! - [`config`]: Runtime configuration
//! - [`error`]: Error types
//! - `cli`: Argument parsing, logging setup and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod prompt;
pub mod session;
pub mod store;
