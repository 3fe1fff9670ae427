//! Mode selection and wiring.
//!
//! - With files: build the session over `FsStore` and run the loop against
//!   the process's stdin/stdout, printing each round's outcome.
//! - Without files: show the wait prompt once and return.

use super::render::{render_messages, render_report};
use super::setup::{init_colors, init_logging, Cli};
use clap::Parser;
use rensub::api::RensubApi;
use rensub::commands::CmdResult;
use rensub::config::RensubConfig;
use rensub::error::Result;
use rensub::model::TargetSet;
use rensub::prompt::Prompter;
use rensub::session::RenameSession;
use rensub::store::fs::FsStore;
use std::io;
use tracing::debug;

struct AppContext {
    session: RenameSession<FsStore>,
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    init_colors(&cli);

    if cli.files.is_empty() {
        return handle_wait();
    }

    let mut ctx = init_context(cli);
    handle_loop(&mut ctx)
}

fn init_context(cli: Cli) -> AppContext {
    let config = RensubConfig::default()
        .with_prefix_marker(cli.prefix_marker)
        .with_quit_command(cli.quit_command);
    debug!(?config, files = cli.files.len(), "starting session");

    let api = RensubApi::new(FsStore::new(), config);
    AppContext {
        session: RenameSession::new(api, TargetSet::new(cli.files)),
        verbose: cli.verbose,
    }
}

fn handle_wait() -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    prompter.wait()
}

fn handle_loop(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let verbose = ctx.verbose;

    let reason = ctx
        .session
        .run(&mut prompter, |result| print_result(result, verbose))?;
    debug!(?reason, iterations = ctx.session.iterations(), "session ended");
    Ok(())
}

fn print_result(result: &CmdResult, verbose: bool) -> Result<()> {
    if verbose {
        print!("{}", render_report(&result.renamed));
    }
    print!("{}", render_messages(&result.messages, verbose));
    println!("\n");
    Ok(())
}
