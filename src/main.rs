//! Main entry point for the interactive red-black tree.
//!
//! Reads menu commands from stdin and reports to stdout. Logs go to stderr.

use std::io;
use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rbtree_set::cli::{Cli, Session};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    info!(format = ?cli.format, quiet = cli.quiet, "starting rbtree-set");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::from_cli(&cli, stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        error!("session aborted: {}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins over the -d flag when it is set.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
