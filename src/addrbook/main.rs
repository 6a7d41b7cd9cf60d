use addrbook::error::Result;
use addrbook::init::{config_dir, initialize};
use addrbook::repl;
use addrbook::ui::ConsoleInterface;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

const LOG_ENV: &str = "ADDRBOOK_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut ctx = initialize(&cwd, &config_dir()?, cli.file)?;

    let stdin = std::io::stdin();
    let mut ui = ConsoleInterface::stdout();
    repl::run(&mut ctx.api, stdin.lock(), &mut ui)
}

/// Logs go to stderr only, so the transcript on stdout stays clean.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
