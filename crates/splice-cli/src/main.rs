//! splice CLI
//!
//! One-shot line-range and marker-block surgery on text files, for the
//! hand-driven phase of a big refactor.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage problems exit 1 like any other failure; --help and
            // --version still exit 0.
            let code = if e.exit_code() == 0 { 0 } else { 1 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    // Execute command
    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} file surgery toolkit", "splice".green().bold());
            println!();
            println!("Run {} for available commands.", "splice --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Extract {
            source,
            start,
            end,
            dest,
            encoding,
            dry_run,
        } => commands::run_extract(&source, start, end, &dest, &encoding, dry_run),
        Commands::Append {
            source,
            start,
            end,
            dest,
            encoding,
            dry_run,
        } => commands::run_append(&source, start, end, &dest, &encoding, dry_run),
        Commands::Remove {
            file,
            start,
            end,
            encoding,
            dry_run,
        } => commands::run_remove(&file, start, end, &encoding, dry_run),
        Commands::ReplaceHeader {
            target,
            header,
            skip,
            encoding,
            dry_run,
        } => commands::run_replace_header(&target, &header, skip, &encoding, dry_run),
        Commands::Carve { manifest, dry_run } => commands::run_carve(&manifest, dry_run),
        Commands::Probe { file, encodings } => commands::run_probe(&file, &encodings),
    }
}
