//! remove-env CLI
//!
//! Removes one named environment block from a configuration file in place.

mod cli;
mod error;

use clap::Parser;
use colored::Colorize;
use envfile_blocks::{RemoveOptions, block_names, parse_blocks, remove_environment, render_diff};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::Cli;
use error::Result;

/// Exit status for malformed invocations.
const EXIT_USAGE: i32 = 1;
/// Exit status when the file could not be read or replaced.
const EXIT_FAILURE: i32 = 2;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also come through here
            let code = if e.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(EXIT_FAILURE);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("{}: failed to set tracing subscriber", "warning".yellow().bold());
    }
    tracing::debug!("Verbose mode enabled");
}

fn run(cli: &Cli) -> Result<()> {
    let options = RemoveOptions {
        dry_run: cli.dry_run,
        ..RemoveOptions::default()
    };
    let name = cli.environment_name.as_str();
    let path = cli.file_path.display();

    let outcome = remove_environment(&cli.file_path, name, &options)?;

    if !outcome.removed {
        println!(
            "{} No environment named '{}' in '{}'; file left unchanged.",
            "note:".yellow().bold(),
            name,
            path
        );
        let known = block_names(&outcome.original, &options.markers);
        if !known.is_empty() {
            println!("Available environments: {}", known.join(", "));
        }
        return Ok(());
    }

    if cli.dry_run {
        let label = cli
            .file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());
        print!("{}", render_diff(&outcome.original, &outcome.updated, &label));
        println!(
            "{} The '{}' environment would be removed from '{}'.",
            "dry run:".cyan().bold(),
            name,
            path
        );
        for block in parse_blocks(&outcome.original, &options.markers)
            .iter()
            .filter(|block| block.declares(name))
        {
            println!(
                "  lines {}-{} ({} lines)",
                block.start_line,
                block.end_line,
                block.line_count()
            );
        }
        return Ok(());
    }

    println!(
        "Successfully processed '{}'. The '{}' environment has been removed.",
        path, name
    );
    Ok(())
}
