//! modelsan CLI
//!
//! Invocation: `modelsan <model.xcdatamodeld> <target-dir>`. The model is
//! read fully before any file is touched; any fatal error exits with code 1.

mod cli;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;

fn main() {
    // A missing positional argument is part of the exit-1 contract, so
    // argument errors are reported here instead of through clap's default
    // exit code.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version requests are not failures
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let table = modelsan_schema::read_model(&cli.model)?;
    let report = modelsan_rewrite::sanitize_directory(&cli.target, &table)?;

    println!(
        "{} sanitized {} file(s) in {} ({} changed, {} skipped)",
        "ok".green().bold(),
        report.processed,
        cli.target.display(),
        report.changed,
        report.skipped
    );
    Ok(())
}
