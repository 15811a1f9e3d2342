//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// modelsan - Reconcile generated Core Data accessor files with their model
///
/// Reads the attribute table from the model bundle, then rewrites every
/// generated accessor file in the target directory so declared types and
/// optionality match the schema.
#[derive(Parser, Debug)]
#[command(name = "modelsan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the .xcdatamodeld model bundle
    pub model: PathBuf,

    /// Directory holding the generated accessor files
    pub target: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
