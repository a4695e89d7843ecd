//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `report`: Write the key table as CSV (the default when no command is given)
//! - `preview`: Print the key table to the terminal
//! - `get`: Print the value at a key path
//! - `translate`: Print the localized form of key paths
//! - `init`: Initialize a flatkey configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Where translations come from.
#[derive(Debug, Clone, Default, Args)]
pub struct TableArgs {
    /// JSON file of extra translations (overrides config file)
    #[arg(long, value_name = "FILE")]
    pub translations: Option<PathBuf>,

    /// Do not use the built-in dictionary
    #[arg(long)]
    pub no_builtin: bool,
}

/// Common arguments shared by commands that read a document.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Input JSON document (overrides config file)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub table: TableArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Default, Args)]
pub struct ReportCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output CSV file (overrides config file)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PreviewCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct GetCommand {
    /// Key path, e.g. `product.category[0].name`
    pub path: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Key paths to translate
    #[arg(required = true)]
    pub paths: Vec<String>,

    #[command(flatten)]
    pub table: TableArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write every leaf key of the document, its localized name and an example value to CSV
    Report(ReportCommand),
    /// Print the key table to the terminal instead of writing CSV
    Preview(PreviewCommand),
    /// Print the value found at a key path
    Get(GetCommand),
    /// Print the localized form of key paths
    Translate(TranslateCommand),
    /// Initialize a new .flatkeyrc.json configuration file
    Init,
}
