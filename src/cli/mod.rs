//! Command-line interface layer.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `commands`: One handler per subcommand
//! - `context`: Config loading and path resolution shared by handlers
//! - `report`: Terminal output
//! - `exit_status`: Process exit codes

pub mod args;
pub mod commands;
pub mod context;
pub mod exit_status;
pub mod report;
mod run;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}
