use anyhow::Result;

use super::{
    args::{Arguments, Command, ReportCommand},
    commands::{get::get, init::init, preview::preview, report::report, translate::translate},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler. Without a command, the report is written
/// with the configured (or default) input and output.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Report(cmd)) => report(cmd),
        Some(Command::Preview(cmd)) => preview(cmd),
        Some(Command::Get(cmd)) => get(cmd),
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Init) => init(),
        None => report(ReportCommand::default()),
    }
}
