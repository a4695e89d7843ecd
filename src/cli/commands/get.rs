use anyhow::{Context, Result};

use super::super::{
    args::GetCommand, context::RunContext, exit_status::ExitStatus, report::print_failure,
};
use crate::core::resolve;

pub fn get(cmd: GetCommand) -> Result<ExitStatus> {
    let ctx = RunContext::new(cmd.common.verbose)?;
    let input = ctx.input_path(&cmd.common);
    let document = ctx.load_document(&input)?;

    match resolve(&document, &cmd.path) {
        Some(value) => {
            let rendered =
                serde_json::to_string_pretty(value).context("Failed to serialize value")?;
            println!("{}", rendered);
            Ok(ExitStatus::Success)
        }
        None => {
            print_failure(&format!("No value at '{}'", cmd.path));
            Ok(ExitStatus::Failure)
        }
    }
}
