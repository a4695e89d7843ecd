use anyhow::Result;

use super::super::{
    args::PreviewCommand, context::RunContext, exit_status::ExitStatus, report::print_preview,
};
use crate::core::build_report;

pub fn preview(cmd: PreviewCommand) -> Result<ExitStatus> {
    let ctx = RunContext::new(cmd.common.verbose)?;
    let input = ctx.input_path(&cmd.common);
    let translator = ctx.translator(&cmd.common.table)?;
    let document = ctx.load_document(&input)?;

    let report = build_report(&document, &translator)?;
    print_preview(&report);

    Ok(ExitStatus::Success)
}
