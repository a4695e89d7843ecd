use anyhow::{Result, bail};

use super::super::{
    args::ReportCommand,
    context::RunContext,
    exit_status::ExitStatus,
    report::{print_note, print_warning, print_written},
};
use crate::{core::build_report, csv_writer::write_report_file};

pub fn report(cmd: ReportCommand) -> Result<ExitStatus> {
    let ctx = RunContext::new(cmd.common.verbose)?;
    let input = ctx.input_path(&cmd.common);
    let output = ctx.output_path(cmd.output.as_deref());

    if input == output {
        bail!(
            "Output file would overwrite the input document: {}",
            ctx.display_path(&input)
        );
    }

    let translator = ctx.translator(&cmd.common.table)?;
    let document = ctx.load_document(&input)?;
    let report = build_report(&document, &translator)?;

    print_note(
        ctx.verbose,
        &format!(
            "{} leaves, {} distinct keys",
            report.leaf_count,
            report.rows.len()
        ),
    );
    for key in &report.collisions {
        print_warning(&format!(
            "'{}' names more than one value; the first one is reported",
            key
        ));
    }

    write_report_file(&report, &output)?;
    print_written(&ctx.display_path(&output), report.rows.len());

    Ok(ExitStatus::Success)
}
