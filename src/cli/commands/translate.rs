use anyhow::Result;

use super::super::{args::TranslateCommand, context::RunContext, exit_status::ExitStatus};

/// Print `path<TAB>translated` for every path argument.
pub fn translate(cmd: TranslateCommand) -> Result<ExitStatus> {
    let ctx = RunContext::new(cmd.verbose)?;
    let translator = ctx.translator(&cmd.table)?;

    for path in &cmd.paths {
        println!("{}\t{}", path, translator.translate(path));
    }

    Ok(ExitStatus::Success)
}
