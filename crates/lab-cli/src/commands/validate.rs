use anyhow::bail;
use lab_analysis::check_answers;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::commands::shared::input::answers_arg;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lab validate`: print the report, exit non-zero when invalid.
pub async fn handle(args: &ValidateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let answers = answers_arg(&args.answers)?;
    let report = check_answers(&ctx.service, &args.schema_id, &answers).await?;
    output(&report, flags.format)?;
    if !report.valid {
        bail!("{} answer(s) failed validation", report.errors.len());
    }
    Ok(())
}
