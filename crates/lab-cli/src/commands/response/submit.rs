use anyhow::bail;
use lab_analysis::{SubmissionError, submit_response};

use crate::cli::GlobalFlags;
use crate::commands::shared::input::answers_arg;
use crate::context::AppContext;
use crate::output::output;

/// Validate and store one response. A rejected submission prints the
/// validation report before failing.
pub async fn run(
    study_id: &str,
    answers: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let answers = answers_arg(answers)?;

    match submit_response(&ctx.service, study_id, answers).await {
        Ok(response) => output(&response, flags.format),
        Err(SubmissionError::Invalid(report)) => {
            output(&report, flags.format)?;
            bail!(
                "response rejected: {} answer(s) failed validation",
                report.errors.len()
            )
        }
        Err(error) => Err(error.into()),
    }
}
