use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(study_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let responses = ctx.service.list_responses_for_study(study_id).await?;
    output(&responses, flags.format)
}
