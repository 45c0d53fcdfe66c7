use anyhow::Context;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let study = ctx
        .service
        .get_study(id)
        .await
        .with_context(|| format!("study {id}"))?;
    let responses = ctx.service.count_responses(id).await?;
    output(
        &json!({
            "study": study,
            "responseCount": responses,
        }),
        flags.format,
    )
}
