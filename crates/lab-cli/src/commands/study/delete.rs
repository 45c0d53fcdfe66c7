use anyhow::Context;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let responses = ctx.service.count_responses(id).await?;
    ctx.service
        .delete_study(id)
        .await
        .with_context(|| format!("study {id}"))?;
    output(
        &json!({"deleted": id, "responsesDeleted": responses}),
        flags.format,
    )
}
