use anyhow::Context;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service
        .delete_response(id)
        .await
        .with_context(|| format!("response {id}"))?;
    output(&json!({"deleted": id}), flags.format)
}
