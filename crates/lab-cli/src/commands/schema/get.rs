use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = ctx
        .service
        .get_schema(id)
        .await
        .with_context(|| format!("schema {id}"))?;
    output(&schema, flags.format)
}
