use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schemas = ctx.service.list_schemas(ctx.limit(flags)).await?;
    output(&schemas, flags.format)
}
