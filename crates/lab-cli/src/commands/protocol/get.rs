use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let protocol = ctx
        .service
        .get_protocol(id)
        .await
        .with_context(|| format!("protocol {id}"))?;
    output(&protocol, flags.format)
}
