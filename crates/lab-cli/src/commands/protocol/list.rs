use anyhow::bail;
use lab_core::enums::StandardBody;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    body: Option<&str>,
    search: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = ctx.limit(flags);
    let protocols = match (body, search) {
        (Some(_), Some(_)) => bail!("--body and --search cannot be combined"),
        (None, Some(query)) => ctx.service.search_protocols(query, limit).await?,
        (body, None) => {
            let body = body
                .map(|value| parse_enum::<StandardBody>(value, "body"))
                .transpose()?;
            ctx.service.list_protocols(body, limit).await?
        }
    };
    output(&protocols, flags.format)
}
