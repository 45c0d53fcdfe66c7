mod add;
mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProtocolCommands;
use crate::context::AppContext;

/// Handle `lab protocol`.
pub async fn handle(
    action: &ProtocolCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProtocolCommands::Add {
            code,
            title,
            body,
            category,
            description,
        } => {
            add::run(
                code,
                title,
                body,
                category.as_deref(),
                description.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        ProtocolCommands::Get { id } => get::run(id, ctx, flags).await,
        ProtocolCommands::List { body, search } => {
            list::run(body.as_deref(), search.as_deref(), ctx, flags).await
        }
    }
}
