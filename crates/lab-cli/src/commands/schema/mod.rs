mod create;
mod delete;
mod get;
mod list;
mod replace;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SchemaCommands;
use crate::context::AppContext;

/// Handle `lab schema`.
pub async fn handle(
    action: &SchemaCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SchemaCommands::Create {
            title,
            description,
            questions,
        } => create::run(title, description.as_deref(), questions, ctx, flags).await,
        SchemaCommands::Get { id } => get::run(id, ctx, flags).await,
        SchemaCommands::List => list::run(ctx, flags).await,
        SchemaCommands::Replace { id, questions } => replace::run(id, questions, ctx, flags).await,
        SchemaCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
