mod create;
mod delete;
mod get;
mod list;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudyCommands;
use crate::context::AppContext;

/// Handle `lab study`.
pub async fn handle(
    action: &StudyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StudyCommands::Create {
            schema,
            title,
            description,
            status,
            start,
            end,
        } => {
            create::run(
                create::Params {
                    schema_id: schema,
                    title,
                    description: description.as_deref(),
                    status: status.as_deref(),
                    start: start.as_deref(),
                    end: end.as_deref(),
                },
                ctx,
                flags,
            )
            .await
        }
        StudyCommands::Get { id } => get::run(id, ctx, flags).await,
        StudyCommands::List { status } => list::run(status.as_deref(), ctx, flags).await,
        StudyCommands::Status { id, status } => status::run(id, status, ctx, flags).await,
        StudyCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
