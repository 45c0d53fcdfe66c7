mod delete;
mod list;
mod submit;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ResponseCommands;
use crate::context::AppContext;

/// Handle `lab response`.
pub async fn handle(
    action: &ResponseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ResponseCommands::Submit { study_id, answers } => {
            submit::run(study_id, answers, ctx, flags).await
        }
        ResponseCommands::List { study_id } => list::run(study_id, ctx, flags).await,
        ResponseCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
