use crate::cli::GlobalFlags;
use crate::commands::shared::input::questions_arg;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    title: &str,
    description: Option<&str>,
    questions: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let questions = questions_arg(questions)?;
    let schema = ctx
        .service
        .create_schema(title, description, questions)
        .await?;
    output(&schema, flags.format)
}
