use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::commands::shared::input::questions_arg;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    questions: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let questions = questions_arg(questions)?;
    let schema = ctx
        .service
        .replace_schema_questions(id, questions)
        .await
        .with_context(|| format!("schema {id}"))?;
    output(&schema, flags.format)
}
