use lab_core::enums::StandardBody;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    code: &str,
    title: &str,
    body: &str,
    category: Option<&str>,
    description: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let body = parse_enum::<StandardBody>(body, "body")?;
    let protocol = ctx
        .service
        .create_protocol(code, title, body, category, description)
        .await?;
    output(&protocol, flags.format)
}
