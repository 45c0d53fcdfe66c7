use lab_core::enums::StudyStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(status: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = status
        .map(|value| parse_enum::<StudyStatus>(value, "status"))
        .transpose()?;
    let studies = ctx.service.list_studies(status, ctx.limit(flags)).await?;
    output(&studies, flags.format)
}
