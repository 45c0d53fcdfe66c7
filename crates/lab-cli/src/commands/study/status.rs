use anyhow::Context;
use lab_core::enums::StudyStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, status: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = parse_enum::<StudyStatus>(status, "status")?;
    let study = ctx
        .service
        .set_study_status(id, status)
        .await
        .with_context(|| format!("study {id}"))?;
    output(&study, flags.format)
}
