use lab_core::enums::StudyStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params<'a> {
    pub schema_id: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub status: Option<&'a str>,
    pub start: Option<&'a str>,
    pub end: Option<&'a str>,
}

pub async fn run(params: Params<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = params
        .status
        .map(|value| parse_enum::<StudyStatus>(value, "status"))
        .transpose()?
        .unwrap_or(StudyStatus::Draft);
    let start = params
        .start
        .map(|value| parse_date(value, "start"))
        .transpose()?;
    let end = params.end.map(|value| parse_date(value, "end")).transpose()?;

    let study = ctx
        .service
        .create_study(
            params.schema_id,
            params.title,
            params.description,
            status,
            start,
            end,
        )
        .await?;

    output(&study, flags.format)
}
