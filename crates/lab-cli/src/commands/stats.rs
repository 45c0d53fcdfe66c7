use lab_analysis::study_statistics;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lab stats`.
pub async fn handle(args: &StatsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut options = ctx.aggregate_options();
    if args.no_correlations {
        options.correlations = false;
    }
    let report = study_statistics(&ctx.service, &args.study_id, &options).await?;
    output(&report, flags.format)
}
