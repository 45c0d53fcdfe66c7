use anyhow::Context;
use lab_analysis::AggregateOptions;
use lab_config::LabConfig;
use lab_db::service::LabService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: LabService,
    pub config: LabConfig,
}

impl AppContext {
    /// Open (creating if needed) the configured database.
    pub async fn init(config: LabConfig) -> anyhow::Result<Self> {
        if let Some(dir) = config.database.parent_dir() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create database directory {}", dir.display()))?;
        }

        let service = LabService::new_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        Ok(Self { service, config })
    }

    /// `--limit` if given, otherwise `general.default_limit`.
    #[must_use]
    pub fn limit(&self, flags: &GlobalFlags) -> u32 {
        flags.limit.unwrap_or(self.config.general.default_limit)
    }

    #[must_use]
    pub const fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            correlations: self.config.analysis.correlations,
            min_correlation_pairs: self.config.analysis.min_correlation_pairs,
        }
    }
}
