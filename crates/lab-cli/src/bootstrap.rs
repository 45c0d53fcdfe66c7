use lab_config::LabConfig;

use crate::cli::GlobalFlags;

/// Load layered config (`.env`, TOML files, `PROTOLAB_*`), then apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LabConfig> {
    let mut config = LabConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut LabConfig, flags: &GlobalFlags) {
    if let Some(db) = &flags.db {
        tracing::debug!(path = %db, "database path overridden from command line");
        config.database.path.clone_from(db);
    }
}
