//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use lab_config::{ConfigError, LabConfig};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/protolab/lab.db"

[general]
default_limit = 50

[analysis]
correlations = false
min_correlation_pairs = 5
"#,
        )?;

        let config: LabConfig = Figment::from(Serialized::defaults(LabConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/protolab/lab.db");
        assert_eq!(config.general.default_limit, 50);
        assert!(!config.analysis.correlations);
        assert_eq!(config.analysis.min_correlation_pairs, 5);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[analysis]
min_correlation_pairs = 10
"#,
        )?;

        let config: LabConfig = Figment::from(Serialized::defaults(LabConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.analysis.correlations);
        assert_eq!(config.analysis.min_correlation_pairs, 10);
        assert_eq!(config.general.default_limit, 20);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".protolab")?;
        jail.create_file(
            ".protolab/config.toml",
            r#"
[database]
path = "project.db"
"#,
        )?;

        let config = LabConfig::load().expect("config loads");
        assert_eq!(config.database.path, "project.db");
        Ok(())
    });
}

#[test]
fn out_of_range_value_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_limit = 0
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(LabConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = LabConfig::from_figment(figment).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
