//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directory and env var manipulation.

use std::path::Path;

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use risk_config::{ConfigError, RiskConfig};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[generation]
count = 50
seed = 1234

[output]
dir = "artifacts"
spreadsheet = "risks.csv"

[report]
title = "Quarterly Risk Review"
author = "Audit Office"
"#,
        )?;

        let config: RiskConfig = Figment::from(Serialized::defaults(RiskConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.generation.count, 50);
        assert_eq!(config.generation.seed, Some(1234));
        assert_eq!(config.output.dir, "artifacts");
        assert_eq!(config.output.spreadsheet, "risks.csv");
        assert_eq!(config.output.document, "Professional_Risk_Assessment_Report.html");
        assert_eq!(config.report.title, "Quarterly Risk Review");
        assert_eq!(config.report.author, "Audit Office");
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".riskgen")?;
        jail.create_file(".riskgen/config.toml", "[generation]\ncount = 7\n")?;

        let config = RiskConfig::load(None).expect("config loads");
        assert_eq!(config.generation.count, 7);
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".riskgen")?;
        jail.create_file(".riskgen/config.toml", "[generation]\ncount = 7\n")?;
        jail.create_file("custom.toml", "[generation]\ncount = 9\n")?;

        let config = RiskConfig::load(Some(Path::new("custom.toml"))).expect("config loads");
        assert_eq!(config.generation.count, 9);
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let err = RiskConfig::load(Some(Path::new("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
        Ok(())
    });
}

#[test]
fn colliding_output_names_fail_to_load() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            "[output]\nspreadsheet = \"same.html\"\ndocument = \"same.html\"\n",
        )?;

        let err = RiskConfig::load(Some(Path::new("custom.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[generation]\ncount = \"many\"\n")?;

        let err = RiskConfig::load(Some(Path::new("custom.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
