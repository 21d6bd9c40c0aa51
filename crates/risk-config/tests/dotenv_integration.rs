//! `.env` values flow through the env provider.
//!
//! Kept in its own test binary: `dotenvy` writes into the process environment
//! and `Jail` only restores the variables it set itself.

use figment::Jail;
use risk_config::RiskConfig;

#[test]
fn dotenv_file_is_loaded() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "RISKGEN_REPORT__TITLE=Dotenv Title\n")?;

        let config = RiskConfig::load_with_dotenv(None).expect("config loads");
        assert_eq!(config.report.title, "Dotenv Title");
        Ok(())
    });
}
