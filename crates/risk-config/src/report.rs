//! Report cover metadata.

use risk_core::composer::{DEFAULT_REPORT_AUTHOR, DEFAULT_REPORT_TITLE};
use serde::{Deserialize, Serialize};

fn default_title() -> String {
    DEFAULT_REPORT_TITLE.to_string()
}

fn default_author() -> String {
    DEFAULT_REPORT_AUTHOR.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Shown as "Prepared by" on the cover.
    #[serde(default = "default_author")]
    pub author: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            author: default_author(),
        }
    }
}
