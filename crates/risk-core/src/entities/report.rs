use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SectionKind;

/// Cover metadata shown before the table of contents.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CoverPage {
    pub title: String,
    pub author: String,
    pub date: NaiveDate,
}

/// Simple string table. Every row has `columns.len()` cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One titled section of the report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub title: String,
    pub narrative: Option<String>,
    pub table: Option<ReportTable>,
}

impl ReportSection {
    /// Numbered heading, e.g. `"3. Summary of Findings"`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{}. {}", self.kind.number(), self.title)
    }
}

/// Rendering-agnostic document model. Built once per run, consumed by the document sink.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportModel {
    pub cover: CoverPage,
    pub sections: Vec<ReportSection>,
}

impl ReportModel {
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    #[must_use]
    pub fn table_of_contents(&self) -> Vec<String> {
        self.sections.iter().map(ReportSection::heading).collect()
    }
}
