//! Report composition.
//!
//! Turns a [`ScoredDataset`] into a [`ReportModel`] with the five fixed
//! sections. Composition never fails and knows nothing about output formats.
//! The detailed section lists raw record fields only; scores and severity
//! appear in aggregate in the summary.

use crate::entities::{
    CoverPage, ReportModel, ReportSection, ReportTable, RiskRecord, ScoredDataset,
    SeverityCounts,
};
use crate::enums::{SectionKind, Severity};

/// Default cover title.
pub const DEFAULT_REPORT_TITLE: &str = "AI-Driven Risk Assessment Report";

/// Default author label on the cover.
pub const DEFAULT_REPORT_AUTHOR: &str = "Risk Assessment Team";

const INTRODUCTION: &str = "This report presents the findings of an automated risk assessment \
conducted on a synthetic dataset representing a range of potential risks. It demonstrates how \
risks can be identified, assessed, and prioritized for mitigation using automated tooling.";

const METHODOLOGY: &str = "The assessment uses a generated dataset with random values for the \
following factors:\n\
- Likelihood (1-5): The probability of the risk occurring.\n\
- Impact (1-5): The severity of the risk if it occurs.\n\
- Control Effectiveness (1-5): How well existing controls mitigate the risk.\n\
- Detectability (1-5): The ability to detect the risk before it causes harm.\n\
- Financial Impact ($): The potential financial loss.\n\
- Operational Impact (1-5): The effect on operations.\n\
- Reputational Impact (1-5): The potential damage to reputation.";

const RECOMMENDATIONS: &str = "Based on the findings, it is recommended to:\n\
- Focus on mitigating high-risk items by improving control measures and detectability.\n\
- Conduct regular reviews of operational and financial impacts.\n\
- Enhance reputational risk management strategies.";

/// Column headings of the detailed assessment table.
pub const DETAIL_COLUMNS: [&str; 8] = [
    "Risk ID",
    "Likelihood",
    "Impact",
    "Control Effectiveness",
    "Detectability",
    "Financial Impact",
    "Operational Impact",
    "Reputational Impact",
];

/// Column headings of the summary table.
pub const SUMMARY_COLUMNS: [&str; 2] = ["Metric", "Count"];

/// Label of the summary row holding the dataset size.
pub const TOTAL_LABEL: &str = "Total Risks Assessed";

/// Build the report model for `scored`, headed by `cover`.
#[must_use]
pub fn compose_report(scored: &ScoredDataset, cover: CoverPage) -> ReportModel {
    let sections = SectionKind::ALL
        .into_iter()
        .map(|kind| match kind {
            SectionKind::Introduction => narrative_section(kind, INTRODUCTION),
            SectionKind::Methodology => narrative_section(kind, METHODOLOGY),
            SectionKind::SummaryOfFindings => summary_section(&scored.counts),
            SectionKind::DetailedAssessment => detailed_section(scored),
            SectionKind::Recommendations => narrative_section(kind, RECOMMENDATIONS),
        })
        .collect();

    ReportModel { cover, sections }
}

/// Label of the summary row for `severity`, e.g. `"High Risks"`.
#[must_use]
pub fn severity_label(severity: Severity) -> String {
    format!("{} Risks", severity.label())
}

fn narrative_section(kind: SectionKind, text: &str) -> ReportSection {
    ReportSection {
        kind,
        title: kind.title().to_string(),
        narrative: Some(text.to_string()),
        table: None,
    }
}

fn summary_section(counts: &SeverityCounts) -> ReportSection {
    let mut rows = vec![vec![TOTAL_LABEL.to_string(), counts.total.to_string()]];
    rows.extend(
        [Severity::High, Severity::Medium, Severity::Low]
            .into_iter()
            .map(|severity| vec![severity_label(severity), counts.get(severity).to_string()]),
    );

    ReportSection {
        kind: SectionKind::SummaryOfFindings,
        title: SectionKind::SummaryOfFindings.title().to_string(),
        narrative: None,
        table: Some(ReportTable {
            columns: SUMMARY_COLUMNS.iter().map(ToString::to_string).collect(),
            rows,
        }),
    }
}

fn detailed_section(scored: &ScoredDataset) -> ReportSection {
    let rows = scored
        .records
        .iter()
        .map(|scored| detail_row(&scored.record))
        .collect();

    ReportSection {
        kind: SectionKind::DetailedAssessment,
        title: SectionKind::DetailedAssessment.title().to_string(),
        narrative: None,
        table: Some(ReportTable {
            columns: DETAIL_COLUMNS.iter().map(ToString::to_string).collect(),
            rows,
        }),
    }
}

fn detail_row(record: &RiskRecord) -> Vec<String> {
    vec![
        record.id.clone(),
        record.likelihood.to_string(),
        record.impact.to_string(),
        record.control_effectiveness.to_string(),
        record.detectability.to_string(),
        format!("${}", record.financial_impact),
        record.operational_impact.to_string(),
        record.reputational_impact.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entities::RiskDataset;
    use crate::generator::generate_dataset;
    use crate::scoring::score_dataset;

    fn cover() -> CoverPage {
        CoverPage {
            title: DEFAULT_REPORT_TITLE.to_string(),
            author: DEFAULT_REPORT_AUTHOR.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        }
    }

    fn summary_value(model: &ReportModel, label: &str) -> String {
        let table = model
            .section(SectionKind::SummaryOfFindings)
            .and_then(|s| s.table.as_ref())
            .unwrap();
        table
            .rows
            .iter()
            .find(|row| row[0] == label)
            .map(|row| row[1].clone())
            .unwrap()
    }

    #[test]
    fn sections_are_fixed_and_ordered() {
        let model = compose_report(&score_dataset(&generate_dataset(3, Some(1))), cover());
        let kinds: Vec<SectionKind> = model.sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());
        assert_eq!(
            model.table_of_contents(),
            vec![
                "1. Introduction",
                "2. Methodology",
                "3. Summary of Findings",
                "4. Detailed Risk Assessment",
                "5. Recommendations",
            ]
        );
    }

    #[test]
    fn empty_dataset_composes() {
        let model = compose_report(&score_dataset(&RiskDataset::default()), cover());
        assert_eq!(summary_value(&model, TOTAL_LABEL), "0");
        assert_eq!(summary_value(&model, "High Risks"), "0");
        assert_eq!(summary_value(&model, "Medium Risks"), "0");
        assert_eq!(summary_value(&model, "Low Risks"), "0");

        let detailed = model.section(SectionKind::DetailedAssessment).unwrap();
        assert!(detailed.table.as_ref().unwrap().rows.is_empty());
    }

    #[test]
    fn static_sections_do_not_depend_on_data() {
        let a = compose_report(&score_dataset(&generate_dataset(0, None)), cover());
        let b = compose_report(&score_dataset(&generate_dataset(20, Some(2))), cover());
        for kind in [
            SectionKind::Introduction,
            SectionKind::Methodology,
            SectionKind::Recommendations,
        ] {
            assert_eq!(a.section(kind), b.section(kind));
        }
    }

    #[test]
    fn methodology_lists_seven_factors() {
        let model = compose_report(&ScoredDataset::default(), cover());
        let text = model
            .section(SectionKind::Methodology)
            .and_then(|s| s.narrative.as_deref())
            .unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("- ")).count(), 7);
    }

    #[test]
    fn detail_row_renders_fields_in_order() {
        let record = RiskRecord {
            id: "RISK-4".to_string(),
            likelihood: 2,
            impact: 5,
            control_effectiveness: 1,
            detectability: 3,
            financial_impact: 7_310,
            operational_impact: 4,
            reputational_impact: 2,
        };
        assert_eq!(
            detail_row(&record),
            vec!["RISK-4", "2", "5", "1", "3", "$7310", "4", "2"]
        );
    }

    #[test]
    fn summary_counts_match_scorer() {
        let scored = score_dataset(&generate_dataset(20, Some(77)));
        let model = compose_report(&scored, cover());
        assert_eq!(summary_value(&model, TOTAL_LABEL), "20");
        assert_eq!(
            summary_value(&model, "High Risks"),
            scored.counts.high.to_string()
        );
        assert_eq!(
            summary_value(&model, "Low Risks"),
            scored.counts.low.to_string()
        );
    }
}
