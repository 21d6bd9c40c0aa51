//! Document sink.
//!
//! Renders a [`ReportModel`] as a standalone, print-friendly HTML document:
//! cover, table of contents, then the sections in model order. Narrative lines
//! starting with `"- "` become list items.

use std::path::Path;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use risk_core::entities::{ReportModel, ReportTable};

use crate::{ExportError, write_file};

const STYLE: &str = "\
body { font-family: Arial, Helvetica, sans-serif; font-size: 12pt; margin: 15mm; }\
.cover { text-align: center; page-break-after: always; }\
.cover h1 { font-size: 16pt; }\
h2 { font-size: 14pt; }\
table { border-collapse: collapse; margin: 6pt 0; }\
th, td { border: 1px solid #999; padding: 2pt 6pt; text-align: left; }";

/// Render the report to an HTML string.
#[must_use]
pub fn render_document(report: &ReportModel) -> String {
    let cover = &report.cover;
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (cover.title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                section.cover {
                    h1 { (cover.title) }
                    p { "Prepared by: " (cover.author) }
                    p { "Date: " (cover.date.to_string()) }
                    nav.toc {
                        h2 { "Table of Contents" }
                        @for heading in report.table_of_contents() {
                            p { (heading) }
                        }
                    }
                }
                @for section in &report.sections {
                    section id=(section.kind.as_str()) {
                        h2 { (section.heading()) }
                        @if let Some(text) = &section.narrative {
                            (narrative(text))
                        }
                        @if let Some(table) = &section.table {
                            (table_markup(table))
                        }
                    }
                }
            }
        }
    };
    markup.into_string()
}

/// Render and write the report document.
///
/// # Errors
///
/// Returns [`ExportError::Io`] when `path` cannot be written.
pub fn write_document(report: &ReportModel, path: &Path) -> Result<(), ExportError> {
    write_file(path, &render_document(report))
}

fn narrative(text: &str) -> Markup {
    let mut blocks: Vec<Block<'_>> = Vec::new();
    for line in text.lines() {
        let Some(item) = line.strip_prefix("- ") else {
            blocks.push(Block::Paragraph(line));
            continue;
        };
        if let Some(Block::List(items)) = blocks.last_mut() {
            items.push(item);
            continue;
        }
        blocks.push(Block::List(vec![item]));
    }

    html! {
        @for block in &blocks {
            @match block {
                Block::Paragraph(line) => {
                    p { (line) }
                }
                Block::List(items) => {
                    ul {
                        @for item in items {
                            li { (item) }
                        }
                    }
                }
            }
        }
    }
}

enum Block<'a> {
    Paragraph(&'a str),
    List(Vec<&'a str>),
}

fn table_markup(table: &ReportTable) -> Markup {
    html! {
        table {
            thead {
                tr {
                    @for column in &table.columns {
                        th { (column) }
                    }
                }
            }
            tbody {
                @for row in &table.rows {
                    tr {
                        @for cell in row {
                            td { (cell) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use risk_core::composer::compose_report;
    use risk_core::entities::CoverPage;
    use risk_core::generator::generate_dataset;
    use risk_core::scoring::score_dataset;

    use super::*;

    fn model(count: i64) -> ReportModel {
        compose_report(
            &score_dataset(&generate_dataset(count, Some(12))),
            CoverPage {
                title: "Test <Report>".to_string(),
                author: "QA".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            },
        )
    }

    #[test]
    fn cover_toc_and_sections_in_order() {
        let html = render_document(&model(4));
        let positions: Vec<usize> = [
            "Prepared by: QA",
            "Date: 2026-10-16",
            "Table of Contents",
            "<h2>1. Introduction</h2>",
            "<h2>2. Methodology</h2>",
            "<h2>3. Summary of Findings</h2>",
            "<h2>4. Detailed Risk Assessment</h2>",
            "<h2>5. Recommendations</h2>",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn text_is_escaped() {
        let html = render_document(&model(0));
        assert!(html.contains("Test &lt;Report&gt;"));
        assert!(!html.contains("Test <Report>"));
    }

    #[test]
    fn methodology_bullets_become_list_items() {
        let html = render_document(&model(0));
        assert!(html.contains("<li>Likelihood (1-5): The probability of the risk occurring.</li>"));
    }

    #[test]
    fn detailed_rows_match_record_count() {
        let html = render_document(&model(6));
        assert_eq!(html.matches("<td>RISK-").count(), 6);
    }
}
