//! Entity structs for all riskgen domain objects.
//!
//! All structs derive `Serialize` and `JsonSchema` so they can be printed by the
//! CLI and validated against their generated schemas in tests.

mod record;
mod report;
mod scored;

pub use record::{FACTOR_RANGE, FINANCIAL_RANGE, RiskDataset, RiskRecord};
pub use report::{CoverPage, ReportModel, ReportSection, ReportTable};
pub use scored::{HistogramBin, ScoreHistogram, ScoredDataset, ScoredRecord, SeverityCounts};
