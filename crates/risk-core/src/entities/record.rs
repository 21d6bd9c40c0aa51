use std::collections::HashSet;
use std::ops::RangeInclusive;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Closed range shared by every 1-5 rated factor.
pub const FACTOR_RANGE: RangeInclusive<u8> = 1..=5;

/// Closed range of the financial impact in dollars.
pub const FINANCIAL_RANGE: RangeInclusive<u32> = 1000..=10_000;

/// One synthetic risk entry. Never mutated after generation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RiskRecord {
    pub id: String,
    pub likelihood: u8,
    pub impact: u8,
    pub control_effectiveness: u8,
    pub detectability: u8,
    pub financial_impact: u32,
    pub operational_impact: u8,
    pub reputational_impact: u8,
}

impl RiskRecord {
    /// Column headers in field order, as written to the spreadsheet.
    pub const COLUMNS: [&'static str; 8] = [
        "Risk ID",
        "Likelihood",
        "Impact",
        "Control Effectiveness",
        "Detectability",
        "Financial Impact ($)",
        "Operational Impact",
        "Reputational Impact",
    ];

    /// Field values in column order.
    #[must_use]
    pub fn to_row(&self) -> [String; 8] {
        [
            self.id.clone(),
            self.likelihood.to_string(),
            self.impact.to_string(),
            self.control_effectiveness.to_string(),
            self.detectability.to_string(),
            self.financial_impact.to_string(),
            self.operational_impact.to_string(),
            self.reputational_impact.to_string(),
        ]
    }

    /// Check every bounded field against its declared range.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OutOfRange`] for the first field found outside its range.
    pub fn validate(&self) -> Result<(), CoreError> {
        let factors = [
            ("likelihood", self.likelihood),
            ("impact", self.impact),
            ("control_effectiveness", self.control_effectiveness),
            ("detectability", self.detectability),
            ("operational_impact", self.operational_impact),
            ("reputational_impact", self.reputational_impact),
        ];
        for (field, value) in factors {
            if !FACTOR_RANGE.contains(&value) {
                return Err(CoreError::OutOfRange {
                    id: self.id.clone(),
                    field,
                    value: u32::from(value),
                    min: u32::from(*FACTOR_RANGE.start()),
                    max: u32::from(*FACTOR_RANGE.end()),
                });
            }
        }

        if !FINANCIAL_RANGE.contains(&self.financial_impact) {
            return Err(CoreError::OutOfRange {
                id: self.id.clone(),
                field: "financial_impact",
                value: self.financial_impact,
                min: *FINANCIAL_RANGE.start(),
                max: *FINANCIAL_RANGE.end(),
            });
        }

        Ok(())
    }
}

/// Ordered sequence of risk records, in generation order.
///
/// Records can only be read once the dataset exists. Scoring relies on the
/// ranges in [`FACTOR_RANGE`]: the score denominator
/// `control_effectiveness + detectability` is at least 2.
#[derive(Debug, Clone, Default, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct RiskDataset {
    records: Vec<RiskRecord>,
}

impl RiskDataset {
    /// Wrap generator output. Generator records are in range by construction.
    pub(crate) const fn from_generated(records: Vec<RiskRecord>) -> Self {
        Self { records }
    }

    /// Build a dataset from records of any origin, validating ranges and id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OutOfRange`] when a record field is out of range and
    /// [`CoreError::Validation`] when two records share an id.
    pub fn from_records(records: Vec<RiskRecord>) -> Result<Self, CoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !seen.insert(record.id.as_str()) {
                return Err(CoreError::Validation(format!(
                    "duplicate risk id '{}'",
                    record.id
                )));
            }
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[RiskRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RiskRecord> {
        self.records.iter()
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RiskRecord> {
        self.records.iter().find(|record| record.id == id)
    }
}

impl<'a> IntoIterator for &'a RiskDataset {
    type Item = &'a RiskRecord;
    type IntoIter = std::slice::Iter<'a, RiskRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> RiskRecord {
        RiskRecord {
            id: id.to_string(),
            likelihood: 3,
            impact: 4,
            control_effectiveness: 2,
            detectability: 5,
            financial_impact: 4_200,
            operational_impact: 1,
            reputational_impact: 5,
        }
    }

    #[test]
    fn valid_record_passes() {
        assert_eq!(record("RISK-1").validate(), Ok(()));
    }

    #[test]
    fn zero_factor_is_rejected() {
        let mut bad = record("RISK-1");
        bad.detectability = 0;
        let err = bad.validate().unwrap_err();
        assert!(matches!(
            err,
            CoreError::OutOfRange {
                field: "detectability",
                value: 0,
                ..
            }
        ));
    }

    #[test]
    fn financial_impact_upper_bound_is_inclusive() {
        let mut edge = record("RISK-1");
        edge.financial_impact = 10_000;
        assert!(edge.validate().is_ok());
        edge.financial_impact = 10_001;
        assert!(edge.validate().is_err());
    }

    #[test]
    fn from_records_rejects_duplicate_ids() {
        let err = RiskDataset::from_records(vec![record("RISK-1"), record("RISK-1")]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn row_matches_column_order() {
        let row = record("RISK-9").to_row();
        assert_eq!(row.len(), RiskRecord::COLUMNS.len());
        assert_eq!(row[0], "RISK-9");
        assert_eq!(row[5], "4200");
        assert_eq!(row[7], "5");
    }

    #[test]
    fn get_finds_by_id() {
        let dataset = RiskDataset::from_records(vec![record("RISK-1"), record("RISK-2")]).unwrap();
        assert_eq!(dataset.get("RISK-2").map(|r| r.id.as_str()), Some("RISK-2"));
        assert!(dataset.get("RISK-3").is_none());
    }
}
