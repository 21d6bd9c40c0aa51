//! Spreadsheet sink: one CSV row per record, header first, no index column.

use std::io::Write;
use std::path::Path;

use risk_core::entities::{RiskDataset, RiskRecord};

use crate::ExportError;

/// Write the dataset as CSV to any writer.
///
/// # Errors
///
/// Returns the underlying [`csv::Error`] on write failure.
pub fn write_rows<W: Write>(dataset: &RiskDataset, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(RiskRecord::COLUMNS)?;
    for record in dataset {
        wtr.write_record(record.to_row())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the dataset as CSV to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`ExportError::Io`] when the file cannot be created and
/// [`ExportError::Csv`] when writing rows fails.
pub fn write_spreadsheet(dataset: &RiskDataset, path: &Path) -> Result<(), ExportError> {
    let file = std::fs::File::create(path).map_err(|source| ExportError::io(path, source))?;
    write_rows(dataset, file).map_err(|source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), rows = dataset.len(), "spreadsheet written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use risk_core::generator::generate_dataset;

    use super::*;

    fn render(dataset: &RiskDataset) -> String {
        let mut buf = Vec::new();
        write_rows(dataset, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_dataset_is_header_only() {
        let csv = render(&RiskDataset::default());
        assert_eq!(
            csv,
            "Risk ID,Likelihood,Impact,Control Effectiveness,Detectability,\
Financial Impact ($),Operational Impact,Reputational Impact\n"
        );
    }

    #[test]
    fn one_line_per_record_in_order() {
        let dataset = generate_dataset(20, Some(6));
        let csv = render(&dataset);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 21);
        for (line, record) in lines[1..].iter().zip(dataset.iter()) {
            assert_eq!(*line, record.to_row().join(","));
        }
    }
}
