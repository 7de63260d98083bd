use std::path::Path;

use anyhow::{Context, Result};

use crate::data::model::{RawRecord, SalaryValue};
use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load salary records from a delimited file.
///
/// Expected layout: a header row containing at least the columns
/// `Company`, `Rating`, `Average`, `Lowest`, `Highest` and `yr/mo/hr`.
/// Salary cells are free-form text (thousands separators, blanks, junk) and
/// are coerced per cell; coercion failures become missing values rather
/// than errors.
///
/// The source dataset is not strict UTF-8: bytes that fail UTF-8 validation
/// are decoded as Windows-1252 (a superset of Latin-1 for the printable
/// range) before CSV parsing.
pub fn load_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading dataset {}", path.display()))?;
    let text = decode_lossy(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| AnalysisError::Schema(name.to_string()).into())
    };

    let company_idx = column("Company")?;
    let rating_idx = column("Rating")?;
    let average_idx = column("Average")?;
    let lowest_idx = column("Lowest")?;
    let highest_idx = column("Highest")?;
    let unit_idx = column("yr/mo/hr")?;

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        records.push(RawRecord {
            company: cell(company_idx).trim().to_string(),
            rating: cell(rating_idx)
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|r| r.is_finite()),
            unit: cell(unit_idx).trim().to_string(),
            average: SalaryValue::parse(cell(average_idx)),
            lowest: SalaryValue::parse(cell(lowest_idx)),
            highest: SalaryValue::parse(cell(highest_idx)),
        });
    }

    log::info!("loaded {} raw records from {}", records.len(), path.display());
    Ok(records)
}

/// Decode file bytes, falling back to Windows-1252 for non-UTF-8 input.
fn decode_lossy(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}
