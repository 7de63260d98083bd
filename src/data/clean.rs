use crate::data::model::{RawRecord, SalaryRecord};
use crate::stats;

// ---------------------------------------------------------------------------
// Cleaning pipeline
// ---------------------------------------------------------------------------

/// Frequency tag marking rows comparable on an annual basis. Hourly and
/// monthly figures in the same table are not comparable and are discarded.
pub const ANNUAL_UNIT: &str = "/yr";

/// Tukey fence multiplier.
const FENCE_K: f64 = 1.5;

/// Clean the raw table: keep annual-frequency rows, drop rows with any
/// missing salary field, then remove outliers by Tukey's fence on the
/// average salary. Pure function of its input; reapplying it to its own
/// output changes nothing.
pub fn clean(raw: &[RawRecord]) -> Vec<SalaryRecord> {
    fence_outliers(coerce_rows(raw))
}

/// Unit filter plus drop-incomplete: a row survives only when its unit is
/// exactly `/yr` and all three salary fields parsed.
fn coerce_rows(raw: &[RawRecord]) -> Vec<SalaryRecord> {
    let annual: Vec<&RawRecord> = raw.iter().filter(|r| r.unit == ANNUAL_UNIT).collect();
    log::debug!("dropped {} non-annual rows", raw.len() - annual.len());

    let complete: Vec<SalaryRecord> = annual
        .iter()
        .filter_map(|r| {
            Some(SalaryRecord {
                company: r.company.clone(),
                rating: r.rating,
                average: r.average.amount()?,
                lowest: r.lowest.amount()?,
                highest: r.highest.amount()?,
            })
        })
        .collect();
    log::debug!("dropped {} rows with missing salary fields", annual.len() - complete.len());

    complete
}

/// Outlier removal by Tukey's fence on the `average` field only: quartiles
/// by R-7 linear interpolation (the pandas default), retain averages in
/// `[Q1 − 1.5·IQR, Q3 + 1.5·IQR]` inclusive.
pub fn fence_outliers(records: Vec<SalaryRecord>) -> Vec<SalaryRecord> {
    let averages: Vec<f64> = records.iter().map(|r| r.average).collect();
    let (Some(q1), Some(q3)) = (
        stats::quantile(&averages, 0.25),
        stats::quantile(&averages, 0.75),
    ) else {
        return records;
    };

    let iqr = q3 - q1;
    let lower = q1 - FENCE_K * iqr;
    let upper = q3 + FENCE_K * iqr;

    let before = records.len();
    let kept: Vec<SalaryRecord> = records
        .into_iter()
        .filter(|r| r.average >= lower && r.average <= upper)
        .collect();
    log::debug!(
        "fence [{lower:.2}, {upper:.2}] removed {} outliers",
        before - kept.len()
    );

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SalaryValue;

    fn raw(company: &str, unit: &str, average: &str, lowest: &str, highest: &str) -> RawRecord {
        RawRecord {
            company: company.to_string(),
            rating: Some(4.0),
            unit: unit.to_string(),
            average: SalaryValue::parse(average),
            lowest: SalaryValue::parse(lowest),
            highest: SalaryValue::parse(highest),
        }
    }

    fn record(average: f64) -> SalaryRecord {
        SalaryRecord {
            company: format!("co-{average}"),
            rating: Some(4.0),
            average,
            lowest: average - 10.0,
            highest: average + 10.0,
        }
    }

    #[test]
    fn non_annual_rows_are_discarded() {
        let rows = vec![
            raw("a", "/yr", "100", "90", "110"),
            raw("b", "/mo", "100", "90", "110"),
            raw("c", "/hr", "100", "90", "110"),
        ];
        let cleaned = clean(&rows);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].company, "a");
    }

    #[test]
    fn rows_with_any_missing_salary_field_are_dropped() {
        let rows = vec![
            raw("a", "/yr", "100", "90", "110"),
            raw("b", "/yr", "N/A", "90", "110"),
            raw("c", "/yr", "100", "", "110"),
            raw("d", "/yr", "100", "90", "junk"),
        ];
        let cleaned = clean(&rows);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].company, "a");
    }

    #[test]
    fn fence_excludes_the_obvious_outlier() {
        // Averages [100, 102, 98, 101, 99, 250]: R-7 quartiles Q1 = 99.25,
        // Q3 = 101.75, IQR = 2.5, fence [95.5, 105.5] — 250 is out.
        let records: Vec<SalaryRecord> =
            [100.0, 102.0, 98.0, 101.0, 99.0, 250.0].iter().map(|&a| record(a)).collect();
        let kept = fence_outliers(records);

        assert_eq!(kept.len(), 5);
        assert!(kept.iter().all(|r| r.average != 250.0));
        let mean = kept.iter().map(|r| r.average).sum::<f64>() / kept.len() as f64;
        assert!((mean - 100.0).abs() < 1e-12);
    }

    #[test]
    fn fence_is_a_postcondition_of_its_own_output() {
        let records: Vec<SalaryRecord> =
            [100.0, 102.0, 98.0, 101.0, 99.0, 250.0, 5.0].iter().map(|&a| record(a)).collect();
        let kept = fence_outliers(records);

        // Recompute the fence over the output: every survivor must sit inside.
        let averages: Vec<f64> = kept.iter().map(|r| r.average).collect();
        let q1 = stats::quantile(&averages, 0.25).unwrap();
        let q3 = stats::quantile(&averages, 0.75).unwrap();
        let iqr = q3 - q1;
        assert!(kept
            .iter()
            .all(|r| r.average >= q1 - 1.5 * iqr && r.average <= q3 + 1.5 * iqr));
    }

    #[test]
    fn fencing_is_idempotent() {
        let records: Vec<SalaryRecord> =
            [100.0, 102.0, 98.0, 101.0, 99.0, 250.0].iter().map(|&a| record(a)).collect();
        let once = fence_outliers(records);
        let twice = fence_outliers(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn cleaning_its_own_output_changes_nothing() {
        let rows = vec![
            raw("a", "/yr", "100", "90", "110"),
            raw("b", "/yr", "101", "91", "111"),
            raw("c", "/mo", "9", "8", "10"),
            raw("d", "/yr", "N/A", "90", "110"),
            raw("e", "/yr", "99", "89", "109"),
        ];
        let cleaned = clean(&rows);

        // Feed the cleaned records back through as raw rows.
        let reraw: Vec<RawRecord> = cleaned
            .iter()
            .map(|r| RawRecord {
                company: r.company.clone(),
                rating: r.rating,
                unit: ANNUAL_UNIT.to_string(),
                average: SalaryValue::Amount(r.average),
                lowest: SalaryValue::Amount(r.lowest),
                highest: SalaryValue::Amount(r.highest),
            })
            .collect();
        assert_eq!(clean(&reraw), cleaned);
    }

    #[test]
    fn empty_and_tiny_inputs_pass_through() {
        assert!(clean(&[]).is_empty());
        let one = vec![raw("a", "/yr", "100", "90", "110")];
        assert_eq!(clean(&one).len(), 1);
    }
}
