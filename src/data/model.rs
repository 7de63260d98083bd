use serde::Serialize;

// ---------------------------------------------------------------------------
// SalaryValue – one salary cell after coercion
// ---------------------------------------------------------------------------

/// Outcome of coercing a free-form salary cell: a parsed amount or an
/// explicit missing marker. Parse failures become `Missing` — not zero and
/// not an error; rows are dropped later only when a salary field is missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryValue {
    Amount(f64),
    Missing,
}

impl SalaryValue {
    /// Coerce a raw cell: strip thousands-separator commas, trim, parse as
    /// `f64`. Anything non-numeric or non-finite is `Missing`.
    pub fn parse(text: &str) -> Self {
        let stripped = text.replace(',', "");
        match stripped.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => SalaryValue::Amount(v),
            _ => SalaryValue::Missing,
        }
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            SalaryValue::Amount(v) => Some(*v),
            SalaryValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, SalaryValue::Missing)
    }
}

// ---------------------------------------------------------------------------
// RawRecord – one row of the source table, salary cells coerced
// ---------------------------------------------------------------------------

/// One row as read from the file. Salary cells have been coerced but no
/// filtering has happened yet; the frequency unit may be anything.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub company: String,
    /// Rating is left lenient (the source data never cleans it); missing or
    /// unparsable ratings stay `None` and are simply skipped when charting.
    pub rating: Option<f64>,
    /// Frequency unit tag, e.g. `/yr`, `/mo`, `/hr`.
    pub unit: String,
    pub average: SalaryValue,
    pub lowest: SalaryValue,
    pub highest: SalaryValue,
}

// ---------------------------------------------------------------------------
// SalaryRecord – one cleaned row
// ---------------------------------------------------------------------------

/// A cleaned row: only constructed for rows whose unit was `/yr` and whose
/// three salary fields all parsed to finite numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryRecord {
    pub company: String,
    pub rating: Option<f64>,
    pub average: f64,
    pub lowest: f64,
    pub highest: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_thousands_separators() {
        assert_eq!(SalaryValue::parse("1,23,456"), SalaryValue::Amount(123456.0));
        assert_eq!(SalaryValue::parse("12,000.50"), SalaryValue::Amount(12000.5));
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        assert_eq!(SalaryValue::parse("  98000 "), SalaryValue::Amount(98000.0));
    }

    #[test]
    fn parse_failure_is_missing_not_zero() {
        assert!(SalaryValue::parse("N/A").is_missing());
        assert!(SalaryValue::parse("").is_missing());
        assert!(SalaryValue::parse("--").is_missing());
    }

    #[test]
    fn parse_rejects_non_finite() {
        assert!(SalaryValue::parse("inf").is_missing());
        assert!(SalaryValue::parse("NaN").is_missing());
    }
}
