use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::AnalysisError;
use crate::stats;

// ---------------------------------------------------------------------------
// One-sample t-test
// ---------------------------------------------------------------------------

/// Significance threshold for the accept/reject decision.
pub const ALPHA: f64 = 0.05;

/// Direction of the alternative hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alternative {
    TwoSided,
    Greater,
    Less,
}

/// Decision on the null hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Reject,
    Accept,
}

/// Outcome of a single one-sample t-test. Derived once, never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TestResult {
    pub statistic: f64,
    pub p_value: f64,
    pub alternative: Alternative,
    pub verdict: Verdict,
}

/// Decision rule: reject the null hypothesis iff `p < ALPHA` (strict).
pub fn verdict_for(p_value: f64) -> Verdict {
    if p_value < ALPHA {
        Verdict::Reject
    } else {
        Verdict::Accept
    }
}

/// One-sample t-test of `values` against `reference_mean`.
///
/// `t = (mean − ref) / (sd / √n)` with `n − 1` degrees of freedom; the
/// p-value comes from the Student's t CDF:
/// two-sided `2·(1 − F(|t|))`, greater `1 − F(t)`, less `F(t)`.
///
/// Zero variance (or fewer than two values) leaves t undefined; that fails
/// with [`AnalysisError::DegenerateInput`] rather than reporting `t = 0`.
pub fn one_sample_ttest(
    values: &[f64],
    reference_mean: f64,
    alternative: Alternative,
) -> Result<TestResult, AnalysisError> {
    let summary = stats::describe(values).ok_or(AnalysisError::DegenerateInput)?;
    if summary.std_dev == 0.0 {
        return Err(AnalysisError::DegenerateInput);
    }

    let n = summary.n as f64;
    let statistic = (summary.mean - reference_mean) / (summary.std_dev / n.sqrt());

    let dist = StudentsT::new(0.0, 1.0, n - 1.0).map_err(|_| AnalysisError::DegenerateInput)?;
    let p_value = match alternative {
        Alternative::TwoSided => 2.0 * (1.0 - dist.cdf(statistic.abs())),
        Alternative::Greater => 1.0 - dist.cdf(statistic),
        Alternative::Less => dist.cdf(statistic),
    }
    .clamp(0.0, 1.0);

    Ok(TestResult {
        statistic,
        p_value,
        alternative,
        verdict: verdict_for(p_value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference values computed with the regularized-incomplete-beta form
    // of the Student's t CDF; they agree with scipy.stats.ttest_1samp.
    const VALUES: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
    const T_REF: f64 = 0.707_106_781_186_547_5;

    #[test]
    fn two_sided_matches_reference() {
        let r = one_sample_ttest(&VALUES, 2.5, Alternative::TwoSided).unwrap();
        assert!((r.statistic - T_REF).abs() < 1e-12);
        assert!((r.p_value - 0.518_518_518_518_518_6).abs() < 1e-9);
        assert_eq!(r.verdict, Verdict::Accept);
    }

    #[test]
    fn greater_matches_reference() {
        let r = one_sample_ttest(&VALUES, 2.5, Alternative::Greater).unwrap();
        assert!((r.p_value - 0.259_259_259_259_259_3).abs() < 1e-9);
    }

    #[test]
    fn less_matches_reference() {
        let r = one_sample_ttest(&VALUES, 2.5, Alternative::Less).unwrap();
        assert!((r.p_value - 0.740_740_740_740_740_7).abs() < 1e-9);
    }

    #[test]
    fn zero_variance_input_is_degenerate() {
        let err = one_sample_ttest(&[10.0; 5], 10.0, Alternative::TwoSided).unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateInput));
    }

    #[test]
    fn mean_equal_to_reference_accepts_with_t_zero() {
        let r = one_sample_ttest(&[9.0, 10.0, 11.0, 10.0, 10.0], 10.0, Alternative::TwoSided)
            .unwrap();
        assert!(r.statistic.abs() < 1e-12);
        assert!((r.p_value - 1.0).abs() < 1e-12);
        assert_eq!(r.verdict, Verdict::Accept);
    }

    #[test]
    fn one_tailed_greater_is_at_most_two_tailed_when_mean_exceeds_reference() {
        let values = [52.0, 48.0, 50.5, 49.5, 51.0];
        let two = one_sample_ttest(&values, 45.0, Alternative::TwoSided).unwrap();
        let greater = one_sample_ttest(&values, 45.0, Alternative::Greater).unwrap();
        assert!(greater.p_value <= two.p_value);
        assert!((greater.p_value * 2.0 - two.p_value).abs() < 1e-12);
    }

    #[test]
    fn verdict_threshold_is_strict() {
        assert_eq!(verdict_for(0.0499), Verdict::Reject);
        assert_eq!(verdict_for(0.0501), Verdict::Accept);
        assert_eq!(verdict_for(ALPHA), Verdict::Accept);
    }

    #[test]
    fn single_value_is_degenerate() {
        let err = one_sample_ttest(&[10.0], 9.0, Alternative::TwoSided).unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateInput));
    }
}
