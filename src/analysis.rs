use serde::Serialize;

use crate::data::model::SalaryRecord;
use crate::error::AnalysisError;
use crate::stats::sample::{draw_sample, SAMPLE_SEED, SAMPLE_SIZE};
use crate::stats::ttest::{one_sample_ttest, Alternative, TestResult};
use crate::stats::{self, Descriptive};

// ---------------------------------------------------------------------------
// Structured analysis result
// ---------------------------------------------------------------------------

/// One row of the suggested-company list: population records whose average
/// salary meets or exceeds the expected salary.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyMatch {
    pub company: String,
    pub rating: Option<f64>,
    pub average: f64,
}

/// The structured numeric report: everything the reporter and the charts
/// consume, free of any formatting concerns.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub population: Descriptive,
    pub sample: Descriptive,
    /// Sample vs. population mean, two-tailed.
    pub sample_two_sided: TestResult,
    /// Sample vs. population mean, alternative "greater".
    pub sample_greater: TestResult,
    /// Sample vs. population mean, alternative "less".
    pub sample_less: TestResult,
    /// Full population vs. the expected salary, two-tailed.
    pub expected_two_sided: TestResult,
    pub expected_salary: f64,
    /// May be empty when no company reaches the expected salary; that is a
    /// valid result, not an error.
    pub suggested: Vec<CompanyMatch>,
}

/// Report plus the record sets the charts draw from.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub population: Vec<SalaryRecord>,
    pub sample: Vec<SalaryRecord>,
    pub report: AnalysisReport,
}

// ---------------------------------------------------------------------------
// Pipeline orchestration
// ---------------------------------------------------------------------------

/// Run the sampling and hypothesis-testing stages on an already-cleaned
/// population. The population is immutable from here on; every derived
/// value is computed forward from it.
pub fn analyze(
    population: Vec<SalaryRecord>,
    expected_salary: f64,
) -> Result<Analysis, AnalysisError> {
    let pop_averages: Vec<f64> = population.iter().map(|r| r.average).collect();
    let pop_stats = stats::describe(&pop_averages).ok_or(AnalysisError::DegenerateInput)?;
    log::info!(
        "population: n = {}, mean = {:.2}, std dev = {:.2}",
        pop_stats.n,
        pop_stats.mean,
        pop_stats.std_dev
    );

    let sample = draw_sample(&population, SAMPLE_SIZE, SAMPLE_SEED)?;
    let sample_averages: Vec<f64> = sample.iter().map(|r| r.average).collect();
    let sample_stats = stats::describe(&sample_averages).ok_or(AnalysisError::DegenerateInput)?;

    // All three sample-vs-population tests share the same sample, so a
    // degenerate sample aborts the whole batch.
    let sample_two_sided =
        one_sample_ttest(&sample_averages, pop_stats.mean, Alternative::TwoSided)?;
    let sample_greater = one_sample_ttest(&sample_averages, pop_stats.mean, Alternative::Greater)?;
    let sample_less = one_sample_ttest(&sample_averages, pop_stats.mean, Alternative::Less)?;

    let expected_two_sided =
        one_sample_ttest(&pop_averages, expected_salary, Alternative::TwoSided)?;

    let suggested: Vec<CompanyMatch> = population
        .iter()
        .filter(|r| r.average >= expected_salary)
        .map(|r| CompanyMatch {
            company: r.company.clone(),
            rating: r.rating,
            average: r.average,
        })
        .collect();

    let report = AnalysisReport {
        population: pop_stats,
        sample: sample_stats,
        sample_two_sided,
        sample_greater,
        sample_less,
        expected_two_sided,
        expected_salary,
        suggested,
    };

    Ok(Analysis {
        population,
        sample,
        report,
    })
}
