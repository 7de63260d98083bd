use thiserror::Error;

// ---------------------------------------------------------------------------
// Failure taxonomy
// ---------------------------------------------------------------------------

/// Everything that can abort an analysis run. Each variant is fatal: errors
/// propagate straight to the top level and terminate the run — this is a
/// batch report, not a service, so there is no partial-success mode.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A required column is absent from the input table. Raised before any
    /// computation starts.
    #[error("required column '{0}' is missing from the input table")]
    Schema(String),

    /// The cleaned population is too small for the requested sample size.
    /// The draw fails loudly instead of silently truncating.
    #[error("need at least {needed} cleaned records to sample, found {found}")]
    InsufficientData { needed: usize, found: usize },

    /// Zero-variance input (or fewer than two values) leaves the
    /// t-statistic undefined.
    #[error("zero-variance input: the t-statistic is undefined")]
    DegenerateInput,

    /// The interactively supplied expected salary is not a number.
    /// Hard error, no retry loop.
    #[error("'{0}' is not a valid salary figure")]
    InvalidUserInput(String),
}
