use std::collections::BTreeSet;

use crate::analysis::Analysis;
use crate::color::CompanyColors;

// ---------------------------------------------------------------------------
// Chart window state
// ---------------------------------------------------------------------------

/// Which chart the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartTab {
    Distribution,
    PopulationScatter,
    SampleScatter,
}

/// View state for the chart window. The analysis itself is read-only; the
/// only thing the user changes is the selected tab.
pub struct ViewState {
    pub analysis: Analysis,
    pub colors: CompanyColors,
    pub tab: ChartTab,
}

impl ViewState {
    pub fn new(analysis: Analysis) -> Self {
        let companies: BTreeSet<&str> = analysis
            .population
            .iter()
            .map(|r| r.company.as_str())
            .collect();
        let colors = CompanyColors::new(companies);

        Self {
            analysis,
            colors,
            tab: ChartTab::Distribution,
        }
    }
}
