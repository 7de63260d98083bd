use eframe::egui::{Color32, RichText, ScrollArea, Ui};

use crate::state::{ChartTab, ViewState};
use crate::stats::ttest::{TestResult, Verdict};

// ---------------------------------------------------------------------------
// Top bar – chart tab selector
// ---------------------------------------------------------------------------

const TABS: [(ChartTab, &str); 3] = [
    (ChartTab::Distribution, "Distribution"),
    (ChartTab::PopulationScatter, "Population Scatter"),
    (ChartTab::SampleScatter, "Sample Scatter"),
];

/// Render the top bar: title plus one selectable label per chart.
pub fn top_bar(ui: &mut Ui, state: &mut ViewState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Paygrade");
        ui.separator();
        for (tab, label) in TABS {
            if ui.selectable_label(state.tab == tab, label).clicked() {
                state.tab = tab;
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – statistics and verdict summary
// ---------------------------------------------------------------------------

/// Render the summary panel: descriptive statistics, the four test
/// verdicts, and the suggested-company list.
pub fn side_panel(ui: &mut Ui, state: &ViewState) {
    let report = &state.analysis.report;

    ui.heading("Summary");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Population");
            ui.label(format!("n = {}", report.population.n));
            ui.label(format!("mean = {:.2}", report.population.mean));
            ui.label(format!("std dev = {:.2}", report.population.std_dev));
            ui.add_space(4.0);

            ui.strong("Sample");
            ui.label(format!("n = {}", report.sample.n));
            ui.label(format!("mean = {:.2}", report.sample.mean));
            ui.label(format!("std dev = {:.2}", report.sample.std_dev));
            ui.separator();

            ui.strong("Hypothesis tests");
            test_row(ui, "Sample vs population (two-tailed)", &report.sample_two_sided);
            test_row(ui, "Sample vs population (greater)", &report.sample_greater);
            test_row(ui, "Sample vs population (less)", &report.sample_less);
            test_row(
                ui,
                &format!("Population vs expected {:.0}", report.expected_salary),
                &report.expected_two_sided,
            );
            ui.separator();

            ui.strong(format!("Companies at ≥ {:.0}", report.expected_salary));
            if report.suggested.is_empty() {
                ui.label("No company reaches the expected salary.");
            }
            for m in &report.suggested {
                let rating = m
                    .rating
                    .map(|r| format!("{r:.1}"))
                    .unwrap_or_else(|| "n/a".to_string());
                ui.label(format!("{} — {:.0} (rating {rating})", m.company, m.average));
            }
        });
}

fn test_row(ui: &mut Ui, label: &str, result: &TestResult) {
    ui.label(format!(
        "{label}: t = {:.3}, p = {:.4}",
        result.statistic, result.p_value
    ));
    let (text, color) = match result.verdict {
        Verdict::Reject => ("reject H0", Color32::LIGHT_RED),
        Verdict::Accept => ("accept H0", Color32::LIGHT_GREEN),
    };
    ui.label(RichText::new(text).color(color).small());
    ui.add_space(2.0);
}
