use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, HLine, Legend, LineStyle, Plot, PlotPoints, Points};

use crate::data::model::SalaryRecord;
use crate::state::{ChartTab, ViewState};

// ---------------------------------------------------------------------------
// Charts (central panel)
// ---------------------------------------------------------------------------

const HISTOGRAM_BINS: usize = 20;

/// Render whichever chart the selected tab asks for.
pub fn central_chart(ui: &mut Ui, state: &ViewState) {
    match state.tab {
        ChartTab::Distribution => distribution_plot(ui, state),
        ChartTab::PopulationScatter => scatter_plot(
            ui,
            state,
            &state.analysis.population,
            state.analysis.report.population.mean,
            "population_scatter",
            "Population Mean Salary",
        ),
        ChartTab::SampleScatter => scatter_plot(
            ui,
            state,
            &state.analysis.sample,
            state.analysis.report.sample.mean,
            "sample_scatter",
            "Sample Mean Salary",
        ),
    }
}

/// Overlaid density histograms of population and sample average salaries,
/// binned over a shared range so the two bar sets line up.
fn distribution_plot(ui: &mut Ui, state: &ViewState) {
    let population: Vec<f64> = state.analysis.population.iter().map(|r| r.average).collect();
    let sample: Vec<f64> = state.analysis.sample.iter().map(|r| r.average).collect();

    let lo = population
        .iter()
        .chain(&sample)
        .cloned()
        .fold(f64::INFINITY, f64::min);
    let hi = population
        .iter()
        .chain(&sample)
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        ui.label("No data to plot.");
        return;
    }

    Plot::new("distribution")
        .legend(Legend::default())
        .x_axis_label("Average Salary (INR)")
        .y_axis_label("Density")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(density_bars(&population, lo, hi))
                    .color(Color32::from_rgba_unmultiplied(70, 120, 220, 140))
                    .name("Population"),
            );
            plot_ui.bar_chart(
                BarChart::new(density_bars(&sample, lo, hi))
                    .color(Color32::from_rgba_unmultiplied(240, 150, 40, 140))
                    .name("Sample"),
            );
        });
}

/// Density histogram bars: bar area sums to 1 over the shared range.
fn density_bars(values: &[f64], lo: f64, hi: f64) -> Vec<Bar> {
    let width = ((hi - lo) / HISTOGRAM_BINS as f64).max(f64::EPSILON);
    let mut counts = vec![0usize; HISTOGRAM_BINS];
    for &v in values {
        let bin = (((v - lo) / width) as usize).min(HISTOGRAM_BINS - 1);
        counts[bin] += 1;
    }

    let n = values.len().max(1) as f64;
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let center = lo + (i as f64 + 0.5) * width;
            Bar::new(center, count as f64 / (n * width)).width(width)
        })
        .collect()
}

/// Rating vs. average salary, one coloured point per company, with a dashed
/// horizontal line at the group mean. Records without a rating are skipped.
fn scatter_plot(
    ui: &mut Ui,
    state: &ViewState,
    records: &[SalaryRecord],
    mean: f64,
    id: &str,
    mean_label: &str,
) {
    Plot::new(id.to_string())
        .legend(Legend::default())
        .x_axis_label("Rating")
        .y_axis_label("Average Salary (INR)")
        .show(ui, |plot_ui| {
            for record in records {
                let Some(rating) = record.rating else {
                    continue;
                };
                let points: PlotPoints = vec![[rating, record.average]].into();
                plot_ui.points(
                    Points::new(points)
                        .name(&record.company)
                        .color(state.colors.color_for(&record.company))
                        .radius(5.0),
                );
            }
            plot_ui.hline(
                HLine::new(mean)
                    .color(Color32::RED)
                    .style(LineStyle::Dashed { length: 10.0 })
                    .name(mean_label),
            );
        });
}
