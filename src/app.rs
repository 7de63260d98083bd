use eframe::egui;

use crate::analysis::Analysis;
use crate::state::ViewState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PaygradeApp {
    state: ViewState,
}

impl PaygradeApp {
    pub fn new(analysis: Analysis) -> Self {
        Self {
            state: ViewState::new(analysis),
        }
    }
}

impl eframe::App for PaygradeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: chart tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: statistics summary ----
        egui::SidePanel::left("summary_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: the selected chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::central_chart(ui, &self.state);
        });
    }
}
