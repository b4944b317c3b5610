use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BulldozerApp {
    pub state: AppState,
}

impl BulldozerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for BulldozerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title banner ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui);
        });

        // ---- Bottom panel: selection summary ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Left side panel: selectors ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::sales_plot(ui, self.state.series());
        });
    }
}
