use eframe::egui;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

pub const TITLE: &str = "Technical Support Representative Talent Pool";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TalentPoolApp {
    pub state: AppState,
    pub config: AppConfig,
}

impl TalentPoolApp {
    pub fn new(state: AppState, config: AppConfig) -> Self {
        Self { state, config }
    }
}

impl eframe::App for TalentPoolApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, self.config.encoding);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(480.0)
            .min_width(480.0)
            .max_width(560.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, plot, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(TITLE);
            ui.add_space(4.0);
            panels::metrics(ui, &self.state.summary);
            ui.separator();

            let plot_height = (ui.available_height() * 0.5).max(240.0);
            plot::experience_scatter(ui, &self.state, plot_height);
            ui.separator();

            table::candidate_table(ui, &self.state);
        });
    }
}
