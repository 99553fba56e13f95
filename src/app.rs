use eframe::egui::{self, ScrollArea, Ui};

use crate::report;
use crate::state::AppState;
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalaryDashApp {
    pub state: AppState,
}

impl SalaryDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SalaryDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Every frame starts from the dataset and the selection alone.
        let dataset = self.state.dataset.clone();
        let report = dataset
            .as_deref()
            .map(|ds| report::render(ds, &self.state.selection));
        let visible = report.as_ref().map_or(0, |r| r.view.len());

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, visible);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, charts, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(report) = &report else {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.heading("Open a salary table to begin  (File → Open CSV…)");
                });
                return;
            };

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.heading("🎲 Salary analysis in Data Area Dashboard");
                    ui.label(
                        "Explore salary data in Data area from previous years. \
                         Use left filters to refine your search.",
                    );
                    ui.add_space(8.0);

                    panels::metrics_row(ui, &report.metrics);
                    ui.separator();

                    ui.columns(2, |cols| {
                        charts::top_roles(&mut cols[0], report.top_roles.as_deref());
                        charts::salary_histogram(&mut cols[1], report.histogram.as_ref());
                    });
                    ui.add_space(8.0);
                    ui.columns(2, |cols| {
                        charts::remote_donut(
                            &mut cols[0],
                            report.remote_modes.as_deref(),
                            &self.state.remote_colors,
                        );
                        charts::country_average(&mut cols[1], report.country_average.as_deref());
                    });
                    ui.separator();

                    table::detail_table(ui, &report.view);
                });
        });
    }
}
