mod app;
mod color;
mod config;
mod data;
mod report;
mod state;
mod ui;

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use app::SalaryDashApp;
use config::Cli;
use data::{cache, loader};
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dataset = cache::startup_dataset()
        .get_or_load(|| loader::load_source(&cli.source, cli.timeout()))
        .inspect_err(|e| log::error!("Failed to load {}: {e:#}", cli.source))?;
    log::info!("Loaded {} records from {}", dataset.len(), cli.source);
    if dataset.is_empty() {
        log::warn!("{} contains no records", cli.source);
    }

    if let Some(path) = &cli.export {
        let selection = cli.selection(&dataset);
        let report = report::render(&dataset, &selection);
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &report)
            .with_context(|| format!("writing report to {}", path.display()))?;
        log::info!(
            "Wrote report for {} matching records to {}",
            report.metrics.record_count,
            path.display()
        );
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let state = AppState::with_dataset(dataset, &cli.source);
    eframe::run_native(
        "Salaries Dashboard in Data Area",
        options,
        Box::new(|_cc| Ok(Box::new(SalaryDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
