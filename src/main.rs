mod app;
mod config;
mod data;
mod error;
mod state;
mod ui;

use anyhow::{Context, anyhow};
use app::BulldozerApp;
use clap::Parser;
use config::Args;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let dataset = data::loader::load(&args.data)
        .inspect_err(|e| log::error!("Failed to load {}: {e}", args.data.display()))
        .with_context(|| format!("loading {}", args.data.display()))?;

    log::info!(
        "Loaded {} sales ({} machine types, {} regions) from {}",
        dataset.len(),
        dataset.machine_types().len(),
        dataset.regions().len(),
        args.data.display()
    );

    if dataset.is_empty() {
        log::warn!("{} has no sales; the chart will stay empty", args.data.display());
    }

    let mut state = AppState::new(dataset);
    state.apply_initial(
        args.machine_type.as_deref(),
        args.region.as_deref(),
        args.aggregation,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bulldozer Analytics",
        options,
        Box::new(move |_cc| Ok(Box::new(BulldozerApp::new(state)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
