//! Yelp Restaurant Dashboard - interactive restaurant insights viewer
//!
//! Loads the Yelp dataset samples, then opens the dashboard window.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;
use std::sync::Arc;
use tracing::info;
use yelp_dashboard::cli::Cli;
use yelp_dashboard::data::YelpTables;
use yelp_dashboard::gui::DashboardApp;
use yelp_dashboard::logging::init_logging;
use yelp_dashboard::pipeline::Dashboard;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = cli.settings();
    let tables = YelpTables::load(&settings).context("failed to load Yelp datasets")?;
    let dashboard = Dashboard::new(Arc::new(tables), &settings)
        .context("failed to compute initial dashboard")?;

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title("Yelp Restaurant Dashboard"),
        ..Default::default()
    };

    info!("opening dashboard window");
    eframe::run_native(
        "Yelp Restaurant Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, dashboard)))),
    )
    .map_err(|e| anyhow!("dashboard window failed: {e}"))
}
