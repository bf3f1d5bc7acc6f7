//! Yelp Dashboard Main Application
//! Main window with control panel and chart viewer.

use crate::data::ProcessorError;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::pipeline::{Dashboard, DashboardSnapshot};
use egui::SidePanel;
use tracing::error;

/// Main application window.
pub struct DashboardApp {
    dashboard: Dashboard,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, dashboard: Dashboard) -> Self {
        let control_panel = ControlPanel::default();
        let chart_viewer = ChartViewer::new(
            dashboard.snapshot().cloned(),
            dashboard.top_users().to_vec(),
        );

        Self {
            dashboard,
            control_panel,
            chart_viewer,
        }
    }

    /// Apply a control change and refresh the viewer with the new snapshot.
    /// A failed recompute keeps the previous charts on screen.
    fn handle_action(&mut self, action: ControlPanelAction) {
        let result: Result<&DashboardSnapshot, ProcessorError> = match action {
            ControlPanelAction::None => return,
            ControlPanelAction::StateChanged(state) => self.dashboard.set_state(&state),
            ControlPanelAction::CuisineChanged(cuisine) => self.dashboard.set_cuisine(cuisine),
            ControlPanelAction::RatingChanged(rating) => self.dashboard.set_min_rating(rating),
        };

        match result {
            Ok(snapshot) => {
                let status = format!(
                    "{} restaurants matched",
                    crate::pipeline::format_thousands(snapshot.insight.restaurant_count)
                );
                self.chart_viewer.set_snapshot(snapshot.clone());
                self.control_panel.set_status(&status);
            }
            Err(e) => {
                error!(error = %e, "dashboard recompute failed");
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(
                        ui,
                        self.dashboard.state_options(),
                        self.dashboard.controls(),
                    );
                    self.handle_action(action);
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
