//! Chart Viewer Widget
//! Central scrollable panel showing the insight charts, the review trend,
//! the most active users and the dashboard summary.

use crate::charts::{ChartPlotter, COUNT_COLOR, RATING_COLOR};
use crate::data::UserActivity;
use crate::pipeline::{DashboardSnapshot, InsightReport, TrendReport, NO_REVIEW_DATA};
use egui::{Color32, RichText, ScrollArea};

const CHART_SPACING: f32 = 15.0;
const BAR_CHART_HEIGHT: f32 = 320.0;
const TREND_CHART_HEIGHT: f32 = 300.0;

const SUMMARY_ITEMS: [&str; 4] = [
    "Use the dropdowns to choose a State and Cuisine Type",
    "Adjust the slider to change the minimum rating",
    "Charts update instantly: 1. Top 10 Cities by Restaurant Count, 2. Top 10 Cities by Average Rating",
    "Interactive dashboard built on the five Yelp datasets",
];

/// Scrollable display area for the current dashboard snapshot.
#[derive(Default)]
pub struct ChartViewer {
    pub snapshot: Option<DashboardSnapshot>,
    pub top_users: Vec<UserActivity>,
}

impl ChartViewer {
    pub fn new(snapshot: Option<DashboardSnapshot>, top_users: Vec<UserActivity>) -> Self {
        Self {
            snapshot,
            top_users,
        }
    }

    pub fn set_snapshot(&mut self, snapshot: DashboardSnapshot) {
        self.snapshot = Some(snapshot);
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let Some(snapshot) = &self.snapshot else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::draw_insights(ui, &snapshot.insight);
                ui.add_space(CHART_SPACING);
                Self::draw_trend(ui, &snapshot.trend);
                ui.add_space(CHART_SPACING);
                Self::draw_top_users(ui, &self.top_users);
                ui.add_space(CHART_SPACING);
                Self::draw_summary(ui);
            });
    }

    fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_rgb(100, 149, 237)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                add_contents(ui)
            });
    }

    fn draw_insights(ui: &mut egui::Ui, insight: &InsightReport) {
        Self::card(ui, |ui| {
            ui.label(RichText::new(format!("🍽 {}", insight.title())).size(18.0).strong());
            ui.add_space(4.0);
            for line in insight.summary_lines() {
                ui.label(RichText::new(line).size(13.0));
            }
            ui.add_space(10.0);

            let chart_width = (ui.available_width() - CHART_SPACING) / 2.0;
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.set_width(chart_width);
                    ui.label(
                        RichText::new("Top 10 Cities by Restaurant Count")
                            .size(14.0)
                            .strong(),
                    );
                    ChartPlotter::draw_city_bars(
                        ui,
                        "top_cities_by_count",
                        &insight.top_by_count,
                        COUNT_COLOR,
                        "Restaurants",
                        BAR_CHART_HEIGHT,
                    );
                });

                ui.add_space(CHART_SPACING);

                ui.vertical(|ui| {
                    ui.set_width(chart_width);
                    ui.label(
                        RichText::new("Top 10 Cities by Average Rating")
                            .size(14.0)
                            .strong(),
                    );
                    ChartPlotter::draw_city_bars(
                        ui,
                        "top_cities_by_rating",
                        &insight.top_by_rating,
                        RATING_COLOR,
                        "Average rating",
                        BAR_CHART_HEIGHT,
                    );
                });
            });
        });
    }

    fn draw_trend(ui: &mut egui::Ui, trend: &TrendReport) {
        Self::card(ui, |ui| {
            ui.label(RichText::new("📆 Review Volume Over Time").size(16.0).strong());
            ui.add_space(8.0);

            if trend.is_empty() {
                ui.allocate_ui(egui::vec2(ui.available_width(), TREND_CHART_HEIGHT), |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label(RichText::new(NO_REVIEW_DATA).size(14.0));
                    });
                });
            } else {
                ChartPlotter::draw_monthly_trend(ui, &trend.monthly, TREND_CHART_HEIGHT);
            }
        });
    }

    fn draw_top_users(ui: &mut egui::Ui, users: &[UserActivity]) {
        Self::card(ui, |ui| {
            ui.label(RichText::new("👥 Top 10 Active Yelp Users").size(16.0).strong());
            ui.add_space(8.0);
            if users.is_empty() {
                ui.label(RichText::new("No user data").color(Color32::GRAY));
            } else {
                ChartPlotter::draw_top_users_table(ui, users);
            }
        });
    }

    fn draw_summary(ui: &mut egui::Ui) {
        ui.separator();
        ui.label(RichText::new("🧠 Summary Dashboard").size(16.0).strong());
        ui.add_space(4.0);
        for item in SUMMARY_ITEMS {
            ui.label(format!("• {item}"));
        }
        ui.separator();
    }
}
