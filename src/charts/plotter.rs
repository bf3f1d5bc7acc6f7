//! Chart Plotter Module
//! Draws the dashboard charts using egui_plot.

use crate::data::{CityMetric, MonthlyCount, UserActivity};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoints, Points};

pub const COUNT_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const RATING_COLOR: Color32 = Color32::from_rgb(243, 156, 18); // Orange
pub const TREND_COLOR: Color32 = Color32::from_rgb(46, 204, 113); // Green

/// Most month labels shown on the trend axis before labels are thinned out.
const MAX_MONTH_LABELS: usize = 12;

/// Creates the dashboard charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Bar slot for the ranking entry at `rank`, so that rank 0 is drawn on top.
    pub fn bar_position(rank: usize, total: usize) -> f64 {
        (total.saturating_sub(rank + 1)) as f64
    }

    /// Label for an axis mark that falls on an integer slot.
    fn slot_label(labels: &[String], value: f64) -> String {
        if value < 0.0 || (value - value.round()).abs() > 1e-6 {
            return String::new();
        }
        labels.get(value.round() as usize).cloned().unwrap_or_default()
    }

    /// Every `step`-th index so that at most `max_labels` marks are drawn.
    pub fn label_step(count: usize, max_labels: usize) -> usize {
        count.div_ceil(max_labels.max(1)).max(1)
    }

    /// Horizontal bar chart of a city ranking, best entry on top.
    pub fn draw_city_bars(
        ui: &mut egui::Ui,
        id: &str,
        metrics: &[CityMetric],
        color: Color32,
        value_label: &str,
        height: f32,
    ) {
        let total = metrics.len();

        // Slot i holds the city drawn at height i
        let mut labels = vec![String::new(); total];
        for (rank, metric) in metrics.iter().enumerate() {
            labels[Self::bar_position(rank, total) as usize] = metric.city.clone();
        }

        let bars: Vec<Bar> = metrics
            .iter()
            .enumerate()
            .map(|(rank, metric)| {
                Bar::new(Self::bar_position(rank, total), metric.value)
                    .name(&metric.city)
                    .fill(color)
                    .width(0.6)
            })
            .collect();

        Plot::new(id.to_string())
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_x(0.0)
            .x_axis_label(value_label.to_string())
            .y_grid_spacer(move |_input| {
                (0..total)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .y_axis_formatter(move |mark, _range| Self::slot_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .horizontal()
                        .color(color)
                        .name(value_label),
                );
            });
    }

    /// Line chart of monthly review counts in chronological order.
    pub fn draw_monthly_trend(ui: &mut egui::Ui, monthly: &[MonthlyCount], height: f32) {
        let labels: Vec<String> = monthly.iter().map(|m| m.month.clone()).collect();
        let count = labels.len();
        let step = Self::label_step(count, MAX_MONTH_LABELS);

        let points: Vec<[f64; 2]> = monthly
            .iter()
            .enumerate()
            .map(|(i, m)| [i as f64, m.reviews as f64])
            .collect();

        Plot::new("monthly_review_trend")
            .height(height)
            .allow_scroll(false)
            .x_axis_label("Month")
            .y_axis_label("Number of Reviews")
            .include_y(0.0)
            .x_grid_spacer(move |_input| {
                (0..count)
                    .step_by(step)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: step as f64,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| Self::slot_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points.iter().copied()))
                        .color(TREND_COLOR)
                        .width(2.0)
                        .name("Reviews"),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points.iter().copied()))
                        .radius(2.5)
                        .color(TREND_COLOR),
                );
            });
    }

    /// Draw the most active users table
    pub fn draw_top_users_table(ui: &mut egui::Ui, users: &[UserActivity]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("top_users_table")
                    .striped(true)
                    .min_col_width(80.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("#").strong().size(11.0));
                        ui.label(RichText::new("User").strong().size(11.0));
                        ui.label(RichText::new("Reviews").strong().size(11.0));
                        ui.end_row();

                        for (rank, user) in users.iter().enumerate() {
                            let name = user.name.as_deref().unwrap_or(&user.user_id);
                            ui.label(RichText::new((rank + 1).to_string()).size(11.0));
                            ui.label(RichText::new(name).size(11.0));
                            ui.label(RichText::new(user.review_count.to_string()).size(11.0));
                            ui.end_row();
                        }
                    });
            });
    }
}
