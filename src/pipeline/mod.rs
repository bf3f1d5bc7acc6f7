//! Dashboard Pipeline
//! Holds the source tables and current control values, and recomputes the
//! insight and trend results whenever a control changes.

pub mod controls;

use crate::data::{
    CityMetric, MonthlyCount, ProcessorError, RestaurantProcessor, UserActivity, YelpTables, TOP_N,
};
use crate::settings::DashboardSettings;
use controls::{ControlValues, Cuisine, RatingThreshold};
use polars::prelude::DataFrame;
use std::sync::Arc;
use tracing::{debug, info};

/// Placeholder shown instead of the trend chart when there is nothing to plot.
pub const NO_REVIEW_DATA: &str = "No review data available";

/// Format an integer with comma thousands separators.
pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Result of the insight pipeline for one set of control values.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightReport {
    pub controls: ControlValues,
    pub restaurant_count: usize,
    pub top_by_count: Vec<CityMetric>,
    pub top_by_rating: Vec<CityMetric>,
}

impl InsightReport {
    pub fn title(&self) -> String {
        format!(
            "Yelp Restaurant Insights for {}",
            self.controls.state.as_deref().unwrap_or("-")
        )
    }

    /// Active filters and the size of the filtered set.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Cuisine filter: {}", self.controls.cuisine),
            format!("Minimum rating: {}", self.controls.min_rating),
            format!(
                "Restaurants analyzed: {}",
                format_thousands(self.restaurant_count)
            ),
        ]
    }
}

/// Result of the trend pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendReport {
    pub monthly: Vec<MonthlyCount>,
}

impl TrendReport {
    /// `true` when the placeholder should be shown instead of a chart.
    pub fn is_empty(&self) -> bool {
        self.monthly.is_empty()
    }
}

/// Everything the rendering layer needs for one frame of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub insight: InsightReport,
    pub trend: TrendReport,
}

/// Explicit data flow: source tables plus control values in, snapshot out.
pub struct Dashboard {
    tables: Arc<YelpTables>,
    state_options: Vec<String>,
    controls: ControlValues,
    top_users: Vec<UserActivity>,
    snapshot: Option<DashboardSnapshot>,
}

impl Dashboard {
    /// Build the dashboard with default control values and compute the
    /// first snapshot.
    pub fn new(
        tables: Arc<YelpTables>,
        settings: &DashboardSettings,
    ) -> Result<Self, ProcessorError> {
        let state_options = tables.state_options()?;
        let controls = ControlValues::resolve(
            &state_options,
            &settings.default_state,
            settings.default_cuisine,
            settings.default_min_rating,
        );
        let top_users = RestaurantProcessor::top_users(&tables.users, TOP_N)?;

        let mut dashboard = Self {
            tables,
            state_options,
            controls,
            top_users,
            snapshot: None,
        };
        dashboard.recompute()?;
        Ok(dashboard)
    }

    pub fn state_options(&self) -> &[String] {
        &self.state_options
    }

    pub fn controls(&self) -> &ControlValues {
        &self.controls
    }

    pub fn top_users(&self) -> &[UserActivity] {
        &self.top_users
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.snapshot.as_ref()
    }

    /// Select a state. Unknown states are accepted and simply match nothing.
    pub fn set_state(&mut self, state: &str) -> Result<&DashboardSnapshot, ProcessorError> {
        self.controls.state = Some(state.to_string());
        self.recompute()
    }

    pub fn set_cuisine(&mut self, cuisine: Cuisine) -> Result<&DashboardSnapshot, ProcessorError> {
        self.controls.cuisine = cuisine;
        self.recompute()
    }

    pub fn set_min_rating(&mut self, rating: f64) -> Result<&DashboardSnapshot, ProcessorError> {
        self.controls.min_rating = RatingThreshold::new(rating);
        self.recompute()
    }

    /// Apply a whole set of control values at once.
    pub fn set_controls(
        &mut self,
        controls: ControlValues,
    ) -> Result<&DashboardSnapshot, ProcessorError> {
        self.controls = controls;
        self.recompute()
    }

    /// Rerun both pipelines and replace the current snapshot. On error the
    /// previous snapshot is kept.
    pub fn recompute(&mut self) -> Result<&DashboardSnapshot, ProcessorError> {
        let snapshot = Self::compute(&self.tables, &self.controls)?;
        info!(
            state = ?snapshot.insight.controls.state,
            cuisine = %snapshot.insight.controls.cuisine,
            min_rating = %snapshot.insight.controls.min_rating,
            restaurants = snapshot.insight.restaurant_count,
            months = snapshot.trend.monthly.len(),
            "dashboard recomputed"
        );
        Ok(&*self.snapshot.insert(snapshot))
    }

    /// Pure function of the tables and control values.
    pub fn compute(
        tables: &YelpTables,
        controls: &ControlValues,
    ) -> Result<DashboardSnapshot, ProcessorError> {
        let filtered = RestaurantProcessor::filter_restaurants(&tables.restaurants, controls)?;
        let insight = Self::insight(&filtered, controls)?;
        let trend = Self::trend(&tables.reviews, &filtered)?;
        Ok(DashboardSnapshot { insight, trend })
    }

    fn insight(
        filtered: &DataFrame,
        controls: &ControlValues,
    ) -> Result<InsightReport, ProcessorError> {
        let top_by_count = RestaurantProcessor::top_cities_by_count(filtered, TOP_N)?;
        let top_by_rating = RestaurantProcessor::top_cities_by_rating(filtered, TOP_N)?;
        debug!(
            by_count = top_by_count.len(),
            by_rating = top_by_rating.len(),
            "city rankings computed"
        );

        Ok(InsightReport {
            controls: controls.clone(),
            restaurant_count: filtered.height(),
            top_by_count,
            top_by_rating,
        })
    }

    fn trend(reviews: &DataFrame, filtered: &DataFrame) -> Result<TrendReport, ProcessorError> {
        let monthly = RestaurantProcessor::monthly_review_counts(reviews, filtered)?;
        Ok(TrendReport { monthly })
    }
}
