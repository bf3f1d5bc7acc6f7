//! Charts module - Chart rendering

mod plotter;

pub use plotter::{ChartPlotter, COUNT_COLOR, RATING_COLOR, TREND_COLOR};
