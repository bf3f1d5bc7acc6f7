//! Yelp Restaurant Dashboard
//!
//! Loads capped samples of the Yelp academic dataset, filters restaurants by
//! state, cuisine and minimum rating, and renders city rankings and a monthly
//! review trend in an egui window.

pub mod charts;
pub mod cli;
pub mod data;
pub mod gui;
pub mod logging;
pub mod pipeline;
pub mod settings;
