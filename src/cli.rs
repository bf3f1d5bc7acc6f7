//! Command line arguments.

use crate::settings::{DashboardSettings, DEFAULT_STATE};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "yelp-dashboard", version, about = "Yelp restaurant insights dashboard")]
pub struct Cli {
    /// Directory containing the yelp_academic_dataset_*.json files
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// State selected when the dashboard opens
    #[arg(long, default_value = DEFAULT_STATE)]
    pub default_state: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn settings(&self) -> DashboardSettings {
        DashboardSettings {
            data_dir: self.data_dir.clone(),
            default_state: self.default_state.clone(),
            ..Default::default()
        }
    }
}
