//! Dashboard Settings
//! Data location, sampling limits and control defaults.

use crate::pipeline::controls::{Cuisine, RatingThreshold};
use std::path::PathBuf;

pub const BUSINESS_FILE: &str = "yelp_academic_dataset_business.json";
pub const REVIEW_FILE: &str = "yelp_academic_dataset_review.json";
pub const CHECKIN_FILE: &str = "yelp_academic_dataset_checkin.json";
pub const USER_FILE: &str = "yelp_academic_dataset_user.json";
pub const TIP_FILE: &str = "yelp_academic_dataset_tip.json";

pub const DEFAULT_STATE: &str = "AZ";

/// Maximum number of records read from each dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLimits {
    pub business: usize,
    pub review: usize,
    pub checkin: usize,
    pub user: usize,
    pub tip: usize,
}

impl Default for RowLimits {
    fn default() -> Self {
        Self {
            business: 10_000,
            review: 10_000,
            checkin: 5_000,
            user: 5_000,
            tip: 5_000,
        }
    }
}

/// Startup settings for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    pub data_dir: PathBuf,
    pub limits: RowLimits,
    pub default_state: String,
    pub default_cuisine: Cuisine,
    pub default_min_rating: RatingThreshold,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            limits: RowLimits::default(),
            default_state: DEFAULT_STATE.to_string(),
            default_cuisine: Cuisine::default(),
            default_min_rating: RatingThreshold::default(),
        }
    }
}

impl DashboardSettings {
    pub fn business_path(&self) -> PathBuf {
        self.data_dir.join(BUSINESS_FILE)
    }

    pub fn review_path(&self) -> PathBuf {
        self.data_dir.join(REVIEW_FILE)
    }

    pub fn checkin_path(&self) -> PathBuf {
        self.data_dir.join(CHECKIN_FILE)
    }

    pub fn user_path(&self) -> PathBuf {
        self.data_dir.join(USER_FILE)
    }

    pub fn tip_path(&self) -> PathBuf {
        self.data_dir.join(TIP_FILE)
    }
}
