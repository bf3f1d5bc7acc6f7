//! Data module - Yelp dataset loading and processing

mod loader;
mod processor;
pub mod schema;

pub use loader::{read_ndjson, LoadError, YelpTables};
pub use processor::{
    CityMetric, MonthlyCount, ProcessorError, RestaurantProcessor, UserActivity, TOP_N,
};

/// Column names shared by the loader and the processor.
pub mod columns {
    pub const BUSINESS_ID: &str = "business_id";
    pub const NAME: &str = "name";
    pub const CATEGORIES: &str = "categories";
    pub const STATE: &str = "state";
    pub const CITY: &str = "city";
    pub const STARS: &str = "stars";
    pub const MONTH: &str = "month";
    pub const USER_ID: &str = "user_id";
    pub const REVIEW_COUNT: &str = "review_count";
}
