//! Yelp Dataset Loader Module
//! Reads capped samples of line-delimited JSON into typed records and Polars tables.

use super::columns;
use super::processor::{ProcessorError, RestaurantProcessor};
use super::schema::{
    BusinessRecord, CheckinRecord, ReviewRecord, SchemaError, TipRecord, UserRecord, Validate,
};
use crate::settings::DashboardSettings;
use polars::prelude::*;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed JSON in {} line {line}: {source}", path.display())]
    Json {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },
    #[error("Invalid record in {} line {line}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        line: usize,
        source: SchemaError,
    },
    #[error("Failed to build table: {0}")]
    Frame(#[from] PolarsError),
    #[error(transparent)]
    Processing(#[from] ProcessorError),
}

/// Read at most `limit` records from a line-delimited JSON file.
///
/// Blank lines are skipped and do not count towards the limit. The first
/// malformed or invalid line aborts the read.
pub fn read_ndjson<T>(path: &Path, limit: usize) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned + Validate,
{
    let io_err = |source: std::io::Error| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(io_err)?);
    let mut records = Vec::with_capacity(limit.min(4096));

    for (idx, line) in reader.lines().enumerate() {
        if records.len() >= limit {
            break;
        }
        let line = line.map_err(io_err)?;
        if line.trim().is_empty() {
            continue;
        }

        let record: T = serde_json::from_str(&line).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        record.validate().map_err(|source| LoadError::Invalid {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }

    debug!(file = %path.display(), rows = records.len(), "dataset sample read");
    Ok(records)
}

/// All source tables, read-only once loaded.
pub struct YelpTables {
    pub businesses: DataFrame,
    pub restaurants: DataFrame,
    pub reviews: DataFrame,
    pub users: DataFrame,
    pub checkins: Vec<CheckinRecord>,
    pub tips: Vec<TipRecord>,
}

impl YelpTables {
    /// Load the five dataset files named by the settings, in parallel.
    pub fn load(settings: &DashboardSettings) -> Result<Self, LoadError> {
        let limits = settings.limits;
        let business_path = settings.business_path();
        let review_path = settings.review_path();
        let checkin_path = settings.checkin_path();
        let user_path = settings.user_path();
        let tip_path = settings.tip_path();

        info!(data_dir = %settings.data_dir.display(), "loading Yelp datasets");

        let ((businesses, reviews), (checkins, (users, tips))) = rayon::join(
            || {
                rayon::join(
                    || read_ndjson::<BusinessRecord>(&business_path, limits.business),
                    || read_ndjson::<ReviewRecord>(&review_path, limits.review),
                )
            },
            || {
                rayon::join(
                    || read_ndjson::<CheckinRecord>(&checkin_path, limits.checkin),
                    || {
                        rayon::join(
                            || read_ndjson::<UserRecord>(&user_path, limits.user),
                            || read_ndjson::<TipRecord>(&tip_path, limits.tip),
                        )
                    },
                )
            },
        );

        Self::from_records(&businesses?, &reviews?, &users?, checkins?, tips?)
    }

    /// Build the tables from already parsed records.
    pub fn from_records(
        businesses: &[BusinessRecord],
        reviews: &[ReviewRecord],
        users: &[UserRecord],
        checkins: Vec<CheckinRecord>,
        tips: Vec<TipRecord>,
    ) -> Result<Self, LoadError> {
        let businesses_df = Self::businesses_frame(businesses)?;
        let restaurants = RestaurantProcessor::restaurant_subset(&businesses_df)?;
        let reviews_df = Self::reviews_frame(reviews)?;
        let users_df = Self::users_frame(users)?;

        info!(
            businesses = businesses_df.height(),
            restaurants = restaurants.height(),
            reviews = reviews_df.height(),
            checkins = checkins.len(),
            users = users_df.height(),
            tips = tips.len(),
            "datasets loaded"
        );

        Ok(Self {
            businesses: businesses_df,
            restaurants,
            reviews: reviews_df,
            users: users_df,
            checkins,
            tips,
        })
    }

    fn businesses_frame(rows: &[BusinessRecord]) -> PolarsResult<DataFrame> {
        let ids: Vec<&str> = rows.iter().map(|b| b.business_id.as_str()).collect();
        let names: Vec<Option<&str>> = rows.iter().map(|b| b.name.as_deref()).collect();
        let categories: Vec<Option<&str>> = rows.iter().map(|b| b.categories.as_deref()).collect();
        let states: Vec<Option<&str>> = rows.iter().map(|b| b.state.as_deref()).collect();
        let cities: Vec<Option<&str>> = rows.iter().map(|b| b.city.as_deref()).collect();
        let stars: Vec<f64> = rows.iter().map(|b| b.stars).collect();

        DataFrame::new(vec![
            Column::new(columns::BUSINESS_ID.into(), ids),
            Column::new(columns::NAME.into(), names),
            Column::new(columns::CATEGORIES.into(), categories),
            Column::new(columns::STATE.into(), states),
            Column::new(columns::CITY.into(), cities),
            Column::new(columns::STARS.into(), stars),
        ])
    }

    /// Review dates are reduced to their month here; unparseable dates
    /// become nulls.
    fn reviews_frame(rows: &[ReviewRecord]) -> PolarsResult<DataFrame> {
        let ids: Vec<&str> = rows.iter().map(|r| r.business_id.as_str()).collect();
        let months: Vec<Option<String>> = rows.iter().map(ReviewRecord::month).collect();

        DataFrame::new(vec![
            Column::new(columns::BUSINESS_ID.into(), ids),
            Column::new(columns::MONTH.into(), months),
        ])
    }

    fn users_frame(rows: &[UserRecord]) -> PolarsResult<DataFrame> {
        let ids: Vec<&str> = rows.iter().map(|u| u.user_id.as_str()).collect();
        let names: Vec<Option<&str>> = rows.iter().map(|u| u.name.as_deref()).collect();
        let review_counts: Vec<u64> = rows.iter().map(|u| u.review_count).collect();

        DataFrame::new(vec![
            Column::new(columns::USER_ID.into(), ids),
            Column::new(columns::NAME.into(), names),
            Column::new(columns::REVIEW_COUNT.into(), review_counts),
        ])
    }

    /// Distinct non-null states among restaurants, sorted.
    pub fn state_options(&self) -> Result<Vec<String>, ProcessorError> {
        RestaurantProcessor::distinct_sorted(&self.restaurants, columns::STATE)
    }
}
