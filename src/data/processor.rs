//! Restaurant Processor Module
//! Filtering, grouping and ranking of the Yelp tables with Polars.

use super::columns::{BUSINESS_ID, CATEGORIES, CITY, MONTH, NAME, REVIEW_COUNT, STARS, STATE, USER_ID};
use super::schema::category_matches;
use crate::pipeline::controls::ControlValues;
use polars::prelude::*;
use thiserror::Error;

/// Number of rows kept by every ranking.
pub const TOP_N: usize = 10;

const METRIC: &str = "metric";
const REVIEWS: &str = "reviews";

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// One bar of a city ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct CityMetric {
    pub city: String,
    pub value: f64,
}

/// Review volume for one calendar month (`YYYY-MM`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyCount {
    pub month: String,
    pub reviews: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserActivity {
    pub user_id: String,
    pub name: Option<String>,
    pub review_count: u64,
}

/// Stateless table operations behind the dashboard pipelines.
pub struct RestaurantProcessor;

impl RestaurantProcessor {
    /// Boolean mask of rows whose text column contains `needle`, ignoring case.
    /// Nulls never match.
    fn contains_mask(df: &DataFrame, column: &str, needle: &str) -> PolarsResult<BooleanChunked> {
        let values = df.column(column)?.str()?;
        Ok(values
            .into_iter()
            .map(|v| category_matches(v, needle))
            .collect())
    }

    /// Businesses whose categories mention "restaurant".
    pub fn restaurant_subset(businesses: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let mask = Self::contains_mask(businesses, CATEGORIES, "restaurant")?;
        Ok(businesses.filter(&mask)?)
    }

    /// Sorted distinct non-null values of a text column.
    pub fn distinct_sorted(df: &DataFrame, column: &str) -> Result<Vec<String>, ProcessorError> {
        let values = df.column(column)?.str()?;
        let mut distinct: Vec<String> = values.into_iter().flatten().map(str::to_string).collect();
        distinct.sort();
        distinct.dedup();
        Ok(distinct)
    }

    /// Narrow the restaurant table to the current control values.
    pub fn filter_restaurants(
        restaurants: &DataFrame,
        controls: &ControlValues,
    ) -> Result<DataFrame, ProcessorError> {
        let Some(state) = controls.state.as_deref() else {
            return Ok(restaurants.head(Some(0)));
        };

        let mut filtered = restaurants
            .clone()
            .lazy()
            .filter(
                col(STATE)
                    .eq(lit(state))
                    .and(col(STARS).gt_eq(lit(controls.min_rating.value()))),
            )
            .collect()?;

        if let Some(keyword) = controls.cuisine.category_keyword() {
            let mask = Self::contains_mask(&filtered, CATEGORIES, keyword)?;
            filtered = filtered.filter(&mask)?;
        }

        Ok(filtered)
    }

    /// Rank cities by an aggregate, descending, keeping the first `n`.
    /// Equal values are ordered by city name.
    fn rank_cities(
        filtered: &DataFrame,
        metric: Expr,
        n: usize,
    ) -> Result<Vec<CityMetric>, ProcessorError> {
        let ranked = filtered
            .clone()
            .lazy()
            .filter(col(CITY).is_not_null())
            .group_by([col(CITY)])
            .agg([metric.alias(METRIC)])
            .sort_by_exprs(
                [col(METRIC), col(CITY)],
                SortMultipleOptions::default()
                    .with_order_descending_multi([true, false])
                    .with_maintain_order(true),
            )
            .limit(n as IdxSize)
            .collect()?;

        let cities = ranked.column(CITY)?.str()?;
        let values = ranked.column(METRIC)?.cast(&DataType::Float64)?;
        let values = values.f64()?;

        Ok(cities
            .into_iter()
            .zip(values.into_iter())
            .filter_map(|(city, value)| {
                Some(CityMetric {
                    city: city?.to_string(),
                    value: value?,
                })
            })
            .collect())
    }

    /// Top cities by number of restaurants.
    pub fn top_cities_by_count(
        filtered: &DataFrame,
        n: usize,
    ) -> Result<Vec<CityMetric>, ProcessorError> {
        Self::rank_cities(filtered, col(BUSINESS_ID).count(), n)
    }

    /// Top cities by mean star rating.
    pub fn top_cities_by_rating(
        filtered: &DataFrame,
        n: usize,
    ) -> Result<Vec<CityMetric>, ProcessorError> {
        Self::rank_cities(filtered, col(STARS).mean(), n)
    }

    /// Reviews of the filtered restaurants (inner join on business id).
    pub fn joined_reviews(
        reviews: &DataFrame,
        filtered: &DataFrame,
    ) -> Result<DataFrame, ProcessorError> {
        let ids = filtered.clone().lazy().select([col(BUSINESS_ID)]);
        let joined = reviews
            .clone()
            .lazy()
            .inner_join(ids, col(BUSINESS_ID), col(BUSINESS_ID))
            .collect()?;
        Ok(joined)
    }

    /// Review counts per calendar month, oldest first. Reviews without a
    /// usable date are left out.
    pub fn monthly_review_counts(
        reviews: &DataFrame,
        filtered: &DataFrame,
    ) -> Result<Vec<MonthlyCount>, ProcessorError> {
        let monthly = Self::joined_reviews(reviews, filtered)?
            .lazy()
            .filter(col(MONTH).is_not_null())
            .group_by([col(MONTH)])
            .agg([col(BUSINESS_ID).count().alias(REVIEWS)])
            .sort_by_exprs([col(MONTH)], SortMultipleOptions::default())
            .collect()?;

        let months = monthly.column(MONTH)?.str()?;
        let counts = monthly.column(REVIEWS)?.cast(&DataType::UInt64)?;
        let counts = counts.u64()?;

        Ok(months
            .into_iter()
            .zip(counts.into_iter())
            .filter_map(|(month, reviews)| {
                Some(MonthlyCount {
                    month: month?.to_string(),
                    reviews: reviews? as usize,
                })
            })
            .collect())
    }

    /// Most active users by lifetime review count.
    pub fn top_users(users: &DataFrame, n: usize) -> Result<Vec<UserActivity>, ProcessorError> {
        let top = users
            .clone()
            .lazy()
            .sort_by_exprs(
                [col(REVIEW_COUNT)],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_maintain_order(true),
            )
            .limit(n as IdxSize)
            .collect()?;

        let ids = top.column(USER_ID)?.str()?;
        let names = top.column(NAME)?.str()?;
        let counts = top.column(REVIEW_COUNT)?.cast(&DataType::UInt64)?;
        let counts = counts.u64()?;

        Ok(ids
            .into_iter()
            .zip(names.into_iter())
            .zip(counts.into_iter())
            .filter_map(|((user_id, name), review_count)| {
                Some(UserActivity {
                    user_id: user_id?.to_string(),
                    name: name.map(str::to_string),
                    review_count: review_count.unwrap_or(0),
                })
            })
            .collect())
    }
}
