//! Dataset Schema Module
//! Typed records for each Yelp dataset file, validated at load time.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SchemaError {
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("star rating {0} is outside 0..=5")]
    StarsOutOfRange(f64),
}

/// A record type that can be checked after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<(), SchemaError>;
}

/// One line of `yelp_academic_dataset_business.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BusinessRecord {
    pub business_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub categories: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    pub stars: f64,
}

impl BusinessRecord {
    /// Case-insensitive containment test against the category text.
    /// A missing category list never matches.
    pub fn has_category(&self, needle: &str) -> bool {
        category_matches(self.categories.as_deref(), needle)
    }

    pub fn is_restaurant(&self) -> bool {
        self.has_category("restaurant")
    }
}

impl Validate for BusinessRecord {
    fn validate(&self) -> Result<(), SchemaError> {
        if self.business_id.trim().is_empty() {
            return Err(SchemaError::EmptyField("business_id"));
        }
        if !self.stars.is_finite() || !(0.0..=5.0).contains(&self.stars) {
            return Err(SchemaError::StarsOutOfRange(self.stars));
        }
        Ok(())
    }
}

/// One line of `yelp_academic_dataset_review.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReviewRecord {
    #[serde(default)]
    pub review_id: Option<String>,
    pub business_id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl ReviewRecord {
    /// Calendar month of the review as `YYYY-MM`, or `None` when the date
    /// is missing or unparseable.
    pub fn month(&self) -> Option<String> {
        self.date.as_deref().and_then(parse_month)
    }
}

impl Validate for ReviewRecord {
    fn validate(&self) -> Result<(), SchemaError> {
        if self.business_id.trim().is_empty() {
            return Err(SchemaError::EmptyField("business_id"));
        }
        Ok(())
    }
}

/// One line of `yelp_academic_dataset_checkin.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CheckinRecord {
    pub business_id: String,
    /// Comma separated timestamps.
    #[serde(default)]
    pub date: Option<String>,
}

impl Validate for CheckinRecord {
    fn validate(&self) -> Result<(), SchemaError> {
        if self.business_id.trim().is_empty() {
            return Err(SchemaError::EmptyField("business_id"));
        }
        Ok(())
    }
}

/// One line of `yelp_academic_dataset_user.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserRecord {
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub review_count: u64,
}

impl Validate for UserRecord {
    fn validate(&self) -> Result<(), SchemaError> {
        if self.user_id.trim().is_empty() {
            return Err(SchemaError::EmptyField("user_id"));
        }
        Ok(())
    }
}

/// One line of `yelp_academic_dataset_tip.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TipRecord {
    #[serde(default)]
    pub user_id: Option<String>,
    pub business_id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl Validate for TipRecord {
    fn validate(&self) -> Result<(), SchemaError> {
        if self.business_id.trim().is_empty() {
            return Err(SchemaError::EmptyField("business_id"));
        }
        Ok(())
    }
}

/// Case-insensitive substring test on a category list. Nulls never match.
pub fn category_matches(categories: Option<&str>, needle: &str) -> bool {
    categories.is_some_and(|c| c.to_lowercase().contains(&needle.to_lowercase()))
}

/// Coerce a timestamp string to its `YYYY-MM` month bucket.
pub fn parse_month(raw: &str) -> Option<String> {
    let raw = raw.trim();

    let date = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map(|dt| dt.date())
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()?;

    Some(format!("{:04}-{:02}", date.year(), date.month()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business(categories: Option<&str>, stars: f64) -> BusinessRecord {
        BusinessRecord {
            business_id: "b1".to_string(),
            name: None,
            categories: categories.map(str::to_string),
            state: Some("AZ".to_string()),
            city: Some("Phoenix".to_string()),
            stars,
        }
    }

    #[test]
    fn restaurant_match_ignores_case() {
        assert!(business(Some("Pizza, RESTAURANTS"), 4.0).is_restaurant());
        assert!(business(Some("restaurant"), 4.0).is_restaurant());
        assert!(!business(Some("Bars, Nightlife"), 4.0).is_restaurant());
    }

    #[test]
    fn missing_categories_never_match() {
        assert!(!business(None, 4.0).is_restaurant());
        assert!(!business(None, 4.0).has_category(""));
        assert!(!category_matches(None, ""));
        assert!(category_matches(Some("Italian"), ""));
    }

    #[test]
    fn stars_must_be_in_range() {
        assert_eq!(
            business(None, 7.5).validate(),
            Err(SchemaError::StarsOutOfRange(7.5))
        );
        assert!(business(None, 0.0).validate().is_ok());
        assert!(business(None, f64::NAN).validate().is_err());
    }

    #[test]
    fn empty_ids_are_rejected() {
        let mut b = business(None, 3.0);
        b.business_id = "  ".to_string();
        assert_eq!(b.validate(), Err(SchemaError::EmptyField("business_id")));

        let user = UserRecord {
            user_id: String::new(),
            name: None,
            review_count: 3,
        };
        assert_eq!(user.validate(), Err(SchemaError::EmptyField("user_id")));
    }

    #[test]
    fn review_line_deserializes() {
        let line = r#"{"review_id":"r1","business_id":"b1","stars":5,"date":"2018-07-07 22:09:11","text":"Great"}"#;
        let review: ReviewRecord = serde_json::from_str(line).unwrap();
        assert_eq!(review.month().as_deref(), Some("2018-07"));
    }

    #[test]
    fn month_parsing_accepts_common_formats() {
        assert_eq!(parse_month("2018-07-07 22:09:11").as_deref(), Some("2018-07"));
        assert_eq!(parse_month("2019-12-01T08:00:00").as_deref(), Some("2019-12"));
        assert_eq!(parse_month("2020-01-31T23:59:59+00:00").as_deref(), Some("2020-01"));
        assert_eq!(parse_month("2021-03-15").as_deref(), Some("2021-03"));
    }

    #[test]
    fn unparseable_dates_become_none() {
        assert_eq!(parse_month("yesterday"), None);
        assert_eq!(parse_month(""), None);
        let review = ReviewRecord {
            review_id: None,
            business_id: "b1".to_string(),
            date: None,
            text: None,
        };
        assert_eq!(review.month(), None);
    }
}
