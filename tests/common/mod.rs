//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use yelp_dashboard::data::schema::{BusinessRecord, ReviewRecord, UserRecord};
use yelp_dashboard::data::YelpTables;

pub fn business(
    id: &str,
    categories: Option<&str>,
    state: &str,
    city: &str,
    stars: f64,
) -> BusinessRecord {
    BusinessRecord {
        business_id: id.to_string(),
        name: Some(format!("Business {id}")),
        categories: categories.map(str::to_string),
        state: Some(state.to_string()),
        city: Some(city.to_string()),
        stars,
    }
}

pub fn review(business_id: &str, date: Option<&str>) -> ReviewRecord {
    ReviewRecord {
        review_id: None,
        business_id: business_id.to_string(),
        date: date.map(str::to_string),
        text: Some("Tasty".to_string()),
    }
}

pub fn user(id: &str, name: &str, review_count: u64) -> UserRecord {
    UserRecord {
        user_id: id.to_string(),
        name: Some(name.to_string()),
        review_count,
    }
}

/// 50 businesses, 12 of which are Arizona Italian restaurants rated 4.0 or
/// better, spread over 5 cities.
pub fn scenario_businesses() -> Vec<BusinessRecord> {
    let mut rows = Vec::new();

    let matching_cities = [
        ("Phoenix", 4),
        ("Tempe", 3),
        ("Mesa", 2),
        ("Scottsdale", 2),
        ("Chandler", 1),
    ];
    let mut n = 0;
    for (city, count) in matching_cities {
        for i in 0..count {
            let stars = if i % 2 == 0 { 4.0 } else { 4.5 };
            rows.push(business(
                &format!("az-it-{n}"),
                Some("Italian, Pizza, Restaurants"),
                "AZ",
                city,
                stars,
            ));
            n += 1;
        }
    }

    // Arizona Italian below the threshold
    for i in 0..5 {
        rows.push(business(
            &format!("az-it-low-{i}"),
            Some("Restaurants, Italian"),
            "AZ",
            "Phoenix",
            3.5,
        ));
    }
    // Arizona Mexican
    for i in 0..8 {
        rows.push(business(
            &format!("az-mx-{i}"),
            Some("Mexican, Restaurants"),
            "AZ",
            "Tucson",
            4.5,
        ));
    }
    // Nevada Italian
    for i in 0..10 {
        rows.push(business(
            &format!("nv-it-{i}"),
            Some("Italian, Restaurants"),
            "NV",
            "Las Vegas",
            4.5,
        ));
    }
    // Arizona Italian grocery stores, not restaurants
    for i in 0..5 {
        rows.push(business(
            &format!("az-grocery-{i}"),
            Some("Italian, Grocery, Food"),
            "AZ",
            "Phoenix",
            5.0,
        ));
    }
    // Arizona American, one without categories
    for i in 0..10 {
        let categories = if i == 0 {
            None
        } else {
            Some("American (New), Restaurants")
        };
        rows.push(business(
            &format!("az-am-{i}"),
            categories,
            "AZ",
            "Glendale",
            4.5,
        ));
    }

    rows
}

pub fn scenario_reviews() -> Vec<ReviewRecord> {
    vec![
        review("az-it-0", Some("2018-01-05 10:00:00")),
        review("az-it-0", Some("2018-01-20 19:30:00")),
        review("az-it-4", Some("2018-03-02 12:00:00")),
        review("az-it-11", Some("2017-12-31 23:59:59")),
        review("az-it-1", Some("not a date")),
        review("az-it-2", None),
        review("nv-it-0", Some("2018-01-05 10:00:00")),
        review("az-mx-0", Some("2019-06-01 08:00:00")),
        review("unknown-business", Some("2018-01-05 10:00:00")),
    ]
}

pub fn scenario_users() -> Vec<UserRecord> {
    (0..15)
        .map(|i| user(&format!("u{i}"), &format!("User {i}"), (i * 7 % 15) as u64))
        .collect()
}

pub fn scenario_tables() -> YelpTables {
    YelpTables::from_records(
        &scenario_businesses(),
        &scenario_reviews(),
        &scenario_users(),
        Vec::new(),
        Vec::new(),
    )
    .expect("scenario tables build")
}

/// Write one JSON document per line to `dir/name`.
pub fn write_lines(dir: &Path, name: &str, lines: &[&str]) {
    fs::write(dir.join(name), lines.join("\n")).expect("write dataset file");
}
