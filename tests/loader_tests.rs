mod common;

use common::write_lines;
use tempfile::TempDir;
use yelp_dashboard::data::schema::{BusinessRecord, ReviewRecord};
use yelp_dashboard::data::{read_ndjson, LoadError, YelpTables};
use yelp_dashboard::settings::{
    DashboardSettings, RowLimits, BUSINESS_FILE, CHECKIN_FILE, REVIEW_FILE, TIP_FILE, USER_FILE,
};

const BUSINESS_LINES: [&str; 4] = [
    r#"{"business_id":"b1","name":"Luigi's","categories":"Italian, Restaurants","state":"AZ","city":"Phoenix","stars":4.5}"#,
    r#"{"business_id":"b2","name":"Corner Market","categories":"Grocery","state":"AZ","city":"Phoenix","stars":4.0}"#,
    r#"{"business_id":"b3","name":"No Tags","categories":null,"state":"NV","city":"Reno","stars":3.0}"#,
    r#"{"business_id":"b4","name":"Taqueria","categories":"Mexican, RESTAURANTS","state":"NV","city":"Reno","stars":4.0,"attributes":{"WiFi":"free"}}"#,
];

const REVIEW_LINES: [&str; 3] = [
    r#"{"review_id":"r1","business_id":"b1","user_id":"u1","stars":5,"date":"2018-07-07 22:09:11","text":"Great"}"#,
    r#"{"review_id":"r2","business_id":"b1","user_id":"u2","stars":4,"date":"garbage","text":"Fine"}"#,
    r#"{"review_id":"r3","business_id":"b4","user_id":"u1","stars":4,"date":"2019-01-01 00:00:00","text":"Good"}"#,
];

fn write_all(dir: &TempDir) {
    write_lines(dir.path(), BUSINESS_FILE, &BUSINESS_LINES);
    write_lines(dir.path(), REVIEW_FILE, &REVIEW_LINES);
    write_lines(
        dir.path(),
        CHECKIN_FILE,
        &[r#"{"business_id":"b1","date":"2016-04-26 19:49:16, 2016-08-30 18:36:57"}"#],
    );
    write_lines(
        dir.path(),
        USER_FILE,
        &[
            r#"{"user_id":"u1","name":"Walker","review_count":585,"yelping_since":"2007-01-25 16:47:26"}"#,
            r#"{"user_id":"u2","name":"Daniel","review_count":4333}"#,
        ],
    );
    write_lines(
        dir.path(),
        TIP_FILE,
        &[r#"{"user_id":"u1","business_id":"b1","text":"Try the gnocchi","date":"2012-05-18 02:17:21","compliment_count":0}"#],
    );
}

fn settings_for(dir: &TempDir) -> DashboardSettings {
    DashboardSettings {
        data_dir: dir.path().to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn loads_all_five_datasets() {
    let dir = TempDir::new().unwrap();
    write_all(&dir);

    let tables = YelpTables::load(&settings_for(&dir)).unwrap();
    assert_eq!(tables.businesses.height(), 4);
    assert_eq!(tables.restaurants.height(), 2);
    assert_eq!(tables.reviews.height(), 3);
    assert_eq!(tables.users.height(), 2);
    assert_eq!(tables.checkins.len(), 1);
    assert_eq!(tables.tips.len(), 1);
    assert_eq!(tables.state_options().unwrap(), vec!["AZ".to_string(), "NV".to_string()]);
}

#[test]
fn unparseable_review_dates_load_as_null_months() {
    let dir = TempDir::new().unwrap();
    write_all(&dir);

    let tables = YelpTables::load(&settings_for(&dir)).unwrap();
    let months = tables.reviews.column("month").unwrap();
    assert_eq!(months.null_count(), 1);
}

#[test]
fn row_limits_cap_each_file() {
    let dir = TempDir::new().unwrap();
    write_all(&dir);

    let settings = DashboardSettings {
        limits: RowLimits {
            business: 2,
            review: 1,
            ..Default::default()
        },
        ..settings_for(&dir)
    };
    let tables = YelpTables::load(&settings).unwrap();
    assert_eq!(tables.businesses.height(), 2);
    assert_eq!(tables.reviews.height(), 1);
}

#[test]
fn blank_lines_are_skipped_and_not_counted() {
    let dir = TempDir::new().unwrap();
    let lines = ["", BUSINESS_LINES[0], "   ", BUSINESS_LINES[1], BUSINESS_LINES[2]];
    write_lines(dir.path(), BUSINESS_FILE, &lines);

    let records: Vec<BusinessRecord> =
        read_ndjson(&dir.path().join(BUSINESS_FILE), 2).unwrap();
    let ids: Vec<&str> = records.iter().map(|b| b.business_id.as_str()).collect();
    assert_eq!(ids, vec!["b1", "b2"]);
}

#[test]
fn missing_file_fails_the_whole_load() {
    let dir = TempDir::new().unwrap();
    write_all(&dir);
    std::fs::remove_file(dir.path().join(TIP_FILE)).unwrap();

    let err = YelpTables::load(&settings_for(&dir)).err().unwrap();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains(TIP_FILE));
}

#[test]
fn malformed_line_reports_file_and_line() {
    let dir = TempDir::new().unwrap();
    write_lines(
        dir.path(),
        REVIEW_FILE,
        &[REVIEW_LINES[0], "{not json", REVIEW_LINES[2]],
    );

    let err = read_ndjson::<ReviewRecord>(&dir.path().join(REVIEW_FILE), 10).unwrap_err();
    match err {
        LoadError::Json { line, ref path, .. } => {
            assert_eq!(line, 2);
            assert!(path.ends_with(REVIEW_FILE));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn schema_violations_are_load_errors() {
    let dir = TempDir::new().unwrap();
    write_lines(
        dir.path(),
        BUSINESS_FILE,
        &[
            BUSINESS_LINES[0],
            r#"{"business_id":"b9","state":"AZ","city":"Mesa","stars":"five"}"#,
        ],
    );
    let err = read_ndjson::<BusinessRecord>(&dir.path().join(BUSINESS_FILE), 10).unwrap_err();
    assert!(matches!(err, LoadError::Json { line: 2, .. }));

    write_lines(
        dir.path(),
        BUSINESS_FILE,
        &[r#"{"business_id":"b9","state":"AZ","city":"Mesa","stars":9}"#],
    );
    let err = read_ndjson::<BusinessRecord>(&dir.path().join(BUSINESS_FILE), 10).unwrap_err();
    assert!(matches!(err, LoadError::Invalid { line: 1, .. }));
    assert!(err.to_string().contains("outside 0..=5"));
}
