// File: crates/scatter-core/tests/dataset.rs
// Purpose: Validate JSON and CSV dataset loading, including row skipping.

use std::path::PathBuf;

use scatter_core::{load_records, ChartError};

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let path = PathBuf::from("target/test_out").join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn load_json_camel_case_records() {
    let path = write_fixture(
        "weather.json",
        r#"[
            {"date": "2018-01-01", "dewPoint": 40.0, "humidity": 0.5, "cloudCover": 0.2},
            {"dewPoint": 60.0, "humidity": 0.9, "cloudCover": 0.8}
        ]"#,
    );
    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].dew_point, 40.0);
    assert_eq!(records[0].humidity, 0.5);
    assert_eq!(records[0].cloud_cover, 0.2);
    assert!(records[0].date.is_some());
    assert!(records[1].date.is_none());
}

#[test]
fn load_csv_with_flexible_headers() {
    let path = write_fixture(
        "weather.csv",
        "date,dew_point,humidity,cloud_cover\n\
         2018-01-01,40.0,0.5,0.2\n\
         2018-01-02,60.0,0.9,0.8\n",
    );
    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].dew_point, 60.0);
    assert_eq!(records[1].date.unwrap().to_string(), "2018-01-02");
}

#[test]
fn csv_rows_missing_numbers_are_skipped() {
    let path = write_fixture(
        "weather_gaps.csv",
        "dewpoint,humidity,cloudcover\n\
         40.0,0.5,0.2\n\
         ,0.7,0.4\n\
         55.0,not-a-number,0.6\n\
         60.0,0.9,0.8\n",
    );
    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].dew_point, 40.0);
    assert_eq!(records[1].dew_point, 60.0);
}

#[test]
fn unknown_extension_is_rejected() {
    let path = write_fixture("weather.xml", "<weather/>");
    assert!(matches!(
        load_records(&path),
        Err(ChartError::UnsupportedFormat(_))
    ));
}

#[test]
fn missing_file_surfaces_io_error() {
    assert!(matches!(
        load_records("target/test_out/does_not_exist.json"),
        Err(ChartError::Io(_))
    ));
}

#[test]
fn malformed_json_surfaces_decode_error() {
    let path = write_fixture("broken.json", "{ not json ]");
    assert!(matches!(load_records(&path), Err(ChartError::Json(_))));
}
