// File: crates/scatter-core/src/record.rs
// Summary: Weather record model and named field projections for chart channels.

use chrono::NaiveDate;
use serde::Deserialize;

/// One observed day of weather.
///
/// Field names mirror the upstream dataset's camelCase JSON keys.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    /// Dew point in degrees Fahrenheit.
    pub dew_point: f64,
    /// Relative humidity in the range 0.0 to 1.0.
    pub humidity: f64,
    /// Cloud cover fraction in the range 0.0 to 1.0.
    pub cloud_cover: f64,
    /// Observation date, when the source provides one.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// A named projection extracting one numeric field from a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    DewPoint,
    Humidity,
    CloudCover,
}

impl Field {
    /// Read this field's value out of a record.
    #[inline]
    pub fn value(self, record: &WeatherRecord) -> f64 {
        match self {
            Field::DewPoint => record.dew_point,
            Field::Humidity => record.humidity,
            Field::CloudCover => record.cloud_cover,
        }
    }

    /// Column header candidates accepted by the CSV loader.
    pub(crate) fn headers(self) -> &'static [&'static str] {
        match self {
            Field::DewPoint => &["dewpoint", "dew_point", "dew point"],
            Field::Humidity => &["humidity", "relative_humidity"],
            Field::CloudCover => &["cloudcover", "cloud_cover", "cloud cover"],
        }
    }
}

/// Which field feeds each visual channel of the scatter plot.
#[derive(Clone, Copy, Debug)]
pub struct Channels {
    pub x: Field,
    pub y: Field,
    pub color: Field,
}

impl Default for Channels {
    fn default() -> Self {
        Self { x: Field::DewPoint, y: Field::Humidity, color: Field::CloudCover }
    }
}
