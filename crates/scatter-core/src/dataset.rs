// File: crates/scatter-core/src/dataset.rs
// Summary: Weather dataset loading from JSON or CSV files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{ChartError, Result};
use crate::record::{Field, WeatherRecord};

/// Load records from `path`, dispatching on the file extension.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<WeatherRecord>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => Err(ChartError::UnsupportedFormat(other.to_string())),
    }
}

/// Load a JSON array of weather records.
pub fn load_json(path: impl AsRef<Path>) -> Result<Vec<WeatherRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records: Vec<WeatherRecord> = serde_json::from_reader(BufReader::new(file))?;
    debug!(count = records.len(), path = %path.display(), "loaded json dataset");
    Ok(records)
}

/// Load weather records from a headered CSV file.
///
/// Column names are matched case-insensitively against a small set of
/// candidates per field; rows missing any numeric field are skipped.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<WeatherRecord>> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    let idx = |field: Field| -> Option<usize> {
        headers.iter().position(|h| field.headers().contains(&h.as_str()))
    };

    let i_dew = idx(Field::DewPoint);
    let i_hum = idx(Field::Humidity);
    let i_cloud = idx(Field::CloudCover);
    let i_date = headers.iter().position(|h| h == "date" || h == "datetime");

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix)).and_then(|s| s.parse::<f64>().ok())
        };
        match (parse(i_dew), parse(i_hum), parse(i_cloud)) {
            (Some(dew_point), Some(humidity), Some(cloud_cover)) => {
                let date = i_date.and_then(|ix| rec.get(ix)).and_then(|s| s.parse().ok());
                out.push(WeatherRecord { dew_point, humidity, cloud_cover, date });
            }
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "dropped csv rows missing numeric fields");
    }
    debug!(count = out.len(), path = %path.display(), "loaded csv dataset");
    Ok(out)
}
