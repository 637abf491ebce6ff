/// PurpleAir bulk snapshot client: fetch + positional-row parsing.
///
/// The snapshot endpoint returns every community sensor's latest reading in
/// one JSON object:
///   { "fields": ["ID", "pm", ...], "data": [[...], [...], ...] }
///
/// Each `data` entry is a fixed-position array. Consumed columns (0-based):
///   1  — PM2.5 concentration (µg/m³)
///   4  — seconds since the sensor last reported
///   25 — channel code (0 = outdoor PM2.5)
///   27 — latitude
///   28 — longitude
///
/// This positional layout is a hard external contract: a silent upstream
/// reindex would corrupt every downstream decision. When the `fields`
/// header is present, the names at the consumed positions are checked
/// against the expected column names and any mismatch fails the whole
/// snapshot. Rows narrower than the consumed width are skipped.

use crate::config::ServiceConfig;
use crate::model::{LookupError, SensorRecord};
use serde::Deserialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

pub const IDX_PM25: usize = 1;
pub const IDX_AGE: usize = 4;
pub const IDX_TYPE: usize = 25;
pub const IDX_LAT: usize = 27;
pub const IDX_LON: usize = 28;

/// Minimum row width: one past the highest consumed index.
pub const MIN_ROW_LEN: usize = 29;

/// Expected column names at the consumed positions, as published in the
/// snapshot's `fields` header.
const EXPECTED_COLUMNS: &[(usize, &str)] = &[
    (IDX_PM25, "pm"),
    (IDX_AGE, "age"),
    (IDX_TYPE, "Type"),
    (IDX_LAT, "Lat"),
    (IDX_LON, "Lon"),
];

// ---------------------------------------------------------------------------
// Serde structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct SnapshotResponse {
    /// Column names; older snapshots omitted this header.
    fields: Option<Vec<String>>,
    data: Vec<Vec<Value>>,
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a snapshot body into one `SensorRecord` per row.
///
/// JSON nulls and non-numeric cells become `None` fields (the screening
/// step rejects incomplete records). Rows shorter than `MIN_ROW_LEN` are
/// skipped: one damaged row should not discard the snapshot.
///
/// # Errors
/// - `LookupError::FormatError` — malformed JSON, missing `data` field, or
///   a `fields` header whose names disagree with the consumed positions
///   (the layout changed upstream; indexing on would be silent corruption).
pub fn parse_snapshot(json: &str) -> Result<Vec<SensorRecord>, LookupError> {
    let response: SnapshotResponse = serde_json::from_str(json)
        .map_err(|e| LookupError::FormatError(format!("PurpleAir response: {}", e)))?;

    if let Some(fields) = &response.fields {
        verify_column_layout(fields)?;
    }

    let records = response
        .data
        .iter()
        .filter(|row| row.len() >= MIN_ROW_LEN)
        .map(|row| SensorRecord {
            pm25: cell_f64(row, IDX_PM25),
            age_seconds: cell_i64(row, IDX_AGE),
            sensor_type: cell_i64(row, IDX_TYPE),
            latitude: cell_f64(row, IDX_LAT),
            longitude: cell_f64(row, IDX_LON),
        })
        .collect();

    Ok(records)
}

/// Checks that each consumed position still carries its expected name.
fn verify_column_layout(fields: &[String]) -> Result<(), LookupError> {
    for &(index, expected) in EXPECTED_COLUMNS {
        match fields.get(index) {
            Some(name) if name == expected => {}
            Some(name) => {
                return Err(LookupError::FormatError(format!(
                    "Snapshot column {} is '{}', expected '{}' — upstream layout changed",
                    index, name, expected
                )));
            }
            None => {
                return Err(LookupError::FormatError(format!(
                    "Snapshot fields header has only {} columns, expected '{}' at {}",
                    fields.len(),
                    expected,
                    index
                )));
            }
        }
    }
    Ok(())
}

fn cell_f64(row: &[Value], index: usize) -> Option<f64> {
    row.get(index).and_then(Value::as_f64)
}

fn cell_i64(row: &[Value], index: usize) -> Option<i64> {
    row.get(index).and_then(Value::as_i64)
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

/// Fetches the full sensor snapshot with one GET. No parameters, no
/// pagination; the endpoint returns everything.
///
/// # Errors
/// - `LookupError::HttpError` — non-2xx status.
/// - `LookupError::NetworkError` — connection, DNS, or timeout failure.
/// - `LookupError::FormatError` — see `parse_snapshot`.
pub fn fetch_snapshot(
    client: &reqwest::blocking::Client,
    config: &ServiceConfig,
) -> Result<Vec<SensorRecord>, LookupError> {
    let response = client
        .get(&config.purpleair_url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| LookupError::NetworkError(e.to_string()))?;

    if !response.status().is_success() {
        return Err(LookupError::HttpError(response.status().as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| LookupError::NetworkError(e.to_string()))?;

    parse_snapshot(&body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
