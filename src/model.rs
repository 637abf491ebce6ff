/// Core data types for the AQI lookup pipeline.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic, no I/O, and no external dependencies — only types.

// ---------------------------------------------------------------------------
// Location types
// ---------------------------------------------------------------------------

/// A WGS84 point, produced by forward geocoding and consumed by the
/// distance calculation. Latitude in [-90, 90], longitude in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// Sensor types
// ---------------------------------------------------------------------------

/// One sensor's row from a PurpleAir bulk snapshot.
///
/// Every field is optional because the feed emits JSON `null` for sensors
/// that have not reported a value. A record with any missing field is
/// rejected by `screening::is_usable` before the pipeline considers it.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorRecord {
    /// PM2.5 concentration in µg/m³.
    pub pm25: Option<f64>,
    /// Seconds since the sensor last reported.
    pub age_seconds: Option<i64>,
    /// Channel code; 0 is the outdoor PM2.5 channel.
    pub sensor_type: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// The result of one successful lookup.
///
/// Only `aqi` is consumed by the chat boundary today; the coordinates and
/// name stay in the contract so callers can later report *where* the
/// reading came from without a wire change.
#[derive(Debug, Clone, PartialEq)]
pub struct AqiReading {
    pub aqi: u16,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when geocoding a location or fetching the sensor
/// snapshot. Each upstream failure is surfaced as a distinct variant; no
/// client operation swallows a failure or falls back to a default value.
#[derive(Debug, PartialEq)]
pub enum LookupError {
    /// Non-2xx HTTP response from an upstream service.
    HttpError(u16),
    /// The response body could not be deserialized, or its shape did not
    /// match the documented contract (including a reindexed snapshot).
    FormatError(String),
    /// Connection, DNS, or timeout failure before any response arrived.
    NetworkError(String),
    /// The geocoder returned no candidates for the requested location.
    NoMatch(String),
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::HttpError(code) => write!(f, "HTTP error: {}", code),
            LookupError::FormatError(msg) => write!(f, "Format error: {}", msg),
            LookupError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            LookupError::NoMatch(location) => {
                write!(f, "No geocoding match for location: {}", location)
            }
        }
    }
}

impl std::error::Error for LookupError {}
