/// Nominatim forward-geocoding client: URL construction + JSON parsing.
///
/// Resolves a free-text location ("Irvine, CA") to WGS84 coordinates via
/// the OpenStreetMap Nominatim search endpoint:
///   https://nominatim.openstreetmap.org/search
///
/// The response is a JSON array of candidate places ordered by relevance;
/// the first candidate wins. Nominatim returns `lat`/`lon` as strings, not
/// numbers — parsers must handle this. The usage policy requires an
/// identifying Referer, sent here as a query parameter.

use crate::config::ServiceConfig;
use crate::model::{Coordinate, LookupError};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde structures for the search response
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct Candidate {
    lat: String,
    lon: String,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds a Nominatim search URL for the given location text. The location
/// and referer are percent-encoded; the format is always JSON.
pub fn build_search_url(base: &str, location: &str, referer: &str) -> String {
    format!(
        "{}?q={}&format=json&Referer={}",
        base,
        urlencoding::encode(location),
        urlencoding::encode(referer)
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a Nominatim search response into the first candidate's
/// coordinates.
///
/// # Errors
/// - `LookupError::NoMatch` — the candidate array is empty (unknown
///   location). Callers must treat this as "no result", never as a default
///   coordinate.
/// - `LookupError::FormatError` — malformed JSON, unparsable lat/lon
///   strings, or coordinates outside the WGS84 domain.
pub fn parse_search_response(json: &str, location: &str) -> Result<Coordinate, LookupError> {
    let candidates: Vec<Candidate> = serde_json::from_str(json)
        .map_err(|e| LookupError::FormatError(format!("Nominatim response: {}", e)))?;

    let first = candidates
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::NoMatch(location.to_string()))?;

    let latitude: f64 = first.lat.parse().map_err(|_| {
        LookupError::FormatError(format!("Unparsable latitude '{}'", first.lat))
    })?;
    let longitude: f64 = first.lon.parse().map_err(|_| {
        LookupError::FormatError(format!("Unparsable longitude '{}'", first.lon))
    })?;

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(LookupError::FormatError(format!(
            "Coordinates out of range: ({}, {})",
            latitude, longitude
        )));
    }

    Ok(Coordinate { latitude, longitude })
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

/// Geocodes a location with one GET against the configured endpoint.
///
/// # Errors
/// - `LookupError::HttpError` — non-2xx status.
/// - `LookupError::NetworkError` — connection, DNS, or timeout failure.
/// - `LookupError::NoMatch` / `LookupError::FormatError` — see
///   `parse_search_response`.
pub fn geocode(
    client: &reqwest::blocking::Client,
    config: &ServiceConfig,
    location: &str,
) -> Result<Coordinate, LookupError> {
    let url = build_search_url(&config.nominatim_url, location, &config.referer);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| LookupError::NetworkError(e.to_string()))?;

    if !response.status().is_success() {
        return Err(LookupError::HttpError(response.status().as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| LookupError::NetworkError(e.to_string()))?;

    parse_search_response(&body, location)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
