/// Lookup orchestrator: location text in, AQI reading out.
///
/// Composes the pipeline end to end: geocode the location, fetch the
/// sensor snapshot, then scan it in snapshot order for the first usable
/// sensor within the configured radius. First match wins — there is no
/// nearest-sensor search and no tie-breaking. `Ok(None)` means "no reading
/// available"; an `Err` means an upstream service failed and the caller
/// must say so rather than show a stale or default value.

use crate::aqi;
use crate::config::ServiceConfig;
use crate::geo;
use crate::ingest::{nominatim, purpleair};
use crate::model::{AqiReading, Coordinate, LookupError, SensorRecord};
use crate::screening;

/// Scans snapshot rows in upstream order and converts the first usable
/// record within `radius_miles` of `center`.
///
/// The scan stops at the first in-radius usable record even when its PM
/// does not convert (a negative concentration): that record *was* the
/// answer, and the answer is "no reading". Snapshot order is defined by
/// the upstream service, not by this system.
pub fn scan_snapshot(
    records: &[SensorRecord],
    center: &Coordinate,
    radius_miles: f64,
    max_age_seconds: i64,
    location: &str,
) -> Option<AqiReading> {
    for record in records {
        if !screening::is_usable(record, max_age_seconds) {
            continue;
        }
        // is_usable guarantees all five fields are present.
        let (Some(pm), Some(lat), Some(lon)) = (record.pm25, record.latitude, record.longitude)
        else {
            continue;
        };

        if geo::distance_from(center, lat, lon) <= radius_miles {
            let aqi = aqi::pm_to_aqi(Some(pm))?;
            return Some(AqiReading {
                aqi,
                latitude: lat,
                longitude: lon,
                name: location.to_string(),
            });
        }
    }
    None
}

/// Resolves a location string to an AQI reading: geocode, snapshot, scan.
///
/// Performs exactly two sequential blocking network calls. Each upstream
/// failure surfaces as a distinct `LookupError`; absence of a qualifying
/// sensor is `Ok(None)`.
pub fn find_aqi(
    client: &reqwest::blocking::Client,
    config: &ServiceConfig,
    location: &str,
) -> Result<Option<AqiReading>, LookupError> {
    let center = nominatim::geocode(client, config, location)?;
    let records = purpleair::fetch_snapshot(client, config)?;
    Ok(scan_snapshot(
        &records,
        &center,
        config.radius_miles,
        config.max_age_seconds,
        location,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
