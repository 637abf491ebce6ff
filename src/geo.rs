/// Great-circle distance between WGS84 points, in miles.
///
/// Uses an equirectangular approximation rather than the full haversine
/// formula: both points go to radians, the longitude delta is scaled by the
/// cosine of the mean latitude, and the result is the planar hypotenuse
/// times the Earth's radius. Accurate to well under a percent over the few
/// miles this service cares about; not suitable for long distances or
/// points near the poles.

use crate::model::Coordinate;

/// Mean Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Approximate distance in miles between two points. Always finite and
/// non-negative for valid coordinates, and symmetric in its arguments.
pub fn distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat1.to_radians() - lat2.to_radians()).abs();
    let dlon = (lon1.to_radians() - lon2.to_radians()).abs();
    let avg_lat = (lat1.to_radians() + lat2.to_radians()) / 2.0;

    let x = dlon * avg_lat.cos();
    (x * x + dlat * dlat).sqrt() * EARTH_RADIUS_MILES
}

/// Distance from a `Coordinate` to a raw lat/lon pair, as parsed out of a
/// snapshot row.
pub fn distance_from(center: &Coordinate, lat: f64, lon: f64) -> f64 {
    distance_miles(center.latitude, center.longitude, lat, lon)
}
