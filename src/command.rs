/// Chat-command boundary helpers.
///
/// The chat side delivers a city word (underscores standing in for spaces)
/// and a state word; the pipeline consumes the joined "City, State" string
/// and hands back a result this module renders as one reply line. The chat
/// transport itself lives outside this crate.

use crate::model::{AqiReading, LookupError};

/// Joins chat-command words into the pipeline's location string:
/// `("Santa_Ana", "CA")` becomes `"Santa Ana, CA"`.
pub fn join_location(city: &str, state: &str) -> String {
    format!("{}, {}", city.replace('_', " "), state)
}

/// Renders a lookup outcome as a single reply line. Upstream failures read
/// as "AQI unavailable" — never a crash, a stale value, or a bare error
/// dump.
pub fn render_reply(location: &str, result: &Result<Option<AqiReading>, LookupError>) -> String {
    match result {
        Ok(Some(reading)) => format!("AQI near {}: {}", location, reading.aqi),
        Ok(None) => format!("No air quality reading available near {}", location),
        Err(e) => format!("AQI unavailable for {} ({})", location, e),
    }
}
