/// Sensor reading screening: which snapshot rows are worth considering.
///
/// A row must be complete (no missing field), fresh (reported within the
/// freshness window), and from the outdoor PM2.5 channel. Anything else is
/// dropped before distance or AQI are ever computed.

use crate::model::SensorRecord;

/// Channel code for the outdoor PM2.5 sensor. Other codes (indoor units,
/// secondary channels) are ignored.
pub const CHANNEL_OUTDOOR: i64 = 0;

/// Returns true iff the record is usable: all five fields present,
/// `age_seconds` at most `max_age_seconds` (a reading exactly at the
/// threshold is still fresh), and the outdoor channel.
pub fn is_usable(record: &SensorRecord, max_age_seconds: i64) -> bool {
    let (Some(_), Some(age), Some(sensor_type), Some(_), Some(_)) = (
        record.pm25,
        record.age_seconds,
        record.sensor_type,
        record.latitude,
        record.longitude,
    ) else {
        return false;
    };

    age <= max_age_seconds && sensor_type == CHANNEL_OUTDOOR
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> SensorRecord {
        SensorRecord {
            pm25: Some(10.0),
            age_seconds: Some(120),
            sensor_type: Some(CHANNEL_OUTDOOR),
            latitude: Some(33.64),
            longitude: Some(-117.84),
        }
    }

    #[test]
    fn test_complete_fresh_outdoor_record_is_usable() {
        assert!(is_usable(&complete_record(), 3600));
    }

    #[test]
    fn test_any_missing_field_rejects_the_record() {
        // Each field individually nulled must reject, regardless of how
        // valid the other four are.
        let mut r = complete_record();
        r.pm25 = None;
        assert!(!is_usable(&r, 3600), "missing pm25 must reject");

        let mut r = complete_record();
        r.age_seconds = None;
        assert!(!is_usable(&r, 3600), "missing age must reject");

        let mut r = complete_record();
        r.sensor_type = None;
        assert!(!is_usable(&r, 3600), "missing channel code must reject");

        let mut r = complete_record();
        r.latitude = None;
        assert!(!is_usable(&r, 3600), "missing latitude must reject");

        let mut r = complete_record();
        r.longitude = None;
        assert!(!is_usable(&r, 3600), "missing longitude must reject");
    }

    #[test]
    fn test_age_exactly_at_threshold_is_accepted() {
        let mut r = complete_record();
        r.age_seconds = Some(3600);
        assert!(is_usable(&r, 3600));
    }

    #[test]
    fn test_age_one_second_over_threshold_is_rejected() {
        let mut r = complete_record();
        r.age_seconds = Some(3601);
        assert!(!is_usable(&r, 3600));
    }

    #[test]
    fn test_non_outdoor_channel_is_rejected() {
        let mut r = complete_record();
        r.sensor_type = Some(1);
        assert!(!is_usable(&r, 3600), "indoor/secondary channels are ignored");
    }

    #[test]
    fn test_threshold_is_caller_supplied() {
        let mut r = complete_record();
        r.age_seconds = Some(600);
        assert!(is_usable(&r, 3600));
        assert!(!is_usable(&r, 300), "tighter window must reject older readings");
    }
}
