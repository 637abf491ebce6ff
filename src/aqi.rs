/// EPA AQI conversion for PM2.5 concentrations.
///
/// Defines the canonical breakpoint table mapping PM2.5 ranges (µg/m³) to
/// AQI sub-ranges, and the piecewise-linear interpolation over it. This is
/// the single source of truth for the table — nothing else in the crate
/// hardcodes AQI numbers.
///
/// Source: EPA technical assistance document for the reporting of daily
/// air quality (PM2.5 breakpoints, 2012 revision).

// ---------------------------------------------------------------------------
// Breakpoint table
// ---------------------------------------------------------------------------

/// One row of the EPA breakpoint table.
///
/// A bracket is *selected* for `pm_floor <= pm < next.pm_floor` (half-open,
/// so a PM of exactly 12.1 belongs to the second bracket), but
/// *interpolates* against its own `pm_ceil`, which sits one reporting step
/// (0.1 µg/m³) below the next floor.
pub struct Breakpoint {
    pub pm_floor: f64,
    pub pm_ceil: f64,
    pub aqi_floor: u16,
    pub aqi_ceil: u16,
}

/// PM2.5 breakpoints in ascending order. Selection ranges are contiguous
/// and non-overlapping, covering [0, 500.5).
pub static BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint { pm_floor: 0.0, pm_ceil: 12.0, aqi_floor: 0, aqi_ceil: 50 },
    Breakpoint { pm_floor: 12.1, pm_ceil: 35.4, aqi_floor: 51, aqi_ceil: 100 },
    Breakpoint { pm_floor: 35.5, pm_ceil: 55.4, aqi_floor: 101, aqi_ceil: 150 },
    Breakpoint { pm_floor: 55.5, pm_ceil: 150.4, aqi_floor: 151, aqi_ceil: 200 },
    Breakpoint { pm_floor: 150.5, pm_ceil: 250.4, aqi_floor: 201, aqi_ceil: 300 },
    Breakpoint { pm_floor: 250.5, pm_ceil: 350.4, aqi_floor: 301, aqi_ceil: 400 },
    Breakpoint { pm_floor: 350.5, pm_ceil: 500.4, aqi_floor: 401, aqi_ceil: 500 },
];

/// PM at or above this is beyond the table and reports a flat 501.
pub const PM_BEYOND_SCALE: f64 = 500.5;

/// AQI reported for concentrations beyond the table.
pub const AQI_BEYOND_SCALE: u16 = 501;

/// Upper selection bound for the bracket at `index`: the next bracket's
/// floor, or the beyond-scale cutoff after the last bracket.
fn selection_bound(index: usize) -> f64 {
    BREAKPOINTS
        .get(index + 1)
        .map(|b| b.pm_floor)
        .unwrap_or(PM_BEYOND_SCALE)
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Converts a PM2.5 concentration to an AQI integer.
///
/// Returns `None` for a missing reading and for negative concentrations
/// (the table has no bracket below zero; negative input is treated as an
/// invalid reading, not clamped). Concentrations at or above 500.5 report
/// the fixed beyond-scale value 501.
pub fn pm_to_aqi(pm: Option<f64>) -> Option<u16> {
    let pm = pm?;
    if pm < 0.0 {
        return None;
    }
    if pm >= PM_BEYOND_SCALE {
        return Some(AQI_BEYOND_SCALE);
    }

    for (i, bracket) in BREAKPOINTS.iter().enumerate() {
        if bracket.pm_floor <= pm && pm < selection_bound(i) {
            return Some(interpolate(pm, bracket));
        }
    }

    // Unreachable for finite pm in [0, 500.5): the brackets tile the range.
    None
}

/// Linear interpolation within one bracket, rounded half-up (a fraction of
/// exactly .5 rounds toward the higher AQI, not to the nearest even).
fn interpolate(pm: f64, bracket: &Breakpoint) -> u16 {
    let proportion = (pm - bracket.pm_floor) / (bracket.pm_ceil - bracket.pm_floor);
    let aqi =
        (bracket.aqi_ceil - bracket.aqi_floor) as f64 * proportion + bracket.aqi_floor as f64;

    if aqi >= aqi.floor() + 0.5 {
        aqi.ceil() as u16
    } else {
        aqi.floor() as u16
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
