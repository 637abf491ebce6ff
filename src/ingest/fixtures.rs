/// Test fixtures: representative JSON payloads from the upstream services.
///
/// These fixtures are structurally complete but truncated to the minimum
/// needed to exercise the parsers.
///
/// Nominatim search response shape (array of candidates, best first):
///   [ { "lat": "33.64", "lon": "-117.84", "display_name": "...", ... } ]
///   Note: lat/lon are JSON STRINGS, not numbers. Parsers must handle this.
///
/// PurpleAir snapshot shape:
///   { "fields": [29 column names], "data": [[29 cells], ...] }
///   Consumed cells: [1]=pm, [4]=age, [25]=Type, [27]=Lat, [28]=Lon.
///   Quiet sensors report JSON null in the reading cells.

/// Two candidates for "Irvine, CA": the California city first, then the
/// Scottish town. First-in-list must win.
#[cfg(test)]
pub(crate) fn fixture_nominatim_irvine_json() -> &'static str {
    r#"[
      {
        "place_id": 282983083,
        "licence": "Data © OpenStreetMap contributors, ODbL 1.0",
        "lat": "33.64",
        "lon": "-117.84",
        "class": "boundary",
        "type": "administrative",
        "importance": 0.66,
        "display_name": "Irvine, Orange County, California, United States"
      },
      {
        "place_id": 282571819,
        "licence": "Data © OpenStreetMap contributors, ODbL 1.0",
        "lat": "55.6201",
        "lon": "-4.6614",
        "class": "place",
        "type": "town",
        "importance": 0.55,
        "display_name": "Irvine, North Ayrshire, Scotland, United Kingdom"
      }
    ]"#
}

/// Full 29-column snapshot with header. Three sensors:
///   20001 — fresh outdoor sensor ~2 mi north of (33.64, -117.84), PM 10.0
///   20002 — quiet sensor (null pm and age), position still reported
///   20003 — fresh outdoor sensor in downtown LA, ~35 mi away, PM 42.0
#[cfg(test)]
pub(crate) fn fixture_snapshot_json() -> &'static str {
    r#"{
      "fields": ["ID","pm","pm_cf_1","pm_atm","age","pm_0","pm_1","pm_2","pm_3","pm_4","pm_5","pm_6","conf","pm1","pm_10","p1","p2","p3","p4","p5","p6","Humidity","Temperature","Pressure","Elevation","Type","Label","Lat","Lon"],
      "data": [
        [20001, 10.0, 10.0, 10.0, 120, 10.2, 10.5, 10.1, 9.8, 10.0, 10.3, 10.1, 90, 6.4, 11.2, 120.1, 40.2, 10.5, 2.2, 0.8, 0.4, 45, 72, 1013.2, 18, 0, "Northwood Park", 33.669, -117.84],
        [20002, null, null, null, null, null, null, null, null, null, null, null, 0, null, null, null, null, null, null, null, null, 38, 70, 1013.0, 22, 0, "Quiet Rooftop", 33.65, -117.83],
        [20003, 42.0, 42.0, 41.8, 300, 41.9, 42.3, 42.0, 41.7, 42.1, 42.4, 42.0, 95, 28.1, 46.0, 512.4, 151.0, 40.2, 8.8, 3.1, 1.2, 51, 75, 1012.4, 89, 0, "DTLA Arts District", 34.05, -118.24]
      ]
    }"#
}

/// Snapshot without the `fields` header, as older feeds returned. The
/// positional contract still applies; the layout guard simply cannot run.
#[cfg(test)]
pub(crate) fn fixture_snapshot_headerless_json() -> &'static str {
    r#"{
      "data": [
        [20001, 10.0, 10.0, 10.0, 120, 10.2, 10.5, 10.1, 9.8, 10.0, 10.3, 10.1, 90, 6.4, 11.2, 120.1, 40.2, 10.5, 2.2, 0.8, 0.4, 45, 72, 1013.2, 18, 0, "Northwood Park", 33.669, -117.84]
      ]
    }"#
}

/// One good row plus one truncated row (a sensor mid-registration reported
/// only three cells). The short row must be skipped, not indexed.
#[cfg(test)]
pub(crate) fn fixture_snapshot_short_row_json() -> &'static str {
    r#"{
      "fields": ["ID","pm","pm_cf_1","pm_atm","age","pm_0","pm_1","pm_2","pm_3","pm_4","pm_5","pm_6","conf","pm1","pm_10","p1","p2","p3","p4","p5","p6","Humidity","Temperature","Pressure","Elevation","Type","Label","Lat","Lon"],
      "data": [
        [20001, 10.0, 10.0, 10.0, 120, 10.2, 10.5, 10.1, 9.8, 10.0, 10.3, 10.1, 90, 6.4, 11.2, 120.1, 40.2, 10.5, 2.2, 0.8, 0.4, 45, 72, 1013.2, 18, 0, "Northwood Park", 33.669, -117.84],
        [20009, 12.0, 0.5]
      ]
    }"#
}

/// Header where the PM column has been renamed/reindexed upstream. The
/// whole snapshot must fail with a format error rather than misread every
/// row.
#[cfg(test)]
pub(crate) fn fixture_snapshot_reindexed_json() -> &'static str {
    r#"{
      "fields": ["ID","pm_raw","pm_cf_1","pm_atm","age","pm_0","pm_1","pm_2","pm_3","pm_4","pm_5","pm_6","conf","pm1","pm_10","p1","p2","p3","p4","p5","p6","Humidity","Temperature","Pressure","Elevation","Type","Label","Lat","Lon"],
      "data": [
        [20001, 10.0, 10.0, 10.0, 120, 10.2, 10.5, 10.1, 9.8, 10.0, 10.3, 10.1, 90, 6.4, 11.2, 120.1, 40.2, 10.5, 2.2, 0.8, 0.4, 45, 72, 1013.2, 18, 0, "Northwood Park", 33.669, -117.84]
      ]
    }"#
}
