/// aqbot_service: air-quality lookup pipeline for a chat bot.
///
/// # Module structure
///
/// ```text
/// aqbot_service
/// ├── model       — shared data types (Coordinate, SensorRecord, AqiReading, LookupError)
/// ├── config      — service configuration (aqbot.toml + AQBOT_* env overrides)
/// ├── aqi         — EPA PM2.5 breakpoint table and AQI conversion
/// ├── geo         — equirectangular great-circle distance (miles)
/// ├── screening   — sensor reading validity (completeness, freshness, channel)
/// ├── ingest
/// │   ├── nominatim — forward geocoding: URL construction + JSON parsing
/// │   ├── purpleair — bulk sensor snapshot: fetch + positional-row parsing
/// │   └── fixtures (test only) — representative API response payloads
/// ├── lookup      — orchestrator: location string → AQI reading
/// └── command     — chat-command boundary (location join, reply rendering)
/// ```

/// Public modules
pub mod aqi;
pub mod command;
pub mod config;
pub mod geo;
pub mod ingest;
pub mod lookup;
pub mod model;
pub mod screening;
