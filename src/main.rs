//! AQI Lookup Service - CLI entry point
//!
//! Resolves a city/state to coordinates, scans the PurpleAir sensor
//! snapshot, and prints the AQI for the first fresh outdoor sensor within
//! the configured radius. This is the same pipeline the chat boundary
//! invokes; the binary exists for operation and smoke testing.
//!
//! Usage:
//!   cargo run --release -- Irvine CA
//!   cargo run --release -- Santa_Ana CA --config /etc/aqbot.toml
//!
//! Underscores in the city argument stand in for spaces, matching the chat
//! command convention.
//!
//! Environment:
//!   AQBOT_NOMINATIM_URL / AQBOT_PURPLEAIR_URL / AQBOT_REFERER - endpoint overrides

use aqbot_service::command;
use aqbot_service::config::{self, ServiceConfig};
use aqbot_service::lookup;
use std::env;
use std::time::Duration;

fn main() {
    println!("🌫️  AQI Lookup Service");
    println!("======================\n");

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut city: Option<String> = None;
    let mut state: Option<String> = None;
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
            }
            word if city.is_none() => {
                city = Some(word.to_string());
                i += 1;
            }
            word if state.is_none() => {
                state = Some(word.to_string());
                i += 1;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: {} CITY STATE [--config PATH]", args[0]);
                std::process::exit(1);
            }
        }
    }

    let (Some(city), Some(state)) = (city, state) else {
        eprintln!("Usage: {} CITY STATE [--config PATH]", args[0]);
        eprintln!("Example: {} Santa_Ana CA", args[0]);
        std::process::exit(1);
    };

    // Load configuration (file + environment overrides)
    let config = match config_path {
        Some(path) => ServiceConfig::from_file(&path).map(ServiceConfig::apply_env_overrides),
        None => config::load(),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let location = command::join_location(&city, &state);
    println!("📍 Looking up: {}", location);
    println!("   Radius: {} miles, freshness window: {} s\n", config.radius_miles, config.max_age_seconds);

    // One client for both upstream calls, with the explicit timeout the
    // upstream services do not provide.
    let client = match reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let result = lookup::find_aqi(&client, &config, &location);
    match &result {
        Ok(Some(reading)) => {
            println!("✓ {}", command::render_reply(&location, &result));
            println!("   Sensor at ({:.4}, {:.4})", reading.latitude, reading.longitude);
        }
        Ok(None) => {
            println!("✓ {}", command::render_reply(&location, &result));
        }
        Err(e) => {
            eprintln!("❌ Lookup failed: {}", e);
            eprintln!("   {}", command::render_reply(&location, &result));
            std::process::exit(1);
        }
    }
}
