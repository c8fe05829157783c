//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use countries_explorer::api::{Country, RestCountriesClient};
use countries_explorer::config::ApiConfig;
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// Client pointed at `base_url` with a short total timeout.
pub fn client_for(base_url: &str, timeout_seconds: u32) -> RestCountriesClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds,
        connect_timeout_seconds: 1,
    };
    RestCountriesClient::new(&config).expect("client should build")
}

/// One country as the REST service returns it.
pub fn country_json(common: &str, cca3: &str, capital: &str, population: u64, region: &str) -> Value {
    json!({
        "name": { "common": common, "official": format!("Official {}", common) },
        "flags": {
            "png": format!("https://flagcdn.com/w320/{}.png", cca3.to_lowercase()),
            "svg": format!("https://flagcdn.com/{}.svg", cca3.to_lowercase())
        },
        "capital": [capital],
        "population": population,
        "region": region,
        "cca3": cca3
    })
}

pub fn country(common: &str, cca3: &str) -> Country {
    Country::from_value(&country_json(common, cca3, "Capital", 1_000, "Region"))
}

/// `count` synthetic countries named `Country 000`, `Country 001`, ...
pub fn numbered_countries(count: usize) -> Vec<Country> {
    (0..count)
        .map(|i| country(&format!("Country {:03}", i), &format!("C{:02}", i)))
        .collect()
}

/// Writes `content` to a fresh `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
