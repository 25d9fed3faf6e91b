//! Serialization utilities with robust error handling.
//!
//! Loads the catalog document (JSON) and session settings (TOML), and provides
//! JSON helpers for anything else the session wants to persist.

use crate::error::{IoError, Result};
use planner_core::catalog::Catalog;
use planner_core::config::AppConfig;
use planner_data::CatalogConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializes data to pretty-printed JSON.
pub fn to_json_pretty<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(data)
        .map_err(|e| IoError::serialization(format!("JSON serialization failed: {}", e)))
}

/// Deserializes data from JSON string.
///
/// # Returns
/// Deserialized data on success, or error on failure.
pub fn from_json<T>(json: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    if json.trim().is_empty() {
        return Err(IoError::validation("Empty JSON string"));
    }

    serde_json::from_str(json)
        .map_err(|e| IoError::serialization(format!("JSON deserialization failed: {}", e)))
}

/// Safely writes JSON to a file.
pub fn write_json_file<T, P>(data: &T, path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let json = to_json_pretty(data)?;
    std::fs::write(&path, json).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("writing JSON to {:?}", path.as_ref()))
    })?;
    Ok(())
}

/// Safely reads JSON from a file.
pub fn read_json_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let json = std::fs::read_to_string(&path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("reading JSON from {:?}", path.as_ref()))
    })?;
    from_json(&json)
}

/// Parses a catalog document and normalizes it.
pub fn catalog_from_json(json: &str) -> Result<Catalog> {
    let config: CatalogConfig = from_json(json)?;
    Ok(Catalog::from_config(&config))
}

/// Reads and normalizes a catalog document from disk.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let config: CatalogConfig = read_json_file(&path)
        .map_err(|e| e.with_context(format!("loading catalog {:?}", path.as_ref())))?;
    let catalog = Catalog::from_config(&config);
    tracing::info!(
        path = %path.as_ref().display(),
        mutations = catalog.len(),
        "Catalog loaded"
    );
    Ok(catalog)
}

/// Reads and validates a `planner.toml`. A missing file yields the defaults.
pub fn load_app_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!(path = %path.display(), "No settings file, using defaults");
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("reading settings from {:?}", path))
    })?;
    AppConfig::from_toml(&content).map_err(|e| IoError::validation(format!("{path:?}: {e:#}")))
}
