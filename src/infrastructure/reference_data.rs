//! Loader for the region reference list.
//!
//! The file is a JSON array of objects; entries without a string `name` are
//! ignored and any other fields are skipped.
//!
//! ```json
//! [{ "id": 16, "name": "Alger" }, { "id": 31, "name": "Oran" }]
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::entities::{Region, RegionCatalog};

#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct RegionRecord {
    #[serde(default)]
    name: Option<String>,
}

/// Reads and parses the region list at `path`.
pub fn load_regions(path: &Path) -> Result<RegionCatalog, ReferenceDataError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_regions(&raw).map_err(|source| ReferenceDataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(count = catalog.len(), path = %path.display(), "Loaded regions");
    Ok(catalog)
}

/// Parses a region list from JSON text.
pub fn parse_regions(raw: &str) -> Result<RegionCatalog, serde_json::Error> {
    let records: Vec<serde_json::Value> = serde_json::from_str(raw)?;

    let regions = records
        .into_iter()
        .filter_map(|value| serde_json::from_value::<RegionRecord>(value).ok())
        .filter_map(|record| record.name)
        .map(|name| Region { name })
        .collect();

    Ok(RegionCatalog::new(regions))
}
