//! Known administrative regions used to constrain venue lookups.

use serde::{Deserialize, Serialize};

/// A named region from the reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
}

/// Read-only set of known regions, loaded once at startup.
///
/// Keeps the reference order; matching uses lowercased names.
#[derive(Debug, Clone, Default)]
pub struct RegionCatalog {
    regions: Vec<Region>,
    needles: Vec<String>,
}

impl RegionCatalog {
    /// Builds a catalog, skipping blank names.
    pub fn new(regions: Vec<Region>) -> Self {
        let regions: Vec<Region> = regions
            .into_iter()
            .filter(|r| !r.name.trim().is_empty())
            .collect();
        let needles = regions
            .iter()
            .map(|r| r.name.trim().to_lowercase())
            .collect();

        Self { regions, needles }
    }

    /// Convenience constructor from bare names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            names
                .into_iter()
                .map(|name| Region { name: name.into() })
                .collect(),
        )
    }

    /// Returns the first region (in catalog order) whose lowercase name occurs
    /// as a substring of `lowercase_text`.
    pub fn find_in(&self, lowercase_text: &str) -> Option<&str> {
        self.needles
            .iter()
            .find(|needle| lowercase_text.contains(needle.as_str()))
            .map(String::as_str)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
