use crate::error::WalkError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use toml;
use url::Url;

/// The parameters of one walk: where to start and what to pick at each level.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct WalkSelection {
    pub id: String,
    pub name: String,
    pub description: String,
    pub docs: String,
    pub root_url: String,
    /// Substring used to list related sub-catalogs, e.g. "LP".
    pub catalog_filter: String,
    pub catalog_title: String,
    /// Substring used to list related collections, e.g. "HLS".
    pub collection_filter: String,
    pub collection_id: String,
    #[serde(default)]
    pub item_index: usize,
    /// Take the least cloudy item of the page instead of `item_index`.
    #[serde(default)]
    pub least_cloudy: bool,
    #[serde(default = "default_asset_name")]
    pub asset_name: String,
}

fn default_asset_name() -> String {
    "browse".to_string()
}

impl WalkSelection {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let selection: Self = toml::from_str(&content)?;
        selection.validate()?;
        Ok(selection)
    }

    pub fn write<P: AsRef<Path>>(self: &Self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn from_template(table: &toml::Table) -> Result<Self> {
        let selection: Self = toml::from_str(&table.to_string())?;
        Ok(selection)
    }

    pub fn validate(self: &Self) -> std::result::Result<(), WalkError> {
        Url::parse(&self.root_url).map_err(|e| WalkError::InvalidValue {
            what: "root_url".to_string(),
            reason: format!("'{}' is not a url ({e})", self.root_url),
        })?;

        let required = [
            ("catalog_title", &self.catalog_title),
            ("collection_id", &self.collection_id),
            ("asset_name", &self.asset_name),
        ];
        for (what, value) in required {
            if value.trim().is_empty() {
                return Err(WalkError::InvalidValue {
                    what: what.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
