//! Config loading and zone introspection.

use std::path::Path;

use hr_config::AnalysisConfig;
use hr_source::JsonlSeriesStore;

use crate::error::{AppError, AppResult};

/// A configured zone and whether the store holds data for it.
#[derive(Debug, Clone)]
pub struct ZoneSummary {
    pub id: String,
    pub name: String,
    pub has_data: bool,
}

/// Load and validate a YAML or JSON config.
pub fn load_config(path: &Path) -> AppResult<AnalysisConfig> {
    if !path.exists() {
        return Err(AppError::ConfigFileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        });
    }
    Ok(hr_config::load(path)?)
}

/// Open the series store named by the config, relative to the config file.
pub fn open_store(config_path: &Path, config: &AnalysisConfig) -> AppResult<JsonlSeriesStore> {
    Ok(JsonlSeriesStore::for_config(config_path, &config.store.root)?)
}

pub fn list_zones(config: &AnalysisConfig, store: &JsonlSeriesStore) -> Vec<ZoneSummary> {
    config
        .zones
        .iter()
        .map(|zone| ZoneSummary {
            id: zone.id.clone(),
            name: zone.display_name().to_string(),
            has_data: store.has_zone(&zone.id),
        })
        .collect()
}
