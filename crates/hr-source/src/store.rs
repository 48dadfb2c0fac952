//! File-backed series store.
//!
//! Layout: `<root>/<zone>/<field>.jsonl`, one `{"timestamp", "value"}`
//! record per line.

use std::fs;
use std::path::{Path, PathBuf};

use hr_core::{Sample, Timestamp};
use tracing::debug;

use crate::{SeriesQuery, SeriesSource, SourceError, SourceResult};

#[derive(Clone, Debug)]
pub struct JsonlSeriesStore {
    root_dir: PathBuf,
}

impl JsonlSeriesStore {
    pub fn new(root_dir: PathBuf) -> SourceResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store rooted relative to a config file's directory, unless `root` is absolute.
    pub fn for_config(config_path: &Path, root: &Path) -> SourceResult<Self> {
        let base = config_path.parent().unwrap_or_else(|| Path::new("."));
        Self::new(base.join(root))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn zone_dir(&self, zone: &str) -> SourceResult<PathBuf> {
        let invalid = zone.is_empty()
            || zone == "."
            || zone == ".."
            || zone.contains(['/', '\\']);
        if invalid {
            return Err(SourceError::InvalidZone {
                zone: zone.to_string(),
            });
        }
        Ok(self.root_dir.join(zone))
    }

    fn series_path(&self, zone: &str, field: &str) -> SourceResult<PathBuf> {
        Ok(self.zone_dir(zone)?.join(format!("{field}.jsonl")))
    }

    pub fn has_zone(&self, zone: &str) -> bool {
        self.zone_dir(zone).map(|dir| dir.is_dir()).unwrap_or(false)
    }

    pub fn list_zones(&self) -> SourceResult<Vec<String>> {
        let mut zones = Vec::new();

        if !self.root_dir.exists() {
            return Ok(zones);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                zones.push(entry.file_name().to_string_lossy().to_string());
            }
        }

        zones.sort();
        Ok(zones)
    }

    pub fn write_series(&self, zone: &str, field: &str, samples: &[Sample]) -> SourceResult<()> {
        let zone_dir = self.zone_dir(zone)?;
        fs::create_dir_all(&zone_dir)?;

        let mut content = String::new();
        for sample in samples {
            let line = serde_json::to_string(sample)?;
            content.push_str(&line);
            content.push('\n');
        }
        fs::write(self.series_path(zone, field)?, content)?;

        Ok(())
    }

    /// Every stored sample of one series. A zone without that field has an
    /// empty series.
    pub fn load_series(&self, zone: &str, field: &str) -> SourceResult<Vec<Sample>> {
        if !self.has_zone(zone) {
            return Err(SourceError::ZoneNotFound {
                zone: zone.to_string(),
            });
        }

        let path = self.series_path(zone, field)?;
        if !path.exists() {
            debug!(zone, field, "No series file, treating as empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let mut samples = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let sample: Sample =
                serde_json::from_str(line).map_err(|source| SourceError::Record {
                    path: path.clone(),
                    line: index + 1,
                    source,
                })?;
            samples.push(sample);
        }

        Ok(samples)
    }
}

impl SeriesSource for JsonlSeriesStore {
    fn fetch(&self, query: &SeriesQuery, as_of: Timestamp) -> SourceResult<Vec<Sample>> {
        let mut samples = self.load_series(&query.zone, &query.field)?;
        samples.retain(|s| query.covers(s.timestamp, as_of));
        debug!(
            zone = %query.zone,
            field = %query.field,
            lookback = %query.lookback,
            samples = samples.len(),
            "Fetched series"
        );
        Ok(samples)
    }
}
