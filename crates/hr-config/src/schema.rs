//! Analysis configuration schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    pub version: u32,
    pub name: String,
    pub store: StoreDef,
    #[serde(default)]
    pub fields: FieldNames,
    #[serde(default = "default_lookback")]
    pub lookback: String,
    /// Reject out-of-order or non-finite series instead of analysing them.
    #[serde(default)]
    pub validate_order: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bands: Option<BandRange>,
    #[serde(default)]
    pub report: ReportDef,
    #[serde(default)]
    pub zones: Vec<ZoneDef>,
}

impl AnalysisConfig {
    pub fn zone(&self, id: &str) -> Option<&ZoneDef> {
        self.zones.iter().find(|z| z.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreDef {
    /// Directory holding `<zone>/<field>.jsonl`; relative to the config file.
    pub root: PathBuf,
}

/// Field names of the two series inside each zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldNames {
    #[serde(default = "default_setpoint_field")]
    pub setpoint: String,
    #[serde(default = "default_measured_field")]
    pub measured: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            setpoint: default_setpoint_field(),
            measured: default_measured_field(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ZoneDef {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Start-temperature bands `(i, i + 1]` for `i` in `[min_temp, max_temp)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BandRange {
    pub min_temp: i32,
    pub max_temp: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportDef {
    #[serde(default)]
    pub grouped: bool,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
}

impl Default for ReportDef {
    fn default() -> Self {
        Self {
            grouped: false,
            decimal_separator: default_decimal_separator(),
        }
    }
}

fn default_lookback() -> String {
    "30d".to_string()
}

fn default_setpoint_field() -> String {
    "setTemperature".to_string()
}

fn default_measured_field() -> String {
    "temperature".to_string()
}

fn default_decimal_separator() -> char {
    '.'
}
