//! Configuration validation logic.

use std::collections::HashSet;

use hr_source::Lookback;

use crate::schema::{AnalysisConfig, LATEST_VERSION};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_config(config: &AnalysisConfig) -> Result<(), ValidationError> {
    if config.version == 0 || config.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    if config.store.root.as_os_str().is_empty() {
        return Err(invalid("store.root", "", "must not be empty"));
    }

    if let Err(err) = config.lookback.parse::<Lookback>() {
        return Err(invalid("lookback", &config.lookback, err.to_string()));
    }

    if config.fields.setpoint.trim().is_empty() {
        return Err(invalid("fields.setpoint", &config.fields.setpoint, "must not be empty"));
    }
    if config.fields.measured.trim().is_empty() {
        return Err(invalid("fields.measured", &config.fields.measured, "must not be empty"));
    }

    if let Some(bands) = config.bands
        && bands.min_temp >= bands.max_temp
    {
        return Err(invalid(
            "bands",
            format!("{}..{}", bands.min_temp, bands.max_temp),
            "min_temp must be below max_temp",
        ));
    }

    if config.report.grouped && config.bands.is_none() {
        return Err(invalid("report.grouped", true, "grouped report needs a bands range"));
    }

    if config.zones.is_empty() {
        return Err(invalid("zones", "[]", "at least one zone is required"));
    }

    let mut zone_ids = HashSet::new();
    for zone in &config.zones {
        if zone.id.trim().is_empty() {
            return Err(invalid("zones.id", &zone.id, "must not be empty"));
        }
        if !zone_ids.insert(&zone.id) {
            return Err(ValidationError::DuplicateId {
                id: zone.id.clone(),
                context: "zones".to_string(),
            });
        }
    }

    Ok(())
}
