//! Runs the heating-rate pipeline over every configured zone.

use hr_analysis::{PipelineOptions, RateBand, RateSample, ZoneAnalysis, analyze_zone};
use hr_config::{AnalysisConfig, BandRange, ZoneDef};
use hr_core::Timestamp;
use hr_source::{Lookback, SeriesQuery, SeriesSource};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// Options for an analysis run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// End of the lookback window.
    pub as_of: Timestamp,
    /// Analyse only this zone instead of all configured ones.
    pub zone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub name: String,
    pub as_of: Timestamp,
    pub lookback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bands: Option<BandRange>,
    pub zones: Vec<ZoneReport>,
}

impl AnalysisReport {
    pub fn analysed_count(&self) -> usize {
        self.zones
            .iter()
            .filter(|z| matches!(z.status, ZoneStatus::Analysed(_)))
            .count()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneReport {
    pub zone: String,
    pub name: String,
    pub status: ZoneStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ZoneStatus {
    Analysed(ZoneResult),
    Skipped { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneResult {
    pub intervals: usize,
    pub completed: usize,
    pub rejected: usize,
    pub rate_skips: usize,
    pub rates: Vec<RateSample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bands: Option<Vec<RateBand>>,
}

impl ZoneResult {
    fn from_analysis(analysis: ZoneAnalysis, bands: Option<BandRange>) -> Self {
        Self {
            intervals: analysis.intervals.len(),
            completed: analysis.completed_count(),
            rejected: analysis.issues.len(),
            rate_skips: analysis.rates.skipped.len(),
            bands: bands.map(|b| analysis.bands(b.min_temp, b.max_temp)),
            rates: analysis.rates.samples,
        }
    }
}

fn analyse_one<S: SeriesSource>(
    config: &AnalysisConfig,
    zone: &ZoneDef,
    source: &S,
    lookback: Lookback,
    as_of: Timestamp,
) -> AppResult<ZoneResult> {
    let setpoint_query = SeriesQuery::new(&zone.id, &config.fields.setpoint, lookback);
    let measured_query = SeriesQuery::new(&zone.id, &config.fields.measured, lookback);

    let setpoint = source.fetch(&setpoint_query, as_of)?;
    let measured = source.fetch(&measured_query, as_of)?;

    let options = PipelineOptions {
        validate_input: config.validate_order,
    };
    let analysis = analyze_zone(&zone.id, &setpoint, &measured, options)?;
    Ok(ZoneResult::from_analysis(analysis, config.bands))
}

/// Analyse each zone in config order, one at a time.
///
/// A zone whose fetch or validation fails is reported as skipped; the other
/// zones still run.
pub fn run_analysis<S: SeriesSource>(
    config: &AnalysisConfig,
    source: &S,
    options: &RunOptions,
) -> AppResult<AnalysisReport> {
    let lookback = config.lookback_window()?;

    let zones: Vec<&ZoneDef> = match &options.zone {
        Some(id) => vec![
            config
                .zone(id)
                .ok_or_else(|| AppError::ZoneNotFound(id.clone()))?,
        ],
        None => config.zones.iter().collect(),
    };

    info!(
        config = %config.name,
        zones = zones.len(),
        lookback = %lookback,
        as_of = %options.as_of,
        "Starting analysis"
    );

    let mut reports = Vec::with_capacity(zones.len());
    for zone in zones {
        let status = match analyse_one(config, zone, source, lookback, options.as_of) {
            Ok(result) => ZoneStatus::Analysed(result),
            Err(err) => {
                warn!(zone = %zone.id, error = %err, "Skipping zone");
                ZoneStatus::Skipped {
                    reason: err.to_string(),
                }
            }
        };
        reports.push(ZoneReport {
            zone: zone.id.clone(),
            name: zone.display_name().to_string(),
            status,
        });
    }

    Ok(AnalysisReport {
        name: config.name.clone(),
        as_of: options.as_of,
        lookback: lookback.to_string(),
        bands: config.bands,
        zones: reports,
    })
}
