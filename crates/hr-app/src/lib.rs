//! Shared application service layer for heatrate.
//!
//! Loads configs, opens the series store, runs every zone through the
//! analysis pipeline and renders the results for the CLI.

pub mod analysis_service;
pub mod config_service;
pub mod error;
pub mod report;

pub use analysis_service::{
    AnalysisReport, RunOptions, ZoneReport, ZoneResult, ZoneStatus, run_analysis,
};
pub use config_service::{ZoneSummary, list_zones, load_config, open_store};
pub use error::{AppError, AppResult};
pub use report::{TextStyle, format_number, render_json, render_text};
