use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use hr_app::{AppError, AppResult, RunOptions, TextStyle, config_service, report, run_analysis};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hr-cli")]
#[command(about = "heatrate CLI - heating rate statistics per building zone", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate config file syntax and values
    Validate {
        /// Path to the config YAML or JSON file
        config_path: PathBuf,
    },
    /// List configured zones and whether the store has data for them
    Zones {
        /// Path to the config YAML or JSON file
        config_path: PathBuf,
    },
    /// Compute heating rates for the configured zones
    Analyze {
        /// Path to the config YAML or JSON file
        config_path: PathBuf,
        /// Analyse a single zone
        #[arg(long)]
        zone: Option<String>,
        /// Group rates by starting temperature band
        #[arg(long)]
        grouped: bool,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
        /// End of the lookback window (RFC 3339, defaults to now)
        #[arg(long)]
        as_of: Option<DateTime<Utc>>,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Zones { config_path } => cmd_zones(&config_path),
        Commands::Analyze {
            config_path,
            zone,
            grouped,
            json,
            as_of,
            output,
        } => cmd_analyze(
            &config_path,
            zone,
            grouped,
            json,
            as_of.unwrap_or_else(Utc::now),
            output.as_deref(),
        ),
    }
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating config: {}", config_path.display());
    let config = config_service::load_config(config_path)?;
    println!("✓ Config is valid ({} zones)", config.zones.len());
    Ok(())
}

fn cmd_zones(config_path: &Path) -> AppResult<()> {
    let config = config_service::load_config(config_path)?;
    let store = config_service::open_store(config_path, &config)?;
    let zones = config_service::list_zones(&config, &store);

    println!("Zones in {}:", config.name);
    for zone in zones {
        let marker = if zone.has_data { "✓" } else { "-" };
        if zone.name == zone.id {
            println!("  {} {}", marker, zone.id);
        } else {
            println!("  {} {} ({})", marker, zone.id, zone.name);
        }
    }
    Ok(())
}

fn cmd_analyze(
    config_path: &Path,
    zone: Option<String>,
    grouped: bool,
    json: bool,
    as_of: DateTime<Utc>,
    output: Option<&Path>,
) -> AppResult<()> {
    let config = config_service::load_config(config_path)?;
    let store = config_service::open_store(config_path, &config)?;
    tracing::debug!(store = %store.root_dir().display(), "Opened series store");

    let grouped = grouped || config.report.grouped;
    if grouped && config.bands.is_none() {
        return Err(AppError::InvalidInput(
            "--grouped needs a bands range in the config".to_string(),
        ));
    }

    let analysis = run_analysis(&config, &store, &RunOptions { as_of, zone })?;

    let rendered = if json {
        report::render_json(&analysis)?
    } else {
        report::render_text(
            &analysis,
            TextStyle {
                grouped,
                decimal_separator: config.report.decimal_separator,
            },
        )?
    };

    if let Some(path) = output {
        std::fs::write(path, &rendered)?;
        println!(
            "✓ Wrote report for {} of {} zones to {}",
            analysis.analysed_count(),
            analysis.zones.len(),
            path.display()
        );
    } else {
        print!("{}", rendered);
    }

    Ok(())
}
