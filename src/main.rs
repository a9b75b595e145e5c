pub mod types;
pub mod config;
pub mod data;
pub mod chart;
pub mod render;
pub mod processing;
pub mod controller;
pub mod server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the migration dashboard
    Serve {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
    },
    /// Write the map and scatter figures as JSON without starting a server
    Export {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
        #[arg(short, long, value_name = "DIR", default_value = "output")]
        output: PathBuf,
        /// Country to highlight in the scatter chart (repeatable)
        #[arg(long = "country", value_name = "NAME")]
        countries: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            info!("Serving dashboard with config: {:?}", config);
            let app_config = config::AppConfig::load_from_file(&config)?;

            // Load failures stop us here, before anything binds.
            let dataset = data::load_dataset(&app_config.input.data_csv)?;

            server::start_server(app_config, dataset).await?;
        }
        Commands::Export { config, output, countries } => {
            let app_config = config::AppConfig::load_from_file(&config)?;
            export(&app_config, &output, countries)?;
        }
    }

    Ok(())
}

/// Writes `map.json` and `scatter.json` (with `countries` highlighted) into `output`.
fn export(app_config: &config::AppConfig, output: &Path, countries: Vec<String>) -> Result<()> {
    let dataset = Arc::new(data::load_dataset(&app_config.input.data_csv)?);

    let map = render::build_map(&app_config.chart, &dataset);
    let controller = controller::SelectionController::new(dataset, app_config.chart.clone());
    let selection: types::Selection = countries.into_iter().collect();
    let scatter = controller.on_selection_change(&selection);

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {:?}", output))?;
    write_json(&output.join("map.json"), &map)?;
    write_json(&output.join("scatter.json"), &scatter)?;

    info!("Export complete: {:?}", output);
    Ok(())
}

fn write_json(path: &Path, payload: &chart::ChartPayload) -> Result<()> {
    let json = serde_json::to_string_pretty(payload)?;
    fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
    info!("Wrote {:?}", path);
    Ok(())
}
