#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for station density summaries.
//!
//! Loads a station file and an admin boundary `GeoJSON`, aggregates the
//! stations per region at the chosen admin level, and either prints a
//! summary, writes a styled choropleth `GeoJSON`, or lists the boundary
//! property keys that look like region names.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use station_density::{DensityInputs, DensityView, compute};
use station_density_boundary::{BoundaryDataset, discover_region_keys};
use station_density_cli::config::{DensityConfig, Overrides};
use station_density_cli::render::render_geojson;
use station_density_cli::stations::load_stations;

/// Aggregate charging stations per administrative region.
#[derive(Parser)]
#[command(name = "station-density")]
#[command(about = "Aggregate stations per administrative region and render choropleths")]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print summary statistics and the busiest regions.
    Summary {
        #[command(flatten)]
        input: InputArgs,

        /// Maximum number of ranked regions to print.
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Write a styled choropleth `GeoJSON` file.
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Output path.
        #[arg(long)]
        out: PathBuf,
    },

    /// List boundary property keys that look like region names.
    Keys {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Inputs shared by every subcommand.
#[derive(Args)]
struct InputArgs {
    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Station file (`.json` array or `.csv` with a header row).
    #[arg(long)]
    stations: Option<PathBuf>,

    /// Admin boundary `GeoJSON` file.
    #[arg(long)]
    boundary: PathBuf,

    /// Admin level: area, district, or province.
    #[arg(long)]
    level: Option<String>,

    /// Palette: `YlOrRd`, `Viridis`, `Plasma`, `Turbo`, or `Cividis`.
    #[arg(long)]
    palette: Option<String>,

    /// Boundary property to read region names from.
    #[arg(long)]
    region_key: Option<String>,

    /// Fill opacity for regions with stations.
    #[arg(long)]
    opacity: Option<f64>,

    /// Do not draw region outlines.
    #[arg(long)]
    hide_borders: bool,

    /// Base map provider the output is styled for.
    #[arg(long)]
    provider: Option<String>,
}

impl InputArgs {
    fn config(&self) -> Result<DensityConfig, Box<dyn std::error::Error>> {
        let mut config = DensityConfig::load(self.config.as_deref())?;
        config.apply(&Overrides {
            level: self.level.clone(),
            palette: self.palette.clone(),
            region_key: self.region_key.clone(),
            opacity: self.opacity,
            hide_borders: self.hide_borders,
            provider: self.provider.clone(),
        })?;
        Ok(config)
    }

    fn compute(
        &self,
        config: &DensityConfig,
    ) -> Result<(BoundaryDataset, DensityView), Box<dyn std::error::Error>> {
        let Some(stations) = &self.stations else {
            return Err("--stations is required for this command".into());
        };
        let boundary = BoundaryDataset::load(&self.boundary)?;
        let inputs = DensityInputs {
            points: load_stations(stations)?,
            boundary: Some(boundary.clone()),
            level: config.level,
            region_key: config.region_key.clone(),
            palette: config.palette,
        };
        Ok((boundary, compute(&inputs).view().clone()))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { input, limit } => {
            let config = input.config()?;
            let (_, view) = input.compute(&config)?;
            print_summary(&view, limit);
        }
        Commands::Render { input, out } => {
            let config = input.config()?;
            let (boundary, view) = input.compute(&config)?;
            std::fs::write(&out, render_geojson(&boundary, &view, &config.style_options()))?;
            log::info!(
                "Wrote {} regions ({} with stations) to {}",
                view.aggregation().regions().len(),
                view.stats().total_regions_with_data,
                out.display()
            );
        }
        Commands::Keys { input } => {
            let config = input.config()?;
            let boundary = BoundaryDataset::load(&input.boundary)?;
            for key in discover_region_keys(&boundary, config.level, config.region_key.as_deref()) {
                println!("{key}");
            }
        }
    }

    Ok(())
}

fn print_summary(view: &DensityView, limit: usize) {
    let stats = view.stats();

    println!(
        "{} level (key {}), palette {}",
        view.level().label(),
        view.region_key(),
        view.scale().palette().label()
    );
    println!(
        "Stations: {} total, {} unmatched",
        stats.total_points, stats.unmatched_points
    );
    println!(
        "Regions: {} in boundary, {} with stations (max {}, min {}, avg {:.2})",
        view.aggregation().regions().len(),
        stats.total_regions_with_data,
        stats.max_count,
        stats.min_count,
        stats.avg_count
    );

    let ranked = view.ranked();
    if ranked.is_empty() {
        return;
    }

    println!();
    let width = ranked
        .iter()
        .take(limit)
        .map(|r| r.name().len())
        .max()
        .unwrap_or(0);
    for region in ranked.iter().take(limit) {
        println!(
            "  {:<width$}  {:>5}  {}",
            region.name(),
            region.count(),
            view.color_of(region.count())
        );
    }
    if ranked.len() > limit {
        println!("  ... {} more", ranked.len() - limit);
    }
}
