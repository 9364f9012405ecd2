use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use trackbox::config::{FileConfig, defaults};
use trackbox::export::{self, OutputFormat};
use trackbox::input::read_track;
use trackbox::{Corridor, CorridorConfig, CorridorSet};

/// Build corridor polygons around GPS tracks for POI searches
///
/// Examples:
///   # 1 km corridor as an Overpass poly filter next to the input
///   trackbox ride.json
///
///   # Several widths at once, as GeoJSON into a separate folder
///   trackbox ride.json -d 0.5 -d 2 -f geojson -o out/
///
///   # Print to stdout
///   trackbox ride.json -o -
#[derive(Parser, Debug)]
#[command(name = "trackbox")]
#[command(version, about, long_about = None)]
struct Args {
    /// Track files: JSON arrays of [lat, lon] pairs or {"lat", "lon"} objects
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Path to config file (optional, auto-searches trackbox.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Corridor half-width in km, may be repeated
    #[arg(short = 'd', long = "distance")]
    distances: Vec<f64>,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    format: Option<OutputFormat>,

    /// Output directory (defaults to the input's directory), or "-" for stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Settings after merging CLI flags over the config file
struct Settings {
    distances: Vec<f64>,
    format: OutputFormat,
    output: Option<PathBuf>,
    verbose: bool,
    corridor: CorridorConfig,
}

impl Settings {
    fn resolve(args: &Args, file_config: Option<FileConfig>) -> Result<Self> {
        let file_config = file_config.unwrap_or_default();

        let distances = if !args.distances.is_empty() {
            args.distances.clone()
        } else {
            file_config
                .distances
                .unwrap_or_else(|| vec![defaults::DISTANCE_KM])
        };
        if distances.is_empty() {
            bail!("At least one corridor distance is required");
        }
        if let Some(d) = distances.iter().find(|d| !(**d > 0.0 && d.is_finite())) {
            bail!("Corridor distance must be a positive number of km, got {}", d);
        }

        let corridor = file_config.corridor.unwrap_or_default();
        corridor.validate().context("Invalid [corridor] settings")?;

        Ok(Self {
            distances,
            format: args.format.or(file_config.format).unwrap_or_default(),
            output: args.output.clone().or(file_config.output),
            verbose: args.verbose || file_config.verbose,
            corridor,
        })
    }

    fn to_stdout(&self) -> bool {
        self.output.as_deref() == Some(Path::new("-"))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    let file_config = match args.config {
        Some(ref config_path) => {
            if !config_path.exists() {
                bail!("Config file not found: {:?}", config_path);
            }
            Some(FileConfig::from_path(config_path)?)
        }
        None => FileConfig::load(),
    };
    let settings = Settings::resolve(&args, file_config)?;

    if settings.verbose {
        log::info!("Configuration:");
        log::info!("  Distances: {:?} km", settings.distances);
        log::info!("  Format: {:?}", settings.format);
        log::info!("  Simplify tolerance: {}", settings.corridor.simplify_tolerance);
        log::info!(
            "  Windows: loops {} / spikes {} points, reach {}x",
            settings.corridor.loop_window,
            settings.corridor.spike_window,
            settings.corridor.reach_factor
        );
    }

    let total_start = Instant::now();
    for input in &args.inputs {
        process_track(input, &settings)
            .with_context(|| format!("Failed to process {}", input.display()))?;
    }

    log::info!("Done in {:.2}s", total_start.elapsed().as_secs_f32());
    Ok(())
}

fn process_track(input: &Path, settings: &Settings) -> Result<()> {
    let spinner = create_spinner(&format!("Reading {}...", input.display()));
    let track = read_track(input).context("Failed to read track")?;
    spinner.finish_with_message(format!("Read {} points from {}", track.len(), input.display()));

    if track.len() < 2 {
        log::warn!(
            "{} has {} points, corridors will be empty",
            input.display(),
            track.len()
        );
    }

    let mut corridors = CorridorSet::new(&track, settings.corridor.clone());
    for &distance in &settings.distances {
        let start = Instant::now();
        let corridor = corridors.get_or_build(distance)?;
        log::info!(
            "{} km corridor: {} points [{:.1}ms]",
            distance,
            corridor.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        if settings.verbose {
            report_corridor(corridor);
        }

        let rendered =
            export::render(corridor, settings.format).context("Failed to serialize corridor")?;
        if settings.to_stdout() {
            println!("{}", rendered);
        } else {
            let path = output_path(input, settings.output.as_deref(), distance, settings.format);
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn report_corridor(corridor: &Corridor) {
    if let Some(bounds) = corridor.bounds() {
        let (south, west, north, east) = bounds.to_swne();
        log::info!(
            "  Bounds: ({:.4}, {:.4}) -> ({:.4}, {:.4})",
            south,
            west,
            north,
            east
        );
    }
    let crossings = corridor.self_intersections();
    if !crossings.is_empty() {
        log::warn!("  Self-intersecting edges remain: {:?}", crossings);
    }
}

/// `<dir>/<stem>-corridor-<km>km.<ext>`
fn output_path(input: &Path, dir: Option<&Path>, distance: f64, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "track".to_string());
    let dir = dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!(
        "{}-corridor-{}km.{}",
        stem,
        distance,
        format.extension()
    ))
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
