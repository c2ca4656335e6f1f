mod config;
mod context;
mod daylight;
mod demo;
mod geometry;
mod layers;
mod scene;
mod surface;
mod types;

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use log::{LevelFilter, debug, info};

use crate::config::{DialConfig, load_config};
use crate::daylight::{SolarCalculator, SunTimes, load_table};
use crate::demo::{CancelHandle, DemoLoop};
use crate::scene::SceneComposer;
use crate::surface::SvgCanvas;
use crate::types::Location;

#[derive(Parser, Debug)]
#[command(name = "daylight-dial")]
#[command(about = "Half-dial diagram of how much daylight a day gets", version)]
struct Args {
    /// Date to mark on the dial as YYYY-MM-DD; defaults to today
    #[arg(long)]
    date: Option<String>,

    /// Observer latitude in degrees, north positive
    #[arg(long, requires = "longitude", allow_hyphen_values = true)]
    latitude: Option<f64>,

    /// Observer longitude in degrees, east positive
    #[arg(long, requires = "latitude", allow_hyphen_values = true)]
    longitude: Option<f64>,

    /// Radius of the dial in drawing units
    #[arg(long, allow_hyphen_values = true)]
    radius: Option<f64>,

    /// TOML configuration file; daylight-dial.toml is used if present
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV of date,sunrise,sunset (optionally .gz) used instead of the solar calculator
    #[arg(long)]
    daylight_table: Option<PathBuf>,

    /// Output SVG path
    #[arg(short = 'o', long = "out", default_value = "daylight.svg")]
    out: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Re-render the output once per tick, advancing a day each time
    #[arg(long)]
    demo: bool,

    /// Milliseconds between demo ticks
    #[arg(long, requires = "demo")]
    interval_ms: Option<u64>,

    /// Stop the demo after this many days; runs until interrupted otherwise
    #[arg(long, requires = "demo")]
    days: Option<usize>,
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("date must be YYYY-MM-DD, got '{s}'"))
}

/// Layer command-line overrides on top of the loaded configuration.
fn build_config(args: &Args) -> Result<DialConfig> {
    let mut cfg = load_config(args.config.as_deref())?;

    if let (Some(latitude), Some(longitude)) = (args.latitude, args.longitude) {
        cfg.location = Location {
            latitude,
            longitude,
        };
    }
    if let Some(radius) = args.radius {
        cfg.dial.radius = radius;
    }
    if let Some(interval_ms) = args.interval_ms {
        cfg.demo.interval_ms = interval_ms;
    }

    cfg.validate()?;
    Ok(cfg)
}

fn sun_times(table: Option<&Path>) -> Result<Box<dyn SunTimes>> {
    match table {
        Some(path) => {
            let table = load_table(path)
                .with_context(|| format!("loading daylight table {}", path.display()))?;
            info!("Loaded {} days from {}", table.len(), path.display());
            Ok(Box::new(table))
        }
        None => Ok(Box::new(SolarCalculator)),
    }
}

fn save(canvas: &SvgCanvas, out: &Path) -> Result<()> {
    canvas
        .save_to(out)
        .with_context(|| format!("writing {}", out.display()))?;
    info!("Wrote {}", out.display());
    Ok(())
}

fn render_to_file(composer: &SceneComposer<'_>, canvas: &mut SvgCanvas, date: NaiveDate, out: &Path) -> Result<()> {
    composer.render(canvas, date)?;
    save(canvas, out)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!("Parsed arguments: {args:?}");

    let cfg = build_config(&args)?;
    debug!("Effective configuration: {cfg:?}");

    let date = args.date.as_deref().map(parse_date).transpose()?;

    let source = sun_times(args.daylight_table.as_deref())?;
    let composer = SceneComposer::new(source.as_ref(), &cfg);
    let mut canvas = SvgCanvas::new();

    if !args.demo {
        match date {
            Some(date) => composer.render(&mut canvas, date)?,
            None => composer.render_today(&mut canvas)?,
        };
        return save(&canvas, &args.out);
    }

    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let mut demo = DemoLoop::new(date, Duration::from_millis(cfg.demo.interval_ms));
    if let Some(days) = args.days {
        demo = demo.with_limit(days);
    }
    let cancel = CancelHandle::new();
    cancel
        .cancel_on_signals()
        .context("installing signal handlers")?;
    info!("Starting demo from {date}; press Ctrl+C to stop");
    let ticks = demo.run(&cancel, |day| {
        render_to_file(&composer, &mut canvas, day, &args.out)
    })?;
    info!("Demo finished after {ticks} days");

    Ok(())
}

#[cfg(test)]
mod test_utils;
