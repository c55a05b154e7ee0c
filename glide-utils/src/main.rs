// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use clap::Parser;

use glide_core::nalgebra::Point2;
use glide_core::path::GlidePath;
use glide_core::profile::VelocityProfile;
use glide_core::resample::resample;
use glide_core::series::sample_series;

mod config;
mod export;

use config::Config;

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Pointer glide profile tool", long_about = None)]
struct Args {
    /// Path to the configuration file.
    #[arg(long)]
    config: Option<std::path::PathBuf>,
    /// Target speed in units per second.
    #[arg(short, long)]
    speed: Option<f64>,
    /// Lower threshold as percentage of the sample count.
    #[arg(long)]
    lower_threshold: Option<u8>,
    /// Upper threshold as percentage of the sample count.
    #[arg(long)]
    upper_threshold: Option<u8>,
    /// Minimum speed as percentage of the target speed.
    #[arg(long)]
    min_speed: Option<u8>,
    /// Output rate in ticks per second.
    #[arg(short, long)]
    rate: Option<u32>,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Commands.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print the discrete speed function for a sample count.
    Table {
        /// Number of samples to traverse.
        samples: u64,
    },
    /// Write the resampled series for a sample count to a CSV file.
    Export {
        /// Number of samples to traverse.
        samples: u64,
        /// Output file path.
        output: std::path::PathBuf,
    },
    /// Replay a glide to a random target on the virtual screen.
    Simulate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use log::LevelFilter;

    let args = Args::parse();

    let log_config = simplelog::ConfigBuilder::new()
        .set_time_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_location_level(log::LevelFilter::Off)
        .build();

    let log_level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    simplelog::TermLogger::init(
        log_level,
        log_config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut config = match &args.config {
        Some(path) => Config::try_from_file(path)?,
        None => Config::default(),
    };

    if let Some(speed) = args.speed {
        config.speed = speed;
    }
    if let Some(lower_threshold) = args.lower_threshold {
        config.lower_threshold = lower_threshold;
    }
    if let Some(upper_threshold) = args.upper_threshold {
        config.upper_threshold = upper_threshold;
    }
    if let Some(min_speed) = args.min_speed {
        config.min_speed = min_speed;
    }
    if let Some(rate) = args.rate {
        config.rate = rate;
    }

    log::trace!("{:#?}", config);

    match args.command {
        Command::Table { samples } => table(&config, samples),
        Command::Export { samples, output } => export_series(&config, samples, &output),
        Command::Simulate => simulate(&config).await,
    }
}

/// Print the full speed function, one line per sample.
fn table(config: &Config, samples: u64) -> anyhow::Result<()> {
    let profile = VelocityProfile::with_min_speed(
        samples,
        config.lower_threshold,
        config.upper_threshold,
        config.min_speed,
    )?;
    let series = sample_series(&profile, config.speed)?;

    println!(
        "{:>8}  {:>12}  {:>12}  {:>12}",
        "distance", "speed", "time", "elapsed"
    );

    for record in &series {
        println!(
            "{:>8}  {:>12.3}  {:>12.5}  {:>12.3}",
            record.distance, record.speed, record.step_time, record.cumulative_time
        );
    }

    if let Some(last) = series.last() {
        log::info!(
            "Distance: {}, time (est.): {:.3} seconds",
            samples,
            last.cumulative_time
        );
    }

    Ok(())
}

/// Resample the speed function and write it to a CSV file.
fn export_series(config: &Config, samples: u64, output: &std::path::Path) -> anyhow::Result<()> {
    let profile = VelocityProfile::with_min_speed(
        samples,
        config.lower_threshold,
        config.upper_threshold,
        config.min_speed,
    )?;
    let series = sample_series(&profile, config.speed)?;
    let resampled = resample(&series, config.rate)?;

    export::write_csv(output, &resampled)?;

    log::info!("Wrote {} records to {}", resampled.len(), output.display());

    Ok(())
}

/// Replay a glide to a random point on the virtual screen.
///
/// The loop paces one output tick per resampled record, which is what a
/// cursor driver would do with the same series.
async fn simulate(config: &Config) -> anyhow::Result<()> {
    use rand::Rng;

    let screen = &config.screen;
    if screen.margin * 2 >= screen.width || screen.margin * 2 >= screen.height {
        anyhow::bail!("screen margin exceeds screen dimensions");
    }

    let mut rng = rand::thread_rng();

    let margin = screen.margin as f64;
    let start = Point2::new(
        rng.gen_range(margin..screen.width as f64 - margin),
        rng.gen_range(margin..screen.height as f64 - margin),
    );
    let target = Point2::new(
        rng.gen_range(margin..screen.width as f64 - margin),
        rng.gen_range(margin..screen.height as f64 - margin),
    );

    log::info!(
        "O({:.0}, {:.0}) --> P({:.0}, {:.0})",
        start.x,
        start.y,
        target.x,
        target.y
    );

    let path = GlidePath::new(start, target);
    if path.samples() == 0 {
        log::warn!("Start and target coincide, nothing to do");
        return Ok(());
    }

    let profile = VelocityProfile::with_min_speed(
        path.samples(),
        config.lower_threshold,
        config.upper_threshold,
        config.min_speed,
    )?;
    let series = sample_series(&profile, config.speed)?;
    let resampled = resample(&series, config.rate)?;

    log::info!(
        "Distance: {}, time (est.): {:.3} seconds",
        path.samples(),
        series.last().map_or(0.0, |record| record.cumulative_time)
    );

    let tick = std::time::Duration::from_secs_f64(f64::from(config.rate).recip());
    let start_time = std::time::Instant::now();

    for position in path.waypoints(&resampled) {
        tokio::time::sleep(tick).await;

        log::debug!("Position: ({:.0}, {:.0})", position.x, position.y);
    }

    log::info!(
        "Time measured: {:.3} seconds",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
