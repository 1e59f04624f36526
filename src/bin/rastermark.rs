//! rastermark - rasterize lines and circles and time each algorithm.
//!
//! The binary is the transport around the library: it marshals the
//! `{algorithm, x1, y1, x2, y2, radius}` request and the
//! `{points, execution_time_ns}` response as JSON.
//!
//! Run: `rastermark draw wu --x1 0 --y1 0 --x2 12 --y2 5`

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use rastermark::logger;
use rastermark::prelude::*;

/// rastermark: line and circle rasterization benchmarks
#[derive(Parser, Debug)]
#[command(name = "rastermark")]
#[command(version)]
#[command(about = "Rasterize lines and circles and measure each algorithm", long_about = None)]
struct Cli {
    /// Config file path (defaults to <config dir>/rastermark/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Timed repetitions for every algorithm; overrides config and environment
    #[arg(short, long, global = true)]
    iterations: Option<u32>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rasterize one primitive and print the JSON response
    Draw {
        /// step, dda, bresenham_line, bresenham_circle, wu or castle_pitteway
        algorithm: Algorithm,

        #[command(flatten)]
        geometry: GeometryArgs,

        /// Pretty-print the JSON response
        #[arg(long)]
        pretty: bool,
    },

    /// Run every algorithm on the same geometry and print a timing table
    Compare {
        #[command(flatten)]
        geometry: GeometryArgs,
    },

    /// Read JSON requests from stdin (one per line), write one JSON reply per line
    Batch,

    /// List the available algorithms
    Algorithms,
}

/// Raw request parameters; each algorithm reads only its family's fields.
#[derive(Args, Debug, Clone, Copy)]
struct GeometryArgs {
    /// Start x (line) or center x (circle)
    #[arg(long, allow_negative_numbers = true)]
    x1: i32,

    /// Start y (line) or center y (circle)
    #[arg(long, allow_negative_numbers = true)]
    y1: i32,

    /// End x (line family)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    x2: i32,

    /// End y (line family)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    y2: i32,

    /// Radius (circle)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    radius: i32,
}

impl GeometryArgs {
    fn job(self, algorithm: Algorithm) -> RasterJob {
        RasterJob::new(algorithm, self.x1, self.y1, self.x2, self.y2, self.radius)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let config = load_config(&cli)?;
    let harness = Harness::new(&config.bench)?;

    match cli.command {
        Command::Draw { algorithm, geometry, pretty } => {
            draw(&harness, algorithm, geometry, pretty)
        }
        Command::Compare { geometry } => compare(&harness, geometry),
        Command::Batch => batch(&harness),
        Command::Algorithms => {
            for algorithm in Algorithm::ALL {
                println!("{:<18} {}", algorithm.tag(), algorithm.family());
            }
            Ok(())
        }
    }
}

/// CLI > ENV > file > defaults.
fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => {
            Config::load(path).with_context(|| format!("failed to load {}", path.display()))?
        }
        None => Config::default_path().map(Config::load_or_default).unwrap_or_default(),
    };

    let mut config = config.with_process_env()?;
    if let Some(iterations) = cli.iterations {
        config.bench = IterationPlan::uniform(iterations);
    }
    info!("iteration plan: {:?}", config.bench);
    Ok(config)
}

fn draw(
    harness: &Harness,
    algorithm: Algorithm,
    geometry: GeometryArgs,
    pretty: bool,
) -> Result<()> {
    let response = RasterResponse::from(harness.measure(&geometry.job(algorithm)));
    let json = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{json}");
    Ok(())
}

fn compare(harness: &Harness, geometry: GeometryArgs) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{:<18} {:<7} {:>10} {:>8} {:>12}",
        "ALGORITHM", "FAMILY", "ITERATIONS", "POINTS", "NS/CALL"
    )?;

    for algorithm in Algorithm::ALL {
        let m = harness.measure(&geometry.job(algorithm));
        writeln!(
            out,
            "{:<18} {:<7} {:>10} {:>8} {:>12}",
            algorithm.tag(),
            algorithm.family().to_string(),
            m.iterations,
            m.points.len(),
            m.average_ns
        )?;
    }
    Ok(())
}

fn batch(harness: &Harness) -> Result<()> {
    let summary = rastermark::batch::run(harness, io::stdin().lock(), io::stdout().lock())
        .context("batch transport failed")?;
    info!("batch: {} answered, {} failed", summary.answered, summary.failed);
    Ok(())
}
