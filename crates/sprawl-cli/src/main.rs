//! `sprawl`: run land-use simulations from the command line.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use sprawl_core::{Category, CategoryGrid};
use sprawl_engine::{ChannelSink, DiagnosticSink, Simulation, SimulationConfig, SinkEvent};
use sprawl_raster::{load_categories, read_ascii_grid, LookupTable, RasterHeader};
use sprawl_rule::{EdgeBehavior, Execution, ProbabilityBound, TransitionRule};
use tracing::{info, warn};

mod output;

use output::LayerWriter;

/// Pending layer events the writer thread may lag behind by.
const WRITE_QUEUE: usize = 8;

#[derive(Parser, Debug)]
#[command(author, version, about = "Stochastic land-use cellular automaton", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a simulation and write one category map per tick.
    Run(RunArgs),
    /// Print the category composition of a map.
    Inspect(MapArgs),
}

#[derive(clap::Args, Debug)]
struct MapArgs {
    /// Initial land-use map (ESRI ASCII grid)
    #[arg(long)]
    map: PathBuf,

    /// Lookup table from raw map codes to categories (default: codes 1-8 as-is)
    #[arg(long)]
    table: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    input: MapArgs,

    /// Number of ticks to run
    #[arg(long, default_value_t = sprawl_engine::DEFAULT_STEPS)]
    steps: u64,

    /// Seed for the per-cell random draws
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Directory receiving the output layers
    #[arg(long, default_value = "output")]
    out: PathBuf,

    /// Also write before/probability/contest/converted layers per tick
    #[arg(long)]
    diagnostics: bool,

    /// Evaluate rows in parallel
    #[arg(long)]
    parallel: bool,

    /// Clamp transition probabilities to [0, 1]
    #[arg(long)]
    clamp: bool,

    /// Treat the map as a torus instead of clipping the window at edges
    #[arg(long)]
    wrap: bool,

    /// Upper bound of the per-cell noise term
    #[arg(long, default_value_t = sprawl_rule::DEFAULT_NOISE_AMPLITUDE)]
    noise: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run(args),
        Command::Inspect(args) => inspect(args),
    }
}

fn load_map(args: &MapArgs) -> Result<(RasterHeader, CategoryGrid)> {
    let table = match &args.table {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open lookup table {}", path.display()))?;
            LookupTable::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse lookup table {}", path.display()))?
        }
        None => LookupTable::identity(),
    };
    let file = File::open(&args.map)
        .with_context(|| format!("Failed to open map {}", args.map.display()))?;
    let raw = read_ascii_grid(BufReader::new(file))
        .with_context(|| format!("Failed to read map {}", args.map.display()))?;
    let grid = load_categories(&raw, &table, None)
        .with_context(|| format!("Failed to load categories from {}", args.map.display()))?;
    let (header, _) = raw.into_parts();
    Ok((header, grid))
}

fn run(args: RunArgs) -> Result<()> {
    let (header, initial) = load_map(&args.input)?;
    info!(
        map = %args.input.map.display(),
        rows = initial.rows(),
        cols = initial.cols(),
        "map loaded"
    );

    let rule = TransitionRule::builder()
        .noise_amplitude(args.noise)
        .probability_bound(if args.clamp {
            ProbabilityBound::Clamped
        } else {
            ProbabilityBound::Unclamped
        })
        .edge_behavior(if args.wrap {
            EdgeBehavior::Wrap
        } else {
            EdgeBehavior::Absorb
        })
        .execution(if args.parallel {
            Execution::Parallel
        } else {
            Execution::Sequential
        })
        .build()
        .map_err(|e| anyhow!("invalid rule: {e}"))?;

    let config = SimulationConfig {
        rule,
        seed: args.seed,
        steps: args.steps,
        record_diagnostics: args.diagnostics,
    };
    let mut sim = Simulation::new(config, initial).context("Invalid simulation configuration")?;

    let mut writer = LayerWriter::create(&args.out, header)
        .with_context(|| format!("Failed to create output directory {}", args.out.display()))?;
    let (mut sink, events) = ChannelSink::bounded(WRITE_QUEUE);
    let persist = thread::spawn(move || -> Result<usize> {
        for event in events {
            match event {
                SinkEvent::Grid { tick, grid } => writer.record_grid(tick, &grid)?,
                SinkEvent::Diagnostics(diag) => writer.record(&diag)?,
            }
        }
        Ok(writer.files_written())
    });

    let outcome = sim.run(&mut sink);
    drop(sink);
    let written = persist
        .join()
        .map_err(|_| anyhow!("output writer thread panicked"))??;
    // A write failure disconnects the channel; report the writer's error first.
    let summary = outcome.context("Simulation run aborted")?;

    info!(
        files = written,
        out = %args.out.display(),
        "output written"
    );
    println!(
        "ticks {}  +urban {}  +semi-urban {}  hash {:016x}",
        summary.steps, summary.to_urban, summary.to_semi_urban, summary.final_hash
    );
    Ok(())
}

fn inspect(args: MapArgs) -> Result<()> {
    let (header, grid) = load_map(&args)?;
    print_composition(&args.map, &header, &grid);
    Ok(())
}

fn print_composition(path: &Path, header: &RasterHeader, grid: &CategoryGrid) {
    println!(
        "{}: {} x {} cells, cellsize {}",
        path.display(),
        grid.rows(),
        grid.cols(),
        header.cellsize
    );
    let total = grid.len() as f64;
    for category in Category::ALL {
        let count = grid.count_category(category);
        if count == 0 {
            continue;
        }
        println!(
            "  {:>2} {:<15} {:>9} {:>6.2}%",
            category.code(),
            category.name(),
            count,
            100.0 * count as f64 / total
        );
    }
    if grid.count_category(Category::Urban) + grid.count_category(Category::SemiUrban) == 0 {
        warn!("map holds no urban or semi-urban cells; only noise can seed growth");
    }
}
