//! Skerry CLI - count islands in a 0/1 grid

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use skerry_algorithms::components::{
    count_components_with, label_components, ComponentLabels, FloodOrder,
};
use skerry_core::io::{read_grid, read_grid_from_reader};
use skerry_core::Grid;

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "skerry")]
#[command(author, version, about = "Count 4-connected islands in a 0/1 grid", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count islands and print the total
    Count {
        /// Input grid file ("-" or omitted reads standard input)
        input: Option<PathBuf>,
        /// Flood fill order: bfs, dfs
        #[arg(short, long, default_value = "bfs")]
        order: String,
        /// Print a JSON summary instead of the bare count
        #[arg(long)]
        json: bool,
    },
    /// Print the island id of every cell and the size of each island
    Label {
        /// Input grid file ("-" or omitted reads standard input)
        input: Option<PathBuf>,
    },
    /// Show grid dimensions and land/water totals
    Info {
        /// Input grid file ("-" or omitted reads standard input)
        input: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct CountSummary {
    rows: usize,
    cols: usize,
    land_cells: usize,
    components: usize,
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set default tracing subscriber")
}

fn spinner(msg: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Invalid spinner template")?,
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(pb)
}

fn read_input(input: Option<&PathBuf>) -> Result<Grid> {
    let grid = match input {
        Some(path) if path.as_os_str() != "-" => {
            let pb = spinner("Reading grid...")?;
            let grid = read_grid(path)
                .with_context(|| format!("Failed to read grid from {}", path.display()))?;
            pb.finish_and_clear();
            grid
        }
        _ => {
            debug!("Reading grid from standard input");
            read_grid_from_reader(io::stdin().lock())
                .context("Failed to read grid from standard input")?
        }
    };
    info!("Input: {} x {}", grid.rows(), grid.cols());
    Ok(grid)
}

fn parse_order(order: &str) -> Result<FloodOrder> {
    let order = match order.to_lowercase().as_str() {
        "bfs" | "breadth" | "breadth-first" => FloodOrder::BreadthFirst,
        "dfs" | "depth" | "depth-first" => FloodOrder::DepthFirst,
        _ => bail!("Unknown flood order: {}. Use bfs or dfs.", order),
    };
    Ok(order)
}

fn print_labels(labels: &ComponentLabels) {
    let width = labels.count().to_string().len();
    for row in labels.labels().rows() {
        let line: Vec<String> = row.iter().map(|id| format!("{:>width$}", id)).collect();
        println!("{}", line.join(" "));
    }

    println!("\nIslands: {}", labels.count());
    if labels.count() > 0 {
        println!("  {:>6}  {:>8}", "Id", "Cells");
        for (idx, size) in labels.sizes().iter().enumerate() {
            println!("  {:>6}  {:>8}", idx + 1, size);
        }
    }
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Count { input, order, json } => {
            let order = parse_order(&order)?;
            let mut grid = read_input(input.as_ref())?;
            let (rows, cols) = grid.shape();
            let land_cells = grid.land_count();

            let start = Instant::now();
            let components = count_components_with(&mut grid, order);
            debug!("Counted {} islands in {:.2?} ({:?})", components, start.elapsed(), order);

            if json {
                let summary = CountSummary {
                    rows,
                    cols,
                    land_cells,
                    components,
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summary).context("Failed to encode summary")?
                );
            } else {
                println!("{}", components);
            }
        }

        Commands::Label { input } => {
            let grid = read_input(input.as_ref())?;
            let start = Instant::now();
            let labels = label_components(&grid).context("Failed to label grid")?;
            debug!("Labeled {} islands in {:.2?}", labels.count(), start.elapsed());
            print_labels(&labels);
        }

        Commands::Info { input } => {
            let grid = read_input(input.as_ref())?;
            let land = grid.land_count();
            let water = grid.len() - land;
            let land_pct = if grid.is_empty() {
                0.0
            } else {
                100.0 * land as f64 / grid.len() as f64
            };

            println!("Dimensions: {} x {} ({} cells)", grid.rows(), grid.cols(), grid.len());
            println!("  Land cells: {} ({:.1}%)", land, land_pct);
            println!("  Water cells: {}", water);
        }
    }

    Ok(())
}
