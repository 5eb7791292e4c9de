//! raster-bench: compare line, circle and polygon fill algorithms.
//!
//! Runs every strategy of each family on the same input, prints a timing
//! table, and optionally renders the result to a PNG.
//!
//! Run: `raster-bench --polygon "10,10 60,8 70,40 30,45" --output fill.png`
//! Animate: `raster-bench --output fill.png --delay-ms 5 --time-limit-ms 2000`
//! Verbosity: `RUST_LOG=debug raster-bench`

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use trueno_raster::benchmark::Benchmark;
use trueno_raster::cancel::CancelToken;
use trueno_raster::config::Config;
use trueno_raster::fill::{boundary_pixels, interior_seed, FillAlgorithm};
use trueno_raster::framebuffer::Framebuffer;
use trueno_raster::geometry::{Circle, GridPoint, Polygon, Segment};
use trueno_raster::output::PngEncoder;
use trueno_raster::render::{plot_all, CircleAlgorithm, LineAlgorithm, Playback};

const DEFAULT_POLYGON: &str = "10,8 42,5 70,20 58,46 34,30 14,44";
const DEFAULT_SEGMENT: &str = "4,50 90,6";
const DEFAULT_CIRCLE: &str = "72,30 16";

/// raster-bench: line, circle and polygon fill benchmark
#[derive(Parser, Debug)]
#[command(name = "raster-bench")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Compare rasterization and polygon fill algorithms", long_about = None)]
struct Cli {
    /// Config file path (defaults to <config_dir>/trueno-raster/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<u32>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<u32>,

    /// Output pixels per grid cell
    #[arg(long)]
    cell_size: Option<u32>,

    /// Polygon vertices, e.g. "10,10 40,10 25,30"
    #[arg(short, long, default_value = DEFAULT_POLYGON)]
    polygon: Polygon,

    /// Seed cell for flood and boundary fills (defaults to an interior cell)
    #[arg(short, long)]
    seed: Option<GridPoint>,

    /// Line segment, e.g. "0,0 40,12"
    #[arg(long, default_value = DEFAULT_SEGMENT)]
    segment: Segment,

    /// Circle as center and radius, e.g. "30,30 10"
    #[arg(long, default_value = DEFAULT_CIRCLE)]
    circle: Circle,

    /// Fill algorithm to render: scanline, flood4, flood8, boundary
    #[arg(short, long, default_value = "scanline")]
    algorithm: FillAlgorithm,

    /// Write the rendered grid to this PNG file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pause between painted fill cells when rendering, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Stop rendering the fill after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let bounds = config.grid.bounds();
    let seed = cli.seed.or_else(|| interior_seed(&cli.polygon));
    if seed.is_none() {
        log::warn!("no interior seed found; seeded fills will be empty");
    }

    let mut bench = Benchmark::new(config.benchmark.repetitions());
    bench.run_lines(cli.segment);
    bench.run_circles(cli.circle);
    bench.run_fills(&cli.polygon, seed, bounds);
    print!("{bench}");

    if let Some(path) = &cli.output {
        let fb = render(&cli, &config, seed)?;
        PngEncoder::new()
            .cell_size(config.grid.cell_size)
            .write_to_file(&fb, path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}

/// Configuration file first, then command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            Config::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => match Config::default_path() {
            Some(path) if path.exists() => Config::load_or_default(path),
            _ => Config::default(),
        },
    };

    if let Some(width) = cli.width {
        config.grid.width = width;
    }
    if let Some(height) = cli.height {
        config.grid.height = height;
    }
    if let Some(cell_size) = cli.cell_size {
        config.grid.cell_size = cell_size;
    }
    Ok(config)
}

/// Paint the chosen fill, the polygon outline, the segment and the circle.
fn render(cli: &Cli, config: &Config, seed: Option<GridPoint>) -> Result<Framebuffer> {
    let colors = &config.colors;
    let mut fb = Framebuffer::new(config.grid.width, config.grid.height)
        .context("creating framebuffer")?;
    fb.clear(colors.background);

    let cancel = CancelToken::new();
    if let Some(ms) = cli.time_limit_ms {
        cancel.cancel_after(Duration::from_millis(ms));
    }

    let filled = cli
        .algorithm
        .fill_cancellable(&cli.polygon, seed, config.grid.bounds(), &cancel);
    let painted = Playback::new(&filled.cells, colors.fill)
        .delay(Duration::from_millis(cli.delay_ms))
        .cancel_on(cancel.clone())
        .play(&mut fb);
    if filled.cancelled || cancel.is_cancelled() {
        log::warn!("{}: time limit reached, painted {painted} cells", cli.algorithm);
    } else {
        log::info!("{}: painted {painted} cells", cli.algorithm);
    }

    if cli.algorithm == FillAlgorithm::Boundary {
        let outline: Vec<GridPoint> = boundary_pixels(&cli.polygon, LineAlgorithm::Bresenham)
            .into_iter()
            .collect();
        plot_all(&mut fb, &outline, colors.boundary);
    } else {
        for edge in cli.polygon.edges() {
            LineAlgorithm::Bresenham.draw(&mut fb, edge, colors.polygon);
        }
    }
    LineAlgorithm::Bresenham.draw(&mut fb, cli.segment, colors.line);
    CircleAlgorithm::Midpoint.draw(&mut fb, cli.circle, colors.circle);

    Ok(fb)
}
