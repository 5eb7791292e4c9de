//! Comparative timing of rasterization strategies.
//!
//! Every strategy of a family runs on the same input a fixed number of times.
//! Only the algorithmic call is timed; plotting, set construction and
//! statistics happen outside the measured region. Results accumulate in
//! strategy order until [`Benchmark::clear`].

use crate::fill::{FillAlgorithm, FillInput};
use crate::geometry::{Circle, GridBounds, GridPoint, PixelSet, Polygon, Segment};
use crate::render::{CircleAlgorithm, LineAlgorithm, Rasterizer};
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};
use trueno::Vector;

/// Default repetitions of each line strategy.
pub const LINE_REPETITIONS: usize = 1000;

/// Default repetitions of each circle strategy.
pub const CIRCLE_REPETITIONS: usize = 1;

/// Default repetitions of each fill strategy.
pub const FILL_REPETITIONS: usize = 1;

/// Repetitions per strategy family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repetitions {
    /// Line strategies.
    pub line: usize,
    /// Circle strategies.
    pub circle: usize,
    /// Fill strategies.
    pub fill: usize,
}

impl Default for Repetitions {
    fn default() -> Self {
        Self {
            line: LINE_REPETITIONS,
            circle: CIRCLE_REPETITIONS,
            fill: FILL_REPETITIONS,
        }
    }
}

/// Timing of one strategy on one input.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// Strategy family ("line", "circle", "fill").
    pub family: &'static str,
    /// Strategy name.
    pub name: &'static str,
    /// Timed repetitions.
    pub repetitions: usize,
    /// Total time across all repetitions.
    pub elapsed: Duration,
    /// Distinct cells produced by one run.
    pub pixel_count: usize,
    /// Cells emitted by one run, repeats included.
    pub emissions: usize,
    /// Fastest single repetition in milliseconds.
    pub min_ms: f64,
    /// Mean repetition in milliseconds.
    pub mean_ms: f64,
    /// Slowest single repetition in milliseconds.
    pub max_ms: f64,
}

impl BenchmarkResult {
    /// Total elapsed time in milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Accumulating benchmark harness.
#[derive(Debug, Clone, Default)]
pub struct Benchmark {
    repetitions: Repetitions,
    results: Vec<BenchmarkResult>,
}

impl Benchmark {
    /// Harness with the given repetition counts.
    #[must_use]
    pub fn new(repetitions: Repetitions) -> Self {
        Self {
            repetitions,
            results: Vec::new(),
        }
    }

    /// Configured repetition counts.
    #[must_use]
    pub const fn repetitions(&self) -> Repetitions {
        self.repetitions
    }

    /// Time each strategy on `input` and append one result per strategy.
    /// A repetition count of zero is run once.
    ///
    /// Returns the results appended by this call.
    pub fn run<R: Rasterizer>(
        &mut self,
        strategies: &[R],
        input: &R::Input,
        repetitions: usize,
    ) -> &[BenchmarkResult] {
        let start = self.results.len();
        let repetitions = repetitions.max(1);

        for strategy in strategies {
            let mut samples = Vec::with_capacity(repetitions);
            let mut total = Duration::ZERO;
            let mut cells = Vec::new();

            for _ in 0..repetitions {
                let t0 = Instant::now();
                cells = black_box(strategy.rasterize(black_box(input)));
                let dt = t0.elapsed();
                total += dt;
                samples.push((dt.as_secs_f64() * 1000.0) as f32);
            }

            let pixel_count = cells.iter().copied().collect::<PixelSet>().len();
            let stats = Vector::from_vec(samples);
            let result = BenchmarkResult {
                family: R::FAMILY,
                name: strategy.name(),
                repetitions,
                elapsed: total,
                pixel_count,
                emissions: cells.len(),
                min_ms: f64::from(stats.min().unwrap_or(0.0)),
                mean_ms: f64::from(stats.mean().unwrap_or(0.0)),
                max_ms: f64::from(stats.max().unwrap_or(0.0)),
            };
            log::info!(
                "{} {}: {} reps in {:.4} ms, {} pixels",
                result.family,
                result.name,
                result.repetitions,
                result.elapsed_ms(),
                result.pixel_count
            );
            self.results.push(result);
        }

        &self.results[start..]
    }

    /// Benchmark both line strategies.
    pub fn run_lines(&mut self, segment: Segment) -> &[BenchmarkResult] {
        self.run(&LineAlgorithm::ALL, &segment, self.repetitions.line)
    }

    /// Benchmark both circle strategies.
    pub fn run_circles(&mut self, circle: Circle) -> &[BenchmarkResult] {
        self.run(&CircleAlgorithm::ALL, &circle, self.repetitions.circle)
    }

    /// Benchmark every fill strategy on one polygon.
    pub fn run_fills(
        &mut self,
        polygon: &Polygon,
        seed: Option<GridPoint>,
        bounds: GridBounds,
    ) -> &[BenchmarkResult] {
        let input = FillInput::new(polygon.clone(), seed, bounds);
        self.run(&FillAlgorithm::ALL, &input, self.repetitions.fill)
    }

    /// Every result so far, in run order.
    #[must_use]
    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    /// The strategy of `family` with the lowest mean repetition time.
    #[must_use]
    pub fn fastest(&self, family: &str) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .filter(|r| r.family == family)
            .min_by(|a, b| a.mean_ms.total_cmp(&b.mean_ms))
    }

    /// Drop all accumulated results.
    pub fn clear(&mut self) {
        self.results.clear();
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<8} {:<26} {:>6} {:>12} {:>10} {:>8}",
            "family", "algorithm", "reps", "total ms", "mean ms", "pixels"
        )?;
        for r in &self.results {
            writeln!(
                f,
                "{:<8} {:<26} {:>6} {:>12.4} {:>10.5} {:>8}",
                r.family,
                r.name,
                r.repetitions,
                r.elapsed_ms(),
                r.mean_ms,
                r.pixel_count
            )?;
        }

        let mut families: Vec<&str> = Vec::new();
        for r in &self.results {
            if !families.contains(&r.family) {
                families.push(r.family);
            }
        }
        for family in families {
            if let Some(best) = self.fastest(family) {
                writeln!(f, "fastest {family}: {}", best.name)?;
            }
        }
        Ok(())
    }
}
