//! Polygon fill engine.
//!
//! Four strategies fill the same closed polygon:
//!
//! - **Scanline**: walks every row of the bounding box and fills between
//!   sorted pairs of edge intercepts. Needs no seed.
//! - **Flood (4-connected)** and **Flood (8-connected)**: breadth-first
//!   region growing from a seed, bounded by the grid and by [`is_inside`].
//! - **Boundary**: breadth-first growth over axis neighbors, stopped only by
//!   the Bresenham-rasterized polygon outline. A gap in the outline leaks.
//!
//! Open polygons and polygons with fewer than three vertices fill nothing.
//! Every strategy accepts an optional [`CancelToken`] and returns the cells
//! emitted so far as soon as it is set.

mod boundary;
mod classify;
mod flood;
mod scanline;

pub use boundary::{boundary_fill, boundary_fill_within, boundary_pixels};
pub use classify::{interior_seed, is_inside};
pub use flood::{flood_fill, Connectivity};
pub use scanline::scanline_fill;

use crate::cancel::CancelToken;
use crate::color::Rgba;
use crate::error::Error;
use crate::geometry::{GridBounds, GridPoint, PixelSet, Polygon};
use crate::render::{PixelSink, Rasterizer};
use std::fmt;
use std::str::FromStr;

/// Cells produced by one fill invocation, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillOutcome {
    /// Emitted cells. Each cell appears at most once.
    pub cells: Vec<GridPoint>,
    /// Whether the fill stopped early on cancellation.
    pub cancelled: bool,
}

impl FillOutcome {
    /// Number of filled cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether nothing was filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The filled cells as a set.
    #[must_use]
    pub fn to_set(&self) -> PixelSet {
        self.cells.iter().copied().collect()
    }
}

/// Collects emissions and polls the cancel token after each one.
pub(crate) struct Emitter<'a> {
    cells: Vec<GridPoint>,
    cancel: Option<&'a CancelToken>,
    cancelled: bool,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(cancel: Option<&'a CancelToken>) -> Self {
        Self {
            cells: Vec::new(),
            cancel,
            cancelled: false,
        }
    }

    /// Record a cell. Returns `false` when the caller must stop.
    pub(crate) fn emit(&mut self, p: GridPoint) -> bool {
        self.cells.push(p);
        if self.cancel.is_some_and(CancelToken::is_cancelled) {
            log::debug!("fill cancelled after {} cells", self.cells.len());
            self.cancelled = true;
            return false;
        }
        true
    }

    pub(crate) fn finish(self) -> FillOutcome {
        FillOutcome {
            cells: self.cells,
            cancelled: self.cancelled,
        }
    }
}

/// Polygon fill strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillAlgorithm {
    /// Row-by-row intercept pairing.
    Scanline,
    /// Seeded flood over axis neighbors.
    Flood4,
    /// Seeded flood over axis and diagonal neighbors.
    Flood8,
    /// Seeded flood stopped by the rasterized outline.
    Boundary,
}

impl FillAlgorithm {
    /// Every strategy, in report order.
    pub const ALL: [Self; 4] = [Self::Scanline, Self::Flood4, Self::Flood8, Self::Boundary];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scanline => "Scanline Fill",
            Self::Flood4 => "Flood Fill (4-connected)",
            Self::Flood8 => "Flood Fill (8-connected)",
            Self::Boundary => "Boundary Fill",
        }
    }

    /// Whether the strategy starts from a seed cell.
    #[must_use]
    pub const fn needs_seed(self) -> bool {
        !matches!(self, Self::Scanline)
    }

    /// Fill `polygon` within `bounds`. Seeded strategies do nothing without
    /// a seed; scanline ignores it.
    #[must_use]
    pub fn fill(self, polygon: &Polygon, seed: Option<GridPoint>, bounds: GridBounds) -> FillOutcome {
        self.run(polygon, seed, bounds, None)
    }

    /// Like [`fill`](Self::fill), stopping early once `cancel` is set.
    #[must_use]
    pub fn fill_cancellable(
        self,
        polygon: &Polygon,
        seed: Option<GridPoint>,
        bounds: GridBounds,
        cancel: &CancelToken,
    ) -> FillOutcome {
        self.run(polygon, seed, bounds, Some(cancel))
    }

    /// Fill within the sink's extents and plot the result.
    pub fn fill_into<S: PixelSink + ?Sized>(
        self,
        sink: &mut S,
        polygon: &Polygon,
        seed: Option<GridPoint>,
        color: Rgba,
        cancel: Option<&CancelToken>,
    ) -> FillOutcome {
        let outcome = self.run(polygon, seed, sink.bounds(), cancel);
        crate::render::plot_all(sink, &outcome.cells, color);
        outcome
    }

    fn run(
        self,
        polygon: &Polygon,
        seed: Option<GridPoint>,
        bounds: GridBounds,
        cancel: Option<&CancelToken>,
    ) -> FillOutcome {
        let seed = match (self.needs_seed(), seed) {
            (false, _) => None,
            (true, Some(seed)) => Some(seed),
            (true, None) => {
                log::debug!("{} needs a seed, nothing filled", self.name());
                return FillOutcome::default();
            }
        };

        match (self, seed) {
            (Self::Flood4, Some(seed)) => flood_fill(polygon, seed, bounds, Connectivity::Four, cancel),
            (Self::Flood8, Some(seed)) => flood_fill(polygon, seed, bounds, Connectivity::Eight, cancel),
            (Self::Boundary, Some(seed)) => boundary_fill(polygon, seed, bounds, cancel),
            _ => scanline_fill(polygon, cancel),
        }
    }
}

impl fmt::Display for FillAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FillAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scanline" => Ok(Self::Scanline),
            "flood4" | "flood-4" => Ok(Self::Flood4),
            "flood8" | "flood-8" => Ok(Self::Flood8),
            "boundary" => Ok(Self::Boundary),
            _ => Err(Error::UnknownAlgorithm {
                family: "fill",
                name: s.to_string(),
            }),
        }
    }
}

/// Geometry for one fill run, as consumed by the benchmark harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillInput {
    /// Closed polygon to fill.
    pub polygon: Polygon,
    /// Seed for the flood and boundary strategies.
    pub seed: Option<GridPoint>,
    /// Grid extents.
    pub bounds: GridBounds,
}

impl FillInput {
    /// Bundle a polygon with its seed and grid extents.
    #[must_use]
    pub fn new(polygon: Polygon, seed: Option<GridPoint>, bounds: GridBounds) -> Self {
        Self {
            polygon,
            seed,
            bounds,
        }
    }
}

impl Rasterizer for FillAlgorithm {
    type Input = FillInput;
    const FAMILY: &'static str = "fill";

    fn name(&self) -> &'static str {
        FillAlgorithm::name(*self)
    }

    fn rasterize(&self, input: &FillInput) -> Vec<GridPoint> {
        self.fill(&input.polygon, input.seed, input.bounds).cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSink;

    fn square() -> Polygon {
        Polygon::closed([(0, 0), (4, 0), (4, 4), (0, 4)])
    }

    #[test]
    fn test_seeded_fill_without_seed_is_noop() {
        let bounds = GridBounds::new(10, 10);
        for algo in [FillAlgorithm::Flood4, FillAlgorithm::Flood8, FillAlgorithm::Boundary] {
            assert!(algo.fill(&square(), None, bounds).is_empty(), "{algo}");
        }
        assert_eq!(FillAlgorithm::Scanline.fill(&square(), None, bounds).len(), 25);
    }

    #[test]
    fn test_degenerate_polygon_fills_nothing() {
        let bounds = GridBounds::new(10, 10);
        let line = Polygon::closed([(0, 0), (5, 5)]);
        for algo in FillAlgorithm::ALL {
            assert!(algo.fill(&line, Some(GridPoint::new(1, 1)), bounds).is_empty(), "{algo}");
        }
    }

    #[test]
    fn test_fill_into_uses_sink_bounds() {
        // polygon hangs over the right edge of a 3 x 10 sink
        let mut sink = RecordingSink::new(3, 10);
        let outcome = FillAlgorithm::Flood4.fill_into(
            &mut sink,
            &square(),
            Some(GridPoint::new(1, 1)),
            Rgba::GREEN,
            None,
        );
        assert!(outcome.cells.iter().all(|p| p.x < 3));
        assert_eq!(outcome.len(), 12);
        assert_eq!(sink.pixel_set(), outcome.to_set());
    }

    #[test]
    fn test_cancelled_before_start_emits_one_cell() {
        let token = CancelToken::new();
        token.cancel();
        let bounds = GridBounds::new(10, 10);
        for algo in FillAlgorithm::ALL {
            let outcome = algo.fill_cancellable(&square(), Some(GridPoint::new(1, 1)), bounds, &token);
            assert!(outcome.cancelled, "{algo}");
            assert_eq!(outcome.len(), 1, "{algo}");
        }
    }

    #[test]
    fn test_fill_algorithm_parse() {
        assert_eq!("flood-8".parse::<FillAlgorithm>().unwrap(), FillAlgorithm::Flood8);
        assert_eq!("Scanline".parse::<FillAlgorithm>().unwrap(), FillAlgorithm::Scanline);
        assert!("spray".parse::<FillAlgorithm>().is_err());
    }

    #[test]
    fn test_rasterizer_matches_fill() {
        let input = FillInput::new(square(), Some(GridPoint::new(2, 2)), GridBounds::new(10, 10));
        let via_trait = FillAlgorithm::Flood8.pixel_set(&input);
        let direct = FillAlgorithm::Flood8.fill(&input.polygon, input.seed, input.bounds).to_set();
        assert_eq!(via_trait, direct);
    }
}
