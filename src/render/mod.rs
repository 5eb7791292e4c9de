//! Rasterization of lines and circles, and the sink they draw into.
//!
//! Provides exact integer rasterization of geometric primitives. Each family
//! offers two interchangeable algorithms that must agree on the cells they
//! visit, so they can be compared against each other.
//!
//! # Algorithms
//!
//! - **DDA line**: incremental fractional stepping with rounding
//! - **Bresenham's line**: integer error term, octant independent
//! - **Midpoint circle**: half-integer decision variable, `d = 1 - r`
//! - **Bresenham's circle**: integer decision variable, `d = 3 - 2r`
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."

mod circle;
mod line;
mod playback;

pub use circle::{circle_bresenham, circle_midpoint, CircleAlgorithm};
pub use line::{line_bresenham, line_dda, LineAlgorithm};
pub use playback::{PixelEvent, Playback};

use crate::color::Rgba;
use crate::geometry::{GridBounds, GridPoint, PixelSet};
use std::collections::HashMap;

/// Destination for plotted cells.
///
/// Writes outside `[0, width) x [0, height)` must be silently ignored by the
/// sink; rasterizers never clip.
pub trait PixelSink {
    /// Mark one cell.
    fn set(&mut self, x: i32, y: i32, color: Rgba);

    /// Number of addressable columns.
    fn width(&self) -> u32;

    /// Number of addressable rows.
    fn height(&self) -> u32;

    /// Grid extents of this sink.
    fn bounds(&self) -> GridBounds {
        GridBounds::new(self.width(), self.height())
    }
}

/// A family of interchangeable strategies that turn one input shape into an
/// ordered trace of emitted cells.
pub trait Rasterizer {
    /// Geometry consumed by the strategy.
    type Input;

    /// Family label used in reports ("line", "circle", "fill").
    const FAMILY: &'static str;

    /// Strategy name.
    fn name(&self) -> &'static str;

    /// Emit cells in algorithm order. May contain repeats (circle symmetry).
    fn rasterize(&self, input: &Self::Input) -> Vec<GridPoint>;

    /// The emitted cells as a set.
    fn pixel_set(&self, input: &Self::Input) -> PixelSet {
        self.rasterize(input).into_iter().collect()
    }
}

/// Plot every cell in `cells` with one color. Returns the number of writes.
pub fn plot_all<S: PixelSink + ?Sized>(sink: &mut S, cells: &[GridPoint], color: Rgba) -> usize {
    for p in cells {
        sink.set(p.x, p.y, color);
    }
    cells.len()
}

/// Sink that records the last color written to every in-bounds cell.
#[derive(Debug, Clone)]
pub struct RecordingSink {
    bounds: GridBounds,
    cells: HashMap<GridPoint, Rgba>,
    writes: usize,
}

impl RecordingSink {
    /// Create an empty recording sink with the given extents.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bounds: GridBounds::new(width, height),
            cells: HashMap::new(),
            writes: 0,
        }
    }

    /// Color of a cell, if it was written.
    #[must_use]
    pub fn get(&self, p: GridPoint) -> Option<Rgba> {
        self.cells.get(&p).copied()
    }

    /// All written cells.
    #[must_use]
    pub fn pixel_set(&self) -> PixelSet {
        self.cells.keys().copied().collect()
    }

    /// Number of accepted (in-bounds) writes, repeats included.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl PixelSink for RecordingSink {
    fn set(&mut self, x: i32, y: i32, color: Rgba) {
        let p = GridPoint::new(x, y);
        if self.bounds.contains(p) {
            self.cells.insert(p, color);
            self.writes += 1;
        }
    }

    fn width(&self) -> u32 {
        self.bounds.width
    }

    fn height(&self) -> u32 {
        self.bounds.height
    }
}
