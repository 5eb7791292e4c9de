//! Boundary fill against the rasterized polygon outline.

use super::flood::grow;
use super::{is_inside, Connectivity, FillOutcome};
use crate::cancel::CancelToken;
use crate::geometry::{GridBounds, GridPoint, PixelSet, Polygon};
use crate::render::LineAlgorithm;

/// Rasterize every edge of the polygon into one outline set.
#[must_use]
pub fn boundary_pixels(polygon: &Polygon, algorithm: LineAlgorithm) -> PixelSet {
    polygon.edges().flat_map(|edge| algorithm.trace(edge)).collect()
}

/// Flood from `seed` over axis neighbors until the Bresenham outline of the
/// polygon stops it.
///
/// The seed must lie inside the grid and the polygon. Growth itself never
/// consults [`is_inside`].
#[must_use]
pub fn boundary_fill(
    polygon: &Polygon,
    seed: GridPoint,
    bounds: GridBounds,
    cancel: Option<&CancelToken>,
) -> FillOutcome {
    if !polygon.is_fillable() {
        log::debug!("boundary fill skipped: polygon is open or degenerate");
        return FillOutcome::default();
    }
    if !is_inside(polygon, seed) {
        log::debug!("boundary fill skipped: seed {seed} outside the polygon");
        return FillOutcome::default();
    }

    let boundary = boundary_pixels(polygon, LineAlgorithm::Bresenham);
    boundary_fill_within(&boundary, seed, bounds, cancel)
}

/// Flood from `seed` over axis neighbors, stopped only by the grid and by
/// cells in `boundary`.
///
/// Any gap in the boundary lets the region escape, up to the whole grid.
/// A seed outside the grid or on the boundary fills nothing.
///
/// # Examples
///
/// ```
/// use trueno_raster::fill::boundary_fill_within;
/// use trueno_raster::geometry::{GridBounds, GridPoint, PixelSet};
///
/// let wall: PixelSet = (0..5).map(|y| GridPoint::new(2, y)).collect();
/// let left = boundary_fill_within(&wall, GridPoint::new(0, 0), GridBounds::new(5, 5), None);
/// assert_eq!(left.len(), 10);
/// ```
#[must_use]
pub fn boundary_fill_within(
    boundary: &PixelSet,
    seed: GridPoint,
    bounds: GridBounds,
    cancel: Option<&CancelToken>,
) -> FillOutcome {
    if !bounds.contains(seed) {
        log::debug!("boundary fill skipped: seed {seed} outside the grid");
        return FillOutcome::default();
    }
    if boundary.contains(&seed) {
        log::debug!("boundary fill skipped: seed {seed} lies on the boundary");
        return FillOutcome::default();
    }

    grow(seed, bounds, Connectivity::Four, cancel, |p| !boundary.contains(&p))
}
