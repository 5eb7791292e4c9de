//! Seeded breadth-first flood fill.

use super::{is_inside, Emitter, FillOutcome};
use crate::cancel::CancelToken;
use crate::geometry::{GridBounds, GridPoint, PixelSet, Polygon};
use std::collections::VecDeque;

const AXIS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const AXIS_AND_DIAGONAL: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Neighborhood used when growing a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Left, right, up, down.
    Four,
    /// Axis neighbors plus the four diagonals.
    Eight,
}

impl Connectivity {
    /// Offsets to the neighbors of a cell.
    #[must_use]
    pub const fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Four => &AXIS,
            Self::Eight => &AXIS_AND_DIAGONAL,
        }
    }
}

/// Breadth-first region growth shared by the flood and boundary fills.
///
/// Cells are marked visited when enqueued, so each is emitted at most once.
/// `admit` decides whether an in-bounds neighbor joins the region; the seed
/// must already have been admitted by the caller.
pub(crate) fn grow<F>(
    seed: GridPoint,
    bounds: GridBounds,
    connectivity: Connectivity,
    cancel: Option<&CancelToken>,
    mut admit: F,
) -> FillOutcome
where
    F: FnMut(GridPoint) -> bool,
{
    let mut out = Emitter::new(cancel);
    let mut visited = PixelSet::new();
    let mut queue = VecDeque::new();
    visited.insert(seed);
    queue.push_back(seed);

    while let Some(p) = queue.pop_front() {
        if !out.emit(p) {
            break;
        }
        for &(dx, dy) in connectivity.offsets() {
            let n = p.offset(dx, dy);
            if bounds.contains(n) && !visited.contains(&n) && admit(n) {
                visited.insert(n);
                queue.push_back(n);
            }
        }
    }

    out.finish()
}

/// Flood the polygon interior from `seed`, bounded by the grid and by
/// [`is_inside`].
///
/// A seed outside the grid or outside the polygon fills nothing.
#[must_use]
pub fn flood_fill(
    polygon: &Polygon,
    seed: GridPoint,
    bounds: GridBounds,
    connectivity: Connectivity,
    cancel: Option<&CancelToken>,
) -> FillOutcome {
    if !polygon.is_fillable() {
        log::debug!("flood fill skipped: polygon is open or degenerate");
        return FillOutcome::default();
    }
    if !bounds.contains(seed) {
        log::debug!("flood fill skipped: seed {seed} outside the grid");
        return FillOutcome::default();
    }
    if !is_inside(polygon, seed) {
        log::debug!("flood fill skipped: seed {seed} outside the polygon");
        return FillOutcome::default();
    }

    grow(seed, bounds, connectivity, cancel, |p| is_inside(polygon, p))
}
