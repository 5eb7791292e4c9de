//! Circle rasterization with 8-way symmetry.
//!
//! Both algorithms walk the octant from `(0, r)` to the diagonal and mirror
//! each step into the other seven octants. The Bresenham decision variable is
//! exactly `2d + 1` of the midpoint one, so the two always take the same
//! branch and produce the same cells.

use super::{PixelSink, Rasterizer};
use crate::color::Rgba;
use crate::error::Error;
use crate::geometry::{Circle, GridPoint};
use std::fmt;
use std::str::FromStr;

/// Circle rasterization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircleAlgorithm {
    /// Midpoint algorithm, `d = 1 - r`.
    Midpoint,
    /// Bresenham's algorithm, `d = 3 - 2r`.
    Bresenham,
}

impl CircleAlgorithm {
    /// Every strategy, in report order.
    pub const ALL: [Self; 2] = [Self::Midpoint, Self::Bresenham];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Midpoint => "Midpoint",
            Self::Bresenham => "Bresenham",
        }
    }

    /// Emit the circle's cells, octant by octant.
    #[must_use]
    pub fn trace(self, circle: Circle) -> Vec<GridPoint> {
        match self {
            Self::Midpoint => circle_midpoint(circle),
            Self::Bresenham => circle_bresenham(circle),
        }
    }

    /// Rasterize and plot into a sink. Returns the number of emissions.
    pub fn draw<S: PixelSink + ?Sized>(self, sink: &mut S, circle: Circle, color: Rgba) -> usize {
        super::plot_all(sink, &self.trace(circle), color)
    }
}

impl fmt::Display for CircleAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CircleAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "midpoint" => Ok(Self::Midpoint),
            "bresenham" => Ok(Self::Bresenham),
            _ => Err(Error::UnknownAlgorithm {
                family: "circle",
                name: s.to_string(),
            }),
        }
    }
}

impl Rasterizer for CircleAlgorithm {
    type Input = Circle;
    const FAMILY: &'static str = "circle";

    fn name(&self) -> &'static str {
        CircleAlgorithm::name(*self)
    }

    fn rasterize(&self, input: &Circle) -> Vec<GridPoint> {
        self.trace(*input)
    }
}

/// Midpoint circle: `d = 1 - r`, East `d += 2x + 3`, South-East
/// `d += 2(x - y) + 5`.
///
/// # Examples
///
/// ```
/// use trueno_raster::geometry::{Circle, GridPoint};
/// use trueno_raster::render::circle_midpoint;
///
/// let cells = circle_midpoint(Circle::new(GridPoint::new(10, 10), 3));
/// assert!(cells.contains(&GridPoint::new(13, 10)));
/// assert!(cells.contains(&GridPoint::new(10, 7)));
/// ```
#[must_use]
pub fn circle_midpoint(circle: Circle) -> Vec<GridPoint> {
    let r = i64::from(circle.radius);
    let (mut x, mut y) = (0i64, r);
    let mut d = 1 - r;
    let mut cells = Vec::new();

    while x <= y {
        plot8(&mut cells, circle.center, x, y);
        if d < 0 {
            d += 2 * x + 3;
        } else {
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }
    cells
}

/// Bresenham circle: `d = 3 - 2r`, East `d += 4x + 6`, South-East
/// `d += 4(x - y) + 10`.
#[must_use]
pub fn circle_bresenham(circle: Circle) -> Vec<GridPoint> {
    let r = i64::from(circle.radius);
    let (mut x, mut y) = (0i64, r);
    let mut d = 3 - 2 * r;
    let mut cells = Vec::new();

    while x <= y {
        plot8(&mut cells, circle.center, x, y);
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }
    cells
}

/// Mirror one octant step. On the axes (`x == 0`) and the diagonal
/// (`x == y`) only four cells are distinct, so only four are emitted.
/// Cells whose coordinates leave the `i32` range are skipped.
fn plot8(cells: &mut Vec<GridPoint>, center: GridPoint, x: i64, y: i64) {
    let at = |dx: i64, dy: i64| {
        let cx = i32::try_from(i64::from(center.x) + dx).ok()?;
        let cy = i32::try_from(i64::from(center.y) + dy).ok()?;
        Some(GridPoint::new(cx, cy))
    };

    if x == 0 {
        cells.extend([at(0, y), at(0, -y), at(y, 0), at(-y, 0)].into_iter().flatten());
    } else if x == y {
        cells.extend([at(x, x), at(-x, x), at(x, -x), at(-x, -x)].into_iter().flatten());
    } else {
        cells.extend(
            [
                at(x, y),
                at(-x, y),
                at(x, -y),
                at(-x, -y),
                at(y, x),
                at(-y, x),
                at(y, -x),
                at(-y, -x),
            ]
            .into_iter()
            .flatten(),
        );
    }
}
