//! Line rasterization.
//!
//! Both algorithms visit `max(|dx|, |dy|) + 1` cells and include both
//! endpoints. They agree exactly on axis-aligned and diagonal segments and
//! may pick a different cell on either side of a tie elsewhere.

use super::{PixelSink, Rasterizer};
use crate::color::Rgba;
use crate::error::Error;
use crate::geometry::{GridPoint, Segment};
use std::fmt;
use std::str::FromStr;

/// Line rasterization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineAlgorithm {
    /// Digital differential analyzer: fractional increments, rounded.
    Dda,
    /// Bresenham's integer error-term algorithm.
    Bresenham,
}

impl LineAlgorithm {
    /// Every strategy, in report order.
    pub const ALL: [Self; 2] = [Self::Dda, Self::Bresenham];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dda => "DDA",
            Self::Bresenham => "Bresenham",
        }
    }

    /// Emit the segment's cells from `p0` to `p1`.
    #[must_use]
    pub fn trace(self, segment: Segment) -> Vec<GridPoint> {
        match self {
            Self::Dda => line_dda(segment),
            Self::Bresenham => line_bresenham(segment),
        }
    }

    /// Rasterize and plot into a sink. Returns the number of cells emitted.
    pub fn draw<S: PixelSink + ?Sized>(self, sink: &mut S, segment: Segment, color: Rgba) -> usize {
        super::plot_all(sink, &self.trace(segment), color)
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dda" => Ok(Self::Dda),
            "bresenham" => Ok(Self::Bresenham),
            _ => Err(Error::UnknownAlgorithm {
                family: "line",
                name: s.to_string(),
            }),
        }
    }
}

impl Rasterizer for LineAlgorithm {
    type Input = Segment;
    const FAMILY: &'static str = "line";

    fn name(&self) -> &'static str {
        LineAlgorithm::name(*self)
    }

    fn rasterize(&self, input: &Segment) -> Vec<GridPoint> {
        self.trace(*input)
    }
}

/// Rasterize a line with the DDA algorithm.
///
/// Steps `steps = max(|dx|, |dy|)` times by `(dx/steps, dy/steps)` and rounds
/// each position to the nearest cell. A degenerate segment yields `p0`.
///
/// # Examples
///
/// ```
/// use trueno_raster::geometry::{GridPoint, Segment};
/// use trueno_raster::render::line_dda;
///
/// let cells = line_dda(Segment::from_coords(0, 0, 5, 2));
/// assert_eq!(cells.len(), 6);
/// assert_eq!(cells[5], GridPoint::new(5, 2));
/// ```
#[must_use]
pub fn line_dda(segment: Segment) -> Vec<GridPoint> {
    let Segment { p0, p1 } = segment;
    let dx = i64::from(p1.x) - i64::from(p0.x);
    let dy = i64::from(p1.y) - i64::from(p0.y);
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return vec![p0];
    }

    let x_inc = dx as f64 / steps as f64;
    let y_inc = dy as f64 / steps as f64;
    let mut x = f64::from(p0.x);
    let mut y = f64::from(p0.y);

    let mut cells = Vec::with_capacity(steps as usize + 1);
    for _ in 0..=steps {
        cells.push(GridPoint::new(x.round() as i32, y.round() as i32));
        x += x_inc;
        y += y_inc;
    }
    cells
}

/// Rasterize a line with Bresenham's algorithm.
///
/// # Examples
///
/// ```
/// use trueno_raster::geometry::{GridPoint, Segment};
/// use trueno_raster::render::line_bresenham;
///
/// let cells = line_bresenham(Segment::from_coords(0, 0, 3, 3));
/// assert_eq!(cells, vec![
///     GridPoint::new(0, 0),
///     GridPoint::new(1, 1),
///     GridPoint::new(2, 2),
///     GridPoint::new(3, 3),
/// ]);
/// ```
#[must_use]
pub fn line_bresenham(segment: Segment) -> Vec<GridPoint> {
    let Segment { p0, p1 } = segment;
    let dx = (i64::from(p1.x) - i64::from(p0.x)).abs();
    let dy = (i64::from(p1.y) - i64::from(p0.y)).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let sy = if p0.y < p1.y { 1 } else { -1 };
    let mut err = dx - dy;

    let (mut x, mut y) = (p0.x, p0.y);
    let mut cells = Vec::with_capacity(dx.max(dy) as usize + 1);

    loop {
        cells.push(GridPoint::new(x, y));

        if x == p1.x && y == p1.y {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PixelSet;
    use crate::render::RecordingSink;

    fn set(cells: &[GridPoint]) -> PixelSet {
        cells.iter().copied().collect()
    }

    #[test]
    fn test_line_horizontal() {
        for algo in LineAlgorithm::ALL {
            let cells = algo.trace(Segment::from_coords(0, 0, 3, 0));
            assert_eq!(
                cells,
                vec![
                    GridPoint::new(0, 0),
                    GridPoint::new(1, 0),
                    GridPoint::new(2, 0),
                    GridPoint::new(3, 0)
                ],
                "{algo}"
            );
        }
    }

    #[test]
    fn test_line_vertical_reversed() {
        for algo in LineAlgorithm::ALL {
            let cells = algo.trace(Segment::from_coords(2, 5, 2, 1));
            assert_eq!(cells.len(), 5, "{algo}");
            assert_eq!(cells[0], GridPoint::new(2, 5));
            assert_eq!(cells[4], GridPoint::new(2, 1));
            assert!(cells.iter().all(|p| p.x == 2));
        }
    }

    #[test]
    fn test_line_degenerate() {
        let p = GridPoint::new(7, -3);
        for algo in LineAlgorithm::ALL {
            assert_eq!(algo.trace(Segment::new(p, p)), vec![p], "{algo}");
        }
    }

    #[test]
    fn test_line_shallow_slope_fixture() {
        let expected = set(&[
            GridPoint::new(0, 0),
            GridPoint::new(1, 0),
            GridPoint::new(2, 1),
            GridPoint::new(3, 1),
            GridPoint::new(4, 2),
            GridPoint::new(5, 2),
        ]);
        let segment = Segment::from_coords(0, 0, 5, 2);
        assert_eq!(set(&line_dda(segment)), expected);
        assert_eq!(set(&line_bresenham(segment)), expected);
    }

    #[test]
    fn test_line_diagonal_all_octants() {
        for (x1, y1) in [(4, 4), (-4, 4), (4, -4), (-4, -4)] {
            let segment = Segment::from_coords(0, 0, x1, y1);
            let dda = set(&line_dda(segment));
            let bres = set(&line_bresenham(segment));
            assert_eq!(dda, bres);
            assert_eq!(dda.len(), 5);
        }
    }

    #[test]
    fn test_line_steep_negative() {
        let segment = Segment::from_coords(3, 10, 0, 0);
        let cells = line_bresenham(segment);
        assert_eq!(cells.len(), segment.cell_count());
        assert_eq!(cells.first(), Some(&GridPoint::new(3, 10)));
        assert_eq!(cells.last(), Some(&GridPoint::new(0, 0)));
    }

    #[test]
    fn test_line_draw_is_clipped_by_sink() {
        let mut sink = RecordingSink::new(5, 5);
        let emitted =
            LineAlgorithm::Bresenham.draw(&mut sink, Segment::from_coords(-3, 2, 8, 2), Rgba::RED);
        assert_eq!(emitted, 12);
        assert_eq!(sink.pixel_set().len(), 5);
    }

    #[test]
    fn test_line_algorithm_parse() {
        assert_eq!("dda".parse::<LineAlgorithm>().unwrap(), LineAlgorithm::Dda);
        assert_eq!("Bresenham".parse::<LineAlgorithm>().unwrap(), LineAlgorithm::Bresenham);
        assert!("wu".parse::<LineAlgorithm>().is_err());
    }
}
