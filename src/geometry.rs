//! Grid geometry: points, segments, circles, polygons and grid extents.
//!
//! Everything here lives on the integer grid. Shapes are plain values;
//! the rasterizers in [`crate::render`] and [`crate::fill`] turn them into
//! cells.

use crate::error::Error;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A set of grid cells. Membership only, no ordering.
pub type PixelSet = HashSet<GridPoint>;

/// An integer cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct GridPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl GridPoint {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new grid point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for GridPoint {
    type Err = Error;

    /// Parse the `"x,y"` form used on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPoint(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(x, y))
    }
}

/// A line segment between two grid points. May be degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment {
    /// Start point.
    pub p0: GridPoint,
    /// End point.
    pub p1: GridPoint,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(p0: GridPoint, p1: GridPoint) -> Self {
        Self { p0, p1 }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(GridPoint::new(x0, y0), GridPoint::new(x1, y1))
    }

    /// Number of cells any rasterization of this segment visits:
    /// `max(|dx|, |dy|) + 1`.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let dx = (i64::from(self.p1.x) - i64::from(self.p0.x)).unsigned_abs();
        let dy = (i64::from(self.p1.y) - i64::from(self.p0.y)).unsigned_abs();
        dx.max(dy) as usize + 1
    }

    /// Whether both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.p0 == self.p1
    }
}

impl FromStr for Segment {
    type Err = Error;

    /// Parse `"x0,y0 x1,y1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let points = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<GridPoint>, _>>()?;
        match points.as_slice() {
            &[p0, p1] => Ok(Self::new(p0, p1)),
            _ => Err(Error::InvalidShape {
                kind: "segment",
                input: s.to_string(),
                expected: "\"x0,y0 x1,y1\"",
            }),
        }
    }
}

/// A circle with an integer center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Circle {
    /// Center cell.
    pub center: GridPoint,
    /// Radius in cells (non-negative).
    pub radius: u32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: GridPoint, radius: u32) -> Self {
        Self { center, radius }
    }
}

impl FromStr for Circle {
    type Err = Error;

    /// Parse `"cx,cy r"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidShape {
            kind: "circle",
            input: s.to_string(),
            expected: "\"cx,cy r\" with r >= 0",
        };
        let mut parts = s.split_whitespace();
        let (Some(center), Some(radius), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        let center = center.parse()?;
        let radius = radius.parse().map_err(|_| invalid())?;
        Ok(Self::new(center, radius))
    }
}

/// Axis-aligned inclusive cell extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Smallest cell coordinate.
    pub min: GridPoint,
    /// Largest cell coordinate.
    pub max: GridPoint,
}

impl BoundingBox {
    /// Whether a cell lies inside the box (inclusive on every side).
    #[must_use]
    pub fn contains(&self, p: GridPoint) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// An ordered vertex list. Insertion order is edge order.
///
/// Vertices can only be appended while the polygon is open; closing it
/// freezes the list until [`Polygon::clear`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polygon {
    vertices: Vec<GridPoint>,
    closed: bool,
}

impl Polygon {
    /// Create an empty, open polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a closed polygon from a vertex list.
    #[must_use]
    pub fn closed<I, P>(vertices: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<GridPoint>,
    {
        Self {
            vertices: vertices.into_iter().map(Into::into).collect(),
            closed: true,
        }
    }

    /// Append a vertex. Returns `false` (and ignores the vertex) once closed.
    pub fn push(&mut self, vertex: impl Into<GridPoint>) -> bool {
        if self.closed {
            return false;
        }
        self.vertices.push(vertex.into());
        true
    }

    /// Close the polygon. Closing with fewer than three vertices is allowed
    /// but leaves the polygon degenerate.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Drop all vertices and reopen.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.closed = false;
    }

    /// The vertex list.
    #[must_use]
    pub fn vertices(&self) -> &[GridPoint] {
        &self.vertices
    }

    /// Whether the polygon has been closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Closed with at least three vertices; the precondition of every fill.
    #[must_use]
    pub fn is_fillable(&self) -> bool {
        self.closed && self.vertices.len() >= 3
    }

    /// Implicit edges: `i -> i+1 mod n` when closed, `i -> i+1` when open.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        let count = match (self.closed, n) {
            (_, 0 | 1) => 0,
            (true, _) => n,
            (false, _) => n - 1,
        };
        (0..count).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Vertex extents, or `None` without vertices.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = *self.vertices.first()?;
        let bbox = self.vertices.iter().fold(
            BoundingBox {
                min: first,
                max: first,
            },
            |b, v| BoundingBox {
                min: GridPoint::new(b.min.x.min(v.x), b.min.y.min(v.y)),
                max: GridPoint::new(b.max.x.max(v.x), b.max.y.max(v.y)),
            },
        );
        Some(bbox)
    }

    /// Integer centroid of the vertices (floor division, as cells).
    #[must_use]
    pub fn vertex_centroid(&self) -> Option<GridPoint> {
        let n = i64::try_from(self.vertices.len()).ok().filter(|&n| n > 0)?;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0i64, 0i64), |(sx, sy), v| (sx + i64::from(v.x), sy + i64::from(v.y)));
        Some(GridPoint::new(
            sx.div_euclid(n) as i32,
            sy.div_euclid(n) as i32,
        ))
    }
}

impl FromStr for Polygon {
    type Err = Error;

    /// Parse whitespace-separated `"x,y"` vertices into a closed polygon.
    /// Fewer than three vertices parse fine and yield a degenerate polygon.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let vertices = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<GridPoint>, _>>()?;
        Ok(Self::closed(vertices))
    }
}

/// Addressable grid extents `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridBounds {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl GridBounds {
    /// Create grid extents.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Grid that covers a screen of `screen_width x screen_height` pixels
    /// with square cells of `cell_size` pixels (partial cells dropped).
    #[must_use]
    pub fn from_screen(screen_width: u32, screen_height: u32, cell_size: u32) -> Self {
        let cell = cell_size.max(1);
        Self::new(screen_width / cell, screen_height / cell)
    }

    /// Whether a cell is addressable.
    #[must_use]
    pub fn contains(&self, p: GridPoint) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    /// Total number of cells.
    #[must_use]
    pub const fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Mapping between grid cells and screen pixels for square cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMapping {
    cell_size: u32,
}

impl CellMapping {
    /// Create a mapping; a zero cell size is treated as one pixel.
    #[must_use]
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size.max(1),
        }
    }

    /// Side length of a cell in pixels.
    #[must_use]
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Top-left screen pixel of a cell.
    #[must_use]
    pub fn to_screen(&self, cell: GridPoint) -> (i64, i64) {
        let size = i64::from(self.cell_size);
        (i64::from(cell.x) * size, i64::from(cell.y) * size)
    }

    /// Cell containing a screen pixel.
    #[must_use]
    pub fn to_grid(&self, x: i64, y: i64) -> GridPoint {
        let size = i64::from(self.cell_size);
        GridPoint::new(x.div_euclid(size) as i32, y.div_euclid(size) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_parse() {
        assert_eq!("3,4".parse::<GridPoint>().unwrap(), GridPoint::new(3, 4));
        assert_eq!(" -2 , 7 ".parse::<GridPoint>().unwrap(), GridPoint::new(-2, 7));
        assert!("3;4".parse::<GridPoint>().is_err());
        assert!("x,4".parse::<GridPoint>().is_err());
    }

    #[test]
    fn test_shape_parse() {
        let seg: Segment = "0,0 5,2".parse().unwrap();
        assert_eq!(seg, Segment::from_coords(0, 0, 5, 2));
        assert!(matches!("0,0".parse::<Segment>(), Err(Error::InvalidShape { .. })));
        assert!(matches!("0,0 a,1".parse::<Segment>(), Err(Error::InvalidPoint(_))));

        let circle: Circle = "10,-3 7".parse().unwrap();
        assert_eq!(circle, Circle::new(GridPoint::new(10, -3), 7));
        assert!("10,10 -1".parse::<Circle>().is_err());
        assert!("10,10".parse::<Circle>().is_err());

        let poly: Polygon = "0,0 4,0  4,4\t0,4".parse().unwrap();
        assert!(poly.is_fillable());
        assert_eq!(poly.vertices().len(), 4);
        assert!(!"0,0 4,0".parse::<Polygon>().unwrap().is_fillable());
    }

    #[test]
    fn test_point_distance() {
        let d = GridPoint::new(0, 0).distance(GridPoint::new(3, 4));
        assert!((d - 5.0).abs() < 1e-9);
        let far = GridPoint::new(i32::MIN, 0).distance(GridPoint::new(i32::MAX, 0));
        assert!((far - f64::from(u32::MAX)).abs() < 1e-3);
    }

    #[test]
    fn test_segment_cell_count() {
        assert_eq!(Segment::from_coords(0, 0, 5, 2).cell_count(), 6);
        assert_eq!(Segment::from_coords(3, 3, 3, 3).cell_count(), 1);
        assert_eq!(Segment::from_coords(0, 0, -2, -7).cell_count(), 8);
    }

    #[test]
    fn test_segment_cell_count_full_i32_span() {
        let wide = Segment::from_coords(i32::MIN, 0, i32::MAX, 0);
        assert_eq!(wide.cell_count(), u32::MAX as usize + 1);
        let tall = Segment::from_coords(5, i32::MAX, 5, i32::MIN);
        assert_eq!(tall.cell_count(), u32::MAX as usize + 1);
    }

    #[test]
    fn test_polygon_append_only_until_closed() {
        let mut poly = Polygon::new();
        assert!(poly.push((0, 0)));
        assert!(poly.push((4, 0)));
        assert!(!poly.is_fillable());
        assert!(poly.push((4, 4)));
        poly.close();
        assert!(poly.is_fillable());
        assert!(!poly.push((0, 4)));
        assert_eq!(poly.vertices().len(), 3);

        poly.clear();
        assert!(!poly.is_closed());
        assert!(poly.vertices().is_empty());
    }

    #[test]
    fn test_polygon_edges_closed_vs_open() {
        let mut poly = Polygon::new();
        poly.push((0, 0));
        poly.push((4, 0));
        poly.push((4, 4));
        assert_eq!(poly.edges().count(), 2);

        poly.close();
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], Segment::from_coords(4, 4, 0, 0));
    }

    #[test]
    fn test_degenerate_closed_polygon() {
        let poly = Polygon::closed([(0, 0), (5, 5)]);
        assert!(poly.is_closed());
        assert!(!poly.is_fillable());
    }

    #[test]
    fn test_bounding_box() {
        let poly = Polygon::closed([(2, 9), (-1, 3), (7, 4)]);
        let bbox = poly.bounding_box().unwrap();
        assert_eq!(bbox.min, GridPoint::new(-1, 3));
        assert_eq!(bbox.max, GridPoint::new(7, 9));
        assert!(bbox.contains(GridPoint::new(7, 9)));
        assert!(!bbox.contains(GridPoint::new(8, 9)));
        assert!(Polygon::new().bounding_box().is_none());
    }

    #[test]
    fn test_vertex_centroid() {
        let poly = Polygon::closed([(0, 0), (4, 0), (4, 4), (0, 4)]);
        assert_eq!(poly.vertex_centroid(), Some(GridPoint::new(2, 2)));
        assert_eq!(Polygon::new().vertex_centroid(), None);
    }

    #[test]
    fn test_grid_bounds() {
        let bounds = GridBounds::from_screen(1920, 1080, 20);
        assert_eq!(bounds, GridBounds::new(96, 54));
        assert!(bounds.contains(GridPoint::new(0, 0)));
        assert!(bounds.contains(GridPoint::new(95, 53)));
        assert!(!bounds.contains(GridPoint::new(96, 0)));
        assert!(!bounds.contains(GridPoint::new(-1, 0)));
        assert_eq!(bounds.area(), 96 * 54);
    }

    #[test]
    fn test_cell_mapping() {
        let mapping = CellMapping::new(20);
        assert_eq!(mapping.to_screen(GridPoint::new(3, 2)), (60, 40));
        assert_eq!(mapping.to_grid(65, 59), GridPoint::new(3, 2));
        assert_eq!(mapping.to_grid(-1, 0), GridPoint::new(-1, 0));
        assert_eq!(CellMapping::new(0).cell_size(), 1);
    }
}
