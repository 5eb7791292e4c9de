//! Point-in-polygon classification by ray parity.

use crate::geometry::{GridPoint, Polygon};

/// Half-width of the window searched around the centroid by [`interior_seed`].
const SEED_SEARCH_RADIUS: i32 = 5;

/// Whether `p` lies inside a closed polygon, by even-odd ray casting.
///
/// A horizontal ray through `p.y` crosses edge `(a, b)` when
/// `a.y <= y < b.y` or `b.y <= y < a.y`; including exactly one endpoint keeps
/// shared vertices from counting twice, and horizontal edges never count.
/// A crossing is counted when `p.x` is left of the interpolated intercept.
///
/// Open polygons and polygons with fewer than three vertices contain nothing.
///
/// # Examples
///
/// ```
/// use trueno_raster::fill::is_inside;
/// use trueno_raster::geometry::{GridPoint, Polygon};
///
/// let square = Polygon::closed([(0, 0), (4, 0), (4, 4), (0, 4)]);
/// assert!(is_inside(&square, GridPoint::new(2, 2)));
/// assert!(!is_inside(&square, GridPoint::new(5, 2)));
/// ```
#[must_use]
pub fn is_inside(polygon: &Polygon, p: GridPoint) -> bool {
    if !polygon.is_fillable() {
        return false;
    }

    let (x, y) = (i64::from(p.x), i64::from(p.y));
    let crossings = polygon
        .edges()
        .filter(|edge| {
            let (ax, ay) = (i64::from(edge.p0.x), i64::from(edge.p0.y));
            let (bx, by) = (i64::from(edge.p1.x), i64::from(edge.p1.y));
            if !((ay <= y && y < by) || (by <= y && y < ay)) {
                return false;
            }
            // x < ax + (y - ay) * (bx - ax) / (by - ay), without division
            let lhs = i128::from(x - ax) * i128::from(by - ay);
            let rhs = i128::from(y - ay) * i128::from(bx - ax);
            if by > ay {
                lhs < rhs
            } else {
                lhs > rhs
            }
        })
        .count();

    crossings % 2 == 1
}

/// A cell inside the polygon to seed a flood from.
///
/// Tries the integer vertex centroid first, then scans the surrounding
/// 11 x 11 window row by row. `None` for degenerate polygons or when the
/// window holds no interior cell (very thin or far off-centre shapes).
#[must_use]
pub fn interior_seed(polygon: &Polygon) -> Option<GridPoint> {
    if !polygon.is_fillable() {
        return None;
    }
    let centroid = polygon.vertex_centroid()?;
    if is_inside(polygon, centroid) {
        return Some(centroid);
    }

    (-SEED_SEARCH_RADIUS..=SEED_SEARCH_RADIUS)
        .flat_map(|dx| (-SEED_SEARCH_RADIUS..=SEED_SEARCH_RADIUS).map(move |dy| (dx, dy)))
        .map(|(dx, dy)| centroid.offset(dx, dy))
        .find(|&p| is_inside(polygon, p))
}
