//! Scanline polygon fill.

use super::{Emitter, FillOutcome};
use crate::cancel::CancelToken;
use crate::geometry::{GridPoint, PixelSet, Polygon};

/// A non-horizontal edge ordered bottom to top (`lo.y < hi.y`).
#[derive(Debug, Clone, Copy)]
struct Edge {
    lo: GridPoint,
    hi: GridPoint,
}

impl Edge {
    fn intercept(&self, y: i32) -> f64 {
        let (x0, y0) = (f64::from(self.lo.x), f64::from(self.lo.y));
        let (x1, y1) = (f64::from(self.hi.x), f64::from(self.hi.y));
        x0 + (f64::from(y) - y0) * (x1 - x0) / (y1 - y0)
    }
}

fn edge_table(polygon: &Polygon) -> Vec<Edge> {
    polygon
        .edges()
        .filter(|e| e.p0.y != e.p1.y)
        .map(|e| {
            if e.p0.y < e.p1.y {
                Edge { lo: e.p0, hi: e.p1 }
            } else {
                Edge { lo: e.p1, hi: e.p0 }
            }
        })
        .collect()
}

/// Sorted x-intercepts of scanline `y`. Edges count on `lo.y <= y < hi.y`;
/// on the topmost scanline edges ending there count too, so the top row of
/// the polygon is not lost.
fn intercepts(edges: &[Edge], y: i32, max_y: i32) -> Vec<f64> {
    let mut xs: Vec<f64> = edges
        .iter()
        .filter(|e| (e.lo.y <= y && y < e.hi.y) || (y == max_y && e.hi.y == max_y))
        .map(|e| e.intercept(y))
        .collect();
    xs.sort_by(f64::total_cmp);
    xs
}

/// Inclusive spans between consecutive intercept pairs, truncated toward
/// zero. An unpaired trailing intercept yields no span.
fn spans(xs: &[f64]) -> impl Iterator<Item = (i32, i32)> + '_ {
    xs.chunks_exact(2).map(|pair| (pair[0] as i32, pair[1] as i32))
}

/// Fill a closed polygon row by row between pairs of sorted intercepts.
///
/// Spans are inclusive at both ends and intercepts are truncated toward
/// zero, so the fill covers the polygon's own outline. A trailing unpaired
/// intercept is ignored. Each cell is emitted once even where spans of
/// adjacent pairs touch.
///
/// # Examples
///
/// ```
/// use trueno_raster::fill::scanline_fill;
/// use trueno_raster::geometry::Polygon;
///
/// let square = Polygon::closed([(0, 0), (4, 0), (4, 4), (0, 4)]);
/// assert_eq!(scanline_fill(&square, None).len(), 25);
/// ```
#[must_use]
pub fn scanline_fill(polygon: &Polygon, cancel: Option<&CancelToken>) -> FillOutcome {
    let mut out = Emitter::new(cancel);
    let bbox = match polygon.bounding_box() {
        Some(bbox) if polygon.is_fillable() => bbox,
        _ => {
            log::debug!("scanline fill skipped: polygon is open or degenerate");
            return out.finish();
        }
    };

    let edges = edge_table(polygon);
    let mut seen = PixelSet::new();

    'rows: for y in bbox.min.y..=bbox.max.y {
        let xs = intercepts(&edges, y, bbox.max.y);
        if xs.len() % 2 == 1 {
            log::trace!("scanline {y}: {} intercepts, dropping the last", xs.len());
        }
        for (start, end) in spans(&xs) {
            for x in start..=end {
                let p = GridPoint::new(x, y);
                if seen.insert(p) && !out.emit(p) {
                    break 'rows;
                }
            }
        }
    }

    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(outcome: &FillOutcome, y: i32) -> Vec<i32> {
        let mut xs: Vec<i32> = outcome.cells.iter().filter(|p| p.y == y).map(|p| p.x).collect();
        xs.sort_unstable();
        xs
    }

    #[test]
    fn test_unit_square_fills_25_cells() {
        let square = Polygon::closed([(0, 0), (4, 0), (4, 4), (0, 4)]);
        let outcome = scanline_fill(&square, None);
        assert_eq!(outcome.len(), 25);
        assert!(!outcome.cancelled);
        for y in 0..=4 {
            assert_eq!(row(&outcome, y), vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_triangle_apex_row() {
        let tri = Polygon::closed([(0, 0), (8, 0), (4, 4)]);
        let outcome = scanline_fill(&tri, None);
        assert_eq!(row(&outcome, 0), (0..=8).collect::<Vec<_>>());
        assert_eq!(row(&outcome, 4), vec![4]);
        assert_eq!(row(&outcome, 2), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_odd_intercept_is_dropped() {
        let got: Vec<_> = spans(&[0.0, 6.0, 6.0]).collect();
        assert_eq!(got, vec![(0, 6)]);
        assert_eq!(spans(&[2.5]).count(), 0);
    }

    #[test]
    fn test_notched_top_keeps_both_peaks() {
        let poly = Polygon::closed([(0, 0), (6, 0), (6, 4), (3, 2), (0, 4)]);
        let edges = edge_table(&poly);
        assert_eq!(intercepts(&edges, 4, 4), vec![0.0, 0.0, 6.0, 6.0]);
        assert_eq!(intercepts(&edges, 3, 4), vec![0.0, 1.5, 4.5, 6.0]);

        let outcome = scanline_fill(&poly, None);
        assert_eq!(row(&outcome, 4), vec![0, 6]);
        assert_eq!(row(&outcome, 3), vec![0, 1, 4, 5, 6]);
    }

    #[test]
    fn test_concave_rows_split_into_spans() {
        let u = Polygon::closed([(0, 0), (9, 0), (9, 9), (6, 9), (6, 3), (3, 3), (3, 9), (0, 9)]);
        let outcome = scanline_fill(&u, None);
        assert_eq!(row(&outcome, 5), vec![0, 1, 2, 3, 6, 7, 8, 9]);
    }

    #[test]
    fn test_emits_each_cell_once() {
        let tri = Polygon::closed([(0, 0), (10, 3), (2, 9)]);
        let outcome = scanline_fill(&tri, None);
        assert_eq!(outcome.to_set().len(), outcome.len());
    }

    #[test]
    fn test_negative_coordinates() {
        let square = Polygon::closed([(-3, -3), (1, -3), (1, 1), (-3, 1)]);
        assert_eq!(scanline_fill(&square, None).len(), 25);
    }

    #[test]
    fn test_open_polygon_is_noop() {
        let mut open = Polygon::new();
        for v in [(0, 0), (4, 0), (4, 4)] {
            open.push(v);
        }
        assert!(scanline_fill(&open, None).is_empty());
    }
}
