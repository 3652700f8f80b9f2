use crate::math::{Point, Real, Vector};

/// Computes the indices of the points with, respectively, the smallest and the largest
/// projection on `dir`.
///
/// Among points with equal projections, the first one wins. Returns `None` if `points` is empty.
#[inline]
pub fn point_cloud_extremal_point_ids(
    dir: &Vector<Real>,
    points: &[Point<Real>],
) -> Option<(usize, usize)> {
    let first = points.first()?;
    let mut min_pt = 0;
    let mut max_pt = 0;
    let mut min_dot = first.coords.dot(dir);
    let mut max_dot = min_dot;

    for (i, p) in points.iter().enumerate().skip(1) {
        let dot = p.coords.dot(dir);

        if dot < min_dot {
            min_dot = dot;
            min_pt = i;
        } else if dot > max_dot {
            max_dot = dot;
            max_pt = i;
        }
    }

    Some((min_pt, max_pt))
}
