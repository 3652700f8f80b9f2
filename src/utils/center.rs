use crate::math::{Point, Real};
use na;

/// Computes the centroid of a set of points.
///
/// Every point is weighted equally.
///
/// # Panics
///
/// Panics if `pts` is empty.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use bsphere3d::utils::center;
/// use bsphere3d::math::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
/// ];
///
/// let c = center(&points);
///
/// assert!((c.x - 4.0 / 3.0).abs() < 1e-6);
/// assert!((c.y - 4.0 / 3.0).abs() < 1e-6);
/// assert!(c.z.abs() < 1e-6);
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom: Real = na::convert::<f64, Real>(1.0 / (pts.len() as f64));

    pts.iter()
        .fold(Point::origin(), |res, pt| res + pt.coords * denom)
}
