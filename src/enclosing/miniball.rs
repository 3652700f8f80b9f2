//! Exact minimum enclosing ball.

use super::circumsphere::circumsphere;
use super::EnclosingError;
use crate::bounding_volume::details::point_cloud_bounding_sphere_with_center;
use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::utils::{self, DEFAULT_SHUFFLE_SEED};
use arrayvec::ArrayVec;

/// Relative tolerance of the "is this point outside of the ball" test of [`miniball`].
///
/// A point is outside of a ball only if its distance to the ball center exceeds the radius by
/// more than `MINIBALL_TOLERANCE * (radius + |center|_inf)`.
pub const MINIBALL_TOLERANCE: Real = DEFAULT_EPSILON * 4.0;

type SupportSet = ArrayVec<Point<Real>, 4>;

/// Computes the minimum enclosing ball of a set of points.
///
/// This is Welzl's randomized incremental algorithm with the move-to-front heuristic, running in
/// expected linear time. The points are shuffled with a fixed seed beforehand, so the result is
/// reproducible and adversarial input orders (e.g. sorted points) do not degrade performance.
///
/// An empty input yields a zero-radius sphere at the origin. Duplicate, collinear or coplanar
/// points are supported.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use bsphere3d::enclosing::miniball;
/// use nalgebra::Point3;
///
/// let points = vec![
///     Point3::new(-1.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 0.5, 0.0),
///     Point3::new(0.0, 0.0, 0.25),
/// ];
///
/// let ball = miniball(&points);
/// assert!((ball.center - Point3::origin()).norm() < 1.0e-6);
/// assert!((ball.radius - 1.0).abs() < 1.0e-6);
/// # }
/// ```
pub fn miniball(pts: &[Point<Real>]) -> BoundingSphere {
    miniball_with_seed(pts, DEFAULT_SHUFFLE_SEED)
}

/// Computes the minimum enclosing ball of a set of points, shuffling them with the given seed.
///
/// The seed only affects performance and rounding errors: the result is the minimum enclosing
/// ball for every seed.
pub fn miniball_with_seed(pts: &[Point<Real>], seed: u64) -> BoundingSphere {
    match pts {
        [] => return BoundingSphere::new(Point::origin(), 0.0),
        [pt] => return BoundingSphere::new(*pt, 0.0),
        _ => {}
    }

    // Working relative to the AABB center keeps the magnitude of the coordinates in the order
    // of the radius, which keeps the support-set solves well conditioned.
    let origin = Aabb::from_points(pts.iter().copied()).center();
    let mut list: Vec<_> = pts.iter().map(|pt| Point::from(pt - origin)).collect();
    utils::shuffle(&mut list, seed);

    let end = list.len();
    let mut support = SupportSet::new();
    let center = move_to_front(&mut list, end, &mut support)
        .map(|ball| ball.center + origin.coords)
        .unwrap_or(origin);

    point_cloud_bounding_sphere_with_center(pts, center)
}

/// Computes the minimum enclosing ball of a set of points after checking that it is not empty
/// and only contains finite coordinates.
pub fn try_miniball(pts: &[Point<Real>]) -> Result<BoundingSphere, EnclosingError> {
    super::validate_points(pts)?;
    Ok(miniball(pts))
}

/// The smallest ball containing `list[..end]` with every point of `support` on its boundary.
///
/// Every point of the prefix found outside of the current ball is moved to the front of the
/// list, so points that tend to define the ball are tried first by the enclosing recursion
/// levels.
fn move_to_front(
    list: &mut [Point<Real>],
    end: usize,
    support: &mut SupportSet,
) -> Option<BoundingSphere> {
    let mut ball = circumsphere(support);

    if support.is_full() {
        return ball;
    }

    for i in 0..end {
        let pt = list[i];

        if is_outside(ball.as_ref(), &pt) {
            support.push(pt);
            let new_ball = move_to_front(list, i, support);
            let _ = support.pop();

            ball = new_ball;
            list[..=i].rotate_right(1);
        }
    }

    ball
}

#[inline]
fn is_outside(ball: Option<&BoundingSphere>, pt: &Point<Real>) -> bool {
    match ball {
        None => true,
        Some(ball) => {
            let scale = ball.radius + ball.center.coords.amax();
            let max_dist = ball.radius + scale * MINIBALL_TOLERANCE;
            na::distance_squared(&ball.center, pt) > max_dist * max_dist
        }
    }
}
