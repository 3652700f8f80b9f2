use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Point, Real};
use crate::utils;
use na::{self, ComplexField};

/// Computes the bounding sphere of a set of point, given its center.
///
/// The radius is the largest distance between `center` and a point of `pts`, so every point of
/// `pts` is guaranteed to be inside of the result, up to the rounding of a single distance
/// computation.
#[inline]
pub fn point_cloud_bounding_sphere_with_center(
    pts: &[Point<Real>],
    center: Point<Real>,
) -> BoundingSphere {
    let mut sqradius = 0.0;

    for pt in pts.iter() {
        let distance_squared = na::distance_squared(pt, &center);

        if distance_squared > sqradius {
            sqradius = distance_squared
        }
    }

    BoundingSphere::new(center, ComplexField::sqrt(sqradius))
}

/// Computes a bounding sphere of the specified set of point, centered at its centroid.
///
/// Returns a zero-radius sphere at the origin if `pts` is empty.
#[inline]
pub fn point_cloud_bounding_sphere(pts: &[Point<Real>]) -> BoundingSphere {
    if pts.is_empty() {
        return BoundingSphere::new(Point::origin(), 0.0);
    }

    point_cloud_bounding_sphere_with_center(pts, utils::center(pts))
}

/// Computes the sphere circumscribed to the AABB of the specified set of point.
///
/// Returns a zero-radius sphere at the origin if `pts` is empty.
#[inline]
pub fn point_cloud_aabb_bounding_sphere(pts: &[Point<Real>]) -> BoundingSphere {
    let aabb = Aabb::from_points(pts.iter().copied());

    if aabb.is_valid() {
        aabb.bounding_sphere()
    } else {
        BoundingSphere::new(Point::origin(), 0.0)
    }
}
