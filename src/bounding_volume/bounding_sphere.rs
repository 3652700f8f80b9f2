//! Bounding sphere.

use crate::math::{Point, Real, Vector};
use na::{self, ComplexField};

/// A Bounding Sphere.
///
/// A sphere given by its center and its (non-negative) radius. This is the output type of every
/// algorithm of the [`crate::enclosing`] module.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct BoundingSphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The minimum enclosing ball of a set of points.
    ///
    /// This is a shortcut for [`crate::enclosing::miniball`].
    pub fn from_points(pts: &[Point<Real>]) -> BoundingSphere {
        crate::enclosing::miniball(pts)
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The signed distance between `pt` and the surface of this sphere.
    ///
    /// Negative if `pt` is strictly inside of the sphere.
    #[inline]
    pub fn distance_to_local_point(&self, pt: &Point<Real>) -> Real {
        na::distance(&self.center, pt) - self.radius
    }

    /// Is `pt` inside of this sphere (boundary included)?
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius * self.radius
    }

    /// The point of the sphere surface with the given spherical coordinates.
    ///
    /// The `inclination` is the angle from the `+z` axis, in `[0, pi]`, and the `azimuth` is the
    /// angle from the `+x` axis in the `xy` plane, in `[0, 2 * pi)`.
    ///
    /// ```rust
    /// # #[cfg(feature = "f32")] {
    /// use bsphere3d::bounding_volume::BoundingSphere;
    /// use nalgebra::Point3;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let sphere = BoundingSphere::new(Point3::new(1.0, 2.0, 3.0), 2.0);
    /// let pt = sphere.cartesian_point(FRAC_PI_2, 0.0);
    ///
    /// assert!((pt - Point3::new(3.0, 2.0, 3.0)).norm() < 1.0e-6);
    /// assert!(sphere.distance_to_local_point(&pt).abs() < 1.0e-6);
    /// # }
    /// ```
    pub fn cartesian_point(&self, inclination: Real, azimuth: Real) -> Point<Real> {
        let (sin_incl, cos_incl) = ComplexField::sin_cos(inclination);
        let (sin_azim, cos_azim) = ComplexField::sin_cos(azimuth);
        let dir = Vector::new(sin_incl * cos_azim, sin_incl * sin_azim, cos_incl);

        self.center + dir * self.radius
    }

    /// Grows this sphere just enough to contain both itself and `pt`.
    ///
    /// The new sphere is tangent to the old one at the point opposite to `pt`. Nothing happens if
    /// `pt` is already inside of the sphere.
    #[inline]
    pub fn enclose_point(&mut self, pt: &Point<Real>) {
        let dir = pt - self.center;
        let dist = dir.norm();

        if dist > self.radius {
            let new_radius = (self.radius + dist) * 0.5;
            self.center += dir * ((new_radius - self.radius) / dist);
            self.radius = new_radius;
        }
    }
}
