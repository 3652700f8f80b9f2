//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real, Vector, DIM};
use na;
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// Defined by its minimum and maximum corners. An `Aabb` doubles as a point accumulator: start
/// from [`Aabb::new_invalid`] (or call [`Aabb::invalidate`]) then feed it points one at a time
/// with [`Aabb::take_point`]. Inclusion is a commutative and idempotent fold, so the resulting
/// box does not depend on the order in which the points are given.
///
/// The circumscribed sphere of the box ([`Aabb::bounding_sphere`]) is a cheap, always valid,
/// but usually loose, bounding sphere of the points it was built from.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use bsphere3d::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// let mut aabb = Aabb::new_invalid();
/// assert!(!aabb.is_valid());
///
/// aabb.take_point(Point3::new(1.0, 2.0, 3.0));
/// aabb.take_point(Point3::new(-1.0, 4.0, 2.0));
/// aabb.take_point(Point3::new(0.0, 0.0, 5.0));
///
/// assert!(aabb.is_valid());
/// assert_eq!(aabb.mins, Point3::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point3::new(1.0, 4.0, 5.0));
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    ///
    /// Each component of `mins` should be smaller than or equal to the corresponding component
    /// of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` components set to `Real::max_values` and `maxs`
    /// components set to `-Real::max_values`.
    ///
    /// This is the neutral element of [`Aabb::take_point`].
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::max_value()).into(),
            Vector::repeat(-Real::max_value()).into(),
        )
    }

    /// Creates a new AABB enclosing all the given points.
    ///
    /// The result is invalid if the iterator is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts)
    }

    /// Resets this AABB to the invalid (empty) state.
    #[inline]
    pub fn invalidate(&mut self) {
        *self = Self::new_invalid();
    }

    /// Does this AABB contain at least one point?
    ///
    /// An AABB is valid iff. `mins <= maxs` on every axis.
    #[inline]
    pub fn is_valid(&self) -> bool {
        na::partial_le(&self.mins, &self.maxs)
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
    }

    /// The center of this AABB.
    ///
    /// Meaningless if the AABB is invalid.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        let half: Real = na::convert::<f64, Real>(0.5);
        (self.maxs - self.mins) * half
    }

    /// The radius of the sphere centered at [`Aabb::center`] that passes through every corner of
    /// this AABB, i.e., half the length of its diagonal.
    ///
    /// Returns zero for an invalid AABB.
    #[inline]
    pub fn bounding_sphere_radius(&self) -> Real {
        if self.is_valid() {
            self.half_extents().norm()
        } else {
            0.0
        }
    }

    /// The smallest bounding sphere containing this `Aabb`.
    ///
    /// ```rust
    /// # #[cfg(feature = "f32")] {
    /// use bsphere3d::bounding_volume::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let aabb = Aabb::new(Point3::new(-1.0, -2.0, -2.0), Point3::new(1.0, 2.0, 2.0));
    /// let sphere = aabb.bounding_sphere();
    ///
    /// assert_eq!(*sphere.center(), Point3::origin());
    /// assert_eq!(sphere.radius(), 3.0);
    /// # }
    /// ```
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center(), self.bounding_sphere_radius())
    }

    /// Does this AABB contain a point expressed in the same coordinate frame as `self`?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new_invalid()
    }
}
