//! Bounding spheres of point clouds.
//!
//! Every function of this module maps a slice of points to a [`BoundingSphere`] containing all
//! of them:
//!
//! | Function                     | Result                                     | Cost             |
//! |------------------------------|--------------------------------------------|------------------|
//! | [`aabb_bounding_sphere`]     | sphere circumscribed to the AABB           | `O(n)`           |
//! | [`centroid_bounding_sphere`] | sphere centered at the centroid            | `O(n)`           |
//! | [`miniball`]                 | minimum enclosing ball                     | expected `O(n)`  |
//! | [`epos6`] .. [`epos98`]      | near-minimal (usually minimal) sphere      | `O(n * k)`       |
//!
//! None of them fail: an empty input yields a zero-radius sphere at the origin. The
//! [`try_bounding_sphere`] and [`try_miniball`] variants reject empty inputs and non-finite
//! coordinates instead.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "f32")] {
//! use bsphere3d::enclosing::{self, BoundingSphereMethod, EposVariant};
//! use nalgebra::Point3;
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(4.0, 0.0, 0.0),
//!     Point3::new(0.0, 3.0, 0.0),
//! ];
//!
//! let exact = enclosing::miniball(&points);
//! let aabb = enclosing::bounding_sphere(&points, BoundingSphereMethod::Aabb);
//! let epos = enclosing::bounding_sphere(&points, BoundingSphereMethod::Epos(EposVariant::Epos26));
//!
//! assert!((exact.radius - 2.5).abs() < 1.0e-5);
//! assert!(exact.radius <= aabb.radius);
//! assert!(exact.radius <= epos.radius + 1.0e-5);
//! # }
//! ```

pub use self::epos::{
    epos14, epos26, epos6, epos98, Epos, EposVariant, DEFAULT_MAX_TIGHTENING_ROUNDS,
};
pub use self::error::EnclosingError;
pub use self::miniball::{miniball, miniball_with_seed, try_miniball, MINIBALL_TOLERANCE};
pub use crate::bounding_volume::details::{
    point_cloud_aabb_bounding_sphere as aabb_bounding_sphere,
    point_cloud_bounding_sphere as centroid_bounding_sphere,
};
pub use self::circumsphere::SINGULARITY_TOLERANCE;

use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};

mod circumsphere;
mod epos;
mod epos_normals;
mod error;
mod miniball;

/// The algorithms available to compute the bounding sphere of a point cloud.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub enum BoundingSphereMethod {
    /// The sphere circumscribed to the AABB of the points.
    Aabb,
    /// The sphere centered at the centroid of the points.
    Centroid,
    /// The exact minimum enclosing ball.
    #[default]
    Miniball,
    /// An EPOS approximation, with the default configuration.
    Epos(EposVariant),
}

/// Computes a bounding sphere of `pts` with the given method.
pub fn bounding_sphere(pts: &[Point<Real>], method: BoundingSphereMethod) -> BoundingSphere {
    match method {
        BoundingSphereMethod::Aabb => aabb_bounding_sphere(pts),
        BoundingSphereMethod::Centroid => centroid_bounding_sphere(pts),
        BoundingSphereMethod::Miniball => miniball(pts),
        BoundingSphereMethod::Epos(variant) => Epos::new(variant).bounding_sphere(pts),
    }
}

/// Computes a bounding sphere of `pts` with the given method, after checking that `pts` is not
/// empty and only contains finite coordinates.
pub fn try_bounding_sphere(
    pts: &[Point<Real>],
    method: BoundingSphereMethod,
) -> Result<BoundingSphere, EnclosingError> {
    validate_points(pts)?;
    Ok(bounding_sphere(pts, method))
}

fn validate_points(pts: &[Point<Real>]) -> Result<(), EnclosingError> {
    if pts.is_empty() {
        return Err(EnclosingError::EmptyInput);
    }

    match pts
        .iter()
        .position(|pt| pt.iter().any(|coord| !coord.is_finite()))
    {
        Some(id) => Err(EnclosingError::NonFinitePoint(id)),
        None => Ok(()),
    }
}
