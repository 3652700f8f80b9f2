//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;

#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;

#[doc(hidden)]
pub mod aabb;
mod aabb_utils;

#[doc(hidden)]
pub mod bounding_sphere;
mod bounding_sphere_utils;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb_utils::local_point_cloud_aabb;
    pub use super::bounding_sphere_utils::{
        point_cloud_aabb_bounding_sphere, point_cloud_bounding_sphere,
        point_cloud_bounding_sphere_with_center,
    };
}
