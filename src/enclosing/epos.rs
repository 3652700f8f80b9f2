//! Fast, approximate bounding spheres based on extremal points.

use super::epos_normals::EPOS_NORMALS;
use super::miniball::{miniball, MINIBALL_TOLERANCE};
use crate::bounding_volume::details::point_cloud_bounding_sphere_with_center;
use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real, Vector};
use crate::utils;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The default number of rounds of the tightening step of the EPOS algorithms.
pub const DEFAULT_MAX_TIGHTENING_ROUNDS: usize = 8;

/// The members of the EPOS family of bounding sphere algorithms.
///
/// EPOS-k samples the point cloud along `k` fixed directions (`k / 2` normals, each taken with
/// both orientations). More directions give tighter initial spheres at a proportionally higher
/// sampling cost.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum EposVariant {
    /// 6 directions: the coordinate axes.
    Epos6,
    /// 14 directions: the coordinate axes and the cube diagonals.
    Epos14,
    /// 26 directions: the EPOS-14 directions and the cube face diagonals.
    Epos26,
    /// 98 directions.
    Epos98,
}

impl EposVariant {
    /// All the EPOS variants, from the cheapest to the tightest.
    pub const ALL: [EposVariant; 4] = [Self::Epos6, Self::Epos14, Self::Epos26, Self::Epos98];

    /// The number of sampling directions `k` of this variant.
    pub fn num_directions(self) -> usize {
        self.num_normals() * 2
    }

    /// The number of sampling normals of this variant, i.e., half its number of directions.
    pub fn num_normals(self) -> usize {
        match self {
            Self::Epos6 => 3,
            Self::Epos14 => 7,
            Self::Epos26 => 13,
            Self::Epos98 => 49,
        }
    }

    /// The sampling normals of this variant.
    pub fn normals(self) -> impl ExactSizeIterator<Item = Vector<Real>> {
        EPOS_NORMALS[..self.num_normals()]
            .iter()
            .map(|n| Vector::from(*n))
    }
}

/// An EPOS bounding sphere computation, with its configuration.
///
/// The algorithm runs in four steps:
///
/// 1. For every sampling normal, find the points of the cloud with the smallest and largest
///    projections on it (the extremal points).
/// 2. Build an initial sphere from the most distant pair of extremal points, then grow it to
///    contain every other extremal point.
/// 3. Scan the whole cloud once, growing the sphere toward every point found outside of it.
///    The resulting sphere contains every point.
/// 4. Tighten: compute the exact minimum enclosing ball of the extremal points and of the points
///    that had to be added during step 3. If it contains the whole cloud, it is the minimum
///    enclosing ball of the cloud and is returned. Otherwise the points it misses are added to
///    the set and the step is retried, at most [`Epos::max_tightening_rounds`] times, after
///    which the sphere of step 3 is returned.
///
/// With zero tightening rounds this is the pure approximate algorithm: `O(n * k)`.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use bsphere3d::enclosing::{Epos, EposVariant};
/// use nalgebra::Point3;
///
/// let points: Vec<_> = (0..1000)
///     .map(|i| {
///         let t = i as f32 * 0.1;
///         Point3::new(t.cos(), t.sin(), (t * 0.5).sin())
///     })
///     .collect();
///
/// let approx = Epos::new(EposVariant::Epos14)
///     .with_max_tightening_rounds(0)
///     .bounding_sphere(&points);
/// let tight = Epos::new(EposVariant::Epos14).bounding_sphere(&points);
///
/// assert!(tight.radius <= approx.radius + 1.0e-5);
/// assert!(points.iter().all(|pt| approx.distance_to_local_point(pt) < 1.0e-5));
/// # }
/// ```
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Epos {
    variant: EposVariant,
    max_tightening_rounds: usize,
}

impl Epos {
    /// An EPOS computation with the given variant and [`DEFAULT_MAX_TIGHTENING_ROUNDS`].
    pub fn new(variant: EposVariant) -> Self {
        Self {
            variant,
            max_tightening_rounds: DEFAULT_MAX_TIGHTENING_ROUNDS,
        }
    }

    /// Sets the maximum number of rounds of the tightening step. Zero disables it.
    #[must_use]
    pub fn with_max_tightening_rounds(mut self, rounds: usize) -> Self {
        self.max_tightening_rounds = rounds;
        self
    }

    /// The variant of this computation.
    pub fn variant(&self) -> EposVariant {
        self.variant
    }

    /// The maximum number of rounds of the tightening step.
    pub fn max_tightening_rounds(&self) -> usize {
        self.max_tightening_rounds
    }

    /// Computes a bounding sphere of `pts`.
    ///
    /// An empty input yields a zero-radius sphere at the origin.
    pub fn bounding_sphere(&self, pts: &[Point<Real>]) -> BoundingSphere {
        match pts {
            [] => return BoundingSphere::new(Point::origin(), 0.0),
            [pt] => return BoundingSphere::new(*pt, 0.0),
            _ => {}
        }

        let mut core = extremal_points(self.variant, pts);
        let mut sphere = initial_sphere(&core);

        for pt in pts {
            if !sphere.contains_local_point(pt) {
                sphere.enclose_point(pt);
                core.push(*pt);
            }
        }

        for _ in 0..self.max_tightening_rounds {
            let candidate = miniball(&core);
            let len_before = core.len();

            core.extend(pts.iter().filter(|pt| is_outside(&candidate, pt)));

            if core.len() == len_before {
                return point_cloud_bounding_sphere_with_center(pts, candidate.center);
            }
        }

        if self.max_tightening_rounds > 0 {
            log::debug!(
                "{:?}: tightening did not converge after {} rounds, keeping the grown sphere.",
                self.variant,
                self.max_tightening_rounds
            );
        }

        point_cloud_bounding_sphere_with_center(pts, sphere.center)
    }
}

/// The extremal points of `pts` along the normals of `variant`, without duplicates, in the
/// order of the normals table.
fn extremal_points(variant: EposVariant, pts: &[Point<Real>]) -> Vec<Point<Real>> {
    #[cfg(feature = "parallel")]
    let extremal_ids: Vec<_> = variant
        .normals()
        .collect::<Vec<_>>()
        .par_iter()
        .map(|n| utils::point_cloud_extremal_point_ids(n, pts))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let extremal_ids: Vec<_> = variant
        .normals()
        .map(|n| utils::point_cloud_extremal_point_ids(&n, pts))
        .collect();

    let mut ids: Vec<usize> = extremal_ids
        .into_iter()
        .flatten()
        .flat_map(|(min_id, max_id)| [min_id, max_id])
        .collect();
    ids.sort_unstable();
    ids.dedup();

    ids.into_iter().map(|id| pts[id]).collect()
}

/// The sphere with the most distant pair of `pts` as diameter, grown to contain the others.
fn initial_sphere(pts: &[Point<Real>]) -> BoundingSphere {
    let mut best = (0, 0);
    let mut best_dist = -1.0;

    for (i, a) in pts.iter().enumerate() {
        for (j, b) in pts.iter().enumerate().skip(i + 1) {
            let dist = na::distance_squared(a, b);
            if dist > best_dist {
                best_dist = dist;
                best = (i, j);
            }
        }
    }

    let (a, b) = (pts[best.0], pts[best.1]);
    let mut sphere = BoundingSphere::new(na::center(&a, &b), na::distance(&a, &b) * 0.5);

    for pt in pts {
        sphere.enclose_point(pt);
    }

    sphere
}

// `pt - center` is computed exactly up to a rounding relative to its own magnitude, so the
// tolerance only scales with the radius, not with the magnitude of the coordinates.
#[inline]
fn is_outside(sphere: &BoundingSphere, pt: &Point<Real>) -> bool {
    sphere.distance_to_local_point(pt) > sphere.radius * MINIBALL_TOLERANCE
}

/// A bounding sphere of `pts` computed with [`EposVariant::Epos6`].
pub fn epos6(pts: &[Point<Real>]) -> BoundingSphere {
    Epos::new(EposVariant::Epos6).bounding_sphere(pts)
}

/// A bounding sphere of `pts` computed with [`EposVariant::Epos14`].
pub fn epos14(pts: &[Point<Real>]) -> BoundingSphere {
    Epos::new(EposVariant::Epos14).bounding_sphere(pts)
}

/// A bounding sphere of `pts` computed with [`EposVariant::Epos26`].
pub fn epos26(pts: &[Point<Real>]) -> BoundingSphere {
    Epos::new(EposVariant::Epos26).bounding_sphere(pts)
}

/// A bounding sphere of `pts` computed with [`EposVariant::Epos98`].
pub fn epos98(pts: &[Point<Real>]) -> BoundingSphere {
    Epos::new(EposVariant::Epos98).bounding_sphere(pts)
}
