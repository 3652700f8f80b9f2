use crate::bounding_volume::details::point_cloud_bounding_sphere_with_center;
use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};
use arrayvec::ArrayVec;
use na::{Matrix2, Matrix3, Vector2, Vector3};

/// Gram systems whose determinant, relative to the product of their diagonal, falls below this
/// value are considered singular.
///
/// This ratio is the squared volume of the simplex spanned by the support points divided by the
/// squared volume of the box spanned by its edges, so it measures how close to collinear or
/// coplanar the support points are, independently of their scale. The systems are always solved
/// in `f64`, so only supports that are degenerate up to the rounding of their coordinates are
/// rejected.
pub const SINGULARITY_TOLERANCE: f64 = 1.0e-10;

/// The smallest sphere passing through every point of `support`, with a center lying on their
/// affine hull.
///
/// For 1 to 4 affinely independent points this is their circumsphere. If the support points are
/// affinely dependent (duplicate, collinear or coplanar points), one of them is dropped and the
/// smallest sphere through the others that still contains it is returned.
///
/// The radius is the largest distance from the center to the support points, so the sphere
/// always contains all of them. Returns `None` iff. `support` is empty.
pub(crate) fn circumsphere(support: &[Point<Real>]) -> Option<BoundingSphere> {
    let (origin, rest) = support.split_first()?;

    let center = match rest {
        [] => Some(*origin),
        [a] => Some(na::center(origin, a)),
        _ => affine_circumcenter(origin, rest),
    };

    match center {
        Some(center) => Some(point_cloud_bounding_sphere_with_center(support, center)),
        None => reduced_circumsphere(support),
    }
}

/// The center of the sphere through `origin` and the 2 or 3 points of `rest` lying on their
/// affine hull, or `None` if these points are affinely dependent.
fn affine_circumcenter(origin: &Point<Real>, rest: &[Point<Real>]) -> Option<Point<Real>> {
    let origin = origin.cast::<f64>();
    let edges: ArrayVec<Vector3<f64>, 3> =
        rest.iter().map(|pt| pt.cast::<f64>() - origin).collect();

    let offset = match edges.as_slice() {
        [va, vb] => {
            let gram = Matrix2::new(va.dot(va), va.dot(vb), vb.dot(va), vb.dot(vb)) * 2.0;
            let rhs = Vector2::new(va.norm_squared(), vb.norm_squared());
            let l = solve_gram2(gram, rhs)?;
            va * l.x + vb * l.y
        }
        [va, vb, vc] => {
            let basis = Matrix3::from_columns(&[*va, *vb, *vc]);
            let gram = basis.transpose() * basis * 2.0;
            let rhs = Vector3::new(va.norm_squared(), vb.norm_squared(), vc.norm_squared());
            basis * solve_gram3(gram, rhs)?
        }
        _ => unreachable!("A support set has at most 4 points."),
    };

    Some((origin + offset).cast::<Real>())
}

fn is_singular(det: f64, diag_product: f64) -> bool {
    det <= diag_product * SINGULARITY_TOLERANCE
}

fn solve_gram2(gram: Matrix2<f64>, rhs: Vector2<f64>) -> Option<Vector2<f64>> {
    if is_singular(gram.determinant(), gram.m11 * gram.m22) {
        return None;
    }

    gram.cholesky().map(|chol| chol.solve(&rhs))
}

fn solve_gram3(gram: Matrix3<f64>, rhs: Vector3<f64>) -> Option<Vector3<f64>> {
    if is_singular(gram.determinant(), gram.m11 * gram.m22 * gram.m33) {
        return None;
    }

    gram.cholesky().map(|chol| chol.solve(&rhs))
}

// An affinely dependent support of a minimum ball is cocircular (or collinear), so dropping one
// of its points keeps the same ball. Every point is tried since the dependent one is unknown.
fn reduced_circumsphere(support: &[Point<Real>]) -> Option<BoundingSphere> {
    log::debug!(
        "Affinely dependent support set of {} points: dropping one of them.",
        support.len()
    );

    (0..support.len())
        .filter_map(|dropped| {
            let subset: ArrayVec<Point<Real>, 3> = support
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != dropped)
                .map(|(_, pt)| *pt)
                .collect();
            circumsphere(&subset)
        })
        .map(|sphere| point_cloud_bounding_sphere_with_center(support, sphere.center))
        .min_by(|a, b| a.radius.total_cmp(&b.radius))
}
