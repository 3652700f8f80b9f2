use super::assert_covers;
use bsphere3d::bounding_volume::BoundingSphere;
use bsphere3d::enclosing::{self, BoundingSphereMethod, EnclosingError, EposVariant};
use bsphere3d::math::{Point, Real};

fn all_methods() -> Vec<BoundingSphereMethod> {
    let mut methods = vec![
        BoundingSphereMethod::Aabb,
        BoundingSphereMethod::Centroid,
        BoundingSphereMethod::Miniball,
    ];
    methods.extend(EposVariant::ALL.iter().map(|v| BoundingSphereMethod::Epos(*v)));
    methods
}

fn exact_methods() -> Vec<BoundingSphereMethod> {
    all_methods()
        .into_iter()
        .filter(|m| *m != BoundingSphereMethod::Aabb && *m != BoundingSphereMethod::Centroid)
        .collect()
}

#[test]
fn empty_input() {
    for method in all_methods() {
        assert_eq!(
            enclosing::bounding_sphere(&[], method),
            BoundingSphere::new(Point::origin(), 0.0)
        );
        assert_eq!(
            enclosing::try_bounding_sphere(&[], method),
            Err(EnclosingError::EmptyInput)
        );
    }
}

#[test]
fn single_and_repeated_point() {
    let pt = Point::new(-3.0, 12.5, 0.25);
    let repeated = vec![pt; 37];

    for method in all_methods() {
        for pts in [&repeated[..1], &repeated[..]] {
            let sphere = enclosing::bounding_sphere(pts, method);

            if method == BoundingSphereMethod::Centroid {
                // The centroid is accumulated with rounding errors.
                assert!(relative_eq!(sphere.center, pt, epsilon = 1.0e-5));
                assert!(sphere.radius < 1.0e-5);
            } else {
                assert_eq!(sphere.center, pt, "{:?}", method);
                assert_eq!(sphere.radius, 0.0, "{:?}", method);
            }
        }
    }
}

#[test]
fn two_points() {
    let pts = [Point::new(1.0, 2.0, 3.0), Point::new(-5.0, 2.0, 11.0)];

    for method in all_methods() {
        let sphere = enclosing::bounding_sphere(&pts, method);
        assert!(relative_eq!(sphere.center, Point::new(-2.0, 2.0, 7.0), epsilon = 1.0e-5));
        assert!(relative_eq!(sphere.radius, 5.0, epsilon = 1.0e-5));
    }
}

#[test]
fn collinear_points() {
    let pts: Vec<Point<Real>> = (0..=50)
        .map(|i| {
            let t = i as Real / 50.0;
            Point::new(10.0 * t, -4.0 * t, 2.0 * t)
        })
        .collect();
    let expected = BoundingSphere::new(
        na::center(&pts[0], &pts[50]),
        na::distance(&pts[0], &pts[50]) / 2.0,
    );

    for method in all_methods() {
        let sphere = enclosing::bounding_sphere(&pts, method);
        assert_covers(&sphere, &pts, 1.0e-4, "collinear");

        if exact_methods().contains(&method) {
            assert!(relative_eq!(sphere.center, expected.center, epsilon = 1.0e-4));
            assert!(relative_eq!(sphere.radius, expected.radius, epsilon = 1.0e-4));
        }
    }
}

#[test]
fn coplanar_points_on_a_circle() {
    let center = Point::new(5.0, -5.0, 2.0);
    let pts: Vec<Point<Real>> = (0..64)
        .map(|i| {
            let angle = i as Real / 64.0 * 2.0 * core::f32::consts::PI as Real;
            Point::new(
                center.x + 3.0 * angle.cos(),
                center.y + 3.0 * angle.sin(),
                center.z,
            )
        })
        .collect();

    for method in exact_methods() {
        let sphere = enclosing::bounding_sphere(&pts, method);
        assert_covers(&sphere, &pts, 1.0e-4, "circle");
        assert!(relative_eq!(sphere.center, center, epsilon = 1.0e-4));
        assert!(relative_eq!(sphere.radius, 3.0, epsilon = 1.0e-4));
    }
}

#[test]
fn non_finite_points_are_rejected() {
    let pts = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(Real::NAN, 0.0, 0.0),
        Point::new(0.0, Real::NEG_INFINITY, 0.0),
    ];

    assert_eq!(
        enclosing::try_miniball(&pts),
        Err(EnclosingError::NonFinitePoint(1))
    );
    assert_eq!(
        enclosing::try_bounding_sphere(&pts[..1], BoundingSphereMethod::default()),
        Ok(BoundingSphere::new(pts[0], 0.0))
    );
}
