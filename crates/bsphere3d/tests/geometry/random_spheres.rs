use bsphere3d::bounding_volume::BoundingSphere;
use bsphere3d::enclosing;
use bsphere3d::math::{Point, Real};
use na::RealField;
use rand::{Rng, SeedableRng};
use rand_isaac::IsaacRng;

const NUM_TRIALS: u64 = 10_000;
const NUM_SURFACE_POINTS: usize = 100;

fn random_sphere<R: Rng>(rng: &mut R) -> BoundingSphere {
    let center = Point::new(
        rng.gen_range(-1000.0..1000.0),
        rng.gen_range(-1000.0..1000.0),
        rng.gen_range(-1000.0..1000.0),
    );
    BoundingSphere::new(center, rng.gen_range(1.0..100.0))
}

fn random_surface_points<R: Rng>(rng: &mut R, sphere: &BoundingSphere) -> Vec<Point<Real>> {
    (0..NUM_SURFACE_POINTS)
        .map(|_| {
            let inclination = rng.gen_range(0.0..Real::pi());
            let azimuth = rng.gen_range(0.0..2.0 * Real::pi());
            sphere.cartesian_point(inclination, azimuth)
        })
        .collect()
}

fn assert_recovers_sphere(seed: u64) {
    let epsilon = 1.0e-3;
    let mut rng = IsaacRng::seed_from_u64(seed);
    let expected = random_sphere(&mut rng);
    let points = random_surface_points(&mut rng, &expected);

    for (label, sphere) in [
        ("miniball", enclosing::miniball(&points)),
        ("epos6", enclosing::epos6(&points)),
        ("epos14", enclosing::epos14(&points)),
        ("epos26", enclosing::epos26(&points)),
        ("epos98", enclosing::epos98(&points)),
    ] {
        assert!(
            na::distance(&sphere.center, &expected.center) < epsilon,
            "{} (seed {}): center {:?} instead of {:?}",
            label,
            seed,
            sphere.center,
            expected.center
        );
        assert!(
            (sphere.radius - expected.radius).abs() < epsilon,
            "{} (seed {}): radius {} instead of {}",
            label,
            seed,
            sphere.radius,
            expected.radius
        );
    }
}

#[test]
fn spheres_are_recovered_from_their_surface_points() {
    for seed in 0..NUM_TRIALS {
        assert_recovers_sphere(seed);
    }
}

#[test]
fn sphere_with_a_nearly_coplanar_support() {
    // Four of the surface points of this sphere form a thin tetrahedron that ends up as a
    // miniball support set.
    assert_recovers_sphere(2981);
}
