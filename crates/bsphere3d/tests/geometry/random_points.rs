use super::{assert_covers, random_cube_points};
use bsphere3d::bounding_volume::{Aabb, BoundingSphere};
use bsphere3d::enclosing::{self, Epos, EposVariant};
use bsphere3d::math::Real;

const COORDINATE_RANGE: Real = 1000.0;
const NUM_SEEDS: u64 = 10;

#[test]
fn bounding_spheres_of_random_points() {
    let max_radius = (3.0 as Real).sqrt() * COORDINATE_RANGE;
    let epsilon = 1.0 / COORDINATE_RANGE;

    for seed in 0..NUM_SEEDS {
        let points = random_cube_points(seed, 100_000, COORDINATE_RANGE);

        let mut aabb = Aabb::new_invalid();
        aabb.invalidate();
        for pt in &points {
            aabb.take_point(*pt);
        }

        let aabb_sphere = BoundingSphere::new(aabb.center(), aabb.bounding_sphere_radius());
        assert!(aabb_sphere.radius < max_radius);
        assert_covers(&aabb_sphere, &points, epsilon, "aabb");

        let miniball = enclosing::miniball(&points);
        assert!(miniball.radius < max_radius);
        assert_covers(&miniball, &points, epsilon, "miniball");

        let epos6 = enclosing::epos6(&points);
        assert!(epos6.radius < 1.2 * max_radius);
        assert_covers(&epos6, &points, epsilon, "epos6");

        for (label, sphere) in [
            ("epos14", enclosing::epos14(&points)),
            ("epos26", enclosing::epos26(&points)),
            ("epos98", enclosing::epos98(&points)),
        ] {
            assert!(sphere.radius < max_radius, "{}: {:?}", label, sphere);
            assert_covers(&sphere, &points, epsilon, label);
        }
    }
}

#[test]
fn miniball_is_the_smallest() {
    let epsilon = 1.0 / COORDINATE_RANGE;

    for seed in 0..NUM_SEEDS {
        let points = random_cube_points(seed + 100, 2_000, COORDINATE_RANGE);
        let miniball = enclosing::miniball(&points);

        assert!(miniball.radius <= enclosing::aabb_bounding_sphere(&points).radius + epsilon);
        assert!(miniball.radius <= enclosing::centroid_bounding_sphere(&points).radius + epsilon);

        for variant in EposVariant::ALL {
            for rounds in [0, 1, 8] {
                let sphere = Epos::new(variant)
                    .with_max_tightening_rounds(rounds)
                    .bounding_sphere(&points);

                assert!(
                    miniball.radius <= sphere.radius + epsilon,
                    "{:?} ({} rounds): {} > {}",
                    variant,
                    rounds,
                    miniball.radius,
                    sphere.radius
                );
                assert_covers(&sphere, &points, epsilon, "epos");
            }
        }
    }
}

#[test]
fn more_directions_give_tighter_approximations_on_average() {
    let mut total_radii = [0.0; 4];

    for seed in 0..NUM_SEEDS {
        let points = random_cube_points(seed + 200, 2_000, COORDINATE_RANGE);

        for (total, variant) in total_radii.iter_mut().zip(EposVariant::ALL) {
            *total += Epos::new(variant)
                .with_max_tightening_rounds(0)
                .bounding_sphere(&points)
                .radius;
        }
    }

    // Averaged over a few clouds, every variant is at least as tight as the previous one, up to
    // the noise of the Ritter pass.
    for (tighter, looser) in total_radii[1..].iter().zip(&total_radii[..3]) {
        assert!(
            *tighter <= *looser * 1.01,
            "{:?}: {} > {}",
            total_radii,
            tighter,
            looser
        );
    }
    assert!(total_radii[3] <= total_radii[0]);
}
