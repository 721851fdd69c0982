use std::f32::consts::FRAC_PI_2;

use cgmath::{InnerSpace, Rad};
use orrery::data_structures::instance::Instance;
use orrery::scene::bodies::{PLANETS, SUN_SPIN, Spin};
use orrery::scene::pivot::OrbitPivot;

const EPS: f32 = 1e-4;

#[test]
fn body_spin_advances_by_its_fixed_delta_every_step() {
    for spec in PLANETS {
        let mut spin = Spin::new(spec.spin);
        let mut expected = 0.0f32;
        for _ in 0..100 {
            let before = spin.angle.0;
            spin.step();
            expected += spec.spin;
            assert!(
                spin.angle.0 > before,
                "{} stopped rotating at {}",
                spec.name,
                before
            );
            assert!((spin.angle.0 - expected).abs() < EPS);
        }
    }
}

#[test]
fn sun_spin_matches_its_per_frame_delta() {
    let mut spin = Spin::new(SUN_SPIN);
    spin.step();
    assert!((spin.angle.0 - 0.001).abs() < EPS);
}

#[test]
fn orbit_pivot_sweep_is_strictly_increasing() {
    for spec in PLANETS {
        let mut pivot = OrbitPivot::new(spec.orbit);
        let mut expected = 0.0f32;
        for _ in 0..100 {
            let before = pivot.sweep.angle.0;
            pivot.step();
            expected += spec.orbit;
            assert!(pivot.sweep.angle.0 > before);
            assert!((pivot.sweep.angle.0 - expected).abs() < EPS);
        }
    }
}

#[test]
fn quarter_sweep_carries_a_body_from_plus_z_to_plus_x() {
    let mut pivot = OrbitPivot::new(FRAC_PI_2);
    pivot.step();

    let local = Instance::from(cgmath::Vector3::new(0.0, 0.0, 53.0));
    let world = pivot.carry(&local);

    assert!((world.position.x - 53.0).abs() < 1e-3);
    assert!(world.position.y.abs() < 1e-3);
    assert!(world.position.z.abs() < 1e-3);
}

#[test]
fn carrying_preserves_the_orbit_radius() {
    for spec in PLANETS {
        let mut pivot = OrbitPivot::new(spec.orbit);
        let local = Instance::from(cgmath::Vector3::new(0.0, 0.0, spec.orbit_radius));
        for _ in 0..500 {
            pivot.step();
            let world = pivot.carry(&local);
            assert!(
                (world.position.magnitude() - spec.orbit_radius).abs() < 1e-2,
                "{} drifted off its orbit",
                spec.name
            );
            assert!(world.position.y.abs() < 1e-3, "orbits stay in the Y=0 plane");
        }
    }
}

#[test]
fn pivot_rotation_composes_with_the_body_spin() {
    // The pivot's sweep and the body's own spin are both about +Y, so the
    // composed rotation angle is their sum.
    let mut pivot = OrbitPivot::new(0.25);
    pivot.step();
    let local = Instance::from_angle_y(Rad(0.5));
    let world = pivot.carry(&local);

    let expected = Instance::from_angle_y(Rad(0.75));
    let dot = world.rotation.dot(expected.rotation);
    assert!((dot.abs() - 1.0).abs() < EPS);
}

#[test]
fn planet_catalog_matches_the_scene_layout() {
    assert_eq!(PLANETS.len(), 8);
    assert_eq!(PLANETS[0].name, "mercury");
    assert_eq!(PLANETS[7].name, "neptune");

    // Orbits nest outward from the sun without touching it (sun radius 30).
    let mut previous = 30.0;
    for spec in PLANETS {
        assert!(spec.orbit_radius > previous, "{} overlaps inward", spec.name);
        previous = spec.orbit_radius;
    }

    // Sweep rates are a base rate over the orbital period in years.
    assert!((PLANETS[0].orbit - 0.004 / 0.24).abs() < EPS);
    assert!((PLANETS[2].orbit - 0.004).abs() < EPS);
    assert!((PLANETS[7].orbit - 0.03 / 164.8).abs() < EPS);
}
