use std::time::Duration;

use cgmath::{Deg, EuclideanSpace, InnerSpace, Point3, Rad};
use orrery::camera::{Camera, MIN_ORBIT_RADIUS, OrbitController, Projection};

const EPS: f32 = 1e-4;

fn frame() -> Duration {
    Duration::from_millis(16)
}

#[test]
fn resize_recomputes_the_aspect_ratio() {
    let mut projection = Projection::new(1920, 1080, Deg(75.0), 0.1, 1000.0);
    assert!((projection.aspect - 1920.0 / 1080.0).abs() < EPS);

    projection.resize(800, 600);
    assert!((projection.aspect - 800.0 / 600.0).abs() < EPS);
}

#[test]
fn resize_leaves_the_other_camera_parameters_untouched() {
    let mut projection = Projection::new(1280, 720, Deg(75.0), 0.1, 1000.0);
    let fovy = projection.fovy;
    let znear = projection.znear;
    let zfar = projection.zfar;

    projection.resize(333, 444);

    assert_eq!(projection.fovy, fovy);
    assert_eq!(projection.znear, znear);
    assert_eq!(projection.zfar, zfar);
}

#[test]
fn camera_aimed_at_origin_actually_faces_it() {
    let camera = Camera::aimed_at_origin((20.0, 20.0, 150.0));

    let (sin_pitch, cos_pitch) = camera.pitch.0.sin_cos();
    let (sin_yaw, cos_yaw) = camera.yaw.0.sin_cos();
    let forward = cgmath::Vector3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw);

    let to_origin = -camera.position.to_vec().normalize();
    assert!((forward - to_origin).magnitude() < EPS);
}

#[test]
fn update_without_input_keeps_the_pose() {
    let mut camera = Camera::aimed_at_origin((20.0, 20.0, 150.0));
    let mut controller = OrbitController::new(0.005, 1.1);

    let before = camera.position;
    controller.update(&mut camera, frame());

    assert!((camera.position - before).magnitude() < 1e-2);
}

#[test]
fn dragging_orbits_at_constant_radius() {
    let mut camera = Camera::aimed_at_origin((20.0, 20.0, 150.0));
    let mut controller = OrbitController::new(0.005, 1.1);
    let radius = camera.position.to_vec().magnitude();

    controller.handle_mouse(120.0, 0.0);
    controller.update(&mut camera, frame());

    assert!((camera.position.to_vec().magnitude() - radius).abs() < 1e-2);
    // The camera moved and still looks at the origin.
    assert!((camera.position - Point3::new(20.0, 20.0, 150.0)).magnitude() > 1.0);
    let (sin_pitch, cos_pitch) = camera.pitch.0.sin_cos();
    let (sin_yaw, cos_yaw) = camera.yaw.0.sin_cos();
    let forward = cgmath::Vector3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw);
    assert!((forward + camera.position.to_vec().normalize()).magnitude() < EPS);
}

#[test]
fn pitch_never_reaches_the_poles() {
    let mut camera = Camera::aimed_at_origin((20.0, 20.0, 150.0));
    let mut controller = OrbitController::new(0.005, 1.1);

    // Drag far past vertical.
    controller.handle_mouse(0.0, -1.0e6);
    controller.update(&mut camera, frame());

    let radius = camera.position.to_vec().magnitude();
    let pitch = (camera.position.y / radius).asin();
    assert!(pitch < Rad::from(Deg(90.0)).0);
    assert!(pitch > Rad::from(Deg(85.0)).0, "clamp sits just short of the pole");
}

#[test]
fn zoom_is_clamped_to_the_minimum_radius() {
    let mut camera = Camera::aimed_at_origin((20.0, 20.0, 150.0));
    let mut controller = OrbitController::new(0.005, 1.1);

    controller.handle_scroll(1.0e4);
    controller.update(&mut camera, frame());

    assert!((camera.position.to_vec().magnitude() - MIN_ORBIT_RADIUS).abs() < 1e-2);
}

#[test]
fn zooming_out_grows_the_radius() {
    let mut camera = Camera::aimed_at_origin((20.0, 20.0, 150.0));
    let mut controller = OrbitController::new(0.005, 1.1);
    let radius = camera.position.to_vec().magnitude();

    controller.handle_scroll(-3.0);
    controller.update(&mut camera, frame());

    assert!(camera.position.to_vec().magnitude() > radius);
}
