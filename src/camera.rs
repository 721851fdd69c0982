//! Camera types, orbit controller and uniforms for view/projection.
//!
//! The camera always looks at the solar system's origin. `OrbitController`
//! turns accumulated mouse drags into yaw/pitch around the origin and scroll
//! ticks into multiplicative zoom, mirroring the feel of the usual
//! orbit-controls found in scene viewers.

use std::f32::consts::FRAC_PI_2;

use cgmath::{EuclideanSpace, InnerSpace, Matrix4, Point3, Rad, Vector3, perspective};
use instant::Duration;
use winit::event::{MouseScrollDelta, WindowEvent};

/// wgpu clip space z goes 0..1 while cgmath produces OpenGL's -1..1.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Closest the camera may zoom towards the origin. Keeps the near plane out
/// of the sun's surface (radius 30).
pub const MIN_ORBIT_RADIUS: f32 = 35.0;

const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.05;

#[derive(Debug)]
pub struct Camera {
    pub position: Point3<f32>,
    pub yaw: Rad<f32>,
    pub pitch: Rad<f32>,
}

impl Camera {
    pub fn new<V: Into<Point3<f32>>, Y: Into<Rad<f32>>, P: Into<Rad<f32>>>(
        position: V,
        yaw: Y,
        pitch: P,
    ) -> Self {
        Self {
            position: position.into(),
            yaw: yaw.into(),
            pitch: pitch.into(),
        }
    }

    /// Place the camera at `position` with yaw/pitch chosen so it faces the
    /// world origin. This is the only pose the orrery ever needs at startup.
    pub fn aimed_at_origin<V: Into<Point3<f32>>>(position: V) -> Self {
        let position = position.into();
        let forward = -position.to_vec().normalize();
        Self {
            position,
            yaw: Rad(forward.z.atan2(forward.x)),
            pitch: Rad(forward.y.asin()),
        }
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        let (sin_pitch, cos_pitch) = self.pitch.0.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.0.sin_cos();

        Matrix4::look_to_rh(
            self.position,
            Vector3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw).normalize(),
            Vector3::unit_y(),
        )
    }
}

#[derive(Debug)]
pub struct Projection {
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    /// Recompute the aspect ratio for a new surface size. Field of view and
    /// clip planes are left untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// Mouse-driven orbit/zoom about the world origin.
///
/// Input handlers only accumulate deltas; `update` folds them into the camera
/// once per frame and resets. Deriving the orbit angles from the camera's own
/// position every frame keeps the controller stateless between frames.
#[derive(Debug)]
pub struct OrbitController {
    rotate_horizontal: f32,
    rotate_vertical: f32,
    scroll: f32,
    sensitivity: f32,
    zoom_step: f32,
}

impl OrbitController {
    /// `sensitivity` is radians per pixel of drag, `zoom_step` the
    /// multiplicative radius change per scroll tick (> 1).
    pub fn new(sensitivity: f32, zoom_step: f32) -> Self {
        Self {
            rotate_horizontal: 0.0,
            rotate_vertical: 0.0,
            scroll: 0.0,
            sensitivity,
            zoom_step,
        }
    }

    pub fn handle_mouse(&mut self, mouse_dx: f64, mouse_dy: f64) {
        self.rotate_horizontal += mouse_dx as f32;
        self.rotate_vertical += mouse_dy as f32;
    }

    pub fn handle_scroll(&mut self, ticks: f32) {
        self.scroll += ticks;
    }

    pub fn handle_window_events(&mut self, event: &WindowEvent) {
        if let WindowEvent::MouseWheel { delta, .. } = event {
            self.handle_scroll(match delta {
                MouseScrollDelta::LineDelta(_, lines) => *lines,
                MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 20.0,
            });
        }
    }

    pub fn update(&mut self, camera: &mut Camera, _dt: Duration) {
        let offset = camera.position.to_vec();
        let radius = offset.magnitude();

        // Spherical coordinates of the camera on its orbit around the origin.
        let mut yaw = offset.z.atan2(offset.x);
        let mut pitch = (offset.y / radius).asin();

        yaw += self.rotate_horizontal * self.sensitivity;
        pitch = (pitch - self.rotate_vertical * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        let radius = (radius * self.zoom_step.powf(-self.scroll)).max(MIN_ORBIT_RADIUS);

        camera.position = Point3::from_vec(Vector3::new(
            radius * pitch.cos() * yaw.cos(),
            radius * pitch.sin(),
            radius * pitch.cos() * yaw.sin(),
        ));

        // Keep facing the origin.
        let forward = -camera.position.to_vec().normalize();
        camera.yaw = Rad(forward.z.atan2(forward.x));
        camera.pitch = Rad(forward.y.asin());

        self.rotate_horizontal = 0.0;
        self.rotate_vertical = 0.0;
        self.scroll = 0.0;
    }
}

/// The camera's view-projection data as it is laid out on the GPU.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        use cgmath::SquareMatrix;
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera, projection: &Projection) {
        self.view_position = camera.position.to_homogeneous().into();
        self.view_proj = (projection.calc_matrix() * camera.calc_matrix()).into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Bundle of everything camera-related the context owns: the camera and its
/// controller plus the uniform's GPU-side buffer and bind group.
#[derive(Debug)]
pub struct CameraResources {
    pub camera: Camera,
    pub controller: OrbitController,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}
