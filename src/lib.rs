//! orrery
//!
//! A decorative, cross-platform 3D solar-system visualization for native
//! windows and the web. A textured sun and eight orbiting planets spin by
//! fixed per-frame increments while stars, asteroids and comets are scattered
//! around them; the camera orbits the origin under mouse control. There is no
//! simulation here, only a scene of instanced meshes and a render loop.
//!
//! High-level modules
//! - `camera`: camera, projection and the orbit/zoom controller with uniforms
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `data_structures`: engine data models (meshes, instances, textures)
//! - `flow`: the application event loop and per-frame update/render ordering
//! - `pipelines`: definitions for the lit and unlit render pipelines
//! - `resources`: helpers to load textures and create GPU resources
//! - `scene`: the solar system itself (bodies, orbit pivots, scatter fields)
//!

pub mod camera;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod pipelines;
pub mod resources;
pub mod scene;

// Re-exports commonly used types for convenience in downstream code.
pub use winit::dpi::PhysicalPosition;
pub use cgmath::*;
pub use winit::event::DeviceEvent;
pub use winit::event::WindowEvent;
pub use wgpu::*;
