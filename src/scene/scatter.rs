//! Randomly scattered background objects: stars, asteroids and comets.
//!
//! Each category is one instanced batch: a single small mesh drawn `count`
//! times at positions sampled uniformly per axis. The batches are static
//! after creation; only the planets animate.

use cgmath::Vector3;
use rand::Rng;
use wgpu::util::DeviceExt;

use crate::data_structures::{
    instance::Instance,
    mesh::{self, Material, Mesh, MeshVertex, Model},
    texture::Texture,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterKind {
    Star,
    Asteroid,
    Comet,
}

impl ScatterKind {
    pub fn name(self) -> &'static str {
        match self {
            ScatterKind::Star => "star",
            ScatterKind::Asteroid => "asteroid",
            ScatterKind::Comet => "comet",
        }
    }

    /// How many objects of this kind the scene wants.
    pub fn count(self) -> usize {
        match self {
            ScatterKind::Star => 1000,
            ScatterKind::Asteroid | ScatterKind::Comet => 10,
        }
    }

    /// Width of the symmetric cube positions are sampled from: each
    /// coordinate lands in `[-range/2, range/2)`. Stars spread wider than
    /// the rest so the sky doesn't end at Neptune.
    pub fn range(self) -> f32 {
        match self {
            ScatterKind::Star => 400.0,
            ScatterKind::Asteroid | ScatterKind::Comet => 250.0,
        }
    }

    fn geometry(self) -> (Vec<MeshVertex>, Vec<u32>) {
        match self {
            ScatterKind::Star => mesh::uv_sphere(0.1, 8, 8),
            ScatterKind::Comet => mesh::uv_sphere(0.6, 16, 16),
            ScatterKind::Asteroid => mesh::icosahedron(0.9),
        }
    }
}

/// Uniformly sample `count` positions, each coordinate independent in
/// `[-range/2, range/2)`. No further distribution guarantees; this is
/// decoration.
pub fn scatter_positions<R: Rng>(rng: &mut R, count: usize, range: f32) -> Vec<Vector3<f32>> {
    (0..count)
        .map(|_| {
            Vector3::new(
                (rng.random::<f32>() - 0.5) * range,
                (rng.random::<f32>() - 0.5) * range,
                (rng.random::<f32>() - 0.5) * range,
            )
        })
        .collect()
}

/// One instanced batch of scattered objects.
#[derive(Debug)]
pub struct Scatter {
    pub model: Model,
    pub instances: Vec<Instance>,
    pub instance_buffer: wgpu::Buffer,
}

impl Scatter {
    pub fn new<R: Rng>(
        device: &wgpu::Device,
        kind: ScatterKind,
        count: usize,
        diffuse_texture: Texture,
        layout: &wgpu::BindGroupLayout,
        rng: &mut R,
    ) -> Self {
        let (vertices, indices) = kind.geometry();
        let mesh = Mesh::new(device, kind.name(), &vertices, &indices);
        let material = Material::new(device, kind.name(), diffuse_texture, layout);

        let instances: Vec<Instance> = scatter_positions(rng, count, kind.range())
            .into_iter()
            .map(Instance::from)
            .collect();

        let instance_data = instances.iter().map(Instance::to_raw).collect::<Vec<_>>();
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Instance Buffer"),
            contents: bytemuck::cast_slice(&instance_data),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            model: Model { mesh, material },
            instances,
            instance_buffer,
        }
    }
}
