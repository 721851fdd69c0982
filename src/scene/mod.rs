//! The solar system: scene assembly, per-frame animation, and draw order.
//!
//! - `bodies` holds the planet catalog and the per-frame rotation type
//! - `pivot` implements the orbit pivots that carry planets around the sun
//! - `scatter` places the decorative star/asteroid/comet fields
//!
//! The scene keeps all transform state on the CPU as [`Instance`]s and
//! uploads the handful that change each frame, so the animation itself never
//! needs a GPU.

pub mod bodies;
pub mod pivot;
pub mod scatter;

use cgmath::{Quaternion, Rotation3, Vector3, Zero};
use wgpu::util::DeviceExt;

use crate::{
    context::Context,
    data_structures::{
        instance::Instance,
        mesh::{self, DrawModel, Material, Mesh, Model},
        texture::Texture,
    },
    resources::load_texture,
    scene::{
        bodies::{ASTEROID_TEXTURE, COMET_TEXTURE, PLANETS, SUN_RADIUS, SUN_SPIN, SUN_TEXTURE, Spin},
        pivot::OrbitPivot,
        scatter::{Scatter, ScatterKind},
    },
};

/// Sphere resolution for the sun and planets.
const BODY_SECTORS: u32 = 32;
const BODY_STACKS: u32 = 16;

/// A celestial body: one textured sphere with its own instance buffer and a
/// fixed self-rotation per frame.
#[derive(Debug)]
pub struct Body {
    pub model: Model,
    position: Vector3<f32>,
    pub spin: Spin,
    instance_buffer: wgpu::Buffer,
}

impl Body {
    pub fn new(
        device: &wgpu::Device,
        name: &str,
        radius: f32,
        position: Vector3<f32>,
        spin_delta: f32,
        diffuse_texture: Texture,
        layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let (vertices, indices) = mesh::uv_sphere(radius, BODY_SECTORS, BODY_STACKS);
        let mesh = Mesh::new(device, name, &vertices, &indices);
        let material = Material::new(device, name, diffuse_texture, layout);

        let spin = Spin::new(spin_delta);
        let local = Instance {
            position,
            ..Default::default()
        };
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Instance Buffer"),
            contents: bytemuck::cast_slice(&[local.to_raw()]),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            model: Model { mesh, material },
            position,
            spin,
            instance_buffer,
        }
    }

    /// Advance the self-rotation by its per-frame delta.
    pub fn step(&mut self) {
        self.spin.step();
    }

    /// Local transform: orbit offset plus accumulated self-rotation.
    pub fn local_transform(&self) -> Instance {
        Instance {
            position: self.position,
            rotation: Quaternion::from_angle_y(self.spin.angle),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    fn write_to_buffer(&self, queue: &wgpu::Queue, world: &Instance) {
        queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&[world.to_raw()]),
        );
    }

    fn draw<'a, 'b>(
        &'a self,
        render_pass: &'b mut wgpu::RenderPass<'a>,
        camera_bind_group: &'a wgpu::BindGroup,
        light_bind_group: &'a wgpu::BindGroup,
    ) where
        'a: 'b,
    {
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        render_pass.draw_model_instanced(&self.model, 0..1, camera_bind_group, light_bind_group);
    }
}

/// A planet together with the orbit pivot that carries it around the sun.
#[derive(Debug)]
pub struct Planet {
    pub pivot: OrbitPivot,
    pub body: Body,
}

#[derive(Debug)]
pub struct SolarSystem {
    pub sun: Body,
    pub planets: Vec<Planet>,
    pub stars: Scatter,
    pub asteroids: Scatter,
    pub comets: Scatter,
}

impl SolarSystem {
    pub async fn new(ctx: &Context) -> anyhow::Result<Self> {
        let device = &ctx.device;
        let queue = &ctx.queue;
        let layout = mesh::diffuse_layout(device);

        // Fetch every diffuse texture concurrently; on the web each one is a
        // separate request.
        let (sun_texture, planet_textures, asteroid_texture, comet_texture) = futures::try_join!(
            load_texture(SUN_TEXTURE, device, queue),
            futures::future::try_join_all(PLANETS.iter().map(|p| load_texture(p.texture, device, queue))),
            load_texture(ASTEROID_TEXTURE, device, queue),
            load_texture(COMET_TEXTURE, device, queue),
        )?;

        let sun = Body::new(
            device,
            "sun",
            SUN_RADIUS,
            Vector3::zero(),
            SUN_SPIN,
            sun_texture,
            &layout,
        );

        let planets = PLANETS
            .iter()
            .zip(planet_textures)
            .map(|(spec, diffuse_texture)| Planet {
                pivot: OrbitPivot::new(spec.orbit),
                body: Body::new(
                    device,
                    spec.name,
                    spec.radius,
                    Vector3::new(0.0, 0.0, spec.orbit_radius),
                    spec.spin,
                    diffuse_texture,
                    &layout,
                ),
            })
            .collect();

        let mut rng = rand::rng();
        let stars = Scatter::new(
            device,
            ScatterKind::Star,
            ScatterKind::Star.count(),
            Texture::from_color(device, queue, [255, 255, 255, 255], "star"),
            &layout,
            &mut rng,
        );
        let asteroids = Scatter::new(
            device,
            ScatterKind::Asteroid,
            ScatterKind::Asteroid.count(),
            asteroid_texture,
            &layout,
            &mut rng,
        );
        let comets = Scatter::new(
            device,
            ScatterKind::Comet,
            ScatterKind::Comet.count(),
            comet_texture,
            &layout,
            &mut rng,
        );

        Ok(Self {
            sun,
            planets,
            stars,
            asteroids,
            comets,
        })
    }

    /// One frame of animation: every body spins and every pivot sweeps by its
    /// fixed delta.
    pub fn advance(&mut self) {
        self.sun.step();
        for planet in &mut self.planets {
            planet.body.step();
            planet.pivot.step();
        }
    }

    /// Upload the transforms that changed this frame. The scatter batches
    /// are static; their buffers were written once at creation.
    pub fn write_to_buffers(&self, queue: &wgpu::Queue) {
        self.sun.write_to_buffer(queue, &self.sun.local_transform());
        for planet in &self.planets {
            let world = planet.pivot.carry(&planet.body.local_transform());
            planet.body.write_to_buffer(queue, &world);
        }
    }

    pub fn draw<'a, 'b>(&'a self, ctx: &'a Context, render_pass: &'b mut wgpu::RenderPass<'a>)
    where
        'a: 'b,
    {
        // Lit: the planets, shaded by the light inside the sun.
        render_pass.set_pipeline(&ctx.pipelines.lit);
        for planet in &self.planets {
            planet
                .body
                .draw(render_pass, &ctx.camera.bind_group, &ctx.light.bind_group);
        }

        // Unlit: the sun itself and the scattered decorations.
        render_pass.set_pipeline(&ctx.pipelines.unlit);
        self.sun
            .draw(render_pass, &ctx.camera.bind_group, &ctx.light.bind_group);
        for scatter in [&self.stars, &self.asteroids, &self.comets] {
            render_pass.set_vertex_buffer(1, scatter.instance_buffer.slice(..));
            render_pass.draw_model_instanced(
                &scatter.model,
                0..scatter.instances.len() as u32,
                &ctx.camera.bind_group,
                &ctx.light.bind_group,
            );
        }
    }
}
