//! Render pipeline definitions.
//!
//! Two pipelines cover the whole scene: `lit` shades the planets with the
//! white point light sitting inside the sun, `unlit` draws everything that
//! emits or merely decorates (the sun itself, stars, asteroids, comets).
//! Both share the same bind group layouts so a render pass can switch
//! between them without rebinding.

pub mod light;
pub mod lit;
pub mod unlit;

/// The pipelines the context owns, batched over during the render pass.
#[derive(Debug)]
pub struct Pipelines {
    pub lit: wgpu::RenderPipeline,
    pub unlit: wgpu::RenderPipeline,
}

impl Pipelines {
    pub fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        light_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        Self {
            lit: lit::mk_lit_pipeline(device, config, camera_bind_group_layout, light_bind_group_layout),
            unlit: unlit::mk_unlit_pipeline(device, config, camera_bind_group_layout, light_bind_group_layout),
        }
    }
}
