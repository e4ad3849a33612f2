use wgpu::util::DeviceExt;

use orbis_engine::render::RenderCtx;

use crate::geometry::{self, MeshVertex};
use crate::uniforms::MaterialUniforms;

use super::common::{self, MaterialBinding, HDR_FORMAT};

/// Renderer for the noise-displaced icosphere.
///
/// Pipeline, geometry and uniform buffer are created on the first `prepare`.
pub struct BlobRenderer {
    radius: f32,
    detail: u32,

    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    binding: Option<MaterialBinding>,

    vbo: Option<wgpu::Buffer>,
    vertex_count: u32,
}

impl BlobRenderer {
    pub fn new(radius: f32, detail: u32) -> Self {
        Self {
            radius,
            detail,
            pipeline: None,
            bind_group_layout: None,
            binding: None,
            vbo: None,
            vertex_count: 0,
        }
    }

    /// Creates missing GPU resources and uploads this frame's uniforms.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, uniforms: &MaterialUniforms) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.ensure_geometry(ctx);

        if let Some(binding) = self.binding.as_ref() {
            binding.write(ctx.queue, uniforms);
        }
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(binding) = self.binding.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };

        pass.set_pipeline(pipeline);
        pass.set_bind_group(0, &binding.bind_group, &[]);
        pass.set_vertex_buffer(0, vbo.slice(..));
        pass.draw(0..self.vertex_count, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("orbis blob shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/blob.wgsl").into()),
        });

        let bind_group_layout = common::material_bind_group_layout(ctx.device, "orbis blob bgl");

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("orbis blob pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("orbis blob pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[MeshVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: HDR_FORMAT,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(common::depth_state(true)),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.binding = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.binding.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        self.binding = Some(MaterialBinding::new(ctx.device, bgl, "orbis blob material"));
    }

    fn ensure_geometry(&mut self, ctx: &RenderCtx<'_>) {
        if self.vbo.is_some() {
            return;
        }

        let vertices = geometry::icosphere(self.radius, self.detail);
        log::debug!(
            "blob geometry: radius {} detail {} -> {} vertices",
            self.radius,
            self.detail,
            vertices.len()
        );

        self.vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("orbis blob vbo"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.vertex_count = vertices.len() as u32;
    }
}
