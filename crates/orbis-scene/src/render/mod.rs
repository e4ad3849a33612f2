//! GPU side of the scene.
//!
//! [`SceneRenderer`] is the composer: a scene pass draws the blob and the
//! particles into an offscreen HDR target with depth, then the output pass
//! copies that target onto the surface. Every resource is created lazily on
//! first use and released when the renderer is dropped.

mod blob;
mod common;
mod output;
mod particles;
mod targets;

use orbis_engine::render::{RenderCtx, RenderTarget};

use crate::settings::SceneSettings;
use crate::uniforms::MaterialUniforms;

use blob::BlobRenderer;
use output::OutputPass;
use particles::ParticleRenderer;
use targets::SceneTargets;

/// Uniforms and target size of one rendered frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame {
    pub mesh: MaterialUniforms,
    pub particles: MaterialUniforms,
    /// Offscreen size in physical pixels.
    pub size: (u32, u32),
}

pub struct SceneRenderer {
    clear: wgpu::Color,
    blob: BlobRenderer,
    particles: ParticleRenderer,
    output: OutputPass,
    targets: Option<SceneTargets>,
    generation: u64,
}

impl SceneRenderer {
    pub fn new(settings: &SceneSettings, clear: wgpu::Color) -> Self {
        Self {
            clear,
            blob: BlobRenderer::new(settings.mesh_radius, settings.mesh_detail),
            particles: ParticleRenderer::new(settings.particle_count, settings.particle_radius),
            output: OutputPass::default(),
            targets: None,
            generation: 0,
        }
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, frame: &RenderFrame) {
        self.ensure_targets(ctx, frame.size);
        self.blob.prepare(ctx, &frame.mesh);
        self.particles.prepare(ctx, &frame.particles);

        let Some(targets) = self.targets.as_ref() else { return };

        {
            let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("orbis scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &targets.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            self.blob.draw(&mut rpass);
            self.particles.draw(&mut rpass);
        }

        self.output.render(ctx, target, targets);
    }

    fn ensure_targets(&mut self, ctx: &RenderCtx<'_>, size: (u32, u32)) {
        let size = (size.0.max(1), size.1.max(1));
        if self.targets.as_ref().is_some_and(|t| t.size() == size) {
            return;
        }
        self.generation += 1;
        self.targets = Some(SceneTargets::new(ctx.device, size, self.generation));
    }
}
