use super::common::{DEPTH_FORMAT, HDR_FORMAT};

/// Offscreen colour and depth attachments of the scene pass.
pub(super) struct SceneTargets {
    size: (u32, u32),
    /// Bumped on every reallocation so dependents can rebuild bind groups.
    generation: u64,
    pub color_view: wgpu::TextureView,
    pub depth_view: wgpu::TextureView,
}

impl SceneTargets {
    pub fn new(device: &wgpu::Device, size: (u32, u32), generation: u64) -> Self {
        let (w, h) = (size.0.max(1), size.1.max(1));
        log::debug!("scene targets: {w}x{h}");

        let color = create_texture(
            device,
            "orbis scene color",
            w,
            h,
            HDR_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        );
        let depth = create_texture(
            device,
            "orbis scene depth",
            w,
            h,
            DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );

        Self {
            size: (w, h),
            generation,
            color_view: color.create_view(&wgpu::TextureViewDescriptor::default()),
            depth_view: depth.create_view(&wgpu::TextureViewDescriptor::default()),
        }
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

fn create_texture(
    device: &wgpu::Device,
    label: &str,
    width: u32,
    height: u32,
    format: wgpu::TextureFormat,
    usage: wgpu::TextureUsages,
) -> wgpu::Texture {
    device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage,
        view_formats: &[],
    })
}
