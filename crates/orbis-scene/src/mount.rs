use orbis_engine::coords::Viewport;
use orbis_engine::core::WindowCtx;

/// Area a scene is attached to.
///
/// On the desktop this is a window's inner area; tests mount on a bare
/// [`Viewport`].
pub trait Mount {
    /// Size in logical pixels.
    fn size(&self) -> Viewport;

    /// Device pixels per logical pixel.
    fn scale_factor(&self) -> f32 {
        1.0
    }
}

impl Mount for Viewport {
    fn size(&self) -> Viewport {
        *self
    }
}

impl Mount for WindowCtx<'_> {
    fn size(&self) -> Viewport {
        self.viewport()
    }

    fn scale_factor(&self) -> f32 {
        WindowCtx::scale_factor(self)
    }
}
