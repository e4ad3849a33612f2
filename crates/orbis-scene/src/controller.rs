use orbis_engine::coords::{Vec2, Viewport};
use orbis_engine::paint::Color;
use orbis_engine::render::{RenderCtx, RenderTarget};
use orbis_engine::time::FrameTime;

use crate::camera::Camera;
use crate::controls::OrbitControls;
use crate::error::SceneError;
use crate::frame_loop::FrameLoop;
use crate::listeners::{Listener, Listeners};
use crate::math;
use crate::mount::Mount;
use crate::pointer::{self, PointerState};
use crate::render::{RenderFrame, SceneRenderer};
use crate::settings::SceneSettings;
use crate::uniforms::{step_frame, FrameInputs, FrameUniforms, MaterialUniforms};

/// Controller lifecycle. Construction runs setup, so a live controller is
/// always `Running`; `cleanup` moves it to `Disposed` for good.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Lifecycle {
    Running,
    Disposed,
}

/// The render surface attached to the mount.
struct Canvas {
    renderer: SceneRenderer,
}

/// One live blob scene bound to a mount.
///
/// All animation state lives on the CPU and can be driven without a GPU:
/// `animate_frame` advances it, `render` turns the current state into draw
/// calls. GPU resources are created by the first `render`.
pub struct SceneController {
    settings: SceneSettings,
    lifecycle: Lifecycle,

    viewport: Viewport,
    scale_factor: f32,

    camera: Camera,
    controls: Option<OrbitControls>,
    pointer: PointerState,
    last_pointer_px: Option<Vec2>,

    uniforms: FrameUniforms,
    clock: f32,
    frames: FrameLoop,
    listeners: Listeners,

    canvas: Option<Canvas>,
}

impl SceneController {
    /// Mounts a scene and runs its setup.
    ///
    /// Fails with [`SceneError::DegenerateMount`] when the mount has no area.
    pub fn new(mount: &impl Mount, settings: SceneSettings) -> Result<Self, SceneError> {
        let viewport = mount.size();
        if !viewport.is_valid() {
            return Err(SceneError::DegenerateMount {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let mut scene = Self {
            camera: Camera::new(viewport.aspect()),
            controls: Some(OrbitControls::new(settings.orbit)),
            pointer: PointerState::default(),
            last_pointer_px: None,
            uniforms: FrameUniforms::initial(&settings.shading),
            clock: 0.0,
            frames: FrameLoop::new(),
            listeners: Listeners::default(),
            canvas: None,
            viewport,
            scale_factor: mount.scale_factor(),
            lifecycle: Lifecycle::Running,
            settings,
        };

        scene.setup(mount);
        scene.frames.schedule();
        log::info!(
            "scene mounted on {}x{} (render {}x{})",
            scene.viewport.width,
            scene.viewport.height,
            scene.render_size().0,
            scene.render_size().1,
        );
        Ok(scene)
    }

    fn setup(&mut self, mount: &impl Mount) {
        self.attach_canvas();
        self.add_events();
        self.resize(mount);
        self.reset_camera();
    }

    fn attach_canvas(&mut self) {
        if self.canvas.is_some() {
            return;
        }
        let clear = Color::from_hex_srgb(self.settings.clear_color).to_wgpu();
        self.canvas = Some(Canvas {
            renderer: SceneRenderer::new(&self.settings, clear),
        });
    }

    fn add_events(&mut self) {
        for listener in [Listener::Resize, Listener::PointerMove] {
            if !self.listeners.register(listener) {
                log::debug!("{listener:?} listener already registered");
            }
        }
    }

    // ── events ─────────────────────────────────────────────────────────────

    /// Re-reads the mount size and updates the camera aspect and the surface size.
    ///
    /// Idempotent. A mount without area (e.g. a minimized window) is ignored and
    /// the last valid size is kept. Returns whether anything changed.
    pub fn resize(&mut self, mount: &impl Mount) -> bool {
        if !self.listeners.contains(Listener::Resize) {
            return false;
        }

        let viewport = mount.size();
        if !viewport.is_valid() {
            log::debug!("ignoring resize to {}x{}", viewport.width, viewport.height);
            return false;
        }

        let scale = mount.scale_factor();
        if viewport == self.viewport && scale == self.scale_factor {
            return false;
        }

        self.viewport = viewport;
        self.scale_factor = scale;
        self.camera.set_aspect(viewport.aspect());
        log::debug!(
            "scene resized to {}x{} @{}",
            viewport.width,
            viewport.height,
            self.pixel_ratio()
        );
        true
    }

    /// Pointer moved to `(x, y)` in mount logical pixels.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.listeners.contains(Listener::PointerMove) {
            return;
        }

        self.pointer.set_raw(pointer::normalize(x, y, self.viewport));

        let here = Vec2::new(x, y);
        if let (Some(last), Some(controls)) = (self.last_pointer_px, self.controls.as_mut()) {
            controls.drag(&mut self.camera, here - last, self.viewport);
        }
        self.last_pointer_px = Some(here);
    }

    /// Primary button state over the mount; drives orbiting.
    pub fn pointer_button(&mut self, pressed: bool) {
        let Some(controls) = self.controls.as_mut() else { return };
        if pressed {
            controls.begin_drag();
        } else {
            controls.end_drag();
        }
    }

    /// Wheel motion in lines; positive dollies in.
    pub fn wheel(&mut self, lines: f32) {
        if let Some(controls) = self.controls.as_mut() {
            controls.wheel(&mut self.camera, lines);
        }
    }

    // ── frame ──────────────────────────────────────────────────────────────

    /// Whether a frame request is pending.
    pub fn wants_frame(&self) -> bool {
        self.frames.is_pending()
    }

    /// Runs the pending frame: advances the scene clock, smooths the pointer,
    /// updates both materials and the scene rotation, then schedules the next
    /// frame.
    ///
    /// Returns `None` without touching any state when no frame is pending,
    /// which is always the case after [`cleanup`](Self::cleanup).
    pub fn animate_frame(&mut self, time: &FrameTime) -> Option<FrameUniforms> {
        if self.lifecycle == Lifecycle::Disposed {
            return None;
        }
        self.frames.take()?;

        if time.dt.is_finite() && time.dt > 0.0 {
            self.clock += time.dt;
        }

        let inputs = FrameInputs {
            elapsed: self.clock,
            dt: time.dt.max(0.0),
            pointer: self.pointer.raw,
        };
        self.uniforms = step_frame(&inputs, &self.settings, &self.uniforms);
        self.pointer.smoothed = self.uniforms.smoothed;

        self.frames.schedule();
        Some(self.uniforms)
    }

    /// Draws the current state through the composer.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        let frame = self.render_frame();
        let Some(canvas) = self.canvas.as_mut() else { return };
        canvas.renderer.render(ctx, target, &frame);
    }

    fn render_frame(&self) -> RenderFrame {
        let model = math::rotate_xyz(self.uniforms.rotation);
        let mvp = math::mul(&self.camera.view_projection(), &model);
        RenderFrame {
            mesh: MaterialUniforms::new(&self.uniforms.mesh, mvp, model),
            particles: MaterialUniforms::new(&self.uniforms.particles, mvp, model),
            size: self.render_size(),
        }
    }

    /// Puts the camera back on the YZ plane (x = 0).
    pub fn reset_camera(&mut self) {
        self.camera.reset_x();
    }

    // ── teardown ───────────────────────────────────────────────────────────

    /// Stops the frame loop, removes the listeners, disposes the controls and
    /// every GPU resource, and detaches the canvas.
    ///
    /// Returns `false` (and does nothing) when already disposed.
    pub fn cleanup(&mut self) -> bool {
        if self.lifecycle == Lifecycle::Disposed {
            log::debug!("scene already disposed");
            return false;
        }

        if let Some(handle) = self.frames.cancel() {
            log::debug!("cancelled frame request {handle:?}");
        }
        self.listeners.unregister(Listener::Resize);
        self.listeners.unregister(Listener::PointerMove);

        if let Some(mut controls) = self.controls.take() {
            controls.dispose();
        }

        // Dropping the renderer releases pipelines, buffers, geometry and targets.
        self.canvas = None;

        self.last_pointer_px = None;
        self.uniforms = FrameUniforms::initial(&self.settings.shading);
        self.lifecycle = Lifecycle::Disposed;
        log::info!("scene disposed");
        true
    }

    /// Like [`resize`](Self::resize) but reports a disposed scene as an error.
    pub fn try_resize(&mut self, mount: &impl Mount) -> Result<bool, SceneError> {
        self.ensure_running()?;
        Ok(self.resize(mount))
    }

    fn ensure_running(&self) -> Result<(), SceneError> {
        match self.lifecycle {
            Lifecycle::Running => Ok(()),
            Lifecycle::Disposed => Err(SceneError::Disposed),
        }
    }

    // ── accessors ──────────────────────────────────────────────────────────

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_attached(&self) -> bool {
        self.canvas.is_some()
    }

    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn uniforms(&self) -> &FrameUniforms {
        &self.uniforms
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// Seconds of scene time run so far.
    pub fn elapsed(&self) -> f32 {
        self.clock
    }

    /// Surface size in logical pixels.
    pub fn surface_size(&self) -> Viewport {
        self.viewport
    }

    /// Device pixel ratio used for rendering, capped by the settings.
    pub fn pixel_ratio(&self) -> f32 {
        let cap = self.settings.pixel_ratio_cap;
        if cap.is_finite() && cap > 0.0 {
            self.scale_factor.min(cap)
        } else {
            self.scale_factor
        }
    }

    /// Offscreen size in physical pixels.
    pub fn render_size(&self) -> (u32, u32) {
        self.viewport.physical(self.pixel_ratio())
    }
}

impl Drop for SceneController {
    fn drop(&mut self) {
        if self.lifecycle == Lifecycle::Running {
            self.cleanup();
        }
    }
}
