//! Views produced by the route table.

use orbis_engine::render::{RenderCtx, RenderTarget};
use orbis_engine::time::FrameTime;
use orbis_scene::{Mount, SceneController, SceneError, SceneSettings};

/// Landing view: hosts one blob scene.
///
/// The scene is created on the first `mount`, once the window exists, and
/// lives until the view is unmounted.
pub struct IndexView {
    settings: SceneSettings,
    scene: Option<SceneController>,
}

impl IndexView {
    pub fn new(settings: SceneSettings) -> Self {
        Self { settings, scene: None }
    }

    pub fn mount(&mut self, mount: &impl Mount) -> Result<(), SceneError> {
        if self.scene.is_none() {
            self.scene = Some(SceneController::new(mount, self.settings.clone())?);
        }
        Ok(())
    }

    pub fn scene(&self) -> Option<&SceneController> {
        self.scene.as_ref()
    }

    pub fn scene_mut(&mut self) -> Option<&mut SceneController> {
        self.scene.as_mut()
    }

    fn unmount(&mut self) -> bool {
        self.scene.take().is_some_and(|mut scene| scene.cleanup())
    }
}

/// Placeholder page for a single project.
pub struct ProjectView {
    id: String,
    presented: bool,
}

impl ProjectView {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string(), presented: false }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

pub enum View {
    Index(IndexView),
    Project(ProjectView),
}

impl View {
    pub fn title(&self) -> String {
        match self {
            View::Index(_) => "orbis".to_string(),
            View::Project(p) => format!("orbis · project {}", p.id),
        }
    }

    /// Binds the view to its mount. Views without a scene accept any mount.
    pub fn mount(&mut self, mount: &impl Mount) -> Result<(), SceneError> {
        match self {
            View::Index(v) => v.mount(mount),
            View::Project(_) => Ok(()),
        }
    }

    /// Tears the view down. Returns whether a live scene was cleaned up.
    pub fn unmount(&mut self) -> bool {
        match self {
            View::Index(v) => v.unmount(),
            View::Project(_) => false,
        }
    }

    pub fn resize(&mut self, mount: &impl Mount) {
        if let Some(scene) = self.scene_mut() {
            scene.resize(mount);
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if let Some(scene) = self.scene_mut() {
            scene.pointer_move(x, y);
        }
    }

    pub fn pointer_button(&mut self, pressed: bool) {
        if let Some(scene) = self.scene_mut() {
            scene.pointer_button(pressed);
        }
    }

    pub fn wheel(&mut self, lines: f32) {
        if let Some(scene) = self.scene_mut() {
            scene.wheel(lines);
        }
    }

    pub fn wants_frame(&self) -> bool {
        match self {
            // An unmounted index still needs a frame to mount on.
            View::Index(v) => v.scene.as_ref().is_none_or(SceneController::wants_frame),
            View::Project(p) => !p.presented,
        }
    }

    /// Advances per-frame state ahead of `render`.
    pub fn advance(&mut self, time: &FrameTime) {
        match self {
            View::Index(v) => {
                if let Some(scene) = v.scene.as_mut() {
                    scene.animate_frame(time);
                }
            }
            View::Project(p) => p.presented = true,
        }
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        if let Some(scene) = self.scene_mut() {
            scene.render(ctx, target);
        }
    }

    fn scene_mut(&mut self) -> Option<&mut SceneController> {
        match self {
            View::Index(v) => v.scene_mut(),
            View::Project(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use orbis_engine::coords::Viewport;
    use orbis_scene::Lifecycle;

    use super::*;

    const VP: Viewport = Viewport::new(800.0, 600.0);

    fn index() -> View {
        View::Index(IndexView::new(SceneSettings::default()))
    }

    #[test]
    fn index_mounts_its_scene_once() {
        let mut view = index();
        assert!(view.wants_frame());
        view.mount(&VP).unwrap();
        view.mount(&Viewport::new(1024.0, 768.0)).unwrap();

        let View::Index(v) = &view else { unreachable!() };
        let scene = v.scene().unwrap();
        assert_eq!(scene.lifecycle(), Lifecycle::Running);
        assert_eq!(scene.surface_size(), VP);
    }

    #[test]
    fn degenerate_mount_leaves_index_unmounted() {
        let mut view = index();
        let err = view.mount(&Viewport::new(0.0, 600.0)).unwrap_err();
        assert!(matches!(err, SceneError::DegenerateMount { .. }));
        let View::Index(v) = &view else { unreachable!() };
        assert!(v.scene().is_none());
        assert!(view.wants_frame());
    }

    #[test]
    fn unmount_cleans_up_once() {
        let mut view = index();
        view.mount(&VP).unwrap();
        assert!(view.unmount());
        assert!(!view.unmount());
    }

    #[test]
    fn events_reach_the_scene() {
        let mut view = index();
        view.mount(&VP).unwrap();
        view.pointer_move(0.0, 0.0);
        view.resize(&Viewport::new(400.0, 400.0));

        let View::Index(v) = &view else { unreachable!() };
        let scene = v.scene().unwrap();
        assert_eq!(scene.pointer().raw.x, -1.0);
        assert_eq!(scene.surface_size(), Viewport::new(400.0, 400.0));
        assert!((scene.camera().aspect() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn index_animates_on_advance() {
        let mut view = index();
        view.mount(&VP).unwrap();
        view.advance(&FrameTime::synthetic(0.5, 0.5, 1));
        let View::Index(v) = &view else { unreachable!() };
        assert!((v.scene().unwrap().elapsed() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn project_view_redraws_once() {
        let mut view = View::Project(ProjectView::new("7"));
        assert_eq!(view.title(), "orbis · project 7");
        assert!(view.mount(&Viewport::new(0.0, 0.0)).is_ok());
        assert!(view.wants_frame());
        view.advance(&FrameTime::synthetic(0.016, 0.016, 1));
        assert!(!view.wants_frame());
        assert!(!view.unmount());
    }
}
