//! Route table and navigation state.

use orbis_engine::input::Key;
use orbis_router::{Params, RouteError, RouteMatch, Router};
use orbis_scene::SceneSettings;

use crate::views::{IndexView, ProjectView, View};

pub const INDEX: &str = "index";
pub const SINGLE_PROJECT: &str = "single-project";

pub fn routes(settings: SceneSettings) -> Result<Router<View>, RouteError> {
    Router::new()
        .route(INDEX, "/", move || {
            let settings = settings.clone();
            move |_: &RouteMatch| View::Index(IndexView::new(settings.clone()))
        })?
        .route(SINGLE_PROJECT, "/projects/:id", || {
            |m: &RouteMatch| View::Project(ProjectView::new(m.params.get("id").unwrap_or_default()))
        })
}

/// Navigation requested from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyNav {
    Index,
    Project(u8),
    Back,
}

impl KeyNav {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Escape => Some(KeyNav::Index),
            Key::Backspace => Some(KeyNav::Back),
            k => k.digit().filter(|d| *d > 0).map(KeyNav::Project),
        }
    }
}

/// The router plus the view it currently shows.
pub struct Site {
    router: Router<View>,
    view: View,
}

impl Site {
    /// Opens `initial`, falling back to the index when nothing matches it.
    pub fn new(settings: SceneSettings, initial: &str) -> Result<Self, RouteError> {
        let mut router = routes(settings)?;
        let view = match router.navigate(initial) {
            Ok(view) => view,
            Err(err) => {
                log::warn!("{err}; opening `/` instead");
                router.navigate("/")?
            }
        };
        Ok(Self { router, view })
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    pub fn router(&self) -> &Router<View> {
        &self.router
    }

    /// Switches to `location`. Returns whether the shown view changed.
    ///
    /// Unknown locations and the current location are ignored.
    pub fn navigate(&mut self, location: &str) -> bool {
        if self.router.current().is_some_and(|m| m.location == location) {
            return false;
        }
        match self.router.navigate(location) {
            Ok(view) => {
                self.show(view);
                true
            }
            Err(err) => {
                log::warn!("navigation rejected: {err}");
                false
            }
        }
    }

    pub fn back(&mut self) -> bool {
        match self.router.back() {
            Some(view) => {
                self.show(view);
                true
            }
            None => false,
        }
    }

    pub fn handle_key(&mut self, key: Key) -> bool {
        match KeyNav::from_key(key) {
            Some(KeyNav::Index) => self.navigate("/"),
            Some(KeyNav::Project(n)) => {
                let id = n.to_string();
                match self.router.href(SINGLE_PROJECT, &Params::from([("id", id.as_str())])) {
                    Some(location) => self.navigate(&location),
                    None => false,
                }
            }
            Some(KeyNav::Back) => self.back(),
            None => false,
        }
    }

    fn show(&mut self, view: View) {
        let mut previous = std::mem::replace(&mut self.view, view);
        if previous.unmount() {
            log::debug!("previous scene cleaned up");
        }
    }
}

#[cfg(test)]
mod tests {
    use orbis_engine::coords::Viewport;

    use super::*;

    fn site(initial: &str) -> Site {
        Site::new(SceneSettings::default(), initial).unwrap()
    }

    fn project_id(site: &Site) -> Option<&str> {
        match site.view() {
            View::Project(p) => Some(p.id()),
            View::Index(_) => None,
        }
    }

    #[test]
    fn opens_initial_route() {
        let s = site("/");
        assert!(matches!(s.view(), View::Index(_)));
        assert!(s.router().is_loaded(INDEX));
        assert!(!s.router().is_loaded(SINGLE_PROJECT));

        let s = site("/projects/42");
        assert_eq!(project_id(&s), Some("42"));
    }

    #[test]
    fn unknown_initial_route_falls_back_to_index() {
        let s = site("/nowhere");
        assert!(matches!(s.view(), View::Index(_)));
        assert_eq!(s.router().current().unwrap().location, "/");
    }

    #[test]
    fn keys_map_to_navigation() {
        assert_eq!(KeyNav::from_key(Key::Escape), Some(KeyNav::Index));
        assert_eq!(KeyNav::from_key(Key::Digit3), Some(KeyNav::Project(3)));
        assert_eq!(KeyNav::from_key(Key::Digit0), None);
        assert_eq!(KeyNav::from_key(Key::Backspace), Some(KeyNav::Back));
        assert_eq!(KeyNav::from_key(Key::Space), None);
    }

    #[test]
    fn digit_then_escape_then_back() {
        let mut s = site("/");
        assert!(s.handle_key(Key::Digit5));
        assert_eq!(project_id(&s), Some("5"));
        assert_eq!(s.router().current().unwrap().location, "/projects/5");

        assert!(s.handle_key(Key::Escape));
        assert!(matches!(s.view(), View::Index(_)));

        assert!(s.back());
        assert_eq!(project_id(&s), Some("5"));
    }

    #[test]
    fn rejected_navigation_keeps_the_view() {
        let mut s = site("/projects/1");
        assert!(!s.navigate("/missing/page"));
        assert_eq!(project_id(&s), Some("1"));
    }

    #[test]
    fn same_location_keeps_the_mounted_scene() {
        let mut s = site("/");
        s.view_mut().mount(&Viewport::new(800.0, 600.0)).unwrap();
        assert!(!s.handle_key(Key::Escape));
        let View::Index(v) = s.view() else { unreachable!() };
        assert!(v.scene().is_some());
    }

    #[test]
    fn leaving_index_drops_its_scene() {
        let mut s = site("/");
        s.view_mut().mount(&Viewport::new(800.0, 600.0)).unwrap();
        assert!(s.navigate("/projects/2"));
        assert!(s.navigate("/"));
        // A fresh index view starts unmounted.
        let View::Index(v) = s.view() else { unreachable!() };
        assert!(v.scene().is_none());
    }

    #[test]
    fn project_module_loads_once() {
        let mut s = site("/");
        s.navigate("/projects/1");
        s.navigate("/projects/2");
        assert!(s.router().is_loaded(SINGLE_PROJECT));
        assert_eq!(project_id(&s), Some("2"));
    }
}
