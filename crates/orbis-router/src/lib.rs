//! Orbis router.
//!
//! Maps locations such as `/` or `/projects/42` to named routes and produces
//! view instances for them. Each route carries a loader for its view module;
//! the loader runs on the first navigation to that route only, and every
//! navigation instantiates a fresh view from the loaded module.
//!
//! ```rust,ignore
//! let mut router = Router::new()
//!     .route("index", "/", || |_: &RouteMatch| Page::Index)?
//!     .route("single-project", "/projects/:id", || |m: &RouteMatch| {
//!         Page::Project(m.params.get("id").unwrap_or_default().to_string())
//!     })?;
//! let page = router.navigate("/projects/42")?;
//! ```

mod error;
mod params;
mod pattern;

use std::cell::OnceCell;

pub use error::RouteError;
pub use params::Params;
pub use pattern::Pattern;

/// A loaded view module: turns a route match into a view instance.
pub trait ViewModule<V> {
    fn instantiate(&self, matched: &RouteMatch) -> V;
}

impl<V, F> ViewModule<V> for F
where
    F: Fn(&RouteMatch) -> V,
{
    fn instantiate(&self, matched: &RouteMatch) -> V {
        self(matched)
    }
}

/// Result of resolving a location against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Name of the matched route.
    pub name: String,
    /// The location as requested (query and fragment included).
    pub location: String,
    pub params: Params,
}

type Loader<V> = Box<dyn Fn() -> Box<dyn ViewModule<V>>>;

struct Route<V> {
    name: String,
    pattern: Pattern,
    loader: Loader<V>,
    module: OnceCell<Box<dyn ViewModule<V>>>,
}

impl<V> Route<V> {
    fn module(&self) -> &dyn ViewModule<V> {
        self.module
            .get_or_init(|| {
                log::debug!("loading view module for route `{}`", self.name);
                (self.loader)()
            })
            .as_ref()
    }
}

/// Route table plus navigation state.
pub struct Router<V> {
    routes: Vec<Route<V>>,
    history: Vec<RouteMatch>,
}

impl<V> Default for Router<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Router<V> {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Registers a route. Routes are matched in registration order.
    pub fn route<M, L>(mut self, name: &str, pattern: &str, loader: L) -> Result<Self, RouteError>
    where
        L: Fn() -> M + 'static,
        M: ViewModule<V> + 'static,
    {
        if self.routes.iter().any(|r| r.name == name) {
            return Err(RouteError::DuplicateRoute(name.to_string()));
        }

        self.routes.push(Route {
            name: name.to_string(),
            pattern: Pattern::parse(pattern)?,
            loader: Box::new(move || Box::new(loader()) as Box<dyn ViewModule<V>>),
            module: OnceCell::new(),
        });
        Ok(self)
    }

    /// Matches `location` without any side effect.
    pub fn resolve(&self, location: &str) -> Result<RouteMatch, RouteError> {
        self.find(location).map(|(_, m)| m)
    }

    /// Resolves `location`, loads its view module if needed and instantiates a view.
    ///
    /// On success the match becomes the current location. A failed navigation
    /// leaves the current location untouched.
    pub fn navigate(&mut self, location: &str) -> Result<V, RouteError> {
        let (idx, matched) = self.find(location)?;
        let view = self.routes[idx].module().instantiate(&matched);
        log::info!("navigated to `{}` ({})", matched.location, matched.name);
        self.history.push(matched);
        Ok(view)
    }

    /// Returns to the previous location, re-instantiating its view.
    ///
    /// `None` when there is nothing to go back to.
    pub fn back(&mut self) -> Option<V> {
        if self.history.len() < 2 {
            return None;
        }
        self.history.pop();
        let matched = self.history.last()?;
        let idx = self.routes.iter().position(|r| r.name == matched.name)?;
        log::info!("back to `{}` ({})", matched.location, matched.name);
        Some(self.routes[idx].module().instantiate(matched))
    }

    /// The current location, if any navigation succeeded.
    pub fn current(&self) -> Option<&RouteMatch> {
        self.history.last()
    }

    /// Whether the named route's view module has been loaded.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.routes
            .iter()
            .any(|r| r.name == name && r.module.get().is_some())
    }

    /// Builds the location for a named route.
    pub fn href(&self, name: &str, params: &Params) -> Option<String> {
        self.routes
            .iter()
            .find(|r| r.name == name)
            .and_then(|r| r.pattern.fill(params))
    }

    fn find(&self, location: &str) -> Result<(usize, RouteMatch), RouteError> {
        let parts = pattern::split_path(location);
        self.routes
            .iter()
            .enumerate()
            .find_map(|(idx, route)| {
                route.pattern.matches(&parts).map(|params| {
                    let m = RouteMatch {
                        name: route.name.clone(),
                        location: location.to_string(),
                        params,
                    };
                    (idx, m)
                })
            })
            .ok_or_else(|| RouteError::NotFound(location.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    enum Page {
        Index,
        Project(String),
    }

    fn router(loads: Rc<Cell<u32>>) -> Router<Page> {
        Router::new()
            .route("index", "/", || |_: &RouteMatch| Page::Index)
            .unwrap()
            .route("single-project", "/projects/:id", move || {
                loads.set(loads.get() + 1);
                |m: &RouteMatch| Page::Project(m.params.get("id").unwrap_or_default().to_string())
            })
            .unwrap()
    }

    #[test]
    fn root_resolves_to_index() {
        let r = router(Rc::default());
        let m = r.resolve("/").unwrap();
        assert_eq!(m.name, "index");
        assert!(m.params.is_empty());
    }

    #[test]
    fn project_route_carries_id() {
        let mut r = router(Rc::default());
        assert_eq!(r.navigate("/projects/42").unwrap(), Page::Project("42".into()));
        assert_eq!(r.current().unwrap().params.get("id"), Some("42"));
    }

    #[test]
    fn unknown_path_is_not_found() {
        let mut r = router(Rc::default());
        assert_eq!(
            r.navigate("/about"),
            Err(RouteError::NotFound("/about".into()))
        );
        assert!(r.current().is_none());
    }

    #[test]
    fn undecodable_param_is_not_found() {
        let mut r = router(Rc::default());
        assert_eq!(
            r.navigate("/projects/%FF"),
            Err(RouteError::NotFound("/projects/%FF".into()))
        );
        assert!(r.current().is_none());
    }

    #[test]
    fn trailing_slash_and_query_are_ignored() {
        let r = router(Rc::default());
        assert_eq!(r.resolve("/projects/7/?x=1").unwrap().params.get("id"), Some("7"));
    }

    #[test]
    fn module_loads_lazily_and_once() {
        let loads = Rc::new(Cell::new(0));
        let mut r = router(loads.clone());
        assert!(!r.is_loaded("single-project"));

        r.resolve("/projects/1").unwrap();
        assert_eq!(loads.get(), 0, "resolve must not load");

        r.navigate("/projects/1").unwrap();
        r.navigate("/projects/2").unwrap();
        assert_eq!(loads.get(), 1);
        assert!(r.is_loaded("single-project"));
        assert!(!r.is_loaded("index"));
    }

    #[test]
    fn duplicate_route_name_is_rejected() {
        let r = Router::<Page>::new()
            .route("index", "/", || |_: &RouteMatch| Page::Index)
            .unwrap()
            .route("index", "/home", || |_: &RouteMatch| Page::Index);
        assert!(matches!(r, Err(RouteError::DuplicateRoute(_))));
    }

    #[test]
    fn back_returns_previous_view() {
        let mut r = router(Rc::default());
        assert!(r.back().is_none());
        r.navigate("/").unwrap();
        r.navigate("/projects/3").unwrap();
        assert_eq!(r.back(), Some(Page::Index));
        assert_eq!(r.current().unwrap().name, "index");
        assert!(r.back().is_none());
    }

    #[test]
    fn href_builds_locations() {
        let r = router(Rc::default());
        assert_eq!(r.href("index", &Params::default()).as_deref(), Some("/"));
        assert_eq!(
            r.href("single-project", &Params::from([("id", "9")])).as_deref(),
            Some("/projects/9")
        );
        assert_eq!(r.href("missing", &Params::default()), None);
    }
}
