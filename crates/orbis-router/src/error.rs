use thiserror::Error;

/// Errors produced while building a route table or resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No registered route matches the path.
    #[error("no route matches `{0}`")]
    NotFound(String),

    /// A route with this name is already registered.
    #[error("route `{0}` is already registered")]
    DuplicateRoute(String),

    /// The route pattern could not be parsed.
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },
}
