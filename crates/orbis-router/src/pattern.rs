use crate::error::RouteError;
use crate::params::Params;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed route pattern such as `/` or `/projects/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn parse(source: &str) -> Result<Self, RouteError> {
        let invalid = |reason| RouteError::InvalidPattern {
            pattern: source.to_string(),
            reason,
        };

        if !source.starts_with('/') {
            return Err(invalid("must start with `/`"));
        }

        let mut segments = Vec::new();
        for raw in source.split('/').filter(|s| !s.is_empty()) {
            match raw.strip_prefix(':') {
                Some("") => return Err(invalid("parameter without a name")),
                Some(name) => {
                    let taken = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(n) if n == name));
                    if taken {
                        return Err(invalid("duplicate parameter name"));
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Literal(raw.to_string())),
            }
        }

        Ok(Self { segments })
    }

    /// Matches already-normalized path segments, returning the captured params.
    ///
    /// A parameter that does not percent-decode to UTF-8 fails the match.
    pub(crate) fn matches(&self, path: &[&str]) -> Option<Params> {
        if path.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::default();
        for (seg, part) in self.segments.iter().zip(path) {
            match seg {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Param(name) => params.insert(name, &urlencoding::decode(part).ok()?),
            }
        }
        Some(params)
    }

    /// Builds a concrete path by substituting `params`; `None` if one is missing.
    pub(crate) fn fill(&self, params: &Params) -> Option<String> {
        if self.segments.is_empty() {
            return Some("/".to_string());
        }

        let mut out = String::new();
        for seg in &self.segments {
            out.push('/');
            match seg {
                Segment::Literal(lit) => out.push_str(lit),
                Segment::Param(name) => out.push_str(&urlencoding::encode(params.get(name)?)),
            }
        }
        Some(out)
    }
}

/// Splits a location into path segments, dropping query, fragment and empty segments.
pub(crate) fn split_path(location: &str) -> Vec<&str> {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    location[..end].split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_pattern_has_no_segments() {
        let p = Pattern::parse("/").unwrap();
        assert!(p.matches(&[]).is_some());
        assert!(p.matches(&["x"]).is_none());
    }

    #[test]
    fn param_is_captured() {
        let p = Pattern::parse("/projects/:id").unwrap();
        let params = p.matches(&["projects", "42"]).unwrap();
        assert_eq!(params.get("id"), Some("42"));
        assert!(p.matches(&["project", "42"]).is_none());
        assert!(p.matches(&["projects"]).is_none());
    }

    #[test]
    fn literals_are_case_sensitive() {
        let p = Pattern::parse("/projects/:id").unwrap();
        assert!(p.matches(&["Projects", "1"]).is_none());
    }

    #[test]
    fn rejects_relative_and_unnamed() {
        assert!(matches!(Pattern::parse("projects"), Err(RouteError::InvalidPattern { .. })));
        assert!(matches!(Pattern::parse("/projects/:"), Err(RouteError::InvalidPattern { .. })));
        assert!(matches!(Pattern::parse("/:a/:a"), Err(RouteError::InvalidPattern { .. })));
    }

    #[test]
    fn split_drops_query_fragment_and_slashes() {
        assert_eq!(split_path("/projects/7/?tab=info#top"), vec!["projects", "7"]);
        assert_eq!(split_path("//"), Vec::<&str>::new());
    }

    #[test]
    fn params_are_percent_decoded() {
        let p = Pattern::parse("/projects/:id").unwrap();
        assert_eq!(p.matches(&["projects", "a%20b"]).unwrap().get("id"), Some("a b"));
        assert_eq!(p.matches(&["projects", "caf%C3%A9"]).unwrap().get("id"), Some("café"));
    }

    #[test]
    fn invalid_utf8_escape_fails_the_match() {
        let p = Pattern::parse("/projects/:id").unwrap();
        assert!(p.matches(&["projects", "%FF"]).is_none());
    }

    #[test]
    fn fill_encodes_params() {
        let p = Pattern::parse("/projects/:id").unwrap();
        let mut params = Params::default();
        params.insert("id", "a b");
        assert_eq!(p.fill(&params).as_deref(), Some("/projects/a%20b"));
        assert_eq!(p.fill(&Params::default()), None);
    }
}
