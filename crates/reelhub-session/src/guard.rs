//! Route guard: pure gating of protected paths on identity presence.

use std::collections::HashMap;

use reelhub_entity::user::Identity;

/// The public landing path anonymous users are redirected to.
pub const PUBLIC_ROOT: &str = "/";

/// A declared path pattern, e.g. `/movies/:id/edit`.
///
/// Segments starting with `:` capture the corresponding path segment as a
/// named parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Parameters captured from a matched path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(HashMap<String, String>);

impl PathParams {
    /// Look up a captured parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// Decision produced by evaluating the guard for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The path matches and access is granted; render the target.
    Render(PathParams),
    /// The path matches but no identity is present; redirect.
    Redirect(&'static str),
    /// The path does not match this pattern; the guard is inert.
    NotMatched,
}

impl RoutePattern {
    /// Parse a `/`-separated pattern.
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Match a concrete path against this pattern, capturing parameters.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), (*part).to_string());
                }
            }
        }
        Some(PathParams(params))
    }
}

/// Evaluate access to a protected route.
///
/// Pure function of `(identity, path)`: a matching path renders when an
/// identity is present and redirects to [`PUBLIC_ROOT`] when it is absent;
/// a non-matching path leaves the guard inert.
pub fn evaluate(
    identity: Option<&Identity>,
    pattern: &RoutePattern,
    path: &str,
) -> GuardOutcome {
    match pattern.matches(path) {
        None => GuardOutcome::NotMatched,
        Some(params) => {
            if identity.is_some() {
                GuardOutcome::Render(params)
            } else {
                GuardOutcome::Redirect(PUBLIC_ROOT)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            id: "u1".into(),
            email: "a@b.com".to_string(),
            token: "tok".to_string(),
        }
    }

    #[test]
    fn test_literal_pattern_matching() {
        let pattern = RoutePattern::parse("/movies");
        assert!(pattern.matches("/movies").is_some());
        assert!(pattern.matches("/movies/42").is_none());
        assert!(pattern.matches("/").is_none());
    }

    #[test]
    fn test_param_capture() {
        let pattern = RoutePattern::parse("/movies/:id/edit");
        let params = pattern.matches("/movies/42/edit").expect("match");
        assert_eq!(params.get("id"), Some("42"));
        assert!(pattern.matches("/movies/42").is_none());
    }

    #[test]
    fn test_anonymous_access_redirects_to_root() {
        let pattern = RoutePattern::parse("/movies");
        assert_eq!(
            evaluate(None, &pattern, "/movies"),
            GuardOutcome::Redirect(PUBLIC_ROOT)
        );
    }

    #[test]
    fn test_authenticated_access_renders() {
        let pattern = RoutePattern::parse("/movies/:id");
        let outcome = evaluate(Some(&identity()), &pattern, "/movies/42");
        match outcome {
            GuardOutcome::Render(params) => assert_eq!(params.get("id"), Some("42")),
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn test_non_matching_path_is_inert() {
        let pattern = RoutePattern::parse("/change-password");
        assert_eq!(
            evaluate(None, &pattern, "/sign-in"),
            GuardOutcome::NotMatched
        );
    }
}
