//! Site routes.
//!
//! The data pipeline's only coupling to routing is that the engineer
//! portfolio page receives one identity from its path.

use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Services,
    Portfolio,
    Engineers,
    Engineer { id: String },
    Contribute,
    Contact,
}

impl Route {
    /// The path this route is served at.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Services => "/services".to_string(),
            Self::Portfolio => "/portfolio".to_string(),
            Self::Engineers => "/engineers".to_string(),
            Self::Engineer { id } => format!("/engineer/{id}"),
            Self::Contribute => "/contribute".to_string(),
            Self::Contact => "/contact".to_string(),
        }
    }

    /// The engineer identity carried by the route, if any.
    #[must_use]
    pub fn engineer_id(&self) -> Option<&str> {
        match self {
            Self::Engineer { id } => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = CoreError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim_end_matches('/');
        let route = match trimmed {
            "" => Self::Home,
            "/services" => Self::Services,
            "/portfolio" => Self::Portfolio,
            "/engineers" => Self::Engineers,
            "/contribute" => Self::Contribute,
            "/contact" => Self::Contact,
            other => match other.strip_prefix("/engineer/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::Engineer {
                    id: id.to_string(),
                },
                _ => return Err(CoreError::UnknownRoute(path.to_string())),
            },
        };
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Route::Home)]
    #[case("/services", Route::Services)]
    #[case("/portfolio/", Route::Portfolio)]
    #[case("/engineers", Route::Engineers)]
    #[case("/engineer/eng-42", Route::Engineer { id: "eng-42".into() })]
    #[case("/contribute", Route::Contribute)]
    #[case("/contact", Route::Contact)]
    fn parses_known_paths(#[case] path: &str, #[case] expected: Route) {
        assert_eq!(path.parse::<Route>().unwrap(), expected);
    }

    #[rstest]
    #[case("/engineer/")]
    #[case("/engineer/a/b")]
    #[case("/admin")]
    fn rejects_unknown_paths(#[case] path: &str) {
        assert!(matches!(
            path.parse::<Route>(),
            Err(CoreError::UnknownRoute(_))
        ));
    }

    #[test]
    fn engineer_route_roundtrips() {
        let route = Route::Engineer { id: "e1".into() };
        assert_eq!(route.path(), "/engineer/e1");
        assert_eq!(route.path().parse::<Route>().unwrap(), route);
        assert_eq!(route.engineer_id(), Some("e1"));
        assert_eq!(Route::Home.engineer_id(), None);
    }
}
