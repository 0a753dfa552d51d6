//! Navigation graph: `splash` (start) → `login` → `home`.
//!
//! Routes change only in response to the splash and login state machines;
//! there is no way back into the splash screen.

use std::time::SystemTime;

use thiserror::Error;

/// Screen routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Splash,
    Login,
    Home,
}

impl Route {
    /// Initial route of the graph.
    pub const START: Route = Route::Splash;

    /// Route name. Once published, do not rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::Login => "login",
            Self::Home => "home",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "splash" => Some(Self::Splash),
            "login" => Some(Self::Login),
            "home" => Some(Self::Home),
            _ => None,
        }
    }

    /// Whether the graph allows moving from `self` to `to`.
    pub fn can_navigate_to(&self, to: Route) -> bool {
        matches!(
            (self, to),
            (Route::Splash, Route::Login) | (Route::Splash, Route::Home) | (Route::Login, Route::Home)
        )
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Cannot navigate from '{from}' to '{to}'")]
    IllegalTransition { from: Route, to: Route },
}

/// Record of one completed navigation.
#[derive(Debug, Clone)]
pub struct NavigationEntry {
    pub timestamp: SystemTime,
    pub from: Route,
    pub to: Route,
}

/// Current position in the graph plus the transitions taken so far.
#[derive(Debug, Clone)]
pub struct NavGraph {
    current: Route,
    history: Vec<NavigationEntry>,
}

impl NavGraph {
    pub fn new() -> Self {
        Self {
            current: Route::START,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn history(&self) -> &[NavigationEntry] {
        &self.history
    }

    /// Move to `to`. State is unchanged on error.
    pub fn navigate(&mut self, to: Route) -> Result<(), NavigationError> {
        let from = self.current;
        if !from.can_navigate_to(to) {
            return Err(NavigationError::IllegalTransition { from, to });
        }
        self.history.push(NavigationEntry {
            timestamp: SystemTime::now(),
            from,
            to,
        });
        self.current = to;
        tracing::info!(from = %from, to = %to, "Navigated");
        Ok(())
    }
}

impl Default for NavGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_starts_at_splash() {
        let graph = NavGraph::new();
        assert_eq!(graph.current(), Route::Splash);
        assert!(graph.history().is_empty());
    }

    #[test]
    fn splash_login_home_is_allowed() {
        let mut graph = NavGraph::new();
        graph.navigate(Route::Login).unwrap();
        graph.navigate(Route::Home).unwrap();
        assert_eq!(graph.current(), Route::Home);
        assert_eq!(graph.history().len(), 2);
        assert_eq!(graph.history()[0].from, Route::Splash);
    }

    #[test]
    fn nothing_leads_back_to_splash() {
        for from in [Route::Splash, Route::Login, Route::Home] {
            assert!(!from.can_navigate_to(Route::Splash));
        }
    }

    #[test]
    fn illegal_transition_keeps_route() {
        let mut graph = NavGraph::new();
        graph.navigate(Route::Home).unwrap();
        let err = graph.navigate(Route::Login).unwrap_err();
        assert_eq!(
            err,
            NavigationError::IllegalTransition {
                from: Route::Home,
                to: Route::Login
            }
        );
        assert_eq!(graph.current(), Route::Home);
    }

    #[test]
    fn illegal_transition_converts_to_io_error() {
        let err = NavGraph::new().navigate(Route::Splash).unwrap_err();
        let io_err = std::io::Error::other(err);
        assert_eq!(io_err.kind(), std::io::ErrorKind::Other);
        assert_eq!(io_err.to_string(), "Cannot navigate from 'splash' to 'splash'");
    }

    #[test]
    fn route_names_round_trip() {
        for route in [Route::Splash, Route::Login, Route::Home] {
            assert_eq!(Route::parse(route.as_str()), Some(route));
        }
        assert_eq!(Route::parse("settings"), None);
    }
}
