//! In-process router with back history

use cdex_core::prelude::*;
use cdex_core::Route;

/// Current route plus the routes navigated away from
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    /// Start at `path`
    pub fn new(path: &str) -> Self {
        Self {
            current: Route::parse(path),
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Navigate to `route`, remembering where we came from
    ///
    /// Navigating to the current route is a no-op.
    pub fn push(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        debug!("Navigate {} -> {}", self.current, route);
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }

    /// Go back; returns false when there is nowhere to go
    ///
    /// With empty history a detail route still falls back to `/`.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                debug!("Back {} -> {}", self.current, previous);
                self.current = previous;
                true
            }
            None if self.current != Route::List => {
                self.current = Route::List;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty() || self.current != Route::List
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdex_core::CharacterId;

    #[test]
    fn test_default_is_list() {
        let router = Router::default();
        assert_eq!(router.current(), &Route::List);
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_push_and_back() {
        let mut router = Router::new("/");
        router.push(Route::character(CharacterId(2)));
        router.push(Route::character(CharacterId(3)));
        assert_eq!(router.current().path(), "/character/3");

        assert!(router.back());
        assert_eq!(router.current().path(), "/character/2");
        assert!(router.back());
        assert_eq!(router.current(), &Route::List);
        assert!(!router.back());
    }

    #[test]
    fn test_push_same_route_is_noop() {
        let mut router = Router::new("/character/1");
        router.push(Route::character(CharacterId(1)));
        assert!(router.back());
        assert_eq!(router.current(), &Route::List);
    }

    #[test]
    fn test_deep_link_back_falls_back_to_list() {
        let mut router = Router::new("/character/42");
        assert!(router.can_go_back());
        assert!(router.back());
        assert_eq!(router.current(), &Route::List);
    }
}
