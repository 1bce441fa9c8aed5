//! Client-side routes and the navigation history.

use crate::runtime::{self, TaskHandle};
use crate::shared::Ticker;

use async_lock::RwLock;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", content = "param", rename_all = "snake_case")]
pub enum Route {
    Home,
    Search,
    Stock(Ticker),
    Signup,
    Login,
    /// Any path no route matches; holds the path as requested.
    NotFound(String),
}

impl Route {
    /// Match a path against `/`, `/search`, `/stock/:ticker`, `/signup`, `/login`.
    ///
    /// Query strings, fragments and a trailing slash are ignored.
    pub fn parse(path: &str) -> Route {
        let bare = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = bare.trim_end_matches('/');

        match trimmed {
            "" => Route::Home,
            "/search" => Route::Search,
            "/signup" => Route::Signup,
            "/login" => Route::Login,
            other => match other.strip_prefix("/stock/") {
                Some(segment) if !segment.is_empty() && !segment.contains('/') => {
                    match urlencoding::decode(segment) {
                        Ok(decoded) => Route::Stock(Ticker::from(decoded.into_owned())),
                        Err(_) => Route::NotFound(path.to_string()),
                    }
                }
                _ => Route::NotFound(path.to_string()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Search => "/search".to_string(),
            Route::Stock(ticker) => format!("/stock/{}", ticker.path_segment()),
            Route::Signup => "/signup".to_string(),
            Route::Login => "/login".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

// ─── Router ──────────────────────────────────────────────────────────────────

#[derive(Debug)]
struct RouterState {
    current: Route,
    history: Vec<Route>,
}

/// Navigation history shared between the shell and background redirects.
///
/// Cloning shares the same history.
#[derive(Debug, Clone)]
pub struct Router {
    inner: Arc<RwLock<RouterState>>,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RouterState {
                current: initial.clone(),
                history: vec![initial],
            })),
        }
    }

    pub async fn current(&self) -> Route {
        self.inner.read().await.current.clone()
    }

    /// Every route visited, oldest first, including the current one.
    pub async fn history(&self) -> Vec<Route> {
        self.inner.read().await.history.clone()
    }

    pub async fn navigate(&self, route: Route) {
        tracing::info!("Navigate to {}", route);
        let mut state = self.inner.write().await;
        state.history.push(route.clone());
        state.current = route;
    }

    /// Step back one entry. Returns the new current route, or `None` at the start.
    pub async fn back(&self) -> Option<Route> {
        let mut state = self.inner.write().await;
        if state.history.len() < 2 {
            return None;
        }
        state.history.pop();
        let previous = state.history.last().cloned()?;
        state.current = previous.clone();
        Some(previous)
    }

    /// Navigate once `delay` has elapsed.
    pub fn navigate_after(&self, route: Route, delay: Duration) -> TaskHandle {
        let router = self.clone();
        runtime::spawn(async move {
            runtime::sleep(delay).await;
            router.navigate(route).await;
        })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/search"), Route::Search);
        assert_eq!(Route::parse("/search/"), Route::Search);
        assert_eq!(Route::parse("/signup?ref=header"), Route::Signup);
        assert_eq!(Route::parse("/login#top"), Route::Login);
    }

    #[test]
    fn test_parse_stock_route() {
        assert_eq!(Route::parse("/stock/AAPL"), Route::Stock(Ticker::from("AAPL")));
        assert_eq!(Route::parse("/stock/brk%20b"), Route::Stock(Ticker::from("brk b")));
    }

    #[test]
    fn test_parse_unknown_routes() {
        assert_eq!(Route::parse("/stock/"), Route::NotFound("/stock/".into()));
        assert_eq!(Route::parse("/stock/A/B"), Route::NotFound("/stock/A/B".into()));
        assert_eq!(Route::parse("/about"), Route::NotFound("/about".into()));
    }

    #[test]
    fn test_path_round_trips_through_parse() {
        for route in [
            Route::Home,
            Route::Search,
            Route::Stock(Ticker::from("BRK B")),
            Route::Signup,
            Route::Login,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_router_navigate_and_back() {
        tokio_test::block_on(async {
            let router = Router::default();
            router.navigate(Route::Search).await;
            router.navigate(Route::Stock(Ticker::from("AAPL"))).await;
            assert_eq!(router.current().await, Route::Stock(Ticker::from("AAPL")));
            assert_eq!(router.history().await.len(), 3);

            assert_eq!(router.back().await, Some(Route::Search));
            assert_eq!(router.back().await, Some(Route::Home));
            assert_eq!(router.back().await, None);
            assert_eq!(router.current().await, Route::Home);
        });
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn test_navigate_after_delay() {
        let router = Router::default();
        let _handle = router.navigate_after(Route::Login, Duration::from_millis(50));
        assert_eq!(router.current().await, Route::Home);
        runtime::sleep(Duration::from_millis(120)).await;
        assert_eq!(router.current().await, Route::Login);
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn test_navigate_after_can_be_cancelled() {
        let router = Router::default();
        let handle = router.navigate_after(Route::Login, Duration::from_millis(50));
        handle.abort();
        runtime::sleep(Duration::from_millis(120)).await;
        assert_eq!(router.current().await, Route::Home);
    }
}
