//! `App` — the routing shell.
//!
//! Keeps the ticker strip mounted for the whole session and exactly one page
//! below the header. Changing route unmounts the previous page (stopping its
//! pollers and loads) before the next one mounts. Moving between two stock
//! pages reuses the detail page and only swaps its ticker.

use super::auth_page::{AuthFormView, LoginPage, Redirect, SignupPage};
use super::detail::{DetailPage, DetailView};
use super::header::HeaderView;
use super::home::HomeView;
use super::route::{Route, Router};
use super::search::{SearchPage, SearchView};
use super::ticker::{TickerStrip, TickerWidget};
use crate::client::VeritasClient;
use crate::runtime::TaskHandle;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The page currently below the header.
pub enum Page {
    Home,
    Search(SearchPage),
    Detail(DetailPage),
    Signup(SignupPage),
    Login(LoginPage),
    NotFound(String),
}

impl Page {
    fn for_route(client: &VeritasClient, route: &Route, now: DateTime<Utc>) -> Self {
        match route {
            Route::Home => Page::Home,
            Route::Search => Page::Search(SearchPage::new(client, now)),
            Route::Stock(ticker) => Page::Detail(DetailPage::new(client, ticker.clone())),
            Route::Signup => Page::Signup(SignupPage::new(client)),
            Route::Login => Page::Login(LoginPage::new(client)),
            Route::NotFound(path) => Page::NotFound(path.clone()),
        }
    }

    fn mount(&mut self) {
        match self {
            Page::Search(page) => page.mount(),
            Page::Detail(page) => page.mount(),
            _ => {}
        }
    }

    fn unmount(&mut self) {
        match self {
            Page::Search(page) => page.unmount(),
            Page::Detail(page) => page.unmount(),
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", content = "view", rename_all = "snake_case")]
pub enum PageView {
    Home(HomeView),
    Search(SearchView),
    Detail(DetailView),
    Signup(AuthFormView),
    Login(AuthFormView),
    NotFound { path: String },
}

/// Everything on screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppView {
    pub route: Route,
    pub ticker: TickerStrip,
    pub header: HeaderView,
    pub page: PageView,
}

pub struct App {
    client: VeritasClient,
    router: Router,
    ticker: TickerWidget,
    page: Page,
    shown: Route,
    mounted: bool,
    /// Pending post-signup redirect. A newer one replaces it.
    redirect: Option<TaskHandle>,
}

impl App {
    /// Build the shell for `initial_path`. Nothing is fetched until [`App::mount`].
    pub fn new(client: &VeritasClient, initial_path: &str) -> Self {
        let route = Route::parse(initial_path);
        Self {
            client: client.clone(),
            router: Router::new(route.clone()),
            ticker: TickerWidget::new(client),
            page: Page::for_route(client, &route, Utc::now()),
            shown: route,
            mounted: false,
            redirect: None,
        }
    }

    /// Start the ticker strip and the current page.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.ticker.mount();
        self.page.mount();
    }

    /// Stop everything: ticker, page, and the pending redirect.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.ticker.unmount();
        self.page.unmount();
        if let Some(handle) = self.redirect.take() {
            handle.abort();
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn ticker(&self) -> &TickerWidget {
        &self.ticker
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Route of the page currently mounted.
    pub fn shown_route(&self) -> &Route {
        &self.shown
    }

    pub async fn navigate(&mut self, route: Route) {
        self.router.navigate(route).await;
        self.sync().await;
    }

    pub async fn back(&mut self) -> bool {
        let moved = self.router.back().await.is_some();
        if moved {
            self.sync().await;
        }
        moved
    }

    /// Bring the mounted page in line with the router. Needed after a
    /// delayed redirect fires. Returns whether the page changed.
    pub async fn sync(&mut self) -> bool {
        let route = self.router.current().await;
        if route == self.shown {
            return false;
        }
        self.transition(route);
        true
    }

    fn transition(&mut self, route: Route) {
        let reuse = self.mounted && matches!((&self.page, &route), (Page::Detail(_), Route::Stock(_)));
        if reuse {
            if let (Page::Detail(detail), Route::Stock(ticker)) = (&mut self.page, &route) {
                detail.set_ticker(ticker.clone());
            }
        } else {
            self.page.unmount();
            self.page = Page::for_route(&self.client, &route, Utc::now());
            if self.mounted {
                self.page.mount();
            }
        }
        self.shown = route;
    }

    // ── Page actions ─────────────────────────────────────────────────────

    /// Home page call-to-action.
    pub async fn follow_call_to_action(&mut self) {
        let route = HomeView::default().call_to_action.route;
        self.navigate(route).await;
    }

    /// Submit the search form. Returns whether it navigated.
    pub async fn submit_search(&mut self) -> bool {
        let target = match &self.page {
            Page::Search(page) => page.submit(),
            _ => None,
        };
        match target {
            Some(route) => {
                self.navigate(route).await;
                true
            }
            None => false,
        }
    }

    /// Submit the signup form. On success the redirect home is scheduled.
    pub async fn submit_signup(&mut self) -> bool {
        let redirect = match &mut self.page {
            Page::Signup(page) => page.submit().await,
            _ => None,
        };
        match redirect {
            Some(redirect) => {
                self.schedule_redirect(redirect);
                true
            }
            None => false,
        }
    }

    fn schedule_redirect(&mut self, redirect: Redirect) {
        if let Some(previous) = self.redirect.take() {
            previous.abort();
        }
        self.redirect = Some(self.router.navigate_after(redirect.route, redirect.after));
    }

    pub async fn submit_login(&mut self) -> bool {
        match &mut self.page {
            Page::Login(page) => page.submit().await,
            _ => false,
        }
    }

    // ── Rendering ────────────────────────────────────────────────────────

    pub async fn view(&mut self, now: DateTime<Utc>) -> AppView {
        self.sync().await;

        let page = match &self.page {
            Page::Home => PageView::Home(HomeView::default()),
            Page::Search(page) => PageView::Search(page.view(now).await),
            Page::Detail(page) => PageView::Detail(page.view().await),
            Page::Signup(page) => PageView::Signup(page.view()),
            Page::Login(page) => PageView::Login(page.view()),
            Page::NotFound(path) => PageView::NotFound { path: path.clone() },
        };

        AppView {
            route: self.shown.clone(),
            ticker: self.ticker.view().await,
            header: HeaderView::new(&self.shown),
            page,
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Ticker;

    fn client() -> VeritasClient {
        VeritasClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap()
    }

    #[test]
    fn test_initial_route_from_path() {
        let app = App::new(&client(), "/stock/msft");
        assert_eq!(app.shown_route(), &Route::Stock(Ticker::from("msft")));
        assert!(matches!(app.page(), Page::Detail(_)));
    }

    #[test]
    fn test_unknown_path_renders_not_found() {
        let mut app = App::new(&client(), "/nowhere");
        let view = tokio_test::block_on(app.view(Utc::now()));
        assert_eq!(
            view.page,
            PageView::NotFound {
                path: "/nowhere".into()
            }
        );
    }

    #[test]
    fn test_unmounted_navigation_swaps_pages() {
        let mut app = App::new(&client(), "/");
        tokio_test::block_on(async {
            app.follow_call_to_action().await;
            assert!(matches!(app.page(), Page::Search(_)));

            if let Page::Search(page) = app.page_mut() {
                page.set_input(" tsla ");
            }
            assert!(app.submit_search().await);
            assert_eq!(app.shown_route().path(), "/stock/TSLA");

            assert!(app.back().await);
            assert!(matches!(app.page(), Page::Search(_)));
        });
    }

    #[test]
    fn test_search_submit_outside_search_page() {
        let mut app = App::new(&client(), "/login");
        assert!(!tokio_test::block_on(app.submit_search()));
        assert_eq!(app.shown_route(), &Route::Login);
    }

    #[test]
    fn test_header_marks_current_route() {
        let mut app = App::new(&client(), "/signup");
        let view = tokio_test::block_on(app.view(Utc::now()));
        let active: Vec<_> = view.header.links.iter().filter(|l| l.active).map(|l| l.label).collect();
        assert_eq!(active, ["Sign Up"]);
        assert!(matches!(view.page, PageView::Signup(_)));
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn test_newer_redirect_replaces_pending_one() {
        use std::time::Duration;

        let mut app = App::new(&client(), "/signup");
        app.schedule_redirect(Redirect {
            route: Route::Login,
            after: Duration::from_millis(50),
        });
        let first = app.redirect.clone().unwrap();

        app.schedule_redirect(Redirect {
            route: Route::Home,
            after: Duration::from_millis(50),
        });
        assert!(first.is_aborted());
        assert!(!app.redirect.as_ref().unwrap().is_aborted());

        crate::runtime::sleep(Duration::from_millis(120)).await;
        assert_eq!(app.router().current().await, Route::Home);
        assert_eq!(
            app.router().history().await,
            vec![Route::Signup, Route::Home]
        );

        app.unmount();
        assert!(app.redirect.is_none());
    }
}
