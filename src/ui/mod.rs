//! Headless page layer.
//!
//! Each page owns its local state and background tasks and renders to a
//! plain serializable view struct; a host (terminal, web view, test) draws
//! those structs however it likes. [`shell::App`] ties the pages together
//! under one router.

pub mod auth_page;
pub mod detail;
pub mod featured;
pub mod header;
pub mod home;
pub mod route;
pub mod search;
pub mod sentiment;
pub mod shell;
pub mod ticker;

pub use auth_page::{AuthFormView, LoginPage, Redirect, SignupPage};
pub use detail::{DetailPage, DetailStatus, DetailView};
pub use featured::{FeaturedCard, FeaturedStocks};
pub use header::HeaderView;
pub use home::HomeView;
pub use route::{Route, Router};
pub use search::{SearchPage, SearchView};
pub use sentiment::{SentimentBar, SentimentView};
pub use shell::{App, AppView, Page, PageView};
pub use ticker::{TickerItem, TickerStrip, TickerWidget};

/// Footer shown on the home, search and detail pages.
pub const DISCLAIMER: &str =
    "⚠️ This is an educational tool. Predictions are AI-generated and not financial advice.";
