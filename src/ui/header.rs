//! Site header — brand and navigation links.

use super::route::Route;
use serde::Serialize;

pub const BRAND: &str = "Veritas Stock Analysis";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
    /// Whether this link points at the page being shown.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub brand: &'static str,
    pub links: Vec<NavLink>,
}

impl HeaderView {
    pub fn new(current: &Route) -> Self {
        let links = [
            ("About Us", Route::Home),
            ("Stock Search", Route::Search),
            ("Sign Up", Route::Signup),
            ("Login", Route::Login),
        ]
        .into_iter()
        .map(|(label, route)| NavLink {
            label,
            active: &route == current,
            route,
        })
        .collect();

        Self { brand: BRAND, links }
    }
}
