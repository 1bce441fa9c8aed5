//! Landing page.

use super::route::Route;
use super::DISCLAIMER;
use serde::Serialize;

const TITLE: &str = "Welcome to Veritas Stock Analysis";

const INTRO: &str = "Empower your financial future with one of the only free AI-driven stock \
recommendation websites on the internet. Our models use real technical indicators like RSI, \
MACD, and Bollinger Bands to guide Buy, Sell, or Hold decisions.";

const MISSION: &str = "Our mission is to help students, young adults, and anyone seeking to make \
smarter investments, especially those who lack the time to thoroughly research and learn the \
intricacies of investing. Our advanced AI model, trained on over 30 years of historical stock \
data, provides clear and actionable investment guidance, simplifying your journey to financial \
success, all while furthering your knowledge in the stock market.";

const HOW_IT_WORKS_TITLE: &str = "How And Why It Works";

const HOW_IT_WORKS: [&str; 4] = [
    "Real historical stock data is pulled from Yahoo Finance every 60 seconds.",
    "Technical indicators are calculated directly on the data instantly by the LSTM.",
    "A trained LSTM neural network generates a Buy, Sell, or Hold prediction for any searched stock.",
    "The model is trained with over 30 years and counting of daily historical stock data to increase precision.",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub title: &'static str,
    pub paragraphs: [&'static str; 2],
    pub how_it_works_title: &'static str,
    pub how_it_works: [&'static str; 4],
    pub call_to_action: CallToAction,
    pub disclaimer: &'static str,
}

impl Default for HomeView {
    fn default() -> Self {
        Self {
            title: TITLE,
            paragraphs: [INTRO, MISSION],
            how_it_works_title: HOW_IT_WORKS_TITLE,
            how_it_works: HOW_IT_WORKS,
            call_to_action: CallToAction {
                label: "Search for Stocks",
                route: Route::Search,
            },
            disclaimer: DISCLAIMER,
        }
    }
}
