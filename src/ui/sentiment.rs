//! Market sentiment bar.
//!
//! The score is held locally; there is no sentiment endpoint yet.

use crate::shared::Tone;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Sample score the search page starts with.
pub const SAMPLE_SENTIMENT: f64 = 0.67;

/// How long the bar pulses after its score changes.
pub const PULSE_MS: i64 = 600;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentView {
    /// Bar width as a percentage of the track, `0.0..=100.0`.
    pub width_percent: f64,
    pub tone: Tone,
    pub pulsing: bool,
    pub left_label: &'static str,
    pub title: &'static str,
    pub right_label: &'static str,
}

#[derive(Debug, Clone)]
pub struct SentimentBar {
    score: f64,
    pulse_until: Option<DateTime<Utc>>,
}

impl SentimentBar {
    /// A freshly mounted bar pulses once.
    pub fn new(score: f64, now: DateTime<Utc>) -> Self {
        Self {
            score,
            pulse_until: Some(now + Duration::milliseconds(PULSE_MS)),
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Replace the score. Pulses only if the value actually changed.
    pub fn set_score(&mut self, score: f64, now: DateTime<Utc>) {
        if score != self.score {
            self.score = score;
            self.pulse_until = Some(now + Duration::milliseconds(PULSE_MS));
        }
    }

    pub fn is_pulsing(&self, now: DateTime<Utc>) -> bool {
        self.pulse_until.is_some_and(|until| now < until)
    }

    /// `|score × 100|`, clamped to the track.
    pub fn width_percent(&self) -> f64 {
        (self.score * 100.0).abs().min(100.0)
    }

    pub fn tone(&self) -> Tone {
        Tone::of_change(self.score)
    }

    pub fn view(&self, now: DateTime<Utc>) -> SentimentView {
        SentimentView {
            width_percent: self.width_percent(),
            tone: self.tone(),
            pulsing: self.is_pulsing(now),
            left_label: "← Sell",
            title: "Market Sentiment",
            right_label: "Buy →",
        }
    }
}
