//! Price history domain — daily bars, series, chart geometry.

pub mod chart;
pub mod client;
mod convert;
pub mod wire;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use chart::{ChartKind, ChartLayout, ChartView};

/// Number of most recent bars the chart shows initially.
pub const VISIBLE_BARS: usize = 80;

// ─── PriceBar ────────────────────────────────────────────────────────────────

/// One trading session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PriceBar {
    pub fn is_rising(&self) -> bool {
        self.close >= self.open
    }
}

// ─── Series ──────────────────────────────────────────────────────────────────

/// Bars in the order the backend sent them (oldest first).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    bars: Vec<PriceBar>,
}

impl Series {
    pub fn new(bars: Vec<PriceBar>) -> Self {
        Self { bars }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn latest(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// Index range `[start, end]` (inclusive) of the last `max` bars.
    pub fn tail_extent(&self, max: usize) -> Option<(usize, usize)> {
        if self.bars.is_empty() || max == 0 {
            return None;
        }
        let end = self.bars.len() - 1;
        let start = self.bars.len().saturating_sub(max);
        Some((start, end))
    }

    /// The last `max` bars.
    pub fn tail(&self, max: usize) -> &[PriceBar] {
        match self.tail_extent(max) {
            Some((start, _)) => &self.bars[start..],
            None => &[],
        }
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(Vec<ValidationError>),
    InvalidDate { index: usize, raw: String },
    NonFinitePrice { index: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(errors) => {
                writeln!(f, "Price series validation errors:")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::InvalidDate { index, raw } => {
                write!(f, "Bar {}: invalid date {:?}", index, raw)
            }
            ValidationError::NonFinitePrice { index } => {
                write!(f, "Bar {}: non-finite price", index)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
