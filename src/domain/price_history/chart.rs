//! Chart geometry for a price series.
//!
//! Produces pixel-space primitives (points, candle glyphs, axis labels) for
//! the last [`VISIBLE_BARS`] sessions. The rendering host draws them as-is.

use super::{PriceBar, Series, VISIBLE_BARS};
use crate::shared::fmt;
use serde::{Deserialize, Serialize};

const X_TICKS: usize = 6;
const Y_TICKS: usize = 5;
const CANDLE_BODY_RATIO: f64 = 0.6;

/// Which series the chart draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Line,
    Candlestick,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line Chart",
            ChartKind::Candlestick => "Candlestick",
        }
    }
}

/// Canvas size and margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margin_left: 50.0,
            margin_right: 50.0,
            margin_top: 10.0,
            margin_bottom: 30.0,
        }
    }
}

impl ChartLayout {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// One candlestick in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotCandle {
    pub x: f64,
    pub body_width: f64,
    pub open_y: f64,
    pub close_y: f64,
    pub high_y: f64,
    pub low_y: f64,
    pub rising: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    /// Pixel position along the axis.
    pub position: f64,
    pub text: String,
}

/// Everything needed to draw the chart for one series and kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    pub kind: ChartKind,
    pub layout: ChartLayout,
    /// Inclusive index range into the full series.
    pub x_extent: (usize, usize),
    pub y_extent: (f64, f64),
    /// Populated for [`ChartKind::Line`].
    pub line: Vec<PlotPoint>,
    /// Populated for [`ChartKind::Candlestick`].
    pub candles: Vec<PlotCandle>,
    pub x_labels: Vec<AxisLabel>,
    pub y_labels: Vec<AxisLabel>,
    /// `Close: 123.45` for the latest visible session (line chart only).
    pub tooltip: Option<String>,
}

impl ChartView {
    /// `None` for an empty series.
    pub fn build(series: &Series, kind: ChartKind, layout: ChartLayout) -> Option<ChartView> {
        let x_extent = series.tail_extent(VISIBLE_BARS)?;
        let visible = series.tail(VISIBLE_BARS);
        let y_extent = y_extent(visible, kind);

        let slot = layout.plot_width() / visible.len() as f64;
        let x_at = |i: usize| layout.margin_left + (i as f64 + 0.5) * slot;
        let y_at = |v: f64| scale_y(v, y_extent, &layout);

        let (line, candles, tooltip) = match kind {
            ChartKind::Line => {
                let line = visible
                    .iter()
                    .enumerate()
                    .map(|(i, bar)| PlotPoint {
                        x: x_at(i),
                        y: y_at(bar.close),
                    })
                    .collect();
                let tooltip = visible
                    .last()
                    .map(|bar| format!("Close: {}", fmt::fixed2(bar.close)));
                (line, Vec::new(), tooltip)
            }
            ChartKind::Candlestick => {
                let body_width = (slot * CANDLE_BODY_RATIO).max(1.0);
                let candles = visible
                    .iter()
                    .enumerate()
                    .map(|(i, bar)| PlotCandle {
                        x: x_at(i),
                        body_width,
                        open_y: y_at(bar.open),
                        close_y: y_at(bar.close),
                        high_y: y_at(bar.high),
                        low_y: y_at(bar.low),
                        rising: bar.is_rising(),
                    })
                    .collect();
                (Vec::new(), candles, None)
            }
        };

        let x_labels = x_tick_indices(visible.len())
            .into_iter()
            .map(|i| AxisLabel {
                position: x_at(i),
                text: visible[i].date.format("%-m/%-d/%Y").to_string(),
            })
            .collect();

        let (lo, hi) = y_extent;
        let y_labels = (0..Y_TICKS)
            .map(|t| {
                let v = lo + (hi - lo) * t as f64 / (Y_TICKS - 1) as f64;
                AxisLabel {
                    position: y_at(v),
                    text: fmt::fixed2(v),
                }
            })
            .collect();

        Some(ChartView {
            kind,
            layout,
            x_extent,
            y_extent,
            line,
            candles,
            x_labels,
            y_labels,
            tooltip,
        })
    }
}

/// `[min low, max high]` for candles, `[min close, max close]` for the line.
fn y_extent(bars: &[PriceBar], kind: ChartKind) -> (f64, f64) {
    let (lows, highs): (Vec<f64>, Vec<f64>) = match kind {
        ChartKind::Candlestick => bars.iter().map(|b| (b.low, b.high)).unzip(),
        ChartKind::Line => bars.iter().map(|b| (b.close, b.close)).unzip(),
    };
    let lo = lows.into_iter().fold(f64::INFINITY, f64::min);
    let hi = highs.into_iter().fold(f64::NEG_INFINITY, f64::max);
    (lo, hi)
}

fn scale_y(value: f64, (lo, hi): (f64, f64), layout: &ChartLayout) -> f64 {
    let span = hi - lo;
    if span <= 0.0 {
        return layout.margin_top + layout.plot_height() / 2.0;
    }
    layout.margin_top + (hi - value) / span * layout.plot_height()
}

fn x_tick_indices(len: usize) -> Vec<usize> {
    if len <= X_TICKS {
        return (0..len).collect();
    }
    let step = (len - 1) as f64 / (X_TICKS - 1) as f64;
    (0..X_TICKS)
        .map(|t| (t as f64 * step).round() as usize)
        .collect()
}
