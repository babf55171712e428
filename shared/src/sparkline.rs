use serde::{Deserialize, Serialize};

use crate::currency::{CurrencyConfig, CurrencyFormatter};

/// Height given to every bar when the series has no spread
pub const FLAT_SERIES_HEIGHT: f64 = 50.0;

/// CSS classes applied to each rendered bar
pub const DEFAULT_BAR_CLASS: &str = "flex-1 bg-indigo-400 rounded-t hover:bg-indigo-600 transition-colors";

/// A single bar of a rendered sparkline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bar {
    /// Bar height as a percentage of the container, always within [0, 100]
    pub height_percent: f64,
    /// Hover text, e.g. "Day 3: ₹20.00"
    pub label: String,
}

/// Smallest and largest finite values of a series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesBounds {
    pub min: f64,
    pub max: f64,
}

impl SeriesBounds {
    /// Bounds over the finite values of `series`, or `None` if there are none.
    pub fn of(series: &[f64]) -> Option<Self> {
        series
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |bounds, v| match bounds {
                None => Some(Self { min: v, max: v }),
                Some(b) => Some(Self {
                    min: b.min.min(v),
                    max: b.max.max(v),
                }),
            })
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Min-max scales `value` into [0, 100].
///
/// A series without spread puts every bar at [`FLAT_SERIES_HEIGHT`].
pub fn normalized_height(value: f64, bounds: &SeriesBounds) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    if bounds.max <= bounds.min {
        return FLAT_SERIES_HEIGHT;
    }

    let range = bounds.range();
    let fraction = if range.is_finite() {
        (value - bounds.min) / range
    } else {
        // max - min overflowed, so scale both sides down first
        (value / 2.0 - bounds.min / 2.0) / (bounds.max / 2.0 - bounds.min / 2.0)
    };

    (fraction * 100.0).clamp(0.0, 100.0)
}

pub fn bar_label(index: usize, formatted_amount: &str) -> String {
    format!("Day {}: {}", index + 1, formatted_amount)
}

/// Builds one bar per value, keeping series order.
pub fn build_bars<F: CurrencyFormatter + ?Sized>(series: &[f64], formatter: &F) -> Vec<Bar> {
    let bounds = match SeriesBounds::of(series) {
        Some(bounds) => bounds,
        None => SeriesBounds { min: 0.0, max: 0.0 },
    };

    series
        .iter()
        .enumerate()
        .map(|(index, &value)| Bar {
            height_percent: normalized_height(value, &bounds),
            label: bar_label(index, &formatter.format(value)),
        })
        .collect()
}

/// A display surface that receives bars, such as a DOM element.
///
/// The surface is owned by the caller; the renderer only appends to it, or
/// clears it when asked.
pub trait SparklineSurface {
    fn append_bar(&mut self, bar: &Bar);
    fn clear(&mut self);
}

/// Whether a render adds to what the surface already shows or replaces it
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    #[default]
    Append,
    Replace,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SparklineConfig {
    pub mode: RenderMode,
    pub bar_class: String,
}

impl Default for SparklineConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Append,
            bar_class: DEFAULT_BAR_CLASS.to_string(),
        }
    }
}

/// Sparkline data embedded in the page as JSON
///
/// When `container_id` is set the bars go into that existing element,
/// otherwise the frontend mounts its own container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SparklinePayload {
    pub series: Vec<f64>,
    pub container_id: Option<String>,
    pub config: SparklineConfig,
    pub currency: CurrencyConfig,
}

impl SparklinePayload {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

pub struct SparklineRenderer<F> {
    formatter: F,
    mode: RenderMode,
}

impl<F: CurrencyFormatter> SparklineRenderer<F> {
    pub fn new(formatter: F) -> Self {
        Self {
            formatter,
            mode: RenderMode::default(),
        }
    }

    pub fn with_mode(formatter: F, mode: RenderMode) -> Self {
        Self { formatter, mode }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Draws `series` onto `surface` and returns how many bars were appended.
    ///
    /// A missing surface or an empty series is a no-op: nothing is cleared
    /// and nothing is appended.
    pub fn render<S: SparklineSurface + ?Sized>(&self, series: &[f64], surface: Option<&mut S>) -> usize {
        let surface = match surface {
            Some(surface) => surface,
            None => return 0,
        };
        if series.is_empty() {
            return 0;
        }

        let bars = build_bars(series, &self.formatter);

        if self.mode == RenderMode::Replace {
            surface.clear();
        }
        for bar in &bars {
            surface.append_bar(bar);
        }

        bars.len()
    }

    pub fn clear<S: SparklineSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
    }
}
