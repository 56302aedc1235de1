use crate::utils::mean;
use log::debug;

/// Substituted for a zero x-variance so a degenerate fit cannot divide by zero.
const DEGENERATE_DENOMINATOR: f64 = 1e-9;

/// Straight line `y = slope * x + intercept` fitted by ordinary least squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    /// Fits `ys` against `x = 0..n`. Returns `None` for an empty series.
    pub fn fit(ys: &[f64]) -> Option<Self> {
        let n = ys.len();
        if n == 0 {
            return None;
        }

        let mean_x = (n - 1) as f64 / 2.0;
        let mean_y = mean(ys)?;

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (i, y) in ys.iter().enumerate() {
            let dx = i as f64 - mean_x;
            numerator += dx * (y - mean_y);
            denominator += dx * dx;
        }
        if denominator == 0.0 {
            denominator = DEGENERATE_DENOMINATOR;
        }

        let slope = numerator / denominator;
        let intercept = mean_y - slope * mean_x;
        Some(Self { slope, intercept })
    }

    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForecastMethod {
    /// Least-squares line evaluated at the next month index.
    Trend(LinearTrend),
    /// Mean of the strictly positive months.
    PositiveMean,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecast {
    pub value: f64,
    pub method: ForecastMethod,
}

pub struct ForecastEngine {
    min_trend_months: usize,
}

impl ForecastEngine {
    pub fn new(min_trend_months: usize) -> Self {
        Self { min_trend_months }
    }

    /// Projects next month's spend from a timeline-aligned series. Never
    /// negative; an empty or all-zero series forecasts 0.
    pub fn forecast(&self, series: &[f64]) -> Forecast {
        let positives: Vec<f64> = series.iter().copied().filter(|v| *v > 0.0).collect();

        if positives.len() >= self.min_trend_months {
            if let Some(trend) = LinearTrend::fit(series) {
                let projected = trend.value_at(series.len() as f64);
                debug!(
                    "Trend forecast: slope={:.4} intercept={:.4} projected={:.4}",
                    trend.slope, trend.intercept, projected
                );
                return Forecast {
                    value: projected.max(0.0),
                    method: ForecastMethod::Trend(trend),
                };
            }
        }

        Forecast {
            value: mean(&positives).unwrap_or(0.0),
            method: ForecastMethod::PositiveMean,
        }
    }

    pub fn forecast_next(&self, series: &[f64]) -> f64 {
        self.forecast(series).value
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new(3)
    }
}
