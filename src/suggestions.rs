use crate::aggregator::MonthlyTotals;
use crate::config::InsightsConfig;
use crate::schema::CategoryInsights;
use crate::utils::mean;
use log::debug;

pub const DRIFT_WARNING: &str = "Overall spending has risen ~10%+ in the last quarter vs the previous. Consider a temporary 5–10% cut across variable categories.";

/// Quarter-over-quarter comparison of overall monthly spend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpendingDrift {
    pub recent_average: f64,
    pub prior_average: f64,
}

impl SpendingDrift {
    /// Compares the last `window` months against the `window` months before
    /// them. `None` when fewer than `2 * window` months exist.
    pub fn measure(month_totals: &MonthlyTotals, window: usize) -> Option<Self> {
        if window == 0 || month_totals.len() < window * 2 {
            return None;
        }

        // BTreeMap iterates months chronologically.
        let values: Vec<f64> = month_totals.values().copied().collect();
        let recent = &values[values.len() - window..];
        let prior = &values[values.len() - window * 2..values.len() - window];

        Some(Self {
            recent_average: mean(recent)?,
            prior_average: mean(prior)?,
        })
    }

    pub fn exceeds(&self, ratio: f64) -> bool {
        self.recent_average > self.prior_average * ratio
    }
}

pub struct GlobalSuggestionComposer<'a> {
    config: &'a InsightsConfig,
}

impl<'a> GlobalSuggestionComposer<'a> {
    pub fn new(config: &'a InsightsConfig) -> Self {
        Self { config }
    }

    /// `ranked` must be in first-encountered category order; the sort is
    /// stable so forecast ties keep that order.
    pub fn compose(
        &self,
        ranked: &[(&str, &CategoryInsights)],
        month_totals: &MonthlyTotals,
    ) -> Vec<String> {
        let mut suggestions = self.targeted_caps(ranked);
        if let Some(warning) = self.drift_warning(month_totals) {
            suggestions.push(warning);
        }
        suggestions
    }

    pub fn targeted_caps(&self, ranked: &[(&str, &CategoryInsights)]) -> Vec<String> {
        let mut by_forecast = ranked.to_vec();
        by_forecast.sort_by(|a, b| b.1.forecast_next.total_cmp(&a.1.forecast_next));

        by_forecast
            .into_iter()
            .take(self.config.targeted_cap_count)
            .map(|(category, insights)| {
                format!(
                    "Set a monthly soft cap for {} around ${:.2}.",
                    category, insights.suggested_cap
                )
            })
            .collect()
    }

    pub fn drift_warning(&self, month_totals: &MonthlyTotals) -> Option<String> {
        let Some(drift) = SpendingDrift::measure(month_totals, self.config.drift_window) else {
            debug!(
                "Skipping drift check: {} months available, {} needed",
                month_totals.len(),
                self.config.drift_window * 2
            );
            return None;
        };

        debug!(
            "Drift check: recent average {:.2} vs prior average {:.2}",
            drift.recent_average, drift.prior_average
        );

        if drift.exceeds(self.config.drift_ratio) {
            Some(DRIFT_WARNING.to_string())
        } else {
            None
        }
    }
}
