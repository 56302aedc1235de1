use crate::config::InsightsConfig;
use crate::tips::CategoryTips;
use crate::utils::round_to_cents;

/// Figures a category's advice is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryFigures {
    pub total: f64,
    pub last_month: f64,
    pub forecast: f64,
    pub anomaly_score: f64,
}

/// Soft budget target for next month, rounded to cents and never negative.
pub fn suggested_cap(forecast: f64, cap_ratio: f64) -> f64 {
    round_to_cents(cap_ratio * forecast).max(0.0)
}

pub struct RecommendationComposer<'a> {
    config: &'a InsightsConfig,
    tips: &'a CategoryTips,
}

impl<'a> RecommendationComposer<'a> {
    pub fn new(config: &'a InsightsConfig, tips: &'a CategoryTips) -> Self {
        Self { config, tips }
    }

    /// Notes come out in a fixed order: trend note, spike note, category tip.
    /// Each step may contribute nothing.
    pub fn compose(&self, category: &str, figures: &CategoryFigures) -> Vec<String> {
        let mut notes = Vec::new();
        let forecast = figures.forecast;

        if figures.last_month > forecast * self.config.over_trend_ratio {
            let cap = suggested_cap(forecast, self.config.cap_ratio);
            notes.push(format!(
                "Last month in {} was higher than trend. Aim for ${:.2} next month.",
                category, cap
            ));
        } else if forecast > 0.0 {
            notes.push(format!(
                "Stay on track in {}. Expected spend next month: ${:.2}.",
                category, forecast
            ));
        }

        if figures.anomaly_score >= self.config.spike_threshold {
            notes.push(format!(
                "Possible spike in {} last month (z≈{:.1}). Review big charges.",
                category, figures.anomaly_score
            ));
        }

        if let Some(tip) = self.tips.tip_for(category) {
            notes.push(tip.to_string());
        }

        notes
    }
}
