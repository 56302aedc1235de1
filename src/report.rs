use crate::aggregator::MonthlyAggregator;
use crate::anomaly::AnomalyDetector;
use crate::config::InsightsConfig;
use crate::error::Result;
use crate::forecast::ForecastEngine;
use crate::recommendations::{suggested_cap, CategoryFigures, RecommendationComposer};
use crate::schema::{CategoryInsights, ExpenseRecord, InsightsReport, ReportSummary};
use crate::suggestions::GlobalSuggestionComposer;
use crate::tips::CategoryTips;
use crate::utils::round_to_cents;
use log::{debug, info};
use std::collections::BTreeMap;

pub const EMPTY_INPUT_SUGGESTION: &str = "Add expenses to unlock insights.";

/// Stateless insights generator. Holds only read-only configuration, so a
/// single instance can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct InsightsEngine {
    config: InsightsConfig,
    tips: CategoryTips,
}

impl InsightsEngine {
    pub fn new(config: InsightsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tips: CategoryTips::builtin(),
        })
    }

    pub fn with_tips(mut self, tips: CategoryTips) -> Self {
        self.tips = tips;
        self
    }

    pub fn config(&self) -> &InsightsConfig {
        &self.config
    }

    pub fn tips(&self) -> &CategoryTips {
        &self.tips
    }

    pub fn generate(&self, records: &[ExpenseRecord]) -> InsightsReport {
        if records.is_empty() {
            info!("No expenses supplied; returning placeholder report");
            return empty_report();
        }

        let aggregation = MonthlyAggregator::aggregate(records);
        info!(
            "Generating insights for {} expenses across {} categories and {} months",
            records.len(),
            aggregation.categories().len(),
            aggregation.timeline().len()
        );

        let forecaster = ForecastEngine::new(self.config.min_trend_months);
        let composer = RecommendationComposer::new(&self.config, &self.tips);

        let mut ordered: Vec<(&str, CategoryInsights)> =
            Vec::with_capacity(aggregation.categories().len());
        let mut top_category: Option<&str> = None;
        let mut top_total = 0.0;

        for category in aggregation.categories() {
            let series = aggregation.series(category);
            let total: f64 = series.iter().sum();

            if total > top_total {
                top_total = total;
                top_category = Some(category.as_str());
            }

            let forecast = forecaster.forecast_next(&series);
            let anomaly = AnomalyDetector::score(&series);
            let figures = CategoryFigures {
                total,
                last_month: anomaly.last_value,
                forecast,
                anomaly_score: anomaly.score,
            };

            debug!(
                "{}: total={:.2} last={:.2} forecast={:.2} z={:.2}",
                category, total, anomaly.last_value, forecast, anomaly.score
            );

            ordered.push((
                category.as_str(),
                CategoryInsights {
                    total: round_to_cents(total),
                    last_month: round_to_cents(anomaly.last_value),
                    forecast_next: round_to_cents(forecast),
                    suggested_cap: suggested_cap(forecast, self.config.cap_ratio),
                    notes: composer.compose(category, &figures),
                },
            ));
        }

        let ranked: Vec<(&str, &CategoryInsights)> =
            ordered.iter().map(|(name, insights)| (*name, insights)).collect();
        let suggestions = GlobalSuggestionComposer::new(&self.config)
            .compose(&ranked, aggregation.month_totals());

        let summary = ReportSummary {
            total: round_to_cents(records.iter().map(|r| r.amount).sum::<f64>()),
            months: aggregation.timeline().len(),
            top_category: top_category.map(str::to_string),
        };

        let per_category: BTreeMap<String, CategoryInsights> = ordered
            .into_iter()
            .map(|(name, insights)| (name.to_string(), insights))
            .collect();

        InsightsReport {
            summary,
            per_category,
            suggestions,
        }
    }
}

fn empty_report() -> InsightsReport {
    InsightsReport {
        summary: ReportSummary {
            total: 0.0,
            months: 0,
            top_category: None,
        },
        per_category: BTreeMap::new(),
        suggestions: vec![EMPTY_INPUT_SUGGESTION.to_string()],
    }
}

/// Builds the insights report with the default thresholds and built-in tips.
pub fn generate_insights(records: &[ExpenseRecord]) -> InsightsReport {
    InsightsEngine::default().generate(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, d: u32, amount: f64, category: &str) -> ExpenseRecord {
        ExpenseRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), amount, category)
    }

    #[test]
    fn test_empty_input_returns_placeholder() {
        let report = generate_insights(&[]);

        assert_eq!(report.summary.total, 0.0);
        assert_eq!(report.summary.months, 0);
        assert!(report.summary.top_category.is_none());
        assert!(report.per_category.is_empty());
        assert_eq!(report.suggestions, vec![EMPTY_INPUT_SUGGESTION.to_string()]);
    }

    #[test]
    fn test_groceries_trend_scenario() {
        let records = vec![
            record(2024, 1, 10, 100.0, "Groceries"),
            record(2024, 2, 10, 100.0, "Groceries"),
            record(2024, 3, 4, 90.0, "Groceries"),
            record(2024, 3, 20, 60.0, "Groceries"),
        ];

        let report = generate_insights(&records);
        let groceries = &report.per_category["Groceries"];

        assert_eq!(report.summary.total, 350.0);
        assert_eq!(report.summary.months, 3);
        assert_eq!(report.summary.top_category.as_deref(), Some("Groceries"));

        assert_eq!(groceries.total, 350.0);
        assert_eq!(groceries.last_month, 150.0);
        assert_eq!(groceries.forecast_next, 166.67);
        assert_eq!(groceries.suggested_cap, 150.0);
        assert_eq!(
            groceries.notes,
            vec![
                "Stay on track in Groceries. Expected spend next month: $166.67.".to_string(),
                "Plan weekly meals, buy generics, and avoid frequent small trips.".to_string(),
            ]
        );
    }

    #[test]
    fn test_top_category_first_seen_wins_ties() {
        let records = vec![
            record(2024, 5, 1, 50.0, "Travel"),
            record(2024, 5, 2, 50.0, "Dining"),
        ];

        let report = generate_insights(&records);
        assert_eq!(report.summary.top_category.as_deref(), Some("Travel"));

        let reversed: Vec<ExpenseRecord> = records.into_iter().rev().collect();
        let report = generate_insights(&reversed);
        assert_eq!(report.summary.top_category.as_deref(), Some("Dining"));
    }

    #[test]
    fn test_custom_tips_and_config() {
        let config = InsightsConfig {
            targeted_cap_count: 1,
            ..InsightsConfig::default()
        };
        let tips = CategoryTips::from_pairs([("Pets", "Buy food in bulk.")]).unwrap();
        let engine = InsightsEngine::new(config).unwrap().with_tips(tips);

        let records = vec![
            record(2024, 5, 1, 30.0, "Pets"),
            record(2024, 5, 2, 80.0, "Groceries"),
        ];
        let report = engine.generate(&records);

        assert_eq!(report.suggestions.len(), 1);
        assert!(report.suggestions[0].contains("Groceries"));
        assert_eq!(
            report.per_category["Pets"].notes.last().map(String::as_str),
            Some("Buy food in bulk.")
        );
        assert_eq!(report.per_category["Groceries"].notes.len(), 1);
    }

    #[test]
    fn test_engine_exposes_config_and_tips() {
        let config = InsightsConfig {
            spike_threshold: 2.5,
            ..InsightsConfig::default()
        };
        let engine = InsightsEngine::new(config.clone()).unwrap();

        assert_eq!(engine.config(), &config);
        assert_eq!(engine.tips(), &CategoryTips::builtin());

        let engine = engine.with_tips(CategoryTips::empty());
        assert!(engine.tips().is_empty());
        assert_eq!(engine.config().spike_threshold, 2.5);
    }

    #[test]
    fn test_empty_tip_table_appends_no_tips() {
        let engine = InsightsEngine::default().with_tips(CategoryTips::empty());
        let report = engine.generate(&[record(2024, 5, 1, 30.0, "Groceries")]);

        assert_eq!(
            report.per_category["Groceries"].notes,
            vec!["Stay on track in Groceries. Expected spend next month: $30.00.".to_string()]
        );
    }

    #[test]
    fn test_half_cent_amounts_round_like_formatting() {
        let report = generate_insights(&[record(2024, 1, 5, 1.25, "Other")]);
        let other = &report.per_category["Other"];

        assert_eq!(other.suggested_cap, 1.12);
        assert_eq!(
            report.suggestions,
            vec!["Set a monthly soft cap for Other around $1.12.".to_string()]
        );

        let report = generate_insights(&[record(2024, 1, 5, 2.675, "Other")]);
        assert_eq!(report.summary.total, 2.67);
        assert_eq!(report.per_category["Other"].total, 2.67);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = InsightsConfig {
            cap_ratio: -0.5,
            ..InsightsConfig::default()
        };
        assert!(InsightsEngine::new(config).is_err());
    }
}
