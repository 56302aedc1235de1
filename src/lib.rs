//! # Expense Insights
//!
//! A library for turning dated, categorized expense records into a structured
//! financial-insights report: per-category totals, a next-month forecast,
//! anomaly flags for unusual last-month spend, and ranked budgeting suggestions.
//!
//! ## Core Concepts
//!
//! - **Month Key**: A calendar year-month ("2024-03") whose ordering is chronological
//! - **Series**: A category's monthly totals aligned to the shared timeline of every
//!   month seen in any category, zero-filled where the category had no spend
//! - **Forecast**: Least-squares trend projected one month ahead once a category has
//!   three positive months; otherwise the mean of its positive months
//! - **Anomaly Score**: Population z-score of the last month against the months before it
//! - **Suggested Cap**: 90% of the forecast, used as a soft budget target
//!
//! The engine is a pure function of its input: no I/O, no shared state.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use expense_insights::*;
//!
//! let records = vec![
//!     ExpenseRecord::new(NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(), 100.0, "Groceries"),
//!     ExpenseRecord::new(NaiveDate::from_ymd_opt(2024, 2, 9).unwrap(), 100.0, "Groceries"),
//!     ExpenseRecord::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 150.0, "Groceries"),
//! ];
//!
//! let report = generate_insights(&records);
//! assert_eq!(report.summary.total, 350.0);
//! assert_eq!(report.per_category["Groceries"].forecast_next, 166.67);
//! ```

pub mod aggregator;
pub mod anomaly;
pub mod config;
pub mod error;
pub mod forecast;
pub mod overview;
pub mod recommendations;
pub mod report;
pub mod schema;
pub mod suggestions;
pub mod tips;
pub mod utils;

pub use aggregator::{MonthlyAggregation, MonthlyAggregator, MonthlyTotals};
pub use anomaly::{z_score, AnomalyDetector, AnomalyScore};
pub use config::InsightsConfig;
pub use error::{InsightsError, Result};
pub use forecast::{Forecast, ForecastEngine, ForecastMethod, LinearTrend};
pub use overview::{CategoryTotal, MonthTotal, SpendingOverview};
pub use recommendations::{suggested_cap, CategoryFigures, RecommendationComposer};
pub use report::{generate_insights, InsightsEngine, EMPTY_INPUT_SUGGESTION};
pub use schema::*;
pub use suggestions::{GlobalSuggestionComposer, SpendingDrift, DRIFT_WARNING};
pub use tips::{CategoryTips, BUILTIN_CATEGORY_TIPS};
pub use utils::*;
