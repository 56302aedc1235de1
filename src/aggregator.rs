use crate::schema::ExpenseRecord;
use crate::utils::MonthKey;
use std::collections::{BTreeMap, BTreeSet};

/// Month-by-month totals for one category, keyed by calendar month.
pub type MonthlyTotals = BTreeMap<MonthKey, f64>;

/// Records grouped by category and month, with the shared timeline every
/// category series is aligned to.
#[derive(Debug, Clone, Default)]
pub struct MonthlyAggregation {
    /// Categories in the order they first appear in the input.
    categories: Vec<String>,
    by_category: BTreeMap<String, MonthlyTotals>,
    month_totals: MonthlyTotals,
    timeline: Vec<MonthKey>,
}

pub struct MonthlyAggregator;

impl MonthlyAggregator {
    pub fn aggregate(records: &[ExpenseRecord]) -> MonthlyAggregation {
        let mut categories = Vec::new();
        let mut by_category: BTreeMap<String, MonthlyTotals> = BTreeMap::new();
        let mut month_totals = MonthlyTotals::new();

        for record in records {
            let month = MonthKey::from_date(record.date);

            let totals = by_category
                .entry(record.category.clone())
                .or_insert_with(|| {
                    categories.push(record.category.clone());
                    MonthlyTotals::new()
                });
            *totals.entry(month).or_insert(0.0) += record.amount;

            *month_totals.entry(month).or_insert(0.0) += record.amount;
        }

        let all_months: BTreeSet<MonthKey> = by_category
            .values()
            .flat_map(|totals| totals.keys().copied())
            .collect();
        let timeline: Vec<MonthKey> = all_months.into_iter().collect();

        MonthlyAggregation {
            categories,
            by_category,
            month_totals,
            timeline,
        }
    }
}

impl MonthlyAggregation {
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Sorted distinct months across all categories.
    pub fn timeline(&self) -> &[MonthKey] {
        &self.timeline
    }

    /// Grand total per month across all categories.
    pub fn month_totals(&self) -> &MonthlyTotals {
        &self.month_totals
    }

    pub fn category_totals(&self, category: &str) -> Option<&MonthlyTotals> {
        self.by_category.get(category)
    }

    /// Category spend aligned to the shared timeline, zero where the category
    /// had no spend. Unknown categories yield an all-zero series.
    pub fn series(&self, category: &str) -> Vec<f64> {
        let totals = self.by_category.get(category);
        self.timeline
            .iter()
            .map(|month| {
                totals
                    .and_then(|t| t.get(month))
                    .copied()
                    .unwrap_or(0.0)
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
