//! Dashboard aggregates: overall total, per-category and per-month totals,
//! and the most recent expenses.

use crate::schema::ExpenseRecord;
use crate::utils::{round_to_cents, MonthKey};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_RECENT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MonthTotal {
    pub month: MonthKey,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpendingOverview {
    pub total: f64,
    /// In the order each category first appears.
    pub by_category: Vec<CategoryTotal>,
    /// Chronological.
    pub by_month: Vec<MonthTotal>,
    /// Newest first.
    pub recent: Vec<ExpenseRecord>,
}

impl SpendingOverview {
    pub fn from_records(records: &[ExpenseRecord]) -> Self {
        Self::with_recent_limit(records, DEFAULT_RECENT_LIMIT)
    }

    pub fn with_recent_limit(records: &[ExpenseRecord], recent_limit: usize) -> Self {
        let mut category_order: Vec<&str> = Vec::new();
        let mut category_sums: HashMap<&str, f64> = HashMap::new();
        let mut month_sums: BTreeMap<MonthKey, f64> = BTreeMap::new();

        for record in records {
            let sum = category_sums
                .entry(record.category.as_str())
                .or_insert_with(|| {
                    category_order.push(record.category.as_str());
                    0.0
                });
            *sum += record.amount;

            *month_sums
                .entry(MonthKey::from_date(record.date))
                .or_insert(0.0) += record.amount;
        }

        let by_category = category_order
            .into_iter()
            .map(|category| CategoryTotal {
                category: category.to_string(),
                total: round_to_cents(category_sums.get(category).copied().unwrap_or(0.0)),
            })
            .collect();

        let by_month = month_sums
            .into_iter()
            .map(|(month, total)| MonthTotal {
                month,
                total: round_to_cents(total),
            })
            .collect();

        let mut recent: Vec<ExpenseRecord> = records.to_vec();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(recent_limit);

        Self {
            total: round_to_cents(records.iter().map(|r| r.amount).sum::<f64>()),
            by_category,
            by_month,
            recent,
        }
    }
}
