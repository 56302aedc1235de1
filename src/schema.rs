use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExpenseRecord {
    #[schemars(description = "Calendar date the expense was incurred (YYYY-MM-DD)")]
    pub date: NaiveDate,

    #[schemars(description = "Amount spent. Always strictly positive; validated upstream.")]
    pub amount: f64,

    #[schemars(description = "Spending category label (e.g., 'Groceries', 'Rent'). Never empty.")]
    pub category: String,

    #[serde(default)]
    #[schemars(description = "Merchant or payee name. Not used by the insights engine.")]
    pub merchant: Option<String>,

    #[serde(default)]
    #[schemars(description = "How the expense was paid (card, cash, ...). Not used by the insights engine.")]
    pub payment_method: Option<String>,

    #[serde(default)]
    #[schemars(description = "Free-form notes. Not used by the insights engine.")]
    pub notes: Option<String>,
}

impl ExpenseRecord {
    pub fn new(date: NaiveDate, amount: f64, category: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            merchant: None,
            payment_method: None,
            notes: None,
        }
    }

    pub fn with_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant = Some(merchant.into());
        self
    }

    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportSummary {
    #[schemars(description = "Sum of all expense amounts, rounded to cents")]
    pub total: f64,

    #[schemars(description = "Number of distinct calendar months covered by the expenses")]
    pub months: usize,

    #[schemars(
        description = "Category with the greatest total spend. The first category encountered wins ties. Null when there are no expenses."
    )]
    pub top_category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryInsights {
    #[schemars(description = "Total spend in this category across all months, rounded to cents")]
    pub total: f64,

    #[schemars(description = "Spend in the most recent month of the shared timeline (0 if none)")]
    pub last_month: f64,

    #[schemars(description = "Projected spend for next month. Never negative.")]
    pub forecast_next: f64,

    #[schemars(description = "Soft budget target for next month: 90% of the forecast")]
    pub suggested_cap: f64,

    #[schemars(description = "Ordered advisory notes: trend note, spike note, then category tip")]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InsightsReport {
    pub summary: ReportSummary,

    #[schemars(description = "Per-category analytics keyed by category label")]
    pub per_category: BTreeMap<String, CategoryInsights>,

    #[schemars(
        description = "Global suggestions: targeted caps for the top forecast categories, then an optional overall drift warning"
    )]
    pub suggestions: Vec<String>,
}

impl InsightsReport {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(InsightsReport)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.per_category.is_empty()
    }
}
