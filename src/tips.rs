use crate::error::{InsightsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Built-in saving ideas, one per known category label.
pub const BUILTIN_CATEGORY_TIPS: [(&str, &str); 10] = [
    (
        "Groceries",
        "Plan weekly meals, buy generics, and avoid frequent small trips.",
    ),
    (
        "Dining",
        "Batch-cook on weekends and set a 'dining out' cap per week.",
    ),
    (
        "Transport",
        "Combine errands into one trip and compare fuel apps.",
    ),
    (
        "Shopping",
        "Use a 24-hour rule for non-essentials; track return windows.",
    ),
    (
        "Entertainment",
        "Rotate subscriptions monthly; look for student discounts.",
    ),
    (
        "Rent",
        "Renegotiate at renewal, or find a roommate if reasonable.",
    ),
    (
        "Utilities",
        "Set thermostat schedules and check for energy-efficient plans.",
    ),
    (
        "Travel",
        "Book mid-week, and set far-in-advance fare alerts.",
    ),
    (
        "Health",
        "Use in-network providers; buy HSA/FSA eligible essentials in bulk.",
    ),
    (
        "Other",
        "Set a monthly 'misc' cap and move leftover funds to savings.",
    ),
];

/// Read-only mapping from category label to a single advisory sentence.
/// Labels match exactly (case-sensitive); unknown labels have no tip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct CategoryTips {
    tips: BTreeMap<String, String>,
}

impl CategoryTips {
    pub fn builtin() -> Self {
        Self {
            tips: BUILTIN_CATEGORY_TIPS
                .iter()
                .map(|(label, tip)| (label.to_string(), tip.to_string()))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            tips: BTreeMap::new(),
        }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut tips = BTreeMap::new();
        for (label, tip) in pairs {
            let label = label.into();
            let tip = tip.into();
            if label.trim().is_empty() {
                return Err(InsightsError::InvalidTip(
                    "category label must not be empty".to_string(),
                ));
            }
            if tip.trim().is_empty() {
                return Err(InsightsError::InvalidTip(format!(
                    "tip for '{}' must not be empty",
                    label
                )));
            }
            tips.insert(label, tip);
        }
        Ok(Self { tips })
    }

    pub fn tip_for(&self, category: &str) -> Option<&str> {
        self.tips.get(category).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}

impl TryFrom<BTreeMap<String, String>> for CategoryTips {
    type Error = InsightsError;

    fn try_from(tips: BTreeMap<String, String>) -> Result<Self> {
        Self::from_pairs(tips)
    }
}

impl From<CategoryTips> for BTreeMap<String, String> {
    fn from(tips: CategoryTips) -> Self {
        tips.tips
    }
}

impl Default for CategoryTips {
    fn default() -> Self {
        Self::builtin()
    }
}
