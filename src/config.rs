use crate::error::{InsightsError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tunable thresholds for the insights pipeline. The defaults reproduce the
/// standard behaviour; every field can be overridden from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InsightsConfig {
    #[schemars(
        description = "Minimum number of strictly positive months before a least-squares trend is fitted. Below this the forecast is the mean of positive months."
    )]
    pub min_trend_months: usize,

    #[schemars(
        description = "Last month is 'above trend' when it exceeds forecast * over_trend_ratio"
    )]
    pub over_trend_ratio: f64,

    #[schemars(description = "Suggested cap as a fraction of the forecast (0 < ratio <= 1)")]
    pub cap_ratio: f64,

    #[schemars(description = "Anomaly z-score at or above which a spike note is emitted")]
    pub spike_threshold: f64,

    #[schemars(description = "How many top-forecast categories receive a targeted cap suggestion")]
    pub targeted_cap_count: usize,

    #[schemars(
        description = "Months per comparison window for the overall drift check. The check needs twice this many months."
    )]
    pub drift_window: usize,

    #[schemars(
        description = "Recent window average must exceed prior window average times this ratio to warn"
    )]
    pub drift_ratio: f64,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            min_trend_months: 3,
            over_trend_ratio: 1.1,
            cap_ratio: 0.9,
            spike_threshold: 1.5,
            targeted_cap_count: 2,
            drift_window: 3,
            drift_ratio: 1.1,
        }
    }
}

impl InsightsConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: InsightsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_positive_ratio("over_trend_ratio", self.over_trend_ratio)?;
        validate_positive_ratio("cap_ratio", self.cap_ratio)?;
        validate_positive_ratio("spike_threshold", self.spike_threshold)?;
        validate_positive_ratio("drift_ratio", self.drift_ratio)?;

        if self.cap_ratio > 1.0 {
            return Err(InsightsError::InvalidThreshold {
                name: "cap_ratio",
                value: self.cap_ratio,
                reason: "a cap above the forecast is not a cap",
            });
        }

        if self.min_trend_months < 2 {
            return Err(InsightsError::InvalidThreshold {
                name: "min_trend_months",
                value: self.min_trend_months as f64,
                reason: "a trend line needs at least two points",
            });
        }

        if self.drift_window == 0 {
            return Err(InsightsError::InvalidThreshold {
                name: "drift_window",
                value: 0.0,
                reason: "must cover at least one month",
            });
        }

        Ok(())
    }
}

fn validate_positive_ratio(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(InsightsError::InvalidThreshold {
            name,
            value,
            reason: "must be a finite number greater than zero",
        });
    }
    Ok(())
}
