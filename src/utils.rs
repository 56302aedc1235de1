use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Calendar year-month. Ordering is chronological and the textual form is
/// zero-padded "YYYY-MM", so string and date ordering agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Parses "YYYY-MM".
    pub fn parse(s: &str) -> Option<Self> {
        let (year, month) = s.trim().split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        Self::new(year, month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        MonthKey::parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("Invalid month key '{}'. Expected YYYY-MM", raw))
        })
    }
}

impl JsonSchema for MonthKey {
    fn schema_name() -> String {
        "MonthKey".to_string()
    }

    fn is_referenceable() -> bool {
        false
    }

    fn json_schema(generator: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <String as JsonSchema>::json_schema(generator)
    }
}

/// Rounds a monetary amount to cents. Works on the exact binary value with
/// ties to even, so it always agrees with `{:.2}` formatting.
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance (divides by `n`, not `n - 1`).
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    Some(sum_sq / values.len() as f64)
}

pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    population_variance(values).map(f64::sqrt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_from_date() {
        let key = MonthKey::from_date(NaiveDate::from_ymd_opt(2024, 3, 17).unwrap());
        assert_eq!(key.to_string(), "2024-03");
        assert_eq!(key.year(), 2024);
        assert_eq!(key.month(), 3);
    }

    #[test]
    fn test_month_key_ordering_is_chronological() {
        let mut keys = vec![
            MonthKey::new(2024, 1).unwrap(),
            MonthKey::new(2023, 12).unwrap(),
            MonthKey::new(2023, 2).unwrap(),
            MonthKey::new(2023, 10).unwrap(),
        ];
        keys.sort();

        let text: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(text, vec!["2023-02", "2023-10", "2023-12", "2024-01"]);

        let mut sorted_text = text.clone();
        sorted_text.sort();
        assert_eq!(text, sorted_text);
    }

    #[test]
    fn test_month_key_parse() {
        assert_eq!(MonthKey::parse("2023-07"), MonthKey::new(2023, 7));
        assert!(MonthKey::parse("2023-13").is_none());
        assert!(MonthKey::parse("2023").is_none());
        assert!(MonthKey::parse("abcd-01").is_none());
    }

    #[test]
    fn test_month_key_serde() {
        let key = MonthKey::new(2022, 9).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2022-09\"");

        let back: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);

        assert!(serde_json::from_str::<MonthKey>("\"2022-00\"").is_err());
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(166.666_666), 166.67);
        assert_eq!(round_to_cents(38.25), 38.25);
        assert_eq!(round_to_cents(0.0), 0.0);
    }

    #[test]
    fn test_round_to_cents_agrees_with_formatting() {
        // 2.675 is stored just below the half cent.
        assert_eq!(round_to_cents(2.675), 2.67);
        // Exact binary ties go to the even digit.
        assert_eq!(round_to_cents(0.125), 0.12);
        assert_eq!(round_to_cents(0.375), 0.38);
        assert_eq!(round_to_cents(0.9 * 1.25), 1.12);

        for value in [0.125, 1.005, 2.675, 10.0 / 3.0, 166.666_666_67] {
            assert_eq!(
                format!("{:.2}", round_to_cents(value)),
                format!("{:.2}", value)
            );
        }
    }

    #[test]
    fn test_population_statistics() {
        assert!(mean(&[]).is_none());
        assert!(population_std_dev(&[]).is_none());

        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&values).unwrap() - 5.0).abs() < 1e-12);
        assert!((population_variance(&values).unwrap() - 4.0).abs() < 1e-12);
        assert!((population_std_dev(&values).unwrap() - 2.0).abs() < 1e-12);

        assert_eq!(population_std_dev(&[42.0]), Some(0.0));
    }
}
