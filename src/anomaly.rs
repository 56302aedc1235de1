use crate::utils::{mean, population_std_dev};

/// Standard score of `value` against `population`, using the population
/// standard deviation. Empty or flat populations score 0.
pub fn z_score(value: f64, population: &[f64]) -> f64 {
    let (Some(avg), Some(std_dev)) = (mean(population), population_std_dev(population)) else {
        return 0.0;
    };
    if std_dev == 0.0 {
        return 0.0;
    }
    (value - avg) / std_dev
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyScore {
    /// Final element of the series.
    pub last_value: f64,
    /// Standardized deviation of `last_value` from the preceding months.
    pub score: f64,
}

impl AnomalyScore {
    pub fn is_spike(&self, threshold: f64) -> bool {
        self.score >= threshold
    }
}

pub struct AnomalyDetector;

impl AnomalyDetector {
    /// Scores the last month of `series` against every month before it.
    pub fn score(series: &[f64]) -> AnomalyScore {
        match series.split_last() {
            Some((&last_value, prior)) => AnomalyScore {
                last_value,
                score: z_score(last_value, prior),
            },
            None => AnomalyScore {
                last_value: 0.0,
                score: 0.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_history_scores_zero() {
        let result = AnomalyDetector::score(&[100.0, 100.0, 150.0]);
        assert_eq!(result.last_value, 150.0);
        assert_eq!(result.score, 0.0);
        assert!(!result.is_spike(1.5));
    }

    #[test]
    fn test_short_history_scores_zero() {
        assert_eq!(AnomalyDetector::score(&[500.0]).score, 0.0);
        assert_eq!(AnomalyDetector::score(&[1.0, 5000.0]).score, 0.0);
        assert_eq!(AnomalyDetector::score(&[]).last_value, 0.0);
    }

    #[test]
    fn test_spike_detected() {
        // prior mean 100, population std 10 -> z = 4.0
        let result = AnomalyDetector::score(&[90.0, 110.0, 140.0]);
        assert!((result.score - 4.0).abs() < 1e-12);
        assert!(result.is_spike(1.5));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // prior mean 100, std 10 -> z = 1.5 exactly
        let result = AnomalyDetector::score(&[90.0, 110.0, 115.0]);
        assert!((result.score - 1.5).abs() < 1e-12);
        assert!(result.is_spike(1.5));
    }

    #[test]
    fn test_drop_gives_negative_score() {
        let result = AnomalyDetector::score(&[90.0, 110.0, 60.0]);
        assert!((result.score + 4.0).abs() < 1e-12);
        assert!(!result.is_spike(1.5));
    }

    #[test]
    fn test_z_score_helper() {
        assert_eq!(z_score(10.0, &[]), 0.0);
        assert_eq!(z_score(10.0, &[3.0, 3.0, 3.0]), 0.0);
        assert!((z_score(3.0, &[1.0, 3.0]) - 1.0).abs() < 1e-12);
    }
}
