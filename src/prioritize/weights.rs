use serde::{Deserialize, Serialize};

use crate::error::{PulseError, Result};

/// Relative weight of each normalized signal in the composite score.
///
/// The engine neither validates nor renormalizes these. A set summing to
/// 1.0 keeps the composite score within [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrioritizationWeights {
    pub impact: f64,
    pub effort: f64,
    pub sentiment: f64,
    pub usage: f64,
    pub trend: f64,
    pub urgency: f64,
}

impl Default for PrioritizationWeights {
    fn default() -> Self {
        Self {
            impact: 0.25,
            effort: 0.20,
            sentiment: 0.20,
            usage: 0.15,
            trend: 0.10,
            urgency: 0.10,
        }
    }
}

impl PrioritizationWeights {
    pub fn total(&self) -> f64 {
        self.impact + self.effort + self.sentiment + self.usage + self.trend + self.urgency
    }

    /// Whether the weights sum to 1 within floating-point tolerance.
    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.0).abs() < 1e-6
    }

    /// Set a single weight by name.
    pub fn set(&mut self, key: &str, value: f64) -> Result<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(PulseError::InvalidWeight(format!("{}={}", key, value)));
        }
        let slot = match key.trim().to_lowercase().as_str() {
            "impact" => &mut self.impact,
            "effort" => &mut self.effort,
            "sentiment" => &mut self.sentiment,
            "usage" => &mut self.usage,
            "trend" => &mut self.trend,
            "urgency" => &mut self.urgency,
            _ => return Err(PulseError::InvalidWeight(format!("{}={}", key, value))),
        };
        *slot = value;
        Ok(())
    }

    /// Apply a `key=value` override, e.g. `impact=0.3`.
    pub fn apply_override(&mut self, entry: &str) -> Result<()> {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| PulseError::InvalidWeight(entry.to_string()))?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| PulseError::InvalidWeight(entry.to_string()))?;
        self.set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = PrioritizationWeights::default();
        assert!(weights.is_normalized());
        assert_eq!(weights.impact, 0.25);
        assert_eq!(weights.urgency, 0.10);
    }

    #[test]
    fn test_apply_override() {
        let mut weights = PrioritizationWeights::default();
        weights.apply_override("impact=0.4").unwrap();
        weights.apply_override(" Trend = 0 ").unwrap();
        assert_eq!(weights.impact, 0.4);
        assert_eq!(weights.trend, 0.0);
        assert!(!weights.is_normalized());
    }

    #[test]
    fn test_apply_override_rejects_bad_input() {
        let mut weights = PrioritizationWeights::default();
        assert!(weights.apply_override("impact").is_err());
        assert!(weights.apply_override("impact=high").is_err());
        assert!(weights.apply_override("velocity=0.2").is_err());
        assert!(weights.apply_override("effort=-0.1").is_err());
        assert_eq!(weights, PrioritizationWeights::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let weights: PrioritizationWeights = serde_yaml::from_str("impact: 0.5").unwrap();
        assert_eq!(weights.impact, 0.5);
        assert_eq!(weights.effort, 0.20);
    }
}
