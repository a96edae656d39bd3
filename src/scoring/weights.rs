use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Weights used when none are supplied, or when the supplied ones sum to zero.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    test: 0.4,
    interview: 0.3,
    experience: 0.2,
    tier: 0.1,
};

/// Weights as supplied by the caller, not yet normalized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RawWeights {
    pub test: f64,
    pub interview: f64,
    pub experience: f64,
    pub tier: f64,
}

impl Default for RawWeights {
    fn default() -> Self {
        Self {
            test: DEFAULT_WEIGHTS.test,
            interview: DEFAULT_WEIGHTS.interview,
            experience: DEFAULT_WEIGHTS.experience,
            tier: DEFAULT_WEIGHTS.tier,
        }
    }
}

impl RawWeights {
    pub fn sum(&self) -> f64 {
        self.test + self.interview + self.experience + self.tier
    }

    fn values(&self) -> [(&'static str, f64); 4] {
        [
            ("test", self.test),
            ("interview", self.interview),
            ("experience", self.experience),
            ("tier", self.tier),
        ]
    }
}

/// Normalized weights; the four values sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Weights {
    pub test: f64,
    pub interview: f64,
    pub experience: f64,
    pub tier: f64,
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.test + self.interview + self.experience + self.tier
    }
}

impl std::fmt::Display for Weights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Test: {:.2}, Interview: {:.2}, Experience: {:.2}, Tier: {:.2}",
            self.test, self.interview, self.experience, self.tier
        )
    }
}

/// Validates and normalizes caller weights.
///
/// Negative or non-finite values are rejected. An all-zero set falls back to
/// [`DEFAULT_WEIGHTS`]; anything else is divided by its sum.
pub fn resolve_weights(raw: &RawWeights) -> Result<Weights> {
    for (name, value) in raw.values() {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "{} weight must be a non-negative number, got {}",
                name, value
            )));
        }
    }

    let sum = raw.sum();
    if sum == 0.0 {
        tracing::warn!("All weights are zero, using defaults ({})", DEFAULT_WEIGHTS);
        return Ok(DEFAULT_WEIGHTS);
    }

    let weights = Weights {
        test: raw.test / sum,
        interview: raw.interview / sum,
        experience: raw.experience / sum,
        tier: raw.tier / sum,
    };

    tracing::debug!("Resolved weights: {}", weights);
    Ok(weights)
}
