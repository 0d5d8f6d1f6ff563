use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use serde::{Deserialize, Serialize};

/// `confidence = min(cap, base + hits * per_hit * (weight / 10))`, accepted
/// when above `threshold` (or equal to it when `inclusive`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreRule {
    pub base: f64,
    pub per_hit: f64,
    pub cap: f64,
    pub threshold: f64,
    pub inclusive: bool,
}

impl ScoreRule {
    pub fn score(&self, hits: usize, weight: f64) -> f64 {
        (self.base + hits as f64 * self.per_hit * (weight / 10.0)).min(self.cap)
    }

    pub fn accepts(&self, confidence: f64) -> bool {
        if self.inclusive {
            confidence >= self.threshold
        } else {
            confidence > self.threshold
        }
    }

    /// Whether any hit count can ever clear the threshold.
    pub fn is_reachable(&self) -> bool {
        self.accepts(self.cap)
    }

    fn validate_as(&self, prefix: &str) -> Result<()> {
        validate_range(&format!("{}.base", prefix), self.base, 0.0, 1.0)?;
        validate_range(&format!("{}.per_hit", prefix), self.per_hit, 0.0, 1.0)?;
        validate_range(&format!("{}.cap", prefix), self.cap, self.base, 1.0)?;
        validate_range(&format!("{}.threshold", prefix), self.threshold, 0.0, 1.0)?;
        Ok(())
    }
}

impl Default for ScoreRule {
    fn default() -> Self {
        Self {
            base: 0.70,
            per_hit: 0.03,
            cap: 0.85,
            threshold: 0.80,
            inclusive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierPolicy {
    /// Inputs whose title plus content is shorter than this get generic tags only.
    pub short_input_chars: usize,
    pub max_suggestions: usize,
    pub direct: ScoreRule,
    pub related: ScoreRule,
    pub related_min_hits: usize,
}

impl ClassifierPolicy {
    /// Related-term constants as first deployed. With them the related
    /// branch can never accept a tag, since cap and threshold are equal.
    pub fn legacy_related() -> ScoreRule {
        ScoreRule {
            base: 0.65,
            per_hit: 0.02,
            cap: 0.80,
            threshold: 0.80,
            inclusive: false,
        }
    }
}

impl Default for ClassifierPolicy {
    fn default() -> Self {
        Self {
            short_input_chars: 100,
            max_suggestions: 5,
            direct: ScoreRule::default(),
            related: ScoreRule::default(),
            related_min_hits: 3,
        }
    }
}

impl Validate for ClassifierPolicy {
    fn validate(&self) -> Result<()> {
        validate_positive_number("classifier.max_suggestions", self.max_suggestions, 1)?;
        validate_positive_number("classifier.related_min_hits", self.related_min_hits, 1)?;
        self.direct.validate_as("classifier.direct")?;
        self.related.validate_as("classifier.related")?;

        if !self.related.is_reachable() {
            tracing::warn!(
                "⚠️ Related-term scoring can never reach its threshold (cap {} vs threshold {})",
                self.related.cap,
                self.related.threshold
            );
        }
        Ok(())
    }
}
