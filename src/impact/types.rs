use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub carbon_emissions_reduction: f64,
    pub education_reach: u64,
    pub community_engagement: f64,
    pub health_improvement: f64,
    pub economic_empowerment: f64,
}

/// Ordered `Low < Medium < High` so tiers compare by impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactTier {
    Low,
    Medium,
    High,
}

impl ImpactTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactCategory {
    Environmental,
    Social,
    Economic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub total_impact_score: f64,
    pub category_scores: BTreeMap<ImpactCategory, f64>,
    pub impact_level: ImpactTier,
}

fn default_high_threshold() -> f64 {
    0.8
}

fn default_medium_threshold() -> f64 {
    0.5
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    #[serde(default = "default_high_threshold")]
    pub high: f64,
    #[serde(default = "default_medium_threshold")]
    pub medium: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: default_high_threshold(),
            medium: default_medium_threshold(),
        }
    }
}

impl TierThresholds {
    pub fn classify(&self, total_score: f64) -> ImpactTier {
        if total_score >= self.high {
            ImpactTier::High
        } else if total_score >= self.medium {
            ImpactTier::Medium
        } else {
            ImpactTier::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

fn default_environmental_range() -> MetricRange {
    MetricRange::new(0.0, 1.0)
}

fn default_social_range() -> MetricRange {
    MetricRange::new(0.0, 1000.0)
}

fn default_economic_range() -> MetricRange {
    MetricRange::new(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRanges {
    #[serde(default = "default_environmental_range")]
    pub environmental: MetricRange,
    #[serde(default = "default_social_range")]
    pub social: MetricRange,
    #[serde(default = "default_economic_range")]
    pub economic: MetricRange,
}

impl Default for MetricRanges {
    fn default() -> Self {
        Self {
            environmental: default_environmental_range(),
            social: default_social_range(),
            economic: default_economic_range(),
        }
    }
}

impl MetricRanges {
    pub fn range_for(&self, category: ImpactCategory) -> &MetricRange {
        match category {
            ImpactCategory::Environmental => &self.environmental,
            ImpactCategory::Social => &self.social,
            ImpactCategory::Economic => &self.economic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AssessmentConfig {
    #[serde(default)]
    pub tier_thresholds: TierThresholds,
    #[serde(default)]
    pub metric_ranges: MetricRanges,
}
