pub mod assessor;
pub mod normalization;
pub mod types;

pub use assessor::{ImpactAssessor, category_scores, total_score, validate_metrics};
pub use normalization::normalize_metric;
pub use types::{
    AssessmentConfig, AssessmentResult, ImpactCategory, ImpactTier, MetricRange, MetricRanges,
    MetricsRecord, TierThresholds,
};
