use std::{collections::BTreeMap, sync::Arc};

use crate::{
    error::{PipelineError, computation_error},
    impact::{
        normalization::normalize_metric,
        types::{AssessmentConfig, AssessmentResult, ImpactCategory, MetricRanges, MetricsRecord},
    },
    telemetry::{PipelineStage, PipelineTelemetryEvent, TelemetrySink, report_failure},
};

pub struct ImpactAssessor {
    config: AssessmentConfig,
    telemetry: Arc<dyn TelemetrySink>,
}

impl ImpactAssessor {
    pub fn new(config: AssessmentConfig, telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self { config, telemetry }
    }

    pub fn assess(&self, metrics: &MetricsRecord) -> Result<AssessmentResult, PipelineError> {
        match self.assess_inner(metrics) {
            Ok(result) => {
                self.telemetry
                    .on_event(PipelineTelemetryEvent::AssessmentCompleted {
                        total_score: result.total_impact_score,
                        tier: result.impact_level,
                    });
                Ok(result)
            }
            Err(err) => {
                report_failure(self.telemetry.as_ref(), PipelineStage::Assessment, &err);
                Err(err)
            }
        }
    }

    fn assess_inner(&self, metrics: &MetricsRecord) -> Result<AssessmentResult, PipelineError> {
        validate_metrics(metrics)?;
        let total_impact_score = total_score(metrics)?;
        let category_scores = category_scores(metrics, &self.config.metric_ranges)?;
        let impact_level = self.config.tier_thresholds.classify(total_impact_score);

        Ok(AssessmentResult {
            total_impact_score,
            category_scores,
            impact_level,
        })
    }
}

/// Rejects any real-valued metric that is negative or non-finite.
pub fn validate_metrics(metrics: &MetricsRecord) -> Result<(), PipelineError> {
    let checked = [
        (
            "carbon_emissions_reduction",
            metrics.carbon_emissions_reduction,
        ),
        ("community_engagement", metrics.community_engagement),
        ("health_improvement", metrics.health_improvement),
        ("economic_empowerment", metrics.economic_empowerment),
    ];
    for (name, value) in checked {
        ensure_non_negative(name, value)?;
    }
    Ok(())
}

/// Product of emissions reduction, community engagement and health improvement.
///
/// The product is not rescaled; inputs above 1.0 yield scores above 1.0.
pub fn total_score(metrics: &MetricsRecord) -> Result<f64, PipelineError> {
    let score = metrics.carbon_emissions_reduction
        * metrics.community_engagement
        * metrics.health_improvement;
    if !score.is_finite() {
        return Err(computation_error(format!(
            "total impact score is not finite: {score}"
        )));
    }

    Ok(score)
}

pub fn category_scores(
    metrics: &MetricsRecord,
    ranges: &MetricRanges,
) -> Result<BTreeMap<ImpactCategory, f64>, PipelineError> {
    let inputs = [
        (
            ImpactCategory::Environmental,
            "carbon_emissions_reduction",
            metrics.carbon_emissions_reduction,
        ),
        (
            ImpactCategory::Social,
            "education_reach",
            metrics.education_reach as f64,
        ),
        (
            ImpactCategory::Economic,
            "economic_empowerment",
            metrics.economic_empowerment,
        ),
    ];

    let mut scores = BTreeMap::new();
    for (category, metric, value) in inputs {
        let normalized = normalize_metric(metric, value, ranges.range_for(category))?;
        scores.insert(category, normalized);
    }

    Ok(scores)
}

fn ensure_non_negative(name: &str, value: f64) -> Result<(), PipelineError> {
    if !value.is_finite() || value < 0.0 {
        return Err(computation_error(format!(
            "metric '{name}' must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}
