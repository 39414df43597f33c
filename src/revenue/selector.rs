use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::{PipelineError, malformed_input},
    impact::AssessmentResult,
    revenue::{
        strategies::{donation_plan, sponsorship_plan, subscription_plan},
        types::{RevenueConfig, RevenuePlan, RevenueStrategy},
    },
    telemetry::{PipelineStage, PipelineTelemetryEvent, TelemetrySink, report_failure},
};

pub struct RevenueSelector {
    config: RevenueConfig,
    telemetry: Arc<dyn TelemetrySink>,
}

impl RevenueSelector {
    pub fn new(config: RevenueConfig, telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self { config, telemetry }
    }

    pub fn select_strategy(&self, total_score: f64) -> RevenueStrategy {
        self.config.thresholds.select(total_score)
    }

    pub fn select_and_generate(
        &self,
        assessment: &AssessmentResult,
    ) -> Result<RevenuePlan, PipelineError> {
        let total_score = assessment.total_impact_score;
        if !total_score.is_finite() {
            let err = malformed_input(format!(
                "total_impact_score must be a finite number, got {total_score}"
            ));
            report_failure(self.telemetry.as_ref(), PipelineStage::Revenue, &err);
            return Err(err);
        }

        let strategy = self.select_strategy(total_score);
        self.telemetry
            .on_event(PipelineTelemetryEvent::RevenueStrategySelected {
                strategy,
                total_score,
            });

        let plan = match strategy {
            RevenueStrategy::Donations => donation_plan(total_score, &self.config.donations),
            RevenueStrategy::Sponsorships => {
                sponsorship_plan(total_score, &self.config.sponsorships)
            }
            RevenueStrategy::Subscriptions => {
                subscription_plan(total_score, &self.config.subscriptions)
            }
        };
        plan.inspect_err(|err| {
            report_failure(self.telemetry.as_ref(), PipelineStage::Revenue, err);
        })
    }

    /// Accepts an assessment in its serialized form, e.g. as handed over by another process.
    pub fn select_and_generate_json(
        &self,
        assessment: &Value,
    ) -> Result<RevenuePlan, PipelineError> {
        let assessment = decode_assessment(assessment).inspect_err(|err| {
            report_failure(self.telemetry.as_ref(), PipelineStage::Revenue, err);
        })?;
        self.select_and_generate(&assessment)
    }
}

pub(crate) fn decode_assessment(value: &Value) -> Result<AssessmentResult, PipelineError> {
    if !value.is_object() {
        return Err(malformed_input("impact assessment must be a JSON object"));
    }
    serde_json::from_value(value.clone())
        .map_err(|err| malformed_input(format!("invalid impact assessment: {err}")))
}
