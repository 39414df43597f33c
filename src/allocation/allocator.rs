use std::sync::Arc;

use serde_json::Value;

use crate::{
    allocation::{
        ports::AllocationModelPort,
        types::{AllocationResult, AllocationStrategy},
    },
    error::{PipelineError, malformed_input},
    impact::AssessmentResult,
    revenue::{RevenuePlan, selector::decode_assessment},
    telemetry::{PipelineStage, PipelineTelemetryEvent, TelemetrySink, report_failure},
};

pub struct ResourceAllocator {
    model: Arc<dyn AllocationModelPort>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl ResourceAllocator {
    pub fn new(model: Arc<dyn AllocationModelPort>, telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self { model, telemetry }
    }

    pub fn allocate(
        &self,
        revenue: &RevenuePlan,
        assessment: &AssessmentResult,
    ) -> Result<AllocationResult, PipelineError> {
        let strategy = AllocationStrategy::for_tier(assessment.impact_level);
        self.telemetry
            .on_event(PipelineTelemetryEvent::AllocationStrategySelected {
                strategy,
                tier: assessment.impact_level,
            });

        self.model
            .apply(strategy, revenue, assessment)
            .inspect_err(|err| {
                report_failure(self.telemetry.as_ref(), PipelineStage::Allocation, err);
            })
    }

    /// Decodes both inputs from their serialized form; the model is only reached when both parse.
    pub fn allocate_json(
        &self,
        revenue: &Value,
        assessment: &Value,
    ) -> Result<AllocationResult, PipelineError> {
        let decoded = decode_revenue(revenue).and_then(|revenue| {
            decode_assessment(assessment).map(|assessment| (revenue, assessment))
        });
        let (revenue, assessment) = decoded.inspect_err(|err| {
            report_failure(self.telemetry.as_ref(), PipelineStage::Allocation, err);
        })?;

        self.allocate(&revenue, &assessment)
    }
}

fn decode_revenue(value: &Value) -> Result<RevenuePlan, PipelineError> {
    if value.is_null() {
        return Err(malformed_input("revenue plan is required"));
    }
    serde_json::from_value(value.clone())
        .map_err(|err| malformed_input(format!("invalid revenue plan: {err}")))
}
