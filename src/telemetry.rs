use serde::Serialize;

use crate::{
    allocation::AllocationStrategy,
    error::{PipelineError, PipelineErrorKind},
    impact::ImpactTier,
    revenue::RevenueStrategy,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Assessment,
    Revenue,
    Allocation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineTelemetryEvent {
    AssessmentCompleted {
        total_score: f64,
        tier: ImpactTier,
    },
    RevenueStrategySelected {
        strategy: RevenueStrategy,
        total_score: f64,
    },
    AllocationStrategySelected {
        strategy: AllocationStrategy,
        tier: ImpactTier,
    },
    StageFailed {
        stage: PipelineStage,
        kind: PipelineErrorKind,
        message: String,
    },
}

pub trait TelemetrySink: Send + Sync {
    fn on_event(&self, event: PipelineTelemetryEvent);
}

#[derive(Debug, Clone, Default)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn on_event(&self, _event: PipelineTelemetryEvent) {}
}

/// Forwards pipeline events to whatever `tracing` subscriber the process installed.
#[derive(Debug, Clone, Default)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn on_event(&self, event: PipelineTelemetryEvent) {
        match event {
            PipelineTelemetryEvent::AssessmentCompleted { total_score, tier } => {
                tracing::info!(
                    target: "impact",
                    total_score,
                    tier = tier.as_str(),
                    "impact_assessment_completed"
                );
            }
            PipelineTelemetryEvent::RevenueStrategySelected {
                strategy,
                total_score,
            } => {
                tracing::info!(
                    target: "revenue",
                    strategy = strategy.as_str(),
                    total_score,
                    "revenue_strategy_selected"
                );
            }
            PipelineTelemetryEvent::AllocationStrategySelected { strategy, tier } => {
                tracing::info!(
                    target: "allocation",
                    strategy = strategy.as_str(),
                    tier = tier.as_str(),
                    "allocation_strategy_selected"
                );
            }
            // `tracing` targets must be static per call site.
            PipelineTelemetryEvent::StageFailed {
                stage,
                kind,
                message,
            } => match stage {
                PipelineStage::Assessment => {
                    tracing::error!(target: "impact", kind = ?kind, error = %message, "stage_failed");
                }
                PipelineStage::Revenue => {
                    tracing::error!(target: "revenue", kind = ?kind, error = %message, "stage_failed");
                }
                PipelineStage::Allocation => {
                    tracing::error!(target: "allocation", kind = ?kind, error = %message, "stage_failed");
                }
            },
        }
    }
}

pub(crate) fn report_failure(
    sink: &dyn TelemetrySink,
    stage: PipelineStage,
    err: &PipelineError,
) {
    sink.on_event(PipelineTelemetryEvent::StageFailed {
        stage,
        kind: err.kind,
        message: err.message.clone(),
    });
}
