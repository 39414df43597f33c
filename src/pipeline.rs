use std::sync::Arc;

use serde::Serialize;

use crate::{
    allocation::{AllocationModelPort, AllocationResult, NoopAllocationModel, ResourceAllocator},
    config::Config,
    error::PipelineError,
    impact::{AssessmentResult, ImpactAssessor, MetricsRecord},
    revenue::{RevenuePlan, RevenueSelector},
    telemetry::{NoopTelemetrySink, TelemetrySink},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutcome {
    pub assessment: AssessmentResult,
    pub revenue: RevenuePlan,
    pub allocation: AllocationResult,
}

pub struct ImpactPipeline {
    assessor: ImpactAssessor,
    selector: RevenueSelector,
    allocator: ResourceAllocator,
}

impl Default for ImpactPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ImpactPipeline {
    pub fn new(
        assessor: ImpactAssessor,
        selector: RevenueSelector,
        allocator: ResourceAllocator,
    ) -> Self {
        Self {
            assessor,
            selector,
            allocator,
        }
    }

    pub fn from_config(
        config: &Config,
        model: Arc<dyn AllocationModelPort>,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Self {
        Self::new(
            ImpactAssessor::new(config.assessment, Arc::clone(&telemetry)),
            RevenueSelector::new(config.revenue.clone(), Arc::clone(&telemetry)),
            ResourceAllocator::new(model, telemetry),
        )
    }

    pub fn with_defaults() -> Self {
        Self::from_config(
            &Config::default(),
            Arc::new(NoopAllocationModel),
            Arc::new(NoopTelemetrySink),
        )
    }

    #[tracing::instrument(name = "impact_pipeline_run", target = "pipeline", skip_all)]
    pub fn run(&self, metrics: &MetricsRecord) -> Result<PipelineOutcome, PipelineError> {
        let assessment = self.assessor.assess(metrics)?;
        let revenue = self.selector.select_and_generate(&assessment)?;
        let allocation = self.allocator.allocate(&revenue, &assessment)?;

        Ok(PipelineOutcome {
            assessment,
            revenue,
            allocation,
        })
    }
}
