use crate::{
    allocation::types::{AllocationResult, AllocationStrategy},
    error::PipelineError,
    impact::AssessmentResult,
    revenue::RevenuePlan,
};

pub trait AllocationModelPort: Send + Sync {
    fn apply(
        &self,
        strategy: AllocationStrategy,
        revenue: &RevenuePlan,
        assessment: &AssessmentResult,
    ) -> Result<AllocationResult, PipelineError>;
}
