use crate::{
    allocation::{
        ports::AllocationModelPort,
        types::{AllocationResult, AllocationStrategy},
    },
    error::PipelineError,
    impact::AssessmentResult,
    revenue::RevenuePlan,
};

#[derive(Debug, Clone, Default)]
pub struct NoopAllocationModel;

impl AllocationModelPort for NoopAllocationModel {
    fn apply(
        &self,
        strategy: AllocationStrategy,
        _revenue: &RevenuePlan,
        _assessment: &AssessmentResult,
    ) -> Result<AllocationResult, PipelineError> {
        Ok(AllocationResult {
            strategy,
            plan: serde_json::Value::Null,
        })
    }
}
