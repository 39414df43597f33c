use std::sync::Arc;

use impact_pipeline::{
    allocation::{AllocationStrategy, NoopAllocationModel, ResourceAllocator},
    error::PipelineErrorKind,
    impact::ImpactTier,
    telemetry::{NoopTelemetrySink, PipelineStage, PipelineTelemetryEvent},
};
use serde_json::json;

use super::{FailingModel, RecordingSink, assessment, recording, subscription_plan};

#[test]
fn given_each_tier_when_allocate_then_strategy_label_follows_tier() {
    let cases = [
        (ImpactTier::High, AllocationStrategy::ImpactExpansion),
        (ImpactTier::Medium, AllocationStrategy::BalancedGrowth),
        (ImpactTier::Low, AllocationStrategy::SustainabilityFirst),
    ];
    for (tier, expected) in cases {
        let (model, sink) = recording();
        let allocator = ResourceAllocator::new(model.clone(), sink.clone());
        let result = allocator
            .allocate(&subscription_plan(), &assessment(0.1, tier))
            .expect("allocation should succeed");

        assert_eq!(result.strategy, expected);
        assert_eq!(model.calls()[0].0, expected);
        assert_eq!(
            sink.events(),
            vec![PipelineTelemetryEvent::AllocationStrategySelected {
                strategy: expected,
                tier,
            }]
        );
    }
}

#[test]
fn given_model_result_when_allocate_then_inputs_forwarded_and_result_returned_unchanged() {
    let (model, sink) = recording();
    let allocator = ResourceAllocator::new(model.clone(), sink);
    let revenue = subscription_plan();
    let input = assessment(0.3, ImpactTier::Low);

    let result = allocator
        .allocate(&revenue, &input)
        .expect("allocation should succeed");

    assert_eq!(result.plan, json!({ "programs": 0.6, "operations": 0.4 }));
    let calls = model.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, revenue);
    assert_eq!(calls[0].2, input);
}

#[test]
fn given_failing_model_when_allocate_then_error_is_logged_and_returned_unchanged() {
    let sink = Arc::new(RecordingSink::default());
    let allocator = ResourceAllocator::new(Arc::new(FailingModel), sink.clone());

    let err = allocator
        .allocate(&subscription_plan(), &assessment(0.9, ImpactTier::High))
        .expect_err("model failure must propagate");

    assert_eq!(
        err,
        impact_pipeline::error::dependency_error("allocation backend unavailable")
    );
    assert_eq!(
        sink.events().last(),
        Some(&PipelineTelemetryEvent::StageFailed {
            stage: PipelineStage::Allocation,
            kind: PipelineErrorKind::Dependency,
            message: "allocation backend unavailable".to_string(),
        })
    );
}

#[test]
fn given_noop_model_when_allocate_then_plan_is_null() {
    let allocator = ResourceAllocator::new(
        Arc::new(NoopAllocationModel),
        Arc::new(NoopTelemetrySink),
    );
    let result = allocator
        .allocate(&subscription_plan(), &assessment(0.6, ImpactTier::Medium))
        .expect("allocation should succeed");
    assert_eq!(result.strategy, AllocationStrategy::BalancedGrowth);
    assert!(result.plan.is_null());
}

#[test]
fn given_wire_inputs_when_allocate_json_then_model_receives_decoded_values() {
    let (model, sink) = recording();
    let allocator = ResourceAllocator::new(model.clone(), sink);

    let result = allocator
        .allocate_json(
            &json!({
                "revenue_type": "subscriptions",
                "subscription_price": 50.0,
                "billing_frequency": "monthly"
            }),
            &json!({
                "total_impact_score": 0.3,
                "category_scores": {},
                "impact_level": "low"
            }),
        )
        .expect("allocation should succeed");

    assert_eq!(result.strategy, AllocationStrategy::SustainabilityFirst);
    assert_eq!(model.calls()[0].1, subscription_plan());
}

#[test]
fn given_missing_revenue_when_allocate_json_then_malformed_input_and_model_not_called() {
    let (model, sink) = recording();
    let allocator = ResourceAllocator::new(model.clone(), sink.clone());

    let err = allocator
        .allocate_json(
            &serde_json::Value::Null,
            &json!({
                "total_impact_score": 0.3,
                "category_scores": {},
                "impact_level": "low"
            }),
        )
        .expect_err("missing revenue must fail");

    assert_eq!(err.kind, PipelineErrorKind::MalformedInput);
    assert!(model.calls().is_empty());
    assert!(matches!(
        sink.events().as_slice(),
        [PipelineTelemetryEvent::StageFailed {
            stage: PipelineStage::Allocation,
            kind: PipelineErrorKind::MalformedInput,
            ..
        }]
    ));
}

#[test]
fn given_assessment_without_tier_when_allocate_json_then_malformed_input() {
    let (model, sink) = recording();
    let allocator = ResourceAllocator::new(model.clone(), sink);

    let err = allocator
        .allocate_json(
            &json!({
                "revenue_type": "donations",
                "target_amount": 8000.0,
                "appeal_message": "give"
            }),
            &json!({ "total_impact_score": 0.8, "category_scores": {} }),
        )
        .expect_err("missing tier must fail");

    assert_eq!(err.kind, PipelineErrorKind::MalformedInput);
    assert!(err.message.contains("impact_level"));
    assert!(model.calls().is_empty());
}
