
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use impact_pipeline::{
    impact::{AssessmentResult, ImpactTier},
    revenue::{RevenueConfig, RevenueSelector},
    telemetry::{PipelineTelemetryEvent, TelemetrySink},
};

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<PipelineTelemetryEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<PipelineTelemetryEvent> {
        self.events.lock().expect("lock").clone()
    }
}

impl TelemetrySink for RecordingSink {
    fn on_event(&self, event: PipelineTelemetryEvent) {
        self.events.lock().expect("lock").push(event);
    }
}

/// Builds an assessment directly; the tier is irrelevant to strategy selection.
pub fn assessment(total_score: f64, tier: ImpactTier) -> AssessmentResult {
    AssessmentResult {
        total_impact_score: total_score,
        category_scores: BTreeMap::new(),
        impact_level: tier,
    }
}

pub fn default_selector() -> (RevenueSelector, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let selector = RevenueSelector::new(RevenueConfig::default(), sink.clone());
    (selector, sink)
}
