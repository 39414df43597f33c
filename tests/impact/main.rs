
use std::sync::{Arc, Mutex};

use impact_pipeline::{
    impact::{AssessmentConfig, ImpactAssessor, MetricsRecord},
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

pub fn metrics(carbon: f64, engagement: f64, health: f64) -> MetricsRecord {
    MetricsRecord {
        carbon_emissions_reduction: carbon,
        education_reach: 100,
        community_engagement: engagement,
        health_improvement: health,
        economic_empowerment: 0.7,
    }
}

pub fn default_assessor() -> (ImpactAssessor, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let assessor = ImpactAssessor::new(AssessmentConfig::default(), sink.clone());
    (assessor, sink)
}
