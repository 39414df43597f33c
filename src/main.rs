use std::{fs, sync::Arc};

use anyhow::{Context, Result};

use impact_pipeline::{
    allocation::NoopAllocationModel,
    cli::args_from_env,
    config::Config,
    impact::MetricsRecord,
    logging::init_tracing,
    pipeline::ImpactPipeline,
    telemetry::TracingTelemetrySink,
};

fn main() -> Result<()> {
    let args = args_from_env()?;
    let config = Config::load(&args.config_path)
        .with_context(|| format!("failed to load config from {}", args.config_path.display()))?;
    let _logging_guard = init_tracing(&config.logging).context("failed to initialize logging")?;

    let metrics_content = fs::read_to_string(&args.metrics_path)
        .with_context(|| format!("failed to read {}", args.metrics_path.display()))?;
    let metrics: MetricsRecord = json5::from_str(&metrics_content)
        .with_context(|| format!("failed to parse metrics {}", args.metrics_path.display()))?;

    let pipeline = ImpactPipeline::from_config(
        &config,
        Arc::new(NoopAllocationModel),
        Arc::new(TracingTelemetrySink),
    );
    let outcome = pipeline.run(&metrics).context("impact pipeline failed")?;

    println!(
        "{}",
        serde_json::to_string_pretty(&outcome).context("failed to render pipeline outcome")?
    );
    Ok(())
}
