use crate::{
    error::{PipelineError, computation_error},
    impact::types::MetricRange,
};

/// Min-max normalizes `value` against a configured expected range, clamped to `[0, 1]`.
pub fn normalize_metric(
    metric: &str,
    value: f64,
    range: &MetricRange,
) -> Result<f64, PipelineError> {
    if !value.is_finite() {
        return Err(computation_error(format!(
            "cannot normalize '{metric}': non-finite value {value}"
        )));
    }
    if !range.min.is_finite() || !range.max.is_finite() {
        return Err(computation_error(format!(
            "range [{}, {}] for '{metric}' has a non-finite bound",
            range.min, range.max
        )));
    }

    let width = range.max - range.min;
    if width <= 0.0 {
        return Err(computation_error(format!(
            "range [{}, {}] for '{metric}' has no width; normalization would divide by {}",
            range.min, range.max, width
        )));
    }

    Ok(((value - range.min) / width).clamp(0.0, 1.0))
}
