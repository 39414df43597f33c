use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineErrorKind {
    MalformedInput,
    Computation,
    Dependency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineError {
    pub kind: PipelineErrorKind,
    pub message: String,
}

impl PipelineError {
    pub fn new(kind: PipelineErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for PipelineError {}

pub fn malformed_input(message: impl Into<String>) -> PipelineError {
    PipelineError::new(PipelineErrorKind::MalformedInput, message)
}

pub fn computation_error(message: impl Into<String>) -> PipelineError {
    PipelineError::new(PipelineErrorKind::Computation, message)
}

pub fn dependency_error(message: impl Into<String>) -> PipelineError {
    PipelineError::new(PipelineErrorKind::Dependency, message)
}
