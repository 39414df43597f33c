pub mod allocation;
pub mod cli;
pub mod config;
pub mod error;
pub mod impact;
pub mod logging;
pub mod pipeline;
pub mod revenue;
pub mod telemetry;
