use std::{env, path::PathBuf};

use anyhow::{Result, anyhow};

const USAGE: &str = "usage: impact-pipeline [--config <path>] --metrics <path>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: PathBuf,
    pub metrics_path: PathBuf,
}

pub fn args_from_env() -> Result<CliArgs> {
    parse_args(env::args().skip(1))
}

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut args = args.into_iter();
    let mut config_path = None;
    let mut metrics_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                config_path = Some(PathBuf::from(value));
            }
            "--metrics" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --metrics"))?;
                metrics_path = Some(PathBuf::from(value));
            }
            other => {
                return Err(anyhow!("unknown argument: {other}. {USAGE}"));
            }
        }
    }

    Ok(CliArgs {
        config_path: config_path.unwrap_or_else(|| PathBuf::from("./impact.jsonc")),
        metrics_path: metrics_path.ok_or_else(|| anyhow!("--metrics is required. {USAGE}"))?,
    })
}
