use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{open_output, resolve_config};
use crate::calculator::compute_breakdown_with_policy;
use crate::io::{create_writer, OutputFormat};
use crate::posture::SecurityControls;

pub struct EstimateConfig {
    pub industry: String,
    pub set: Vec<String>,
    pub controls: Vec<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn run(config: EstimateConfig) -> Result<()> {
    let file_config = resolve_config(config.config.as_deref())?;
    let registry = file_config.build_registry();

    let metrics = parse_set_pairs(&config.set)?;
    let controls = SecurityControls::from_keys(config.controls.iter().map(String::as_str))?;

    let breakdown = compute_breakdown_with_policy(
        &registry,
        &config.industry,
        &metrics,
        &controls,
        file_config.policy,
    )
    .with_context(|| {
        format!(
            "estimation failed (known industries: {})",
            registry.keys().collect::<Vec<_>>().join(", ")
        )
    })?;

    let output = open_output(config.output.as_ref())?;
    let mut writer = create_writer(output, config.format);
    writer.write_breakdown(&breakdown)
}

fn parse_set_pairs(pairs: &[String]) -> Result<BTreeMap<String, f64>> {
    let mut metrics = BTreeMap::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("--set expects KEY=VALUE, got '{}'", pair))?;
        let value: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("metric '{}' value '{}' is not a number", key, value))?;
        metrics.insert(key.trim().to_string(), value);
    }
    Ok(metrics)
}
