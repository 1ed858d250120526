use std::path::PathBuf;

use anyhow::Result;

use super::{open_output, resolve_config};
use crate::io::{create_writer, OutputFormat};

pub struct IndustriesConfig {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn run(config: IndustriesConfig) -> Result<()> {
    let file_config = resolve_config(config.config.as_deref())?;
    let registry = file_config.build_registry();
    let industries = registry.industries();

    let output = open_output(config.output.as_ref())?;
    let mut writer = create_writer(output, config.format);
    writer.write_industries(&industries)
}
