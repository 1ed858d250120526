use anyhow::Result;
use clap::Parser;
use roimap::cli::{Cli, Commands};
use roimap::commands;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            industry,
            set,
            controls,
            format,
            output,
            config,
        } => {
            let estimate_config = commands::estimate::EstimateConfig {
                industry,
                set,
                controls,
                format,
                output,
                config,
            };
            commands::estimate::run(estimate_config)
        }
        Commands::Industries {
            format,
            output,
            config,
        } => {
            let industries_config = commands::industries::IndustriesConfig {
                format,
                output,
                config,
            };
            commands::industries::run(industries_config)
        }
        Commands::Init { force } => commands::init::init_config(force),
    }
}
