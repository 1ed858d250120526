use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "roimap")]
#[command(about = "Security ROI and savings estimator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate savings and ROI for an industry profile
    Estimate {
        /// Industry profile key (see `roimap industries`)
        #[arg(short, long)]
        industry: String,

        /// Metric values as key=value pairs; unset metrics use profile defaults
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Security controls already in place (comma-separated:
        /// mfa,edr,monitoring,backup,training,compliance)
        #[arg(long, value_delimiter = ',')]
        controls: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to .roimap.toml discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List registered industry profiles and their input schemas
    Industries {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to .roimap.toml discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_args_parse() {
        let cli = Cli::try_parse_from([
            "roimap",
            "estimate",
            "--industry",
            "accounting",
            "--set",
            "employees=25",
            "--set",
            "revenue=3000000",
            "--controls",
            "mfa,backup",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Estimate {
                industry,
                set,
                controls,
                format,
                ..
            } => {
                assert_eq!(industry, "accounting");
                assert_eq!(set, vec!["employees=25", "revenue=3000000"]);
                assert_eq!(controls, vec!["mfa", "backup"]);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn industries_defaults_to_terminal() {
        let cli = Cli::try_parse_from(["roimap", "industries"]).unwrap();
        match cli.command {
            Commands::Industries { format, .. } => assert_eq!(format, OutputFormat::Terminal),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn estimate_requires_industry() {
        assert!(Cli::try_parse_from(["roimap", "estimate"]).is_err());
    }
}
