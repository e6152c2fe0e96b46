use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "champion-roles",
    version,
    about = "Write each champion's significant roles, most played first, to a JSON file"
)]
pub struct Cli {
    /// TOML configuration file. Environment variables override its values.
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum play rate for a role to be kept.
    #[arg(long, short)]
    pub threshold: Option<f64>,

    /// File to write the role mapping to.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Platform or region to name champions for, e.g. NA1 or EUW.
    #[arg(long, short)]
    pub region: Option<String>,
}

impl Cli {
    /// Flags take precedence over both the config file and the environment.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(region) = &self.region {
            config.region = region.clone();
        }
    }
}
