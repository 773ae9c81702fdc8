use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::domain::model::OutputFormat;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "hiring-list")]
#[command(about = "Group hiring items by list id and print them by section")]
pub struct CliConfig {
    /// JSON file with hiring items (defaults to the bundled list)
    #[arg(long)]
    pub input: Option<String>,

    /// Output directory, or "-" for stdout
    #[arg(long)]
    pub output: Option<String>,

    /// Output format: text, json or csv
    #[arg(long)]
    pub format: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory per stage")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    fn parsed_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| {
                format
                    .parse::<OutputFormat>()
                    .map_err(|reason| EtlError::InvalidConfigValueError {
                        field: "--format".to_string(),
                        value: format.to_string(),
                        reason,
                    })
            })
            .transpose()
    }

    /// Loads the TOML file if one was given and applies the flags on top.
    pub fn resolve(&self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        file.validate()?;

        let config = AppConfig::from_toml(&file)?
            .with_source_path(self.input.as_deref())
            .with_output_path(self.output.as_deref())
            .with_format(self.parsed_format()?)
            .with_monitor(self.monitor);
        config.validate()?;

        Ok(config)
    }
}
