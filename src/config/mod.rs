#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Settings after merging the TOML file with command-line overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` reads the bundled hiring list.
    pub source_path: Option<String>,
    /// `None` prints to stdout.
    pub output_path: Option<String>,
    pub format: OutputFormat,
    pub monitor: bool,
}

/// "-" stands for stdout.
fn output_target(path: Option<&str>) -> Option<String> {
    path.filter(|p| p.trim() != "-").map(str::to_string)
}

impl AppConfig {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        Ok(Self {
            source_path: config.source_path().map(str::to_string),
            output_path: output_target(config.output_path()),
            format: config.output_format()?.unwrap_or_default(),
            monitor: config.monitoring_enabled(),
        })
    }

    pub fn with_source_path(mut self, path: Option<&str>) -> Self {
        if let Some(path) = path {
            self.source_path = Some(path.to_string());
        }
        self
    }

    pub fn with_output_path(mut self, path: Option<&str>) -> Self {
        if path.is_some() {
            self.output_path = output_target(path);
        }
        self
    }

    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    pub fn with_monitor(mut self, monitor: bool) -> Self {
        self.monitor |= monitor;
        self
    }

    pub fn writes_to_stdout(&self) -> bool {
        self.output_path.is_none()
    }
}

impl ConfigProvider for AppConfig {
    fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_optional_path("source.path", self.source_path())?;
        validation::validate_optional_path("output.path", self.output_path())?;
        Ok(())
    }
}
