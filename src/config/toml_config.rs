use crate::domain::model::OutputFormat;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: Option<SourceConfig>,
    pub output: Option<OutputConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    /// JSON file to read; the bundled list when absent.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, or "-" for stdout.
    pub path: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringConfig {
    #[serde(default)]
    pub enabled: bool,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HIRING_JSON})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn source_path(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.path.as_deref())
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        match self.output.as_ref().and_then(|o| o.format.as_deref()) {
            Some(format) => format
                .parse::<OutputFormat>()
                .map(Some)
                .map_err(|reason| EtlError::InvalidConfigValueError {
                    field: "output.format".to_string(),
                    value: format.to_string(),
                    reason,
                }),
            None => Ok(None),
        }
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_optional_path("source.path", self.source_path())?;
        validation::validate_optional_path("output.path", self.output_path())?;

        self.output_format()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
path = "data/hiring.json"

[output]
path = "./output"
format = "csv"

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source_path(), Some("data/hiring.json"));
        assert_eq!(config.output_path(), Some("./output"));
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Csv));
        assert!(config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(config.source_path().is_none());
        assert!(config.output_path().is_none());
        assert_eq!(config.output_format().unwrap(), None);
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("HIRING_LIST_TEST_SOURCE", "/srv/hiring.json");

        let toml_content = r#"
[source]
path = "${HIRING_LIST_TEST_SOURCE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source_path(), Some("/srv/hiring.json"));

        std::env::remove_var("HIRING_LIST_TEST_SOURCE");
    }

    #[test]
    fn test_unknown_format_fails_validation() {
        let toml_content = r#"
[output]
format = "xml"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
        assert!(config.output_format().is_err());
    }

    #[test]
    fn test_txt_alias_is_accepted() {
        let config = TomlConfig::from_toml_str("[output]\nformat = \"txt\"\n").unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Text));
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[source\npath = 1").unwrap_err();
        assert!(matches!(err, EtlError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nformat = \"json\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Json));
    }
}
