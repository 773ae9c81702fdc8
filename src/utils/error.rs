use thiserror::Error;

/// The only failure the item loader can produce: the input was not a JSON
/// array of hiring items.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Failed to parse hiring items from JSON: {message}")]
    ParseFailure { message: String },
}

impl LoadError {
    pub fn message(&self) -> &str {
        match self {
            LoadError::ParseFailure { message } => message,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::ParseFailure {
            message: err.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum EtlError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::Load(_)
            | EtlError::SerializationError(_)
            | EtlError::CsvError(_)
            | EtlError::ProcessingError { .. } => ErrorCategory::Data,
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Data => 2,
            ErrorCategory::Io => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::Load(_) | EtlError::SerializationError(_) => {
                "Check that the input is a JSON array of {\"id\", \"listId\", \"name\"} objects"
            }
            EtlError::CsvError(_) => "Try a different output format (text or json)",
            EtlError::ProcessingError { .. } => "Run again with --verbose to see where loading stopped",
            EtlError::IoError(_) => "Check that the input file exists and the output directory is writable",
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Review the command-line flags and the TOML configuration file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::Load(_) => "Failed to load hiring items".to_string(),
            EtlError::IoError(e) => format!("Could not read or write a file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
