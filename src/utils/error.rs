use thiserror::Error;

#[derive(Error, Debug)]
pub enum CampsiteError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

/// 錯誤分類，用於日誌與退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CampsiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CampsiteError::IoError(_) => ErrorCategory::Io,
            CampsiteError::SerializationError(_) => ErrorCategory::Data,
            CampsiteError::CsvError(_) | CampsiteError::ZipError(_) => ErrorCategory::Output,
            CampsiteError::ConfigError { .. }
            | CampsiteError::ConfigParseError { .. }
            | CampsiteError::InvalidConfigValueError { .. }
            | CampsiteError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CampsiteError::IoError(_) => {
                "Check that the dataset path exists and the output path is writable"
            }
            CampsiteError::SerializationError(_) => {
                "Make sure the dataset is valid JSON shaped as {\"result\": {\"records\": [...]}}"
            }
            CampsiteError::CsvError(_) => "Retry with a different output format such as json",
            CampsiteError::ZipError(_) => "Disable compression or choose another output path",
            CampsiteError::ConfigError { .. } | CampsiteError::ConfigParseError { .. } => {
                "Check the TOML configuration file syntax"
            }
            CampsiteError::InvalidConfigValueError { .. } => {
                "Fix the highlighted configuration value and run again"
            }
            CampsiteError::MissingConfigError { .. } => {
                "Add the missing setting to the configuration file or pass it as a flag"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CampsiteError::IoError(e) => format!("Could not access a file: {}", e),
            CampsiteError::SerializationError(e) => format!("The dataset is not valid JSON: {}", e),
            CampsiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            CampsiteError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CampsiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_and_severity() {
        let err = CampsiteError::InvalidConfigValueError {
            field: "view.sort".to_string(),
            value: "random".to_string(),
            reason: "unknown sort option".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("view.sort"));

        let io = CampsiteError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_serialization_error_from_serde() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: CampsiteError = parse.unwrap_err().into();
        assert_eq!(err.category(), ErrorCategory::Data);
        assert!(err.recovery_suggestion().contains("records"));
    }
}
