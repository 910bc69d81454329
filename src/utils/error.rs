use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid draw date '{value}': {reason}")]
    DateParseError { value: String, reason: String },

    #[error("HTML template not found: {path}")]
    TemplateNotFound { path: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parsing,
    Configuration,
    Template,
    Processing,
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
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::CsvError(_)
            | EtlError::SerializationError(_)
            | EtlError::DateParseError { .. } => ErrorCategory::Parsing,
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EtlError::TemplateNotFound { .. } => ErrorCategory::Template,
            EtlError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 單筆資料錯誤只會跳過該筆
            EtlError::DateParseError { .. } => ErrorSeverity::Low,
            EtlError::CsvError(_) | EtlError::SerializationError(_) => ErrorSeverity::Medium,
            EtlError::TemplateNotFound { .. }
            | EtlError::ProcessingError { .. }
            | EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            EtlError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::CsvError(_) => {
                "Check that the CSV files use a header row followed by date,n1..n5 columns".to_string()
            }
            EtlError::IoError(_) => {
                "Check that the data directory exists and is readable/writable".to_string()
            }
            EtlError::SerializationError(_) => {
                "Check that the JSON source is an array of draw records".to_string()
            }
            EtlError::ConfigError { .. } | EtlError::ConfigValidationError { .. } => {
                "Review the TOML configuration file syntax and values".to_string()
            }
            EtlError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            EtlError::DateParseError { .. } => {
                "Use YYYY/M/D or M/D dates in the first CSV column".to_string()
            }
            EtlError::TemplateNotFound { path } => {
                format!("Place the HTML template at '{}' or pass --template", path)
            }
            EtlError::ProcessingError { .. } => "Inspect the input data with --verbose".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::TemplateNotFound { path } => format!("找不到 HTML 模板檔案 {}", path),
            EtlError::IoError(e) => format!("檔案讀寫失敗: {}", e),
            EtlError::DateParseError { value, reason } => {
                format!("處理日期 {} 失敗: {}", value, reason)
            }
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => format!("設定錯誤: {}", self),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
