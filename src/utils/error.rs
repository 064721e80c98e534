use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Unknown medication type: {type_tag}")]
    UnknownType { type_tag: String },

    #[error("Missing field '{field}' (index {index}) for {kind} medication")]
    MissingField {
        kind: String,
        field: String,
        index: usize,
    },

    #[error("Invalid numeric field '{field}': '{value}' ({reason})")]
    InvalidNumericField {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller-supplied factory input.
    Input,
    Configuration,
    System,
}

impl PatternError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PatternError::UnknownType { .. }
            | PatternError::MissingField { .. }
            | PatternError::InvalidNumericField { .. } => ErrorCategory::Input,
            PatternError::TomlError(_)
            | PatternError::ConfigError { .. }
            | PatternError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PatternError::IoError(_) | PatternError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PatternError::UnknownType { .. } => {
                "Use one of the known medication types: TABLET, SYRUP, INJECTION".to_string()
            }
            PatternError::MissingField { field, .. } => {
                format!("Supply a value for '{}' in the order's fields", field)
            }
            PatternError::InvalidNumericField { field, .. } => {
                format!("Make sure '{}' is a plain number, e.g. 500 or 10.0", field)
            }
            PatternError::IoError(_) => "Check that the scenario file exists and is readable".to_string(),
            PatternError::TomlError(_) => "Fix the TOML syntax in the scenario file".to_string(),
            PatternError::SerializationError(_) => "Retry without --json".to_string(),
            PatternError::ConfigError { .. } | PatternError::InvalidConfigValueError { .. } => {
                "Review the scenario file against the documented sections".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not create medication: {}", self),
            ErrorCategory::Configuration => format!("Scenario configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
