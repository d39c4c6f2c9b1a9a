use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Invalid argument type for '{field}': expected {expected}, found {found}")]
    InvalidArgumentType {
        field: String,
        expected: String,
        found: String,
    },

    #[error("Value {value} for '{field}' is out of range: must be between {min} and {max}")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Invalid operation: {message}")]
    InvalidOperation { message: String },

    #[error("Invalid cable: {reason}")]
    InvalidCable { reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl SplitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SplitError::InvalidArgumentType { .. }
            | SplitError::OutOfRange { .. }
            | SplitError::InvalidOperation { .. }
            | SplitError::InvalidCable { .. } => ErrorCategory::Input,
            SplitError::ConfigError { .. } | SplitError::TomlError(_) => {
                ErrorCategory::Configuration
            }
            SplitError::IoError(_) | SplitError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SplitError::InvalidArgumentType { field, expected, .. } => {
                format!("Pass a value of type {} for '{}'", expected, field)
            }
            SplitError::OutOfRange { field, min, max, .. } => {
                format!("Choose a value for '{}' between {} and {}", field, min, max)
            }
            SplitError::InvalidOperation { .. } => {
                "Use fewer cuts than the cable length, or enable the clamp policy".to_string()
            }
            SplitError::InvalidCable { .. } => {
                "Give the cable a non-empty name and a positive length".to_string()
            }
            SplitError::ConfigError { .. } | SplitError::TomlError(_) => {
                "Check the splitter configuration file".to_string()
            }
            SplitError::IoError(_) => "Check that the file exists and is readable".to_string(),
            SplitError::SerializationError(_) => "Check the JSON input".to_string(),
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 2,
            ErrorCategory::Configuration => 3,
            ErrorCategory::System => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
