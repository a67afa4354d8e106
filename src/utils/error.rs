use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API responded with status {status}")]
    HttpStatus { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl DirectoryError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DirectoryError::ApiError(_) | DirectoryError::HttpStatus { .. } => {
                "Could not reach the doctor listing service".to_string()
            }
            DirectoryError::IoError(e) => format!("File access failed: {}", e),
            DirectoryError::SerializationError(_) => {
                "The doctor listing could not be read".to_string()
            }
            DirectoryError::ConfigError { message } => format!("Configuration problem: {}", message),
            DirectoryError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            DirectoryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            DirectoryError::MissingConfigError { field } => {
                format!("Missing setting '{}'", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DirectoryError::ApiError(_) | DirectoryError::HttpStatus { .. } => {
                "Check the network connection and the --endpoint value"
            }
            DirectoryError::IoError(_) => "Make sure the file exists and is readable",
            DirectoryError::SerializationError(_) => {
                "Make sure the endpoint returns a JSON array of doctors"
            }
            DirectoryError::ConfigError { .. } | DirectoryError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            DirectoryError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted values"
            }
            DirectoryError::MissingConfigError { .. } => "Provide the missing value and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = DirectoryError::HttpStatus { status: 503 };
        assert_eq!(err.to_string(), "API responded with status 503");
        assert!(err.user_friendly_message().contains("doctor listing service"));
    }

    #[test]
    fn test_invalid_value_suggestion() {
        let err = DirectoryError::InvalidConfigValueError {
            field: "sortBy".to_string(),
            value: "rating".to_string(),
            reason: "unknown sort key".to_string(),
        };
        assert!(err.to_string().contains("rating"));
        assert_eq!(err.recovery_suggestion(), "Run with --help to see the accepted values");
    }
}
