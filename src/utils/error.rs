use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown demo: {name}")]
    UnknownDemo { name: String },

    #[error("Unknown category: {name}")]
    UnknownCategory { name: String },

    #[error("Unrecognized {family} label: {label}")]
    UnknownLabel { family: String, label: String },
}

impl CatalogError {
    pub fn unknown_label(family: &str, label: &str) -> Self {
        CatalogError::UnknownLabel {
            family: family.to_string(),
            label: label.to_string(),
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Could not read or write a file: {}", e),
            CatalogError::SerializationError(e) => format!("Could not encode the output: {}", e),
            CatalogError::ConfigError { message } => {
                format!("The configuration file is not usable: {}", message)
            }
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            CatalogError::UnknownDemo { name } => format!("There is no demo called '{}'", name),
            CatalogError::UnknownCategory { name } => {
                format!("There is no category called '{}'", name)
            }
            CatalogError::UnknownLabel { family, label } => {
                format!("The {} selector does not know '{}'", family, label)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::IoError(_) => "Check file permissions and that the path exists",
            CatalogError::SerializationError(_) => "Retry with --format text",
            CatalogError::ConfigError { .. } => "Make sure the file exists and is valid TOML",
            CatalogError::InvalidConfigValueError { .. } => {
                "Fix the field in the configuration file or remove it to use the default"
            }
            CatalogError::UnknownDemo { .. } => "Run `pattern-catalog list` to see available demos",
            CatalogError::UnknownCategory { .. } => {
                "Use one of: behavioral, creational, structural, oops"
            }
            CatalogError::UnknownLabel { .. } => {
                "Use one of the labels the selector recognizes (matching ignores case)"
            }
        }
    }

    /// 依錯誤種類決定 CLI 的退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            CatalogError::IoError(_) | CatalogError::SerializationError(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_label_message() {
        let err = CatalogError::unknown_label("shape", "hexagon");
        assert_eq!(err.to_string(), "Unrecognized shape label: hexagon");
        assert!(err.user_friendly_message().contains("hexagon"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_io_error_exit_code() {
        let err: CatalogError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert_eq!(err.exit_code(), 2);
    }
}
