use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {message}")]
    TomlError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Could not find spl_ widget id in {source_name}")]
    WidgetNotFound { source_name: String },

    #[error("No tab blocks found for spl_{widget_id} in {source_name}")]
    NoTabBlocks {
        widget_id: String,
        source_name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Markup,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::SerializationError(_) => ErrorCategory::Serialization,
            EtlError::TomlError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EtlError::WidgetNotFound { .. } | EtlError::NoTabBlocks { .. } => {
                ErrorCategory::Markup
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Markup => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Serialization => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::IoError(_) => "Check that the base directory exists and is readable/writable",
            EtlError::SerializationError(_) => "Report this as a bug; the menu could not be encoded as JSON",
            EtlError::TomlError { .. } => "Fix the syntax of the TOML configuration file",
            EtlError::InvalidConfigValueError { .. } | EtlError::MissingConfigError { .. } => {
                "Review the command line flags and configuration file values"
            }
            EtlError::WidgetNotFound { .. } => {
                "Make sure the file is a saved page containing a stylish price list widget"
            }
            EtlError::NoTabBlocks { .. } => {
                "The widget markup shape is not supported; re-save the page after its tabs have rendered"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::WidgetNotFound { source_name } => {
                format!("No price list widget found in {}", source_name)
            }
            EtlError::NoTabBlocks {
                widget_id,
                source_name,
            } => format!(
                "Price list widget {} in {} has no category blocks",
                widget_id, source_name
            ),
            other => other.to_string(),
        }
    }
}

impl From<toml::de::Error> for EtlError {
    fn from(e: toml::de::Error) -> Self {
        EtlError::TomlError {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_errors_are_high_severity() {
        let err = EtlError::WidgetNotFound {
            source_name: "dinner.html".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Markup);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.to_string(), "Could not find spl_ widget id in dinner.html");
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = EtlError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_no_tab_blocks_message_names_widget() {
        let err = EtlError::NoTabBlocks {
            widget_id: "42".to_string(),
            source_name: "lunch.html".to_string(),
        };
        assert_eq!(err.to_string(), "No tab blocks found for spl_42 in lunch.html");
        assert!(err.user_friendly_message().contains("42"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = EtlError::MissingConfigError {
            field: "sources".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(ErrorSeverity::Critical > err.severity());
    }
}
