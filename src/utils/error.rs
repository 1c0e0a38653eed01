use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfGenError {
    #[error("Template file missing or unreadable: {path}")]
    MissingTemplate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write output file: {path}")]
    UnwritableOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    TemplateInput,
    OutputWrite,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConfGenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConfGenError::MissingTemplate { .. } => ErrorCategory::TemplateInput,
            ConfGenError::UnwritableOutput { .. } => ErrorCategory::OutputWrite,
            ConfGenError::IoError(_) => ErrorCategory::Io,
            ConfGenError::InvalidConfigValueError { .. }
            | ConfGenError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::TemplateInput | ErrorCategory::OutputWrite | ErrorCategory::Io => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConfGenError::MissingTemplate { path, .. } => format!(
                "Check that the template '{}' exists and is readable, or point --template-dir at the right directory",
                path
            ),
            ConfGenError::UnwritableOutput { path, .. } => format!(
                "Check that the destination for '{}' exists and is writable (the tool never creates directories)",
                path
            ),
            ConfGenError::IoError(_) => {
                "Check filesystem permissions and free space".to_string()
            }
            ConfGenError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            ConfGenError::ConfigValidationError { field, .. } => {
                format!("Review the '{}' section of the configuration file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConfGenError::MissingTemplate { path, .. } => {
                format!("Template file not found: {}", path)
            }
            ConfGenError::UnwritableOutput { path, .. } => {
                format!("Could not write output file: {}", path)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfGenError>;
