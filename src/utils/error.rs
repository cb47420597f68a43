use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EolError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("console I/O failed: {0}")]
    Console(#[source] std::io::Error),

    #[error("input closed before a valid year was entered")]
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Filesystem,
    Data,
    Configuration,
    Input,
}

impl EolError {
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        EolError::Network {
            url: url.into(),
            source,
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EolError::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EolError::Network { .. } => ErrorCategory::Network,
            EolError::Filesystem { .. } => ErrorCategory::Filesystem,
            EolError::Csv(_) => ErrorCategory::Data,
            EolError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            EolError::Console(_) | EolError::InputClosed => ErrorCategory::Input,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EolError::Network { .. } => format!("Could not reach the EOL API: {}", self),
            EolError::Filesystem { path, .. } => {
                format!("Could not write to {}", path.display())
            }
            EolError::Csv(e) => format!("Could not build the CSV report: {}", e),
            EolError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
            EolError::Console(e) => format!("Could not talk to the terminal: {}", e),
            EolError::InputClosed => "No year was entered".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and try again later",
            ErrorCategory::Filesystem => {
                "Check that the output folder is writable or pass another one with --output"
            }
            ErrorCategory::Data => "Re-run the tool; the API may have returned unexpected data",
            ErrorCategory::Configuration => "Fix the configuration value and try again",
            ErrorCategory::Input => "Run the tool from an interactive terminal",
        }
    }

    /// Every failure that reaches the top level aborts the run.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, EolError>;
