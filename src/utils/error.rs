use thiserror::Error;

/// Shown when the request never reached the server.
pub const CONNECTIVITY_MESSAGE: &str =
    "Cannot connect to server. Please check if backend is running.";

/// Used when the server answered without `success: true` and gave no reason.
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message";

/// Last resort when a failure carries no text at all.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Server rejected the message: {message}")]
    Application { message: String },

    #[error("Network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    HttpStatus {
        status: u16,
        message: Option<String>,
    },

    #[error("Request failed: {message}")]
    Unknown { message: String },

    #[error("Invalid field '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("A submission is already in flight")]
    SubmitDisabled,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The server answered and said no.
    Application,
    /// The server could not be reached.
    Network,
    /// Anything else that went wrong while sending.
    Unknown,
    /// Input was refused before anything was sent.
    Input,
    /// Startup problems: bad flags, unreadable config.
    Setup,
}

impl ContactError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContactError::Application { .. } => ErrorCategory::Application,
            ContactError::Network { .. } => ErrorCategory::Network,
            ContactError::HttpStatus { .. } | ContactError::Unknown { .. } => ErrorCategory::Unknown,
            ContactError::Validation { .. } | ContactError::SubmitDisabled => ErrorCategory::Input,
            ContactError::Config { .. }
            | ContactError::InvalidConfigValue { .. }
            | ContactError::Io(_) => ErrorCategory::Setup,
        }
    }

    /// Text shown inline under the form.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::Application { message } => non_empty_or(message, SEND_FAILED_MESSAGE),
            ContactError::Network { .. } => CONNECTIVITY_MESSAGE.to_string(),
            ContactError::HttpStatus { status, message } => match message {
                Some(message) if !message.is_empty() => message.clone(),
                _ => format!("Request failed with status code {}", status),
            },
            ContactError::Unknown { message } => non_empty_or(message, GENERIC_FAILURE_MESSAGE),
            ContactError::Validation { field, reason } => format!("{}: {}", field, reason),
            ContactError::SubmitDisabled => "Your message is still being sent.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Setup => 1,
            ErrorCategory::Application | ErrorCategory::Network | ErrorCategory::Unknown => 2,
        }
    }
}

fn non_empty_or(message: &str, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message.to_string()
    }
}

impl From<reqwest::Error> for ContactError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ContactError::Network { source: err }
        } else if err.is_timeout() {
            ContactError::Unknown {
                message: "Request timed out".to_string(),
            }
        } else if err.is_decode() {
            ContactError::Unknown {
                message: format!("Unexpected response from server: {}", err),
            }
        } else {
            ContactError::Unknown {
                message: err.to_string(),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
