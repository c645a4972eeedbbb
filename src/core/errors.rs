use thiserror::Error;

/// A required parameter absent from a command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingParameter {
    pub name: String,
    /// Descriptive type from the manifest, e.g. "uuid" or "boolean".
    pub kind: String,
}

impl std::fmt::Display for MissingParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.kind)
        }
    }
}

fn format_missing(missing: &[MissingParameter]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Application-level failure reported inside a successful HTTP exchange.
    #[error("API error: {code} - {message}")]
    ApiError { code: i64, message: String },

    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("command '{command}' is missing required parameters: {}", format_missing(.missing))]
    MissingParameters {
        command: String,
        missing: Vec<MissingParameter>,
    },

    #[error("command manifest unavailable: {0}")]
    ManifestMissing(String),

    #[error("command manifest invalid: {0}")]
    ManifestInvalid(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),
}
