use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Failed to create {kind} \"{name}\": {message}")]
    Submission {
        kind: String,
        name: String,
        message: String,
        body: Option<String>,
    },

    #[error("Failed to encode resource body: {0}")]
    Encoding(String),

    #[error("Failed to load Clowder config from {path}: {message}")]
    Config { path: String, message: String },
}

impl BootstrapError {
    /// Raw response returned by the store alongside a failed submission, if any.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            BootstrapError::Submission { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}
