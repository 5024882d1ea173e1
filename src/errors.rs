use thiserror::Error;

/// Errors raised at the edges of the workflow. The transitions themselves never fail.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Invalid workflow policy: {reason}")]
    InvalidPolicy { reason: String },
    #[error("Unknown step '{step}' (expected add:<text>, review, approve or reject)")]
    UnknownStep { step: String },
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
