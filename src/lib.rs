// Post Workflow Library - blog post publishing state machine
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod errors;
pub mod post;
pub mod telemetry;

// Re-export key types for easy access
pub use config::{ObservabilityConfig, PostWorkflowConfig};
pub use errors::WorkflowError;
pub use post::{
    EditPolicy, Post, PostEvent, PostSnapshot, PostStatus, TransitionRecord, WorkflowPolicy,
};
pub use telemetry::{create_post_span, generate_correlation_id, init_telemetry};
