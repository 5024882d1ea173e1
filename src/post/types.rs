// Core types for the post publishing workflow

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::WorkflowError;

/// Publishing status of a post, in workflow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    /// Being written; content is editable
    Draft,
    /// Waiting for approval
    PendingReview,
    /// Terminal; content is visible
    Published,
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PostStatus::Draft => "draft",
            PostStatus::PendingReview => "pending_review",
            PostStatus::Published => "published",
        };
        f.write_str(name)
    }
}

/// Events accepted by the runtime state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostEvent {
    AddText { text: String },
    RequestReview,
    Approve,
    Reject,
}

impl PostEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PostEvent::AddText { .. } => "add_text",
            PostEvent::RequestReview => "request_review",
            PostEvent::Approve => "approve",
            PostEvent::Reject => "reject",
        }
    }
}

/// Which states accept `add_text`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditPolicy {
    #[default]
    DraftOnly,
    AnyState,
}

/// Rules a post is created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowPolicy {
    /// Number of `approve()` calls needed to publish
    pub required_approvals: u32,
    pub edit_policy: EditPolicy,
}

impl Default for WorkflowPolicy {
    fn default() -> Self {
        Self {
            required_approvals: 1,
            edit_policy: EditPolicy::DraftOnly,
        }
    }
}

impl WorkflowPolicy {
    pub fn validate(&self) -> Result<(), WorkflowError> {
        if self.required_approvals == 0 {
            return Err(WorkflowError::InvalidPolicy {
                reason: "required_approvals must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// One actual status change. No-op events are never recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: PostStatus,
    pub to: PostStatus,
    pub event: String,
    pub at: DateTime<Utc>,
}

/// Serializable view of a post as an outside reader sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSnapshot {
    pub id: Uuid,
    pub status: PostStatus,
    pub visible_content: String,
    pub approvals: u32,
    pub history: Vec<TransitionRecord>,
}
