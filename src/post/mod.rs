// Post Workflow Module
//
// A post moves Draft -> PendingReview -> Published and only shows its content
// once published. `Post` drives a runtime state machine; `typestate` encodes the
// same lifecycle in the type system.

pub mod types;
pub mod state_machine;
pub mod typestate;

use chrono::Utc;
use statig::prelude::*;
use std::fmt;
use uuid::Uuid;

pub use state_machine::{PostStateMachine, State};
pub use types::{
    EditPolicy, PostEvent, PostSnapshot, PostStatus, TransitionRecord, WorkflowPolicy,
};

/// A blog post in the publishing workflow.
///
/// Every operation is defined for every state. Transitions that don't apply
/// to the current state leave the post unchanged.
pub struct Post {
    id: Uuid,
    machine: StateMachine<PostStateMachine>,
    history: Vec<TransitionRecord>,
}

impl Post {
    /// Creates an empty draft with the default policy.
    pub fn new() -> Self {
        Self::with_policy(WorkflowPolicy::default())
    }

    pub fn with_policy(policy: WorkflowPolicy) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(post_id = %id, ?policy, "Post created");
        Self {
            id,
            machine: PostStateMachine::new(id, policy).state_machine(),
            history: Vec::new(),
        }
    }

    pub fn add_text(&mut self, text: &str) {
        self.dispatch(PostEvent::AddText {
            text: text.to_string(),
        });
    }

    pub fn request_review(&mut self) {
        self.dispatch(PostEvent::RequestReview);
    }

    pub fn approve(&mut self) {
        self.dispatch(PostEvent::Approve);
    }

    pub fn reject(&mut self) {
        self.dispatch(PostEvent::Reject);
    }

    /// Feeds one event to the machine and records the status change, if any.
    pub fn dispatch(&mut self, event: PostEvent) {
        let from = self.status();
        self.machine.handle(&event);
        let to = self.status();
        if from != to {
            self.history.push(TransitionRecord {
                from,
                to,
                event: event.name().to_string(),
                at: Utc::now(),
            });
        }
    }

    /// Content as a reader sees it: empty until the post is published.
    pub fn content(&self) -> &str {
        match self.machine.state() {
            State::Published { content } => content,
            _ => "",
        }
    }

    pub fn status(&self) -> PostStatus {
        self.machine.state().status()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Approvals collected in the current review round.
    pub fn approvals(&self) -> u32 {
        self.machine.state().approvals()
    }

    pub fn history(&self) -> &[TransitionRecord] {
        &self.history
    }

    pub fn snapshot(&self) -> PostSnapshot {
        PostSnapshot {
            id: self.id,
            status: self.status(),
            visible_content: self.content().to_string(),
            approvals: self.approvals(),
            history: self.history.clone(),
        }
    }
}

impl Default for Post {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Post")
            .field("id", &self.id)
            .field("status", &self.status())
            .field("approvals", &self.approvals())
            .field("transitions", &self.history.len())
            .finish()
    }
}
