use statig::prelude::*;
use uuid::Uuid;

use super::types::{EditPolicy, PostEvent, PostStatus, WorkflowPolicy};

/// Shared storage for the runtime post machine. Per-state data (the text and
/// the approval count) lives in the state variants themselves.
#[derive(Debug)]
pub struct PostStateMachine {
    pub post_id: Uuid,
    pub policy: WorkflowPolicy,
}

impl PostStateMachine {
    pub fn new(post_id: Uuid, policy: WorkflowPolicy) -> Self {
        Self { post_id, policy }
    }

    fn accepts_edits_outside_draft(&self) -> bool {
        self.policy.edit_policy == EditPolicy::AnyState
    }

    fn ignore(&self, status: PostStatus, event: &PostEvent) -> Outcome<State> {
        tracing::debug!(
            post_id = %self.post_id,
            status = %status,
            event = event.name(),
            "Event ignored in current state"
        );
        Handled
    }
}

#[state_machine(initial = "State::draft(String::new())", state(derive(Debug, Clone)))]
impl PostStateMachine {
    #[state]
    fn draft(&mut self, content: &mut String, event: &PostEvent) -> Outcome<State> {
        match event {
            PostEvent::AddText { text } => {
                content.push_str(text);
                tracing::debug!(post_id = %self.post_id, len = content.len(), "Draft text appended");
                Handled
            }
            PostEvent::RequestReview => {
                tracing::info!(
                    post_id = %self.post_id,
                    from = %PostStatus::Draft,
                    to = %PostStatus::PendingReview,
                    "Review requested"
                );
                Transition(State::pending_review(std::mem::take(content), 0))
            }
            _ => self.ignore(PostStatus::Draft, event),
        }
    }

    #[state]
    fn pending_review(
        &mut self,
        content: &mut String,
        approvals: &mut u32,
        event: &PostEvent,
    ) -> Outcome<State> {
        match event {
            PostEvent::Approve => {
                *approvals += 1;
                if *approvals < self.policy.required_approvals {
                    tracing::info!(
                        post_id = %self.post_id,
                        approvals = *approvals,
                        required = self.policy.required_approvals,
                        "Approval recorded"
                    );
                    return Handled;
                }
                tracing::info!(
                    post_id = %self.post_id,
                    from = %PostStatus::PendingReview,
                    to = %PostStatus::Published,
                    approvals = *approvals,
                    "Post approved and published"
                );
                Transition(State::published(std::mem::take(content)))
            }
            PostEvent::Reject => {
                tracing::info!(
                    post_id = %self.post_id,
                    from = %PostStatus::PendingReview,
                    to = %PostStatus::Draft,
                    "Review rejected"
                );
                Transition(State::draft(std::mem::take(content)))
            }
            PostEvent::AddText { text } if self.accepts_edits_outside_draft() => {
                content.push_str(text);
                Handled
            }
            _ => self.ignore(PostStatus::PendingReview, event),
        }
    }

    #[state]
    fn published(&mut self, content: &mut String, event: &PostEvent) -> Outcome<State> {
        match event {
            PostEvent::AddText { text } if self.accepts_edits_outside_draft() => {
                content.push_str(text);
                Handled
            }
            _ => self.ignore(PostStatus::Published, event),
        }
    }
}

impl State {
    pub fn status(&self) -> PostStatus {
        match self {
            State::Draft { .. } => PostStatus::Draft,
            State::PendingReview { .. } => PostStatus::PendingReview,
            State::Published { .. } => PostStatus::Published,
        }
    }

    /// Stored text regardless of visibility.
    pub fn stored_content(&self) -> &str {
        match self {
            State::Draft { content }
            | State::PendingReview { content, .. }
            | State::Published { content } => content,
        }
    }

    pub fn approvals(&self) -> u32 {
        match self {
            State::PendingReview { approvals, .. } => *approvals,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(policy: WorkflowPolicy) -> StateMachine<PostStateMachine> {
        PostStateMachine::new(Uuid::new_v4(), policy).state_machine()
    }

    fn add(text: &str) -> PostEvent {
        PostEvent::AddText {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_basic_publishing_workflow() {
        let mut sm = machine(WorkflowPolicy::default());
        assert_eq!(sm.state().status(), PostStatus::Draft);

        sm.handle(&add("hello"));
        sm.handle(&PostEvent::RequestReview);
        assert_eq!(sm.state().status(), PostStatus::PendingReview);
        assert_eq!(sm.state().stored_content(), "hello");

        sm.handle(&PostEvent::Approve);
        assert_eq!(sm.state().status(), PostStatus::Published);
        assert_eq!(sm.state().stored_content(), "hello");
    }

    #[test]
    fn test_reject_returns_to_draft_and_resets_approvals() {
        let mut sm = machine(WorkflowPolicy {
            required_approvals: 2,
            ..Default::default()
        });
        sm.handle(&add("text"));
        sm.handle(&PostEvent::RequestReview);
        sm.handle(&PostEvent::Approve);
        assert_eq!(sm.state().approvals(), 1);

        sm.handle(&PostEvent::Reject);
        assert_eq!(sm.state().status(), PostStatus::Draft);
        assert_eq!(sm.state().approvals(), 0);
        assert_eq!(sm.state().stored_content(), "text");

        sm.handle(&PostEvent::RequestReview);
        sm.handle(&PostEvent::Approve);
        assert_eq!(sm.state().status(), PostStatus::PendingReview);
        sm.handle(&PostEvent::Approve);
        assert_eq!(sm.state().status(), PostStatus::Published);
    }

    #[test]
    fn test_edits_outside_draft_follow_policy() {
        let mut strict = machine(WorkflowPolicy::default());
        strict.handle(&add("a"));
        strict.handle(&PostEvent::RequestReview);
        strict.handle(&add("b"));
        assert_eq!(strict.state().stored_content(), "a");

        let mut loose = machine(WorkflowPolicy {
            edit_policy: EditPolicy::AnyState,
            ..Default::default()
        });
        loose.handle(&add("a"));
        loose.handle(&PostEvent::RequestReview);
        loose.handle(&add("b"));
        loose.handle(&PostEvent::Approve);
        loose.handle(&add("c"));
        assert_eq!(loose.state().stored_content(), "abc");
    }
}
