// Step parsing for the post-workflow binary

use std::str::FromStr;

use crate::errors::WorkflowError;
use crate::post::{Post, PostEvent};

/// One command-line step applied to a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    AddText(String),
    RequestReview,
    Approve,
    Reject,
}

impl FromStr for Step {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(text) = s.strip_prefix("add:") {
            return Ok(Step::AddText(text.to_string()));
        }
        match s {
            "review" | "request-review" => Ok(Step::RequestReview),
            "approve" => Ok(Step::Approve),
            "reject" => Ok(Step::Reject),
            _ => Err(WorkflowError::UnknownStep {
                step: s.to_string(),
            }),
        }
    }
}

impl From<Step> for PostEvent {
    fn from(step: Step) -> Self {
        match step {
            Step::AddText(text) => PostEvent::AddText { text },
            Step::RequestReview => PostEvent::RequestReview,
            Step::Approve => PostEvent::Approve,
            Step::Reject => PostEvent::Reject,
        }
    }
}

/// Parse every step before touching the post, so a typo leaves nothing half-applied.
pub fn parse_steps<I, S>(raw: I) -> Result<Vec<Step>, WorkflowError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter().map(|s| s.as_ref().parse()).collect()
}

pub fn apply_steps(post: &mut Post, steps: Vec<Step>) {
    for step in steps {
        post.dispatch(step.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::PostStatus;

    #[test]
    fn test_parse_known_steps() {
        let steps = parse_steps(&["add:hi there", "review", "approve", "reject"]).unwrap();
        assert_eq!(
            steps,
            vec![
                Step::AddText("hi there".to_string()),
                Step::RequestReview,
                Step::Approve,
                Step::Reject,
            ]
        );
    }

    #[test]
    fn test_unknown_step_is_reported() {
        let err = parse_steps(&["review", "publish"]).unwrap_err();
        assert!(matches!(err, WorkflowError::UnknownStep { ref step } if step == "publish"));
    }

    #[test]
    fn test_apply_steps_publishes() {
        let mut post = Post::new();
        apply_steps(&mut post, parse_steps(&["add:hi", "review", "approve"]).unwrap());
        assert_eq!(post.status(), PostStatus::Published);
        assert_eq!(post.content(), "hi");
    }
}
