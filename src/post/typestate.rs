//! The publishing lifecycle encoded as one type per state.
//!
//! Each transition consumes the current value and returns the next, so
//! approving a draft or reading an unpublished post does not compile:
//!
//! ```
//! use post_workflow::post::typestate::Post;
//!
//! let mut draft = Post::new();
//! draft.add_text("I ate a salad for lunch today");
//! let post = draft.request_review().approve();
//! assert_eq!(post.content(), "I ate a salad for lunch today");
//! ```
//!
//! ```compile_fail
//! use post_workflow::post::typestate::Post;
//!
//! let draft = Post::new();
//! draft.approve();
//! ```

/// A published post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    content: String,
}

/// A post still being written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPost {
    content: String,
}

/// A post waiting for approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReviewPost {
    content: String,
}

impl Post {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> DraftPost {
        DraftPost::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl DraftPost {
    pub fn add_text(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub fn request_review(self) -> PendingReviewPost {
        PendingReviewPost {
            content: self.content,
        }
    }
}

impl PendingReviewPost {
    pub fn approve(self) -> Post {
        Post {
            content: self.content,
        }
    }

    pub fn reject(self) -> DraftPost {
        DraftPost {
            content: self.content,
        }
    }
}
