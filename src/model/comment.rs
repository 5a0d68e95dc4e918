use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_CONTENT_LENGTH: usize = 2000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommentError {
    #[error("Comment content is required")]
    EmptyContent,
    #[error("Comment cannot be more than {MAX_CONTENT_LENGTH} characters")]
    ContentTooLong,
    #[error("Cannot reply to a reply")]
    NestedReply,
    #[error("Comment already liked")]
    AlreadyLiked,
    #[error("Comment has not yet been liked")]
    NotLiked,
}

//comment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub uuid: String,
    pub content: String,
    pub post: String,
    pub author: String,
    /// None for top-level comments. Nesting is capped at one level:
    /// a comment whose parent is itself a reply is rejected at creation.
    pub parent: Option<String>,
    pub approved: bool,
    /// User uuids, most recent first, no duplicates.
    pub likes: Vec<String>,

    pub created_at: i64,
    pub modified_at: i64,
}

impl Comment {
    pub fn new(
        uuid: String,
        content: &str,
        post: &str,
        author: &str,
        parent: Option<String>,
        now: i64,
    ) -> Result<Self, CommentError> {
        Self::validate_content(content)?;
        Ok(Self {
            uuid,
            content: content.trim().to_string(),
            post: post.to_string(),
            author: author.to_string(),
            parent,
            approved: true,
            likes: Vec::new(),
            created_at: now,
            modified_at: now,
        })
    }

    pub fn validate_content(content: &str) -> Result<(), CommentError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(CommentError::EmptyContent);
        }
        if trimmed.chars().count() > MAX_CONTENT_LENGTH {
            return Err(CommentError::ContentTooLong);
        }
        Ok(())
    }

    pub fn is_reply(&self) -> bool {
        self.parent.is_some()
    }

    /// The only moderation transition is off -> on. Returns false when the
    /// comment was already approved and nothing changed.
    pub fn approve(&mut self) -> bool {
        if self.approved {
            return false;
        }
        self.approved = true;
        true
    }

    /// A reply can only attach to a top-level comment.
    pub fn validate_parent(parent: &Comment) -> Result<(), CommentError> {
        if parent.is_reply() {
            return Err(CommentError::NestedReply);
        }
        Ok(())
    }

    /// Prepends the user to the like list. Per-user uniqueness is the
    /// invariant; two different users liking concurrently both succeed.
    pub fn like(&mut self, user_id: &str) -> Result<(), CommentError> {
        if self.likes.iter().any(|id| id == user_id) {
            return Err(CommentError::AlreadyLiked);
        }
        self.likes.insert(0, user_id.to_string());
        Ok(())
    }

    pub fn unlike(&mut self, user_id: &str) -> Result<(), CommentError> {
        if !self.likes.iter().any(|id| id == user_id) {
            return Err(CommentError::NotLiked);
        }
        self.likes.retain(|id| id != user_id);
        Ok(())
    }
}

/// Display-safe author subset attached to every returned comment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommentAuthor {
    pub uuid: String,
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Serialize)]
pub struct CommentView {
    pub uuid: String,
    pub content: String,
    pub post: String,
    pub parent: Option<String>,
    pub approved: bool,
    pub likes: Vec<String>,
    pub created_at: i64,
    pub modified_at: i64,
    pub author: CommentAuthor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<CommentView>>,
}

impl CommentView {
    pub fn from_comment(comment: Comment, author: CommentAuthor) -> Self {
        Self {
            uuid: comment.uuid,
            content: comment.content,
            post: comment.post,
            parent: comment.parent,
            approved: comment.approved,
            likes: comment.likes,
            created_at: comment.created_at,
            modified_at: comment.modified_at,
            author,
            replies: None,
        }
    }
}

/// Assembles the thread for one post: approved top-level comments newest
/// first, each carrying its approved replies oldest first. Unapproved
/// comments never appear, whichever list they arrive in.
pub fn build_thread(
    top_level: Vec<Comment>,
    replies: Vec<Comment>,
    authors: &HashMap<String, CommentAuthor>,
) -> Vec<CommentView> {
    let mut by_parent: HashMap<String, Vec<Comment>> = HashMap::new();
    for reply in replies {
        if !reply.approved {
            continue;
        }
        if let Some(parent) = reply.parent.clone() {
            by_parent.entry(parent).or_default().push(reply);
        }
    }

    let mut top: Vec<Comment> = top_level
        .into_iter()
        .filter(|c| c.approved && c.parent.is_none())
        .collect();
    top.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    top.into_iter()
        .map(|comment| {
            let mut children = by_parent.remove(&comment.uuid).unwrap_or_default();
            children.sort_by(|a, b| a.created_at.cmp(&b.created_at));

            let children = children
                .into_iter()
                .map(|reply| {
                    let author = authors.get(&reply.author).cloned().unwrap_or_default();
                    CommentView::from_comment(reply, author)
                })
                .collect();

            let author = authors.get(&comment.author).cloned().unwrap_or_default();
            let mut view = CommentView::from_comment(comment, author);
            view.replies = Some(children);
            view
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(uuid: &str, parent: Option<&str>, created_at: i64) -> Comment {
        Comment {
            uuid: uuid.to_string(),
            content: "hello".to_string(),
            post: "p-1".to_string(),
            author: "u-1".to_string(),
            parent: parent.map(str::to_string),
            approved: true,
            likes: Vec::new(),
            created_at,
            modified_at: created_at,
        }
    }

    #[test]
    fn new_comment_is_approved_with_no_likes() {
        let c = Comment::new("c-1".to_string(), "first!", "p-1", "u-1", None, 10).unwrap();
        assert!(c.approved);
        assert!(c.likes.is_empty());
        assert_eq!(c.created_at, 10);
        assert_eq!(c.modified_at, 10);
    }

    #[test]
    fn content_validation_bounds() {
        assert_eq!(
            Comment::validate_content(""),
            Err(CommentError::EmptyContent)
        );
        assert_eq!(
            Comment::validate_content("   \n\t"),
            Err(CommentError::EmptyContent)
        );
        assert!(Comment::validate_content(&"x".repeat(MAX_CONTENT_LENGTH)).is_ok());
        assert_eq!(
            Comment::validate_content(&"x".repeat(MAX_CONTENT_LENGTH + 1)),
            Err(CommentError::ContentTooLong)
        );
    }

    #[test]
    fn approving_twice_changes_nothing_the_second_time() {
        let mut c = comment("c-1", None, 1);
        c.approved = false;

        assert!(c.approve());
        assert!(c.approved);

        let snapshot = c.clone();
        assert!(!c.approve());
        assert_eq!(c.approved, snapshot.approved);
        assert_eq!(c.modified_at, snapshot.modified_at);
    }

    #[test]
    fn a_reply_cannot_serve_as_a_parent() {
        let top = comment("c-1", None, 1);
        assert!(Comment::validate_parent(&top).is_ok());

        let reply = comment("r-1", Some("c-1"), 2);
        assert_eq!(
            Comment::validate_parent(&reply),
            Err(CommentError::NestedReply)
        );
    }

    #[test]
    fn second_like_by_same_user_conflicts() {
        let mut c = comment("c-1", None, 1);
        c.like("u-1").unwrap();
        assert_eq!(c.like("u-1"), Err(CommentError::AlreadyLiked));
        assert_eq!(c.likes.len(), 1);
    }

    #[test]
    fn likes_are_most_recent_first() {
        let mut c = comment("c-1", None, 1);
        c.like("u-1").unwrap();
        c.like("u-2").unwrap();
        c.like("u-3").unwrap();
        assert_eq!(c.likes, vec!["u-3", "u-2", "u-1"]);
    }

    #[test]
    fn unlike_before_like_is_invalid() {
        let mut c = comment("c-1", None, 1);
        assert_eq!(c.unlike("u-1"), Err(CommentError::NotLiked));
        assert!(c.likes.is_empty());
    }

    #[test]
    fn unlike_removes_only_that_user() {
        let mut c = comment("c-1", None, 1);
        c.like("u-1").unwrap();
        c.like("u-2").unwrap();
        c.unlike("u-1").unwrap();
        assert_eq!(c.likes, vec!["u-2"]);
    }

    #[test]
    fn thread_orders_top_level_newest_first_and_replies_oldest_first() {
        let top = vec![
            comment("c-1", None, 100),
            comment("c-2", None, 300),
            comment("c-3", None, 200),
        ];
        let replies = vec![
            comment("r-2", Some("c-2"), 350),
            comment("r-1", Some("c-2"), 310),
        ];

        let thread = build_thread(top, replies, &HashMap::new());

        let top_ids: Vec<&str> = thread.iter().map(|c| c.uuid.as_str()).collect();
        assert_eq!(top_ids, vec!["c-2", "c-3", "c-1"]);

        let c2_replies = thread[0].replies.as_ref().unwrap();
        let reply_ids: Vec<&str> = c2_replies.iter().map(|r| r.uuid.as_str()).collect();
        assert_eq!(reply_ids, vec!["r-1", "r-2"]);

        for window in thread.windows(2) {
            assert!(window[0].created_at >= window[1].created_at);
        }
        for window in c2_replies.windows(2) {
            assert!(window[0].created_at <= window[1].created_at);
        }
    }

    #[test]
    fn thread_never_contains_unapproved_comments() {
        let mut hidden_top = comment("c-hidden", None, 500);
        hidden_top.approved = false;
        let mut hidden_reply = comment("r-hidden", Some("c-1"), 150);
        hidden_reply.approved = false;

        let thread = build_thread(
            vec![comment("c-1", None, 100), hidden_top],
            vec![hidden_reply, comment("r-1", Some("c-1"), 120)],
            &HashMap::new(),
        );

        assert_eq!(thread.len(), 1);
        assert_eq!(thread[0].uuid, "c-1");
        let replies = thread[0].replies.as_ref().unwrap();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].uuid, "r-1");
    }

    #[test]
    fn thread_expands_authors() {
        let mut authors = HashMap::new();
        authors.insert(
            "u-1".to_string(),
            CommentAuthor {
                uuid: "u-1".to_string(),
                name: "Ada".to_string(),
                avatar: "http://a/ada.png".to_string(),
            },
        );

        let thread = build_thread(vec![comment("c-1", None, 1)], Vec::new(), &authors);
        assert_eq!(thread[0].author.name, "Ada");
        assert_eq!(thread[0].author.avatar, "http://a/ada.png");
    }

    #[test]
    fn single_comment_with_reply_scenario() {
        let c1 = comment("c-1", None, 100);
        let r1 = comment("r-1", Some("c-1"), 150);

        let thread = build_thread(vec![c1], vec![r1], &HashMap::new());
        assert_eq!(thread.len(), 1);
        assert_eq!(thread[0].uuid, "c-1");
        let replies = thread[0].replies.as_ref().unwrap();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].uuid, "r-1");
        assert_eq!(replies[0].parent.as_deref(), Some("c-1"));
    }
}
