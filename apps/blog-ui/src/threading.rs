//! Comment Threading
//!
//! Groups a flat comment list into top-level comments with one level of
//! replies, preserving server order.

use crate::models::Comment;

#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    pub comment: Comment,
    pub replies: Vec<Comment>,
}

/// Build threads from the flat list the backend returns.
/// Replies whose parent is missing from the list are shown top-level
/// rather than dropped.
pub fn thread_comments(comments: &[Comment]) -> Vec<CommentThread> {
    let mut threads: Vec<CommentThread> = comments
        .iter()
        .filter(|c| c.parent_comment.is_none())
        .map(|c| CommentThread {
            comment: c.clone(),
            replies: Vec::new(),
        })
        .collect();

    for reply in comments.iter().filter(|c| c.parent_comment.is_some()) {
        let parent_id = reply.parent_comment.as_deref().unwrap_or_default();
        match threads.iter_mut().find(|t| t.comment.id == parent_id) {
            Some(thread) => thread.replies.push(reply.clone()),
            None => threads.push(CommentThread {
                comment: reply.clone(),
                replies: Vec::new(),
            }),
        }
    }

    threads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use chrono::Utc;

    fn make_user(id: &str) -> User {
        User {
            id: id.to_string(),
            username: format!("user-{}", id),
            email: format!("{}@example.com", id),
            bio: None,
            avatar: None,
            created_at: Utc::now(),
        }
    }

    fn make_comment(id: &str, parent: Option<&str>) -> Comment {
        Comment {
            id: id.to_string(),
            post: "p1".to_string(),
            content: format!("Comment {}", id),
            author: make_user("u1"),
            parent_comment: parent.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_replies_group_under_parent() {
        let comments = vec![
            make_comment("c1", None),
            make_comment("c2", None),
            make_comment("c3", Some("c1")),
            make_comment("c4", Some("c1")),
            make_comment("c5", Some("c2")),
        ];

        let threads = thread_comments(&comments);

        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].comment.id, "c1");
        assert_eq!(threads[0].replies.len(), 2);
        assert_eq!(threads[0].replies[0].id, "c3");
        assert_eq!(threads[1].comment.id, "c2");
        assert_eq!(threads[1].replies[0].id, "c5");
    }

    #[test]
    fn test_nesting_stays_one_level() {
        // c3 replies to c2, which is itself a reply: c2 is not a
        // top-level thread, so c3 is promoted to its own thread rather
        // than forming a third level
        let comments = vec![
            make_comment("c1", None),
            make_comment("c2", Some("c1")),
            make_comment("c3", Some("c2")),
        ];

        let threads = thread_comments(&comments);

        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].replies.len(), 1);
        // c2 is not top-level, so c3 falls back to its own thread
        assert_eq!(threads[1].comment.id, "c3");
        assert!(threads[1].replies.is_empty());
    }

    #[test]
    fn test_orphan_reply_is_kept() {
        let comments = vec![make_comment("c1", Some("gone"))];
        let threads = thread_comments(&comments);
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].comment.id, "c1");
    }
}
