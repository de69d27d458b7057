//! Comment Entity
//!
//! A comment under an event. Ownership is independent of the parent
//! event: the comment's own author (or an admin) may delete it.

use auth::Principal;
use auth::UserId;
use chrono::{DateTime, Utc};

use crate::domain::value_object::{comment_id::CommentId, event_id::EventId};

/// Maximum comment length in characters
pub const COMMENT_MAX_LENGTH: usize = 500;

/// Comment entity
#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub event_id: EventId,
    /// Author identifier (authoritative for ownership checks)
    pub author_id: Option<UserId>,
    /// Author display name (denormalized)
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment authored by the given principal
    pub fn new(event_id: EventId, author: &Principal, content: String) -> Self {
        Self {
            comment_id: CommentId::new(),
            event_id,
            author_id: Some(author.user_id),
            author_name: author.username.original().to_string(),
            content,
            created_at: Utc::now(),
        }
    }

    /// Ownership gate: may this principal delete the comment?
    ///
    /// True iff the principal is the comment's author or an administrator.
    /// Legacy rows without a recorded author deny everyone but admins.
    pub fn deletable_by(&self, principal: &Principal) -> bool {
        if principal.role.is_admin() {
            return true;
        }

        match self.author_id {
            Some(author_id) => author_id == principal.user_id,
            None => false,
        }
    }

    /// Is this comment authored by the given (optional) principal?
    pub fn authored_by(&self, principal: Option<&Principal>) -> bool {
        match (self.author_id, principal) {
            (Some(author_id), Some(p)) => author_id == p.user_id,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::{UserRole, Username};

    fn principal(role: UserRole) -> Principal {
        Principal {
            user_id: UserId::new(),
            username: Username::new("bob").unwrap(),
            role,
        }
    }

    #[test]
    fn test_new_binds_author() {
        let author = principal(UserRole::User);
        let comment = Comment::new(EventId::new(), &author, "nice".to_string());

        assert_eq!(comment.author_id, Some(author.user_id));
        assert_eq!(comment.author_name, "bob");
    }

    #[test]
    fn test_author_may_delete() {
        let author = principal(UserRole::User);
        let comment = Comment::new(EventId::new(), &author, "nice".to_string());

        assert!(comment.deletable_by(&author));
    }

    #[test]
    fn test_other_user_may_not_delete() {
        let author = principal(UserRole::User);
        let comment = Comment::new(EventId::new(), &author, "nice".to_string());

        // Even the event's staff owner is not the comment's owner
        let other = principal(UserRole::Staff);
        assert!(!comment.deletable_by(&other));
    }

    #[test]
    fn test_admin_may_delete() {
        let author = principal(UserRole::User);
        let comment = Comment::new(EventId::new(), &author, "nice".to_string());

        assert!(comment.deletable_by(&principal(UserRole::Admin)));
    }

    #[test]
    fn test_legacy_comment_without_author_fails_closed() {
        let author = principal(UserRole::User);
        let mut comment = Comment::new(EventId::new(), &author, "nice".to_string());
        comment.author_id = None;

        assert!(!comment.deletable_by(&author));
        assert!(comment.deletable_by(&principal(UserRole::Admin)));
    }

    #[test]
    fn test_authored_by() {
        let author = principal(UserRole::User);
        let comment = Comment::new(EventId::new(), &author, "nice".to_string());

        assert!(comment.authored_by(Some(&author)));
        assert!(!comment.authored_by(Some(&principal(UserRole::User))));
        assert!(!comment.authored_by(None));
    }
}
