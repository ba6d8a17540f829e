use crate::error::{PolicyError, PolicyResult};
use crate::model::{Comment, Lifecycle, Role};

use super::{allow, deny};

/// Fixed placeholder written over archived comment content. The original text
/// is not recoverable through the read path afterwards.
pub const COMMENT_TOMBSTONE: &str = "[deleted]";

/// Comment creation: any project member, including viewers. Intentionally
/// more permissive than ticket edits.
pub fn create(role: Option<Role>) -> PolicyResult<()> {
    if role.is_none() {
        return Err(deny(PolicyError::forbidden("Not a member of this project")));
    }
    allow("comment.create");
    Ok(())
}

/// Soft delete a comment, replacing its content with the tombstone.
///
/// Permitted for the author or the literal project owner. A project admin who
/// is neither is denied; the owner_id-only rule is the documented behavior.
/// Archiving an already-archived comment is a no-op.
pub fn archive(
    acting_user: i64,
    comment: &Comment,
    project_owner_id: i64,
) -> PolicyResult<Comment> {
    if acting_user != comment.user_id && acting_user != project_owner_id {
        return Err(deny(PolicyError::forbidden(
            "Not authorized to delete this comment",
        )));
    }
    if comment.lifecycle.is_archived() {
        return Ok(comment.clone());
    }

    allow("comment.archive");
    let mut archived = comment.clone();
    archived.lifecycle = Lifecycle::Archived;
    archived.content = COMMENT_TOMBSTONE.to_string();
    Ok(archived)
}
