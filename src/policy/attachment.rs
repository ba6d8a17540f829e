use crate::error::{PolicyError, PolicyResult};
use crate::model::{Attachment, Role, Ticket};

use super::{allow, deny};

/// Uploading an attachment requires a visible ticket and membership at any
/// role, aligned with comment creation. File storage itself is the caller's
/// concern.
pub fn upload(role: Option<Role>, ticket: &Ticket) -> PolicyResult<()> {
    if ticket.lifecycle.is_archived() {
        return Err(deny(PolicyError::not_found("Ticket not found")));
    }
    if role.is_none() {
        return Err(deny(PolicyError::forbidden("Not a member of this project")));
    }
    allow("attachment.upload");
    Ok(())
}

/// List a ticket's attachments: any member, visible ticket only.
pub fn list(
    role: Option<Role>,
    ticket: &Ticket,
    attachments: &[Attachment],
) -> PolicyResult<Vec<Attachment>> {
    if ticket.lifecycle.is_archived() {
        return Err(deny(PolicyError::not_found("Ticket not found")));
    }
    if role.is_none() {
        return Err(deny(PolicyError::forbidden("Not a member of this project")));
    }
    Ok(attachments
        .iter()
        .filter(|a| a.ticket_id == ticket.id)
        .cloned()
        .collect())
}
