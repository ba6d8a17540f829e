use crate::error::{PolicyError, PolicyResult};
use crate::model::{Lifecycle, Role, Ticket, TicketChanges, TicketPatch, TicketStatus};
use crate::workflow;

use super::{allow, deny};

/// Ticket creation: developers and admins only.
pub fn create(role: Option<Role>) -> PolicyResult<()> {
    match role {
        Some(Role::Admin) | Some(Role::Developer) => {
            allow("ticket.create");
            Ok(())
        }
        _ => Err(deny(PolicyError::forbidden(
            "You do not have permission to create tickets in this project",
        ))),
    }
}

/// Single-ticket read. Archived tickets are `NotFound` for every role; the
/// visibility rule is checked before membership so existence is not leaked.
pub fn read(role: Option<Role>, ticket: &Ticket) -> PolicyResult<()> {
    if ticket.lifecycle.is_archived() {
        return Err(deny(PolicyError::not_found("Ticket not found")));
    }
    if role.is_none() {
        return Err(deny(PolicyError::forbidden("Not a member of this project")));
    }
    Ok(())
}

/// Ticket update. Combines the role/ownership rules, the admin-only
/// reassignment gate, and the workflow check, and returns the computed
/// partial-update set. Denials never partially apply.
pub fn update(
    role: Option<Role>,
    acting_user: i64,
    ticket: &Ticket,
    changes: &TicketChanges,
) -> PolicyResult<TicketPatch> {
    if ticket.lifecycle.is_archived() {
        return Err(deny(PolicyError::not_found("Ticket not found")));
    }

    let role =
        role.ok_or_else(|| deny(PolicyError::forbidden("Not a member of this project")))?;

    match role {
        Role::Viewer => {
            return Err(deny(PolicyError::forbidden("Viewers cannot edit tickets")));
        }
        Role::Developer if ticket.assigned_to != Some(acting_user) => {
            return Err(deny(PolicyError::forbidden(
                "Not authorized to update this ticket",
            )));
        }
        _ => {}
    }

    // Reassignment is admin-only, even for the current assignee
    if let Some(requested) = changes.assigned_to {
        if requested != ticket.assigned_to && role != Role::Admin {
            return Err(deny(PolicyError::forbidden(
                "Only project admins can reassign tickets",
            )));
        }
    }

    // Equal status is a no-op; only a real change consults the workflow table
    let status = match changes.status {
        Some(requested) if requested != ticket.status => {
            if !workflow::is_valid_transition(ticket.status, requested) {
                return Err(deny(PolicyError::invalid_transition(
                    ticket.status,
                    requested,
                )));
            }
            Some(requested)
        }
        _ => None,
    };

    allow("ticket.update");
    Ok(TicketPatch {
        title: changes.title.clone(),
        description: changes.description.clone(),
        kind: changes.kind,
        status,
        priority: changes.priority,
        position: changes.position,
        assigned_to: changes.assigned_to,
    })
}

/// Soft delete: admins only. Sets the lifecycle tag and never removes the
/// row. Archiving an already-archived ticket is a no-op, not an error.
pub fn archive(role: Option<Role>, ticket: &Ticket) -> PolicyResult<Ticket> {
    if role != Some(Role::Admin) {
        return Err(deny(PolicyError::forbidden(
            "Only project admins can archive tickets",
        )));
    }
    if ticket.lifecycle.is_archived() {
        return Ok(ticket.clone());
    }

    allow("ticket.archive");
    let mut archived = ticket.clone();
    archived.lifecycle = Lifecycle::Archived;
    Ok(archived)
}

/// Kanban move: a status + board-position update routed through `update`, so
/// the same role, assignment, and workflow rules apply. Moving within the
/// current column is a position-only change.
pub fn move_ticket(
    role: Option<Role>,
    acting_user: i64,
    ticket: &Ticket,
    new_status: TicketStatus,
    new_position: i32,
) -> PolicyResult<TicketPatch> {
    let changes = TicketChanges {
        status: Some(new_status),
        position: Some(new_position),
        ..Default::default()
    };
    update(role, acting_user, ticket, &changes)
}
