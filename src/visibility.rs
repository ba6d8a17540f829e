//! Soft-delete visibility, applied before any other filter on every
//! enumeration path. The rule is identical for every role: there is no
//! "admin can see archived" escape hatch.

use serde::Serialize;

use crate::model::{Comment, Lifecycle, Ticket, TicketStatus};

pub trait Visible {
    fn lifecycle(&self) -> Lifecycle;

    fn is_visible(&self) -> bool {
        self.lifecycle().is_active()
    }
}

impl Visible for Ticket {
    fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }
}

impl Visible for Comment {
    fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }
}

/// Drop archived entities from an enumeration, preserving input order.
pub fn filter_visible<'a, T, I>(items: I) -> impl Iterator<Item = &'a T>
where
    T: Visible + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().filter(|item| item.is_visible())
}

/// Kanban columns for a project board.
#[derive(Debug, Clone, Serialize)]
pub struct KanbanBoard {
    pub todo: Vec<Ticket>,
    pub in_progress: Vec<Ticket>,
    pub done: Vec<Ticket>,
}

/// Group visible tickets into kanban columns.
pub fn kanban_board(tickets: &[Ticket]) -> KanbanBoard {
    let mut board = KanbanBoard {
        todo: Vec::new(),
        in_progress: Vec::new(),
        done: Vec::new(),
    };

    for ticket in filter_visible(tickets) {
        let column = match ticket.status {
            TicketStatus::Todo => &mut board.todo,
            TicketStatus::InProgress => &mut board.in_progress,
            TicketStatus::Done => &mut board.done,
        };
        column.push(ticket.clone());
    }

    board
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    pub status: TicketStatus,
    pub tickets: usize,
}

/// Per-status counts for a project dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSummary {
    pub project_id: i64,
    pub summary: Vec<StatusCount>,
}

/// Count visible tickets per status for a project dashboard.
pub fn status_summary(project_id: i64, tickets: &[Ticket]) -> StatusSummary {
    let summary = [
        TicketStatus::Todo,
        TicketStatus::InProgress,
        TicketStatus::Done,
    ]
    .into_iter()
    .map(|status| StatusCount {
        status,
        tickets: filter_visible(tickets)
            .filter(|t| t.project_id == project_id && t.status == status)
            .count(),
    })
    .collect();

    StatusSummary {
        project_id,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use crate::policy::ticket;
    use crate::testing::ProjectFixture;

    const OWNER: i64 = 1;
    const DEV: i64 = 2;

    fn fixture() -> ProjectFixture {
        let mut fx = ProjectFixture::new(1, OWNER);
        fx.enroll(DEV, Role::Developer);
        fx
    }

    #[test]
    fn archived_tickets_never_appear_on_the_board() {
        let mut fx = fixture();
        let active = fx.ticket(Some(DEV));
        let doomed = fx.ticket(None);
        let archived = ticket::archive(fx.role_of(OWNER), &doomed).unwrap();

        let board = kanban_board(&[active.clone(), archived]);
        assert_eq!(board.todo.len(), 1);
        assert_eq!(board.todo[0].id, active.id);
        assert!(board.in_progress.is_empty());
        assert!(board.done.is_empty());
    }

    #[test]
    fn summary_counts_only_visible_tickets_in_the_project() {
        let mut fx = fixture();
        let mut in_progress = fx.ticket(Some(DEV));
        in_progress.status = TicketStatus::InProgress;
        let todo = fx.ticket(None);
        let doomed = fx.ticket(None);
        let archived = ticket::archive(fx.role_of(OWNER), &doomed).unwrap();

        let mut foreign = fx.ticket(None);
        foreign.project_id = 2;

        let summary = status_summary(1, &[in_progress, todo, archived, foreign]);
        assert_eq!(summary.project_id, 1);
        let counts: Vec<usize> = summary.summary.iter().map(|c| c.tickets).collect();
        assert_eq!(counts, vec![1, 1, 0]);
    }

    #[test]
    fn filter_visible_drops_archived_comments() {
        let mut fx = fixture();
        let t = fx.ticket(None);
        let kept = fx.comment(DEV, &t);
        let removed = crate::policy::comment::archive(DEV, &fx.comment(DEV, &t), OWNER).unwrap();

        let comments = vec![kept.clone(), removed];
        let visible: Vec<_> = filter_visible(&comments).collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, kept.id);
    }
}
