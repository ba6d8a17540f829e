//! Ticket workflow state machine.
//!
//! The transition graph is fixed: there are no per-project workflow
//! definitions. Reflexive transitions are deliberately absent from the table;
//! callers treat `requested == current` as a no-op before consulting it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::model::TicketStatus;

// Process-wide read-only state, initialized once at startup
static ALLOWED_TRANSITIONS: Lazy<HashMap<TicketStatus, Vec<TicketStatus>>> = Lazy::new(|| {
    HashMap::from([
        (TicketStatus::Todo, vec![TicketStatus::InProgress]),
        (TicketStatus::InProgress, vec![TicketStatus::Done]),
        (TicketStatus::Done, vec![TicketStatus::InProgress]),
    ])
});

/// True iff `requested` appears in `current`'s outgoing set.
pub fn is_valid_transition(current: TicketStatus, requested: TicketStatus) -> bool {
    ALLOWED_TRANSITIONS
        .get(&current)
        .map(|next| next.contains(&requested))
        .unwrap_or(false)
}

/// The outgoing set for a status, for diagnostics.
pub fn allowed_next(current: TicketStatus) -> &'static [TicketStatus] {
    ALLOWED_TRANSITIONS
        .get(&current)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use TicketStatus::*;

    #[test]
    fn forward_path_is_allowed() {
        assert!(is_valid_transition(Todo, InProgress));
        assert!(is_valid_transition(InProgress, Done));
    }

    #[test]
    fn done_can_be_reopened_to_in_progress_only() {
        assert!(is_valid_transition(Done, InProgress));
        assert!(!is_valid_transition(Done, Todo));
    }

    #[test]
    fn skipping_in_progress_is_rejected() {
        assert!(!is_valid_transition(Todo, Done));
    }

    #[test]
    fn no_reflexive_transitions_in_the_table() {
        for status in [Todo, InProgress, Done] {
            assert!(!is_valid_transition(status, status));
        }
    }

    #[test]
    fn every_status_has_exactly_one_outgoing_edge() {
        for status in [Todo, InProgress, Done] {
            assert_eq!(allowed_next(status).len(), 1);
        }
    }
}
