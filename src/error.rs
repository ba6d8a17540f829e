// Policy engine decision errors
use thiserror::Error;

use crate::model::TicketStatus;

/// Typed denial returned by every policy operation.
///
/// These are decision kinds, not transport codes: the calling layer maps them
/// to its own representation (HTTP status, gRPC code, ...) via `error_code()`.
/// Every denial is deterministic and side-effect-free; a rejected call never
/// partially applies a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Referenced project/ticket/comment does not exist, or the caller is
    /// querying their own non-existent membership.
    #[error("{0}")]
    NotFound(String),

    /// Caller is identified and the entity exists, but the role/ownership
    /// rule denies the action.
    #[error("{0}")]
    Forbidden(String),

    /// Action would violate a uniqueness invariant (duplicate membership).
    #[error("{0}")]
    Conflict(String),

    /// Requested ticket status change is not in the workflow table.
    #[error("Invalid status transition: {current} -> {requested}")]
    InvalidTransition {
        current: TicketStatus,
        requested: TicketStatus,
    },
}

pub type PolicyResult<T> = Result<T, PolicyError>;

impl PolicyError {
    pub fn not_found(message: impl Into<String>) -> Self {
        PolicyError::NotFound(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        PolicyError::Forbidden(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        PolicyError::Conflict(message.into())
    }

    pub fn invalid_transition(current: TicketStatus, requested: TicketStatus) -> Self {
        PolicyError::InvalidTransition { current, requested }
    }

    /// Stable code for client/transport handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PolicyError::NotFound(_) => "NOT_FOUND",
            PolicyError::Forbidden(_) => "FORBIDDEN",
            PolicyError::Conflict(_) => "CONFLICT",
            PolicyError::InvalidTransition { .. } => "INVALID_TRANSITION",
        }
    }
}
