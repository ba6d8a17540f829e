use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Lifecycle;

/// Workflow status. The set is fixed and closed; values outside it are
/// unrepresentable, and string parsing rejects anything unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Todo,
    InProgress,
    Done,
}

impl TicketStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Todo => "todo",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Done => "done",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TicketStatus::Todo),
            "in_progress" => Ok(TicketStatus::InProgress),
            "done" => Ok(TicketStatus::Done),
            other => Err(format!("Unknown ticket status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketKind {
    Bug,
    Task,
    Feature,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Ticket snapshot. Status and assignment are mutated only through the
/// engine's authorized paths; tickets are never hard-deleted, only archived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: TicketKind,
    pub status: TicketStatus,
    pub priority: Priority,
    pub position: i32,
    pub assigned_to: Option<i64>,
    pub lifecycle: Lifecycle,
}

/// Requested changes for a ticket update. Absent fields are untouched.
///
/// `assigned_to` distinguishes "absent" (`None`) from "explicitly null"
/// (`Some(None)`), so an admin can unassign a ticket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TicketKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub assigned_to: Option<Option<i64>>,
}

// Maps a present-but-null field to Some(None) instead of None
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

/// The computed partial-update set returned by an allowed ticket update.
/// A requested status equal to the current one is dropped as a no-op, so a
/// patch only ever carries real changes for the workflow-checked field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TicketPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<TicketKind>,
    pub status: Option<TicketStatus>,
    pub priority: Option<Priority>,
    pub position: Option<i32>,
    pub assigned_to: Option<Option<i64>>,
}

impl TicketPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.kind.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.position.is_none()
            && self.assigned_to.is_none()
    }

    /// Apply the authorized patch to a snapshot, returning the updated ticket.
    pub fn apply_to(&self, ticket: &Ticket) -> Ticket {
        let mut next = ticket.clone();
        if let Some(title) = &self.title {
            next.title = title.clone();
        }
        if let Some(description) = &self.description {
            next.description = Some(description.clone());
        }
        if let Some(kind) = self.kind {
            next.kind = kind;
        }
        if let Some(status) = self.status {
            next.status = status;
        }
        if let Some(priority) = self.priority {
            next.priority = priority;
        }
        if let Some(position) = self.position {
            next.position = position;
        }
        if let Some(assigned_to) = self.assigned_to {
            next.assigned_to = assigned_to;
        }
        next
    }
}
