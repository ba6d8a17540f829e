use serde::{Deserialize, Serialize};

/// Project snapshot. `owner_id` always references an existing user; the owner
/// is auto-enrolled as an `admin` member at creation, so every project has at
/// least one admin member from creation onward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: i64,
}
