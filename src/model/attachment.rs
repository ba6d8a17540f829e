use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attachment metadata. File contents live in external storage; the engine
/// only ever decides who may upload or list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: i64,
    pub ticket_id: i64,
    pub filename: String,
    pub uploaded_by: i64,
    pub uploaded_at: DateTime<Utc>,
}
