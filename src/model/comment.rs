use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Lifecycle;

/// Comment snapshot. Once archived, `content` holds the fixed tombstone and
/// the original text is not recoverable through the read path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub ticket_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub lifecycle: Lifecycle,
}
