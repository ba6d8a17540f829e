use serde::{Deserialize, Serialize};

/// Account identity as seen by the engine.
///
/// The global `role` is carried for identity purposes only; project
/// permissions always come from `ProjectMember` rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: String,
}
