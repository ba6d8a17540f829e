use serde::{Deserialize, Serialize};

/// Soft-delete state shared by tickets and comments.
///
/// The transition is one-way: an entity moves `Active -> Archived` and nothing
/// moves it back. Modeling this as a tag rather than a boolean keeps the
/// monotonic invariant visible at the type level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    #[default]
    Active,
    Archived,
}

impl Lifecycle {
    pub fn is_active(self) -> bool {
        matches!(self, Lifecycle::Active)
    }

    pub fn is_archived(self) -> bool {
        matches!(self, Lifecycle::Archived)
    }
}
