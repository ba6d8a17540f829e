use crate::error::{PolicyError, PolicyResult};
use crate::model::{ProjectMember, Role};

use super::deny;

/// Resolves a user's effective role within a project from membership rows
/// read in the caller's transaction.
pub struct RoleResolver<'a> {
    members: &'a [ProjectMember],
}

impl<'a> RoleResolver<'a> {
    pub fn new(members: &'a [ProjectMember]) -> Self {
        Self { members }
    }

    /// The membership role, or `None` when the user is not a member.
    /// Non-membership is always "no access", never a defaulted role.
    pub fn resolve(&self, project_id: i64, user_id: i64) -> Option<Role> {
        self.members
            .iter()
            .find(|m| m.project_id == project_id && m.user_id == user_id)
            .map(|m| m.role)
    }

    /// Membership gate shared by the policy operations.
    pub fn require(&self, project_id: i64, user_id: i64) -> PolicyResult<Role> {
        self.resolve(project_id, user_id)
            .ok_or_else(|| deny(PolicyError::forbidden("Not a member of this project")))
    }

    /// The caller's own role. `NotFound` rather than `Forbidden`: the caller
    /// is asking about themselves, not about another entity.
    pub fn own_role(&self, project_id: i64, user_id: i64) -> PolicyResult<Role> {
        self.resolve(project_id, user_id)
            .ok_or_else(|| deny(PolicyError::not_found("Not a member of this project")))
    }
}
