use crate::error::{PolicyError, PolicyResult};
use crate::model::{ProjectMember, Role};

use super::{allow, deny};

/// Add a member to a project: admins only. A duplicate (project, user) pair is
/// a `Conflict`, never a silent upsert. Returns the membership row to insert.
pub fn add_member(
    acting_role: Option<Role>,
    members: &[ProjectMember],
    project_id: i64,
    user_id: i64,
    role: Role,
) -> PolicyResult<ProjectMember> {
    if acting_role != Some(Role::Admin) {
        return Err(deny(PolicyError::forbidden(
            "Only project admins can manage members",
        )));
    }

    let duplicate = members
        .iter()
        .any(|m| m.project_id == project_id && m.user_id == user_id);
    if duplicate {
        return Err(deny(PolicyError::conflict("User already in project")));
    }

    allow("membership.add");
    Ok(ProjectMember {
        project_id,
        user_id,
        role,
    })
}

/// Listing members requires membership at any role.
pub fn list_members(acting_role: Option<Role>) -> PolicyResult<()> {
    if acting_role.is_none() {
        return Err(deny(PolicyError::forbidden("Not a member of this project")));
    }
    Ok(())
}
