use crate::error::{PolicyError, PolicyResult};
use crate::model::{Project, ProjectMember, Role};

use super::{allow, deny};

/// Project creation bootstrap. Any authenticated user may create a project;
/// the creating user becomes the owner and is auto-enrolled as an `admin`
/// member, so every project has at least one admin from creation onward.
/// Returns the bootstrap membership row to insert alongside the project.
pub fn create(project_id: i64, owner_id: i64) -> ProjectMember {
    allow("project.create");
    ProjectMember {
        project_id,
        user_id: owner_id,
        role: Role::Admin,
    }
}

/// Reading a project requires ownership or membership.
pub fn read(role: Option<Role>, project: &Project, acting_user: i64) -> PolicyResult<()> {
    if acting_user == project.owner_id || role.is_some() {
        return Ok(());
    }
    Err(deny(PolicyError::forbidden("Not a member of this project")))
}
