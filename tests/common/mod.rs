// Shared fixtures for the integration tests. Not every test binary uses
// every helper.
#![allow(dead_code)]

use chrono::Utc;

use tracker_policy::model::{
    Comment, Lifecycle, Priority, Project, ProjectMember, Role, Ticket, TicketKind, TicketStatus,
};
use tracker_policy::policy::{membership, project, RoleResolver};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// A project with its bootstrap admin membership, plus builders for members,
/// tickets, and comments. Enrollment goes through the membership policy.
pub struct ProjectFixture {
    pub project: Project,
    pub members: Vec<ProjectMember>,
    next_id: i64,
}

impl ProjectFixture {
    pub fn new(project_id: i64, owner_id: i64) -> Self {
        let bootstrap = project::create(project_id, owner_id);
        Self {
            project: Project {
                id: project_id,
                name: format!("project-{}", project_id),
                description: None,
                owner_id,
            },
            members: vec![bootstrap],
            next_id: 1,
        }
    }

    pub fn enroll(&mut self, user_id: i64, role: Role) -> ProjectMember {
        let acting = self.role_of(self.project.owner_id);
        let member = membership::add_member(acting, &self.members, self.project.id, user_id, role)
            .expect("fixture enrollment should be allowed");
        self.members.push(member.clone());
        member
    }

    pub fn resolver(&self) -> RoleResolver<'_> {
        RoleResolver::new(&self.members)
    }

    pub fn role_of(&self, user_id: i64) -> Option<Role> {
        self.resolver().resolve(self.project.id, user_id)
    }

    pub fn ticket(&mut self, assigned_to: Option<i64>) -> Ticket {
        let id = self.next_id;
        self.next_id += 1;
        Ticket {
            id,
            project_id: self.project.id,
            title: format!("Ticket {}", id),
            description: None,
            kind: TicketKind::Task,
            status: TicketStatus::Todo,
            priority: Priority::Medium,
            position: 0,
            assigned_to,
            lifecycle: Lifecycle::Active,
        }
    }

    pub fn comment(&mut self, author: i64, ticket: &Ticket) -> Comment {
        let id = self.next_id;
        self.next_id += 1;
        Comment {
            id,
            ticket_id: ticket.id,
            user_id: author,
            content: format!("Comment {}", id),
            created_at: Utc::now(),
            lifecycle: Lifecycle::Active,
        }
    }
}
