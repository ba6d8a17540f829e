// Entity snapshots consumed by the policy engine.
// Persistence is external: the engine treats these as immutable reads taken in
// the same transaction as the mutation they authorize.

pub mod attachment;
pub mod comment;
pub mod lifecycle;
pub mod member;
pub mod project;
pub mod ticket;
pub mod user;

pub use attachment::Attachment;
pub use comment::Comment;
pub use lifecycle::Lifecycle;
pub use member::{ProjectMember, Role};
pub use project::Project;
pub use ticket::{Priority, Ticket, TicketChanges, TicketKind, TicketPatch, TicketStatus};
pub use user::User;
