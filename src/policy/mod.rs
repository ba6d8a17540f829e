// Authorization policies, one module per entity.
//
// Every operation takes the resolved role plus the relevant entity fields and
// returns a decision value; callers translate denials into their own transport
// representation. Nothing here performs I/O or holds state.

pub mod attachment;
pub mod comment;
pub mod membership;
pub mod project;
pub mod role;
pub mod ticket;

pub use role::RoleResolver;

use crate::config;
use crate::error::PolicyError;

/// All denials funnel through here so the audit trail stays uniform.
pub(crate) fn deny(err: PolicyError) -> PolicyError {
    if config::config().policy.log_denials {
        tracing::warn!("Policy denial [{}]: {}", err.error_code(), err);
    }
    err
}

pub(crate) fn allow(operation: &str) {
    if config::config().policy.log_decisions {
        tracing::debug!("Policy allow: {}", operation);
    }
}
