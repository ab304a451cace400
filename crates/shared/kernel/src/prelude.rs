//! Ergonomic re-exports for consumers of the kernel.

pub use crate::config::load_config;
pub use crate::safe_nanoid;
pub use crate::security::{RoleGuard, RoleGuardError};
#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateBuilder, ApiStateError};
pub use dzemat_domain::config::ApiConfig;
pub use dzemat_domain::modules::{ModuleDefinition, ModuleId, ModuleSet};
pub use dzemat_domain::tiers::{AccessLevel, SubscriptionTier};
