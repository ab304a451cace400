pub mod roles;

pub use roles::{RoleGuard, RoleGuardError};
