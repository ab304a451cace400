use dzemat_domain::modules::ModuleDefinition;
use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
pub enum RoleGuardError {
    #[error("Role check failed: {message}")]
    Forbidden { message: Cow<'static, str> },
}

/// Utilities for role-based visibility checks.
///
/// A module definition may carry `required_roles`; a tier that enables the
/// module is still restricted to users holding at least one of those roles.
/// Session handling itself lives outside this crate — callers pass the role
/// slugs they resolved for the current user.
#[derive(Debug)]
pub struct RoleGuard;

impl RoleGuard {
    /// Verifies that `held` satisfies `required`.
    ///
    /// An empty requirement always passes; otherwise at least one held role
    /// must appear in the required list.
    ///
    /// # Errors
    /// Returns an error naming the missing roles when none of the held roles
    /// match.
    pub fn check<R>(required: &[&str], held: &[R]) -> Result<(), RoleGuardError>
    where
        R: AsRef<str>,
    {
        if required.is_empty() {
            return Ok(());
        }

        if held.iter().any(|role| required.contains(&role.as_ref())) {
            return Ok(());
        }

        Err(RoleGuardError::Forbidden {
            message: format!("Requires one of: {}", required.join(", ")).into(),
        })
    }

    /// Convenience wrapper for a module's `required_roles`.
    ///
    /// # Errors
    /// Returns an error if the module restricts roles and none match.
    pub fn check_module<R>(definition: &ModuleDefinition, held: &[R]) -> Result<(), RoleGuardError>
    where
        R: AsRef<str>,
    {
        Self::check(definition.required_roles, held)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_check() {
        // No requirement
        assert!(RoleGuard::check(&[], &["member"]).is_ok());

        // Matching role
        assert!(RoleGuard::check(&["admin"], &["admin"]).is_ok());

        // One of several
        assert!(RoleGuard::check(&["admin", "clan_io"], &["clan_io"]).is_ok());

        // Missing role
        let err = RoleGuard::check(&["admin"], &["member"]);
        assert!(err.is_err());
    }
}
