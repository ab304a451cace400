/// Tenancy error type.
#[derive(Debug, thiserror::Error)]
pub enum TenancyError {
    /// No tenant matches the requested identifier.
    #[error("Tenant not found: {id}")]
    NotFound { id: String },

    /// A tenant with the same id or slug is already registered.
    #[error("Tenant already registered: {id}")]
    Duplicate { id: String },

    /// The tenant exists but has been deactivated by the operator.
    #[error("Tenant not active: {id}")]
    Inactive { id: String },

    /// A request reached tenant-scoped code without any tenant context.
    #[error("Tenant context not found")]
    MissingContext,
}
