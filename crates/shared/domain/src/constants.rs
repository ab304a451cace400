//! Shared string constants: entity names, router tags, and role slugs.

/// Tenant entity name.
pub const TENANT: &str = "tenant";
/// Subscription plan entity name.
pub const PLAN: &str = "plan";

/// Tenant used when no explicit tenant context can be resolved.
pub const DEFAULT_TENANT_ID: &str = "default-tenant-demo";

/// Administrator role slug.
pub const ROLE_ADMIN: &str = "admin";
/// Executive board member role slug.
pub const ROLE_BOARD: &str = "clan_io";

/// OpenAPI tag for system endpoints.
pub const SYSTEM_TAG: &str = "System";
/// OpenAPI tag for subscription endpoints.
pub const SUBSCRIPTION_TAG: &str = "Subscription";
/// OpenAPI tag for tenant endpoints.
pub const TENANT_TAG: &str = "Tenant";
