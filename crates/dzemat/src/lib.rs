//! Facade crate for DžematApp features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement
//! business logic.
//!
//! ## Usage
//! - Add `dzemat` with the desired feature flags (`server`).
//! - Call `dzemat::init` (server) to register feature slices; extend as new
//!   slices appear.

pub use dzemat_domain as domain;
#[cfg(feature = "server")]
use dzemat_domain::config::ApiConfig;
pub use dzemat_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use dzemat_kernel::server::router::system_router;
        pub use dzemat_subscription::subscription_router;
    }

    pub use dzemat_subscription::{ModuleGateError, require_module};
    pub use dzemat_tenancy::{TenantContext, TenantRejection};
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use dzemat_subscription as subscription;
    pub use dzemat_tenancy as tenancy;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "tenancy",
        "subscription",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
#[cfg(feature = "server")]
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Tenancy
    slices.push(features::tenancy::init(config)?);

    // Subscription & capability resolution
    slices.push(features::subscription::init()?);

    Ok(slices)
}
