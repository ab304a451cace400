//! Tenancy feature slice.
//!
//! Owns the tenant directory and, in server mode, the per-request
//! [`TenantContext`] extractor that every tenant-scoped handler leans on.

mod directory;
mod error;
#[cfg(feature = "server")]
mod server;

pub use directory::{NewTenant, SubscriptionStatus, Tenant, TenantDirectory};
pub use error::TenancyError;
#[cfg(feature = "server")]
pub use server::{TenantContext, TenantRejection};

use dzemat_domain::config::ApiConfig;
use dzemat_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;

/// Tenancy feature state.
#[derive(Debug, Clone)]
pub struct Tenancy {
    inner: Arc<TenancyInner>,
}

#[derive(Debug)]
pub struct TenancyInner {
    pub directory: TenantDirectory,
}

impl Tenancy {
    #[must_use]
    pub fn new(inner: TenancyInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Tenancy {
    type Target = TenancyInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Tenancy {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the tenancy feature.
///
/// Seeds the configured development tenant so a fresh instance is usable out
/// of the box.
///
/// # Errors
/// Returns an error if the seed tenant cannot be registered.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, TenancyError> {
    let directory = TenantDirectory::default();

    directory.register_with_id(
        config.tenancy.default_tenant.clone(),
        NewTenant::builder().name("Demo džemat").slug("demo").build(),
    )?;

    tracing::info!(tenants = directory.len(), "Tenancy slice initialized");

    let slice = Tenancy::new(TenancyInner { directory });
    Ok(InitializedSlice::new(slice))
}
