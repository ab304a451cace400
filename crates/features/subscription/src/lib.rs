//! Subscription feature slice.
//!
//! Resolves what a tenant's subscription grants: the commercial plan, the
//! per-module access levels, and the authorization verdict the HTTP gate
//! enforces. Resolved subscription info is cached briefly so hot paths do
//! not rebuild the same response for every request.

mod error;
pub mod plans;
#[cfg(feature = "server")]
mod server;

pub use error::SubscriptionError;
pub use plans::{PlanDefinition, PLANS};
#[cfg(feature = "server")]
pub use server::{GateState, ModuleAccessInfo, ModuleGateError, require_module, subscription_router};

use chrono::{DateTime, Utc};
use dzemat_domain::modules::ModuleId;
use dzemat_domain::registry::{FeatureSlice, InitializedSlice};
use dzemat_domain::tiers::{AccessLevel, SubscriptionTier};
use dzemat_tenancy::Tenant;
use moka::sync::Cache;
use serde::Serialize;
use std::any::Any;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

/// How long resolved subscription info may be served stale.
const INFO_TTL: Duration = Duration::from_secs(60);
const INFO_CACHE_CAPACITY: u64 = 10_000;

/// A tenant's subscription, resolved for presentation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SubscriptionInfo {
    pub tenant_id: String,
    pub tenant_name: String,
    pub subscription_tier: String,
    pub subscription_status: String,
    pub plan: PlanInfo,
    pub trial_ends_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

/// Plan details as shown to clients, including the module sets the plan
/// unlocks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PlanInfo {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price_monthly: String,
    pub price_yearly: String,
    pub currency: String,
    pub enabled_modules: Vec<String>,
    pub read_only_modules: Vec<String>,
    pub max_users: Option<u32>,
    pub max_storage: Option<u32>,
}

impl PlanInfo {
    /// Builds the client-facing plan view for a tier.
    #[must_use]
    pub fn for_tier(tier: SubscriptionTier) -> Self {
        let plan = plans::plan(tier);
        Self {
            name: plan.name.to_owned(),
            slug: tier.to_string(),
            description: plan.description.to_owned(),
            price_monthly: plan.price_monthly.to_owned(),
            price_yearly: plan.price_yearly.to_owned(),
            currency: plan.currency.to_owned(),
            enabled_modules: tier.enabled_modules().ids().map(|m| m.to_string()).collect(),
            read_only_modules: tier.read_only_modules().ids().map(|m| m.to_string()).collect(),
            max_users: plan.max_users,
            max_storage: plan.max_storage_mb,
        }
    }
}

impl SubscriptionInfo {
    fn for_tenant(tenant: &Tenant) -> Self {
        Self {
            tenant_id: tenant.id.clone(),
            tenant_name: tenant.name.clone(),
            subscription_tier: tenant.tier.to_string(),
            subscription_status: tenant.status.to_string(),
            plan: PlanInfo::for_tier(tenant.tier),
            trial_ends_at: tenant.trial_ends_at,
            is_active: tenant.is_active,
        }
    }
}

/// Subscription feature state.
#[derive(Debug, Clone)]
pub struct Subscription {
    inner: Arc<SubscriptionInner>,
}

pub struct SubscriptionInner {
    info_cache: Cache<String, Arc<SubscriptionInfo>>,
}

impl fmt::Debug for SubscriptionInner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionInner")
            .field("cached_infos", &self.info_cache.entry_count())
            .finish()
    }
}

impl Subscription {
    #[must_use]
    pub fn new(inner: SubscriptionInner) -> Self {
        Self { inner: Arc::new(inner) }
    }

    /// Access level the tenant's tier grants for a module.
    #[must_use]
    pub fn access_level(&self, tenant: &Tenant, module: ModuleId) -> AccessLevel {
        tenant.tier.module_access(module)
    }

    /// Verdict for a mutating request against `module`.
    ///
    /// Read-only previews do not pass: they exist for upsell rendering, not
    /// for data access.
    ///
    /// # Errors
    /// [`SubscriptionError::Inactive`] when the subscription status grants no
    /// access, [`SubscriptionError::ModuleLocked`] when the plan does not
    /// fully enable the module.
    pub fn authorize(&self, tenant: &Tenant, module: ModuleId) -> Result<(), SubscriptionError> {
        if !tenant.status.grants_access() {
            return Err(SubscriptionError::Inactive { status: tenant.status });
        }

        match tenant.tier.module_access(module) {
            AccessLevel::Full => Ok(()),
            AccessLevel::ReadOnly | AccessLevel::Disabled => Err(SubscriptionError::ModuleLocked {
                module,
                current: tenant.tier,
                required: plans::required_tier(module),
            }),
        }
    }

    /// Resolved subscription info for a tenant, served from a short-lived
    /// cache.
    #[must_use]
    pub fn tenant_info(&self, tenant: &Tenant) -> Arc<SubscriptionInfo> {
        self.inner
            .info_cache
            .get_with(tenant.id.clone(), || Arc::new(SubscriptionInfo::for_tenant(tenant)))
    }
}

impl Deref for Subscription {
    type Target = SubscriptionInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Subscription {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the subscription feature.
///
/// # Errors
/// Infallible today; kept fallible for uniform slice bootstrapping.
pub fn init() -> Result<InitializedSlice, SubscriptionError> {
    let info_cache =
        Cache::builder().max_capacity(INFO_CACHE_CAPACITY).time_to_live(INFO_TTL).build();

    tracing::info!("Subscription slice initialized");

    let slice = Subscription::new(SubscriptionInner { info_cache });
    Ok(InitializedSlice::new(slice))
}
