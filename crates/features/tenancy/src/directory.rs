//! In-memory tenant registry.
//!
//! Each tenant owns one subscription tier and one subscription status; both
//! are read on every request by the capability layer. The directory keeps the
//! whole roster in process memory behind a read/write lock — a persistent
//! backing store would slot in behind the same methods.

use crate::error::TenancyError;
use chrono::{DateTime, Utc};
use dzemat_domain::tiers::SubscriptionTier;
use dzemat_kernel::safe_nanoid;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::{Display, EnumString, IntoStaticStr};
use typed_builder::TypedBuilder;

/// Billing state of a tenant's subscription.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Trial,
    Active,
    Suspended,
    Cancelled,
}

impl SubscriptionStatus {
    /// Whether this status still grants access to the tenant's modules.
    /// Only live subscriptions (including trials) do.
    #[must_use]
    pub const fn grants_access(self) -> bool {
        matches!(self, Self::Trial | Self::Active)
    }
}

/// A single organization using an isolated slice of the shared application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Short unambiguous code handed out for member onboarding.
    pub tenant_code: String,
    pub subdomain: Option<String>,
    pub tier: SubscriptionTier,
    pub status: SubscriptionStatus,
    pub trial_ends_at: Option<DateTime<Utc>>,
    pub locale: String,
    pub currency: String,
    pub is_active: bool,
}

/// Registration payload for a new tenant.
#[derive(Debug, TypedBuilder)]
pub struct NewTenant {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub slug: String,
    #[builder(default, setter(into, strip_option))]
    pub subdomain: Option<String>,
    #[builder(default)]
    pub tier: SubscriptionTier,
    #[builder(default)]
    pub status: SubscriptionStatus,
    #[builder(default)]
    pub trial_ends_at: Option<DateTime<Utc>>,
    #[builder(default = "bs".to_owned(), setter(into))]
    pub locale: String,
    #[builder(default = "CHF".to_owned(), setter(into))]
    pub currency: String,
}

/// Thread-safe roster of registered tenants.
#[derive(Debug, Default)]
pub struct TenantDirectory {
    tenants: RwLock<FxHashMap<String, Arc<Tenant>>>,
}

impl TenantDirectory {
    /// Registers a tenant under a generated id.
    ///
    /// # Errors
    /// Returns [`TenancyError::Duplicate`] if the slug is already taken.
    pub fn register(&self, new: NewTenant) -> Result<Arc<Tenant>, TenancyError> {
        self.register_with_id(safe_nanoid!(), new)
    }

    /// Registers a tenant under a caller-chosen id (e.g. the configured
    /// development tenant).
    ///
    /// # Errors
    /// Returns [`TenancyError::Duplicate`] if the id or slug is already taken.
    pub fn register_with_id(
        &self,
        id: impl Into<String>,
        new: NewTenant,
    ) -> Result<Arc<Tenant>, TenancyError> {
        let id = id.into();
        let mut tenants = self.tenants.write();

        if tenants.contains_key(&id) {
            return Err(TenancyError::Duplicate { id });
        }
        if tenants.values().any(|t| t.slug == new.slug) {
            return Err(TenancyError::Duplicate { id: new.slug });
        }

        let tenant = Arc::new(Tenant {
            id: id.clone(),
            name: new.name,
            slug: new.slug,
            tenant_code: safe_nanoid!(8),
            subdomain: new.subdomain,
            tier: new.tier,
            status: new.status,
            trial_ends_at: new.trial_ends_at,
            locale: new.locale,
            currency: new.currency,
            is_active: true,
        });
        tenants.insert(id, Arc::clone(&tenant));

        tracing::info!(tenant = %tenant.slug, tier = %tenant.tier, "Tenant registered");
        Ok(tenant)
    }

    /// Looks a tenant up by id.
    ///
    /// # Errors
    /// Returns [`TenancyError::NotFound`] for unknown ids.
    pub fn get(&self, id: &str) -> Result<Arc<Tenant>, TenancyError> {
        self.tenants
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| TenancyError::NotFound { id: id.to_owned() })
    }

    /// Resolves a tenant by id first, slug second.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<Arc<Tenant>> {
        let tenants = self.tenants.read();
        tenants.get(key).cloned().or_else(|| tenants.values().find(|t| t.slug == key).cloned())
    }

    /// Resolves a tenant from a request `Host`, matching the first label
    /// against registered subdomains (`zurich.dzemat-app.com` → `zurich`).
    ///
    /// Bare domains and `host:port` pairs without a subdomain resolve to
    /// nothing.
    #[must_use]
    pub fn resolve_subdomain(&self, host: &str) -> Option<Arc<Tenant>> {
        let host = host.split(':').next().unwrap_or_default();
        let mut labels = host.split('.');
        let first = labels.next()?;
        // A subdomain needs at least two more labels after it.
        if labels.count() < 2 {
            return None;
        }

        self.tenants
            .read()
            .values()
            .find(|t| t.subdomain.as_deref() == Some(first))
            .cloned()
    }

    /// Moves a tenant to another subscription tier.
    ///
    /// # Errors
    /// Returns [`TenancyError::NotFound`] for unknown ids.
    pub fn set_tier(
        &self,
        id: &str,
        tier: SubscriptionTier,
    ) -> Result<Arc<Tenant>, TenancyError> {
        self.update(id, |tenant| tenant.tier = tier)
    }

    /// Changes a tenant's subscription status.
    ///
    /// # Errors
    /// Returns [`TenancyError::NotFound`] for unknown ids.
    pub fn set_status(
        &self,
        id: &str,
        status: SubscriptionStatus,
    ) -> Result<Arc<Tenant>, TenancyError> {
        self.update(id, |tenant| tenant.status = status)
    }

    fn update(
        &self,
        id: &str,
        apply: impl FnOnce(&mut Tenant),
    ) -> Result<Arc<Tenant>, TenancyError> {
        let mut tenants = self.tenants.write();
        let entry =
            tenants.get_mut(id).ok_or_else(|| TenancyError::NotFound { id: id.to_owned() })?;
        apply(Arc::make_mut(entry));
        Ok(Arc::clone(entry))
    }

    /// Number of registered tenants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tenants.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tenants.read().is_empty()
    }
}
