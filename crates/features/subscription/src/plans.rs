//! Commercial plan catalog.
//!
//! One plan per tier. Prices are decimal strings, exactly as stored and
//! displayed; nothing in this crate does arithmetic on them. `None` limits
//! mean unlimited.

use dzemat_domain::modules::ModuleId;
use dzemat_domain::tiers::SubscriptionTier;
use serde::Serialize;
use strum::IntoEnumIterator;

/// Commercial metadata attached to a subscription tier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinition {
    pub name: &'static str,
    pub slug: SubscriptionTier,
    pub description: &'static str,
    pub price_monthly: &'static str,
    pub price_yearly: &'static str,
    pub currency: &'static str,
    /// Maximum member accounts; `None` means unlimited.
    pub max_users: Option<u32>,
    /// Maximum storage in MB; `None` means unlimited.
    pub max_storage_mb: Option<u32>,
    pub is_active: bool,
}

/// Plan catalog, ordered from lowest to highest tier.
pub static PLANS: [PlanDefinition; 3] = [
    PlanDefinition {
        name: "Basic",
        slug: SubscriptionTier::Basic,
        description: "Osnovne funkcionalnosti za male džemate",
        price_monthly: "29.00",
        price_yearly: "290.00",
        currency: "EUR",
        max_users: Some(50),
        max_storage_mb: Some(500),
        is_active: true,
    },
    PlanDefinition {
        name: "Standard",
        slug: SubscriptionTier::Standard,
        description: "Proširene funkcionalnosti za srednje džemate",
        price_monthly: "39.00",
        price_yearly: "390.00",
        currency: "EUR",
        max_users: Some(200),
        max_storage_mb: Some(2000),
        is_active: true,
    },
    PlanDefinition {
        name: "Full",
        slug: SubscriptionTier::Full,
        description: "Sve funkcionalnosti - bez ograničenja",
        price_monthly: "49.00",
        price_yearly: "490.00",
        currency: "EUR",
        max_users: None,
        max_storage_mb: None,
        is_active: true,
    },
];

/// The plan sold for a tier.
#[must_use]
pub fn plan(tier: SubscriptionTier) -> &'static PlanDefinition {
    &PLANS[tier as usize]
}

/// Lowest tier whose plan fully enables `module`.
///
/// Falls back to the top tier when only it carries the module.
#[must_use]
pub fn required_tier(module: ModuleId) -> SubscriptionTier {
    SubscriptionTier::iter()
        .find(|tier| tier.enabled_modules().contains_id(module))
        .unwrap_or(SubscriptionTier::Full)
}
