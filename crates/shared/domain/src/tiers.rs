//! Subscription tiers and the module access resolver.
//!
//! A tier is an attribute of a tenant (organization), never of an individual
//! user. Each tier carries two disjoint [`ModuleSet`]s: `enabled` (full
//! read/write access) and `read_only` (visible as an upgrade preview only).
//! A module in neither set is hidden entirely.
//!
//! The per-tier sets are independently maintained constants. Higher tiers are
//! deliberately *not* derived from lower ones; the shipped data is pinned by
//! tests instead.

use crate::modules::{ModuleId, ModuleSet};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Subscription package purchased by a tenant.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Basic,
    Standard,
    Full,
}

/// What a tier grants for a single module.
#[derive(
    Debug,
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
pub enum AccessLevel {
    /// Full read/write access.
    Full,
    /// Visible, but interaction-disabled upsell preview.
    ReadOnly,
    /// Hidden entirely.
    Disabled,
}

/// Modules fully enabled in the Basic package.
pub const BASIC_ENABLED: ModuleSet = ModuleSet::DASHBOARD
    .union(ModuleSet::ANNOUNCEMENTS)
    .union(ModuleSet::EVENTS)
    .union(ModuleSet::VAKTIJA)
    .union(ModuleSet::ACTIVITY)
    .union(ModuleSet::GUIDE)
    // Guest can submit
    .union(ModuleSet::REQUESTS);

/// Basic package preview modules, shown read-only for upsell.
pub const BASIC_READ_ONLY: ModuleSet = ModuleSet::TASKS
    .union(ModuleSet::MESSAGES)
    .union(ModuleSet::ASK_IMAM)
    .union(ModuleSet::SHOP)
    .union(ModuleSet::FINANCES)
    .union(ModuleSet::PROJECTS)
    .union(ModuleSet::BADGES)
    .union(ModuleSet::POINTS)
    .union(ModuleSet::CERTIFICATES)
    .union(ModuleSet::DOCUMENTS)
    .union(ModuleSet::MEDIA);

/// Modules fully enabled in the Standard package.
pub const STANDARD_ENABLED: ModuleSet = ModuleSet::DASHBOARD
    .union(ModuleSet::USERS)
    .union(ModuleSet::ANNOUNCEMENTS)
    .union(ModuleSet::EVENTS)
    .union(ModuleSet::TASKS)
    .union(ModuleSet::MESSAGES)
    .union(ModuleSet::ASK_IMAM)
    .union(ModuleSet::REQUESTS)
    .union(ModuleSet::VAKTIJA)
    .union(ModuleSet::ACTIVITY)
    .union(ModuleSet::DOCUMENTS)
    .union(ModuleSet::GUIDE)
    .union(ModuleSet::SETTINGS);

/// Standard package preview modules, shown read-only for upsell.
pub const STANDARD_READ_ONLY: ModuleSet = ModuleSet::SHOP
    .union(ModuleSet::FINANCES)
    .union(ModuleSet::PROJECTS)
    .union(ModuleSet::BADGES)
    .union(ModuleSet::POINTS)
    .union(ModuleSet::CERTIFICATES)
    .union(ModuleSet::MEDIA);

/// Modules fully enabled in the Full package: everything.
pub const FULL_ENABLED: ModuleSet = ModuleSet::ALL;

/// Nothing is a locked preview at the top tier.
pub const FULL_READ_ONLY: ModuleSet = ModuleSet::empty();

impl SubscriptionTier {
    /// Modules enabled for full use at this tier.
    #[must_use]
    pub const fn enabled_modules(self) -> ModuleSet {
        match self {
            Self::Basic => BASIC_ENABLED,
            Self::Standard => STANDARD_ENABLED,
            Self::Full => FULL_ENABLED,
        }
    }

    /// Modules visible only as an upgrade-prompt preview at this tier.
    #[must_use]
    pub const fn read_only_modules(self) -> ModuleSet {
        match self {
            Self::Basic => BASIC_READ_ONLY,
            Self::Standard => STANDARD_READ_ONLY,
            Self::Full => FULL_READ_ONLY,
        }
    }

    /// Resolves the access level this tier grants for a module.
    ///
    /// Pure and deterministic: enabled wins over read-only, everything else
    /// is disabled.
    #[must_use]
    pub const fn module_access(self, module: ModuleId) -> AccessLevel {
        let flag = module.flag();
        if self.enabled_modules().contains(flag) {
            AccessLevel::Full
        } else if self.read_only_modules().contains(flag) {
            AccessLevel::ReadOnly
        } else {
            AccessLevel::Disabled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_tier_has_no_previews() {
        assert!(SubscriptionTier::Full.read_only_modules().is_empty());
        assert_eq!(SubscriptionTier::Full.enabled_modules(), ModuleSet::ALL);
    }

    #[test]
    fn basic_scenarios() {
        assert_eq!(
            SubscriptionTier::Basic.module_access(ModuleId::Dashboard),
            AccessLevel::Full
        );
        assert_eq!(SubscriptionTier::Basic.module_access(ModuleId::Shop), AccessLevel::ReadOnly);
        assert_eq!(SubscriptionTier::Basic.module_access(ModuleId::Users), AccessLevel::Disabled);
    }

    #[test]
    fn standard_and_full_scenarios() {
        assert_eq!(SubscriptionTier::Standard.module_access(ModuleId::Users), AccessLevel::Full);
        assert_eq!(
            SubscriptionTier::Standard.module_access(ModuleId::Finances),
            AccessLevel::ReadOnly
        );
        assert_eq!(SubscriptionTier::Full.module_access(ModuleId::Finances), AccessLevel::Full);
    }
}
