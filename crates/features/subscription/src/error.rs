use dzemat_domain::modules::ModuleId;
use dzemat_domain::tiers::SubscriptionTier;
use dzemat_tenancy::SubscriptionStatus;

/// Subscription error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubscriptionError {
    /// The tenant's subscription no longer grants any module access.
    #[error("Subscription inactive: {status}")]
    Inactive { status: SubscriptionStatus },

    /// The module is not fully enabled in the tenant's current plan.
    #[error("Module {module} not available in the {current} plan")]
    ModuleLocked {
        module: ModuleId,
        current: SubscriptionTier,
        /// Lowest tier that enables the module.
        required: SubscriptionTier,
    },
}
