//! HTTP surface of the subscription feature: capability endpoints plus the
//! per-route module gate.

use crate::{PlanInfo, Subscription, SubscriptionError, SubscriptionInfo, plans};
use axum::extract::{FromRef, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use dzemat_domain::constants::{SUBSCRIPTION_TAG, TENANT_TAG};
use dzemat_domain::modules::ModuleId;
use dzemat_kernel::server::ApiState;
use dzemat_tenancy::TenantContext;
use serde::Serialize;
use std::sync::Arc;
use strum::IntoEnumIterator;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// State captured by one [`require_module`] gate.
#[derive(Debug, Clone)]
pub struct GateState {
    api: ApiState,
    module: ModuleId,
}

impl FromRef<GateState> for ApiState {
    fn from_ref(input: &GateState) -> Self {
        input.api.clone()
    }
}

/// Wraps a router so every route in it requires full access to `module`.
///
/// Usage: `require_module(ModuleId::Shop, api, shop_routes)`. Read-only
/// previews and hidden modules are both rejected with an upgrade-required
/// payload, dead subscriptions with a support hint.
pub fn require_module<S>(module: ModuleId, api: ApiState, router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(GateState { api, module }, gate))
}

async fn gate(
    State(gs): State<GateState>,
    ctx: TenantContext,
    request: Request,
    next: Next,
) -> Result<Response, ModuleGateError> {
    let subscription =
        gs.api.try_get_slice::<Subscription>().map_err(|_| ModuleGateError::Unavailable)?;

    subscription.authorize(&ctx.tenant, gs.module).map_err(ModuleGateError::Denied)?;

    Ok(next.run(request).await)
}

/// Rejection produced by the module gate.
#[derive(Debug)]
pub enum ModuleGateError {
    /// The subscription layer refused the request.
    Denied(SubscriptionError),
    /// The subscription slice is not registered; a deployment fault.
    Unavailable,
}

impl IntoResponse for ModuleGateError {
    fn into_response(self) -> Response {
        match self {
            Self::Denied(SubscriptionError::ModuleLocked { module, current, required }) => {
                let current_plan = plans::plan(current);
                tracing::debug!(%module, plan = %current, "Module gate rejected request");
                (
                    StatusCode::FORBIDDEN,
                    Json(serde_json::json!({
                        "message": format!(
                            "Feature \"{module}\" not available in your {} plan",
                            current_plan.name
                        ),
                        "upgradeRequired": true,
                        "currentPlan": current.to_string(),
                        "requiredPlan": required.to_string(),
                    })),
                )
                    .into_response()
            },
            Self::Denied(SubscriptionError::Inactive { status }) => (
                StatusCode::FORBIDDEN,
                Json(serde_json::json!({
                    "message": "Subscription inactive. Please contact support.",
                    "upgradeRequired": false,
                    "subscriptionStatus": status.to_string(),
                })),
            )
                .into_response(),
            Self::Unavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "message": "Failed to verify feature access" })),
            )
                .into_response(),
        }
    }
}

/// Per-module access granted to the current tenant.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleAccessInfo {
    pub module: String,
    pub name: String,
    pub route: String,
    pub category: String,
    /// One of `full`, `readonly`, `disabled`.
    pub access: String,
    pub requires_auth: bool,
    pub required_roles: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/api/subscription/plans",
    responses((status = OK, description = "All subscription plans", body = [PlanInfo])),
    tag = SUBSCRIPTION_TAG,
)]
#[allow(clippy::unused_async)]
async fn plans_handler() -> Json<Vec<PlanInfo>> {
    Json(dzemat_domain::tiers::SubscriptionTier::iter().map(PlanInfo::for_tier).collect())
}

#[utoipa::path(
    get,
    path = "/api/subscription/current",
    responses(
        (status = OK, description = "Current tenant subscription info", body = SubscriptionInfo),
        (status = NOT_FOUND, description = "Unknown tenant"),
    ),
    tag = SUBSCRIPTION_TAG,
)]
#[allow(clippy::unused_async)]
async fn current_handler(
    State(state): State<ApiState>,
    ctx: TenantContext,
) -> Result<Json<Arc<SubscriptionInfo>>, ModuleGateError> {
    let subscription =
        state.try_get_slice::<Subscription>().map_err(|_| ModuleGateError::Unavailable)?;

    Ok(Json(subscription.tenant_info(&ctx.tenant)))
}

#[utoipa::path(
    get,
    path = "/api/tenant/modules",
    responses(
        (status = OK, description = "Access level per module for the current tenant", body = [ModuleAccessInfo]),
        (status = NOT_FOUND, description = "Unknown tenant"),
    ),
    tag = TENANT_TAG,
)]
#[allow(clippy::unused_async)]
async fn modules_handler(ctx: TenantContext) -> Json<Vec<ModuleAccessInfo>> {
    let tier = ctx.tenant.tier;

    Json(
        ModuleId::iter()
            .map(|module| {
                let def = module.definition();
                ModuleAccessInfo {
                    module: module.to_string(),
                    name: def.name.to_owned(),
                    route: def.route.to_owned(),
                    category: def.category.to_string(),
                    access: tier.module_access(module).to_string(),
                    requires_auth: def.requires_auth,
                    required_roles: def.required_roles.iter().map(|r| (*r).to_owned()).collect(),
                }
            })
            .collect(),
    )
}

/// Routes exposed by the subscription feature.
pub fn subscription_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(plans_handler))
        .routes(routes!(current_handler))
        .routes(routes!(modules_handler))
}
