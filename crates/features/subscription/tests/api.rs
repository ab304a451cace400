use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use dzemat_domain::config::ApiConfig;
use dzemat_domain::modules::ModuleId;
use dzemat_domain::tiers::SubscriptionTier;
use dzemat_kernel::server::ApiState;
use dzemat_subscription::{require_module, subscription_router};
use dzemat_tenancy::{NewTenant, SubscriptionStatus, Tenancy};
use serde_json::Value;
use tower::ServiceExt;

fn test_state() -> ApiState {
    let config = ApiConfig::default();
    let tenancy = dzemat_tenancy::init(&config).expect("tenancy init");
    let subscription = dzemat_subscription::init().expect("subscription init");

    ApiState::builder()
        .config(config)
        .register_slice(tenancy)
        .register_slice(subscription)
        .build()
        .expect("state build")
}

fn api(state: &ApiState) -> Router {
    let (router, _doc) = subscription_router().with_state(state.clone()).split_for_parts();
    router
}

async fn get_json(app: Router, uri: &str, headers: &[(&str, &str)]) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }
    let response =
        app.oneshot(request.body(Body::empty()).expect("request")).await.expect("response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn plans_endpoint_lists_all_tiers() {
    let state = test_state();
    let (status, body) = get_json(api(&state), "/api/subscription/plans", &[]).await;

    assert_eq!(status, StatusCode::OK);
    let plans = body.as_array().expect("array");
    assert_eq!(plans.len(), 3);
    assert_eq!(plans[0]["slug"], "basic");
    assert_eq!(plans[0]["priceMonthly"], "29.00");
    assert_eq!(plans[0]["maxUsers"], 50);
    assert_eq!(plans[2]["slug"], "full");
    assert_eq!(plans[2]["maxUsers"], Value::Null);
    assert!(plans[2]["readOnlyModules"].as_array().expect("array").is_empty());
}

#[tokio::test]
async fn current_endpoint_resolves_default_tenant() {
    let state = test_state();
    let (status, body) = get_json(api(&state), "/api/subscription/current", &[]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tenantId"], "default-tenant-demo");
    assert_eq!(body["subscriptionTier"], "basic");
    assert_eq!(body["subscriptionStatus"], "trial");
    assert_eq!(body["plan"]["name"], "Basic");
    assert!(
        body["plan"]["enabledModules"]
            .as_array()
            .expect("array")
            .iter()
            .any(|m| m == "dashboard")
    );
}

#[tokio::test]
async fn current_endpoint_honors_tenant_header() {
    let state = test_state();
    let tenancy = state.try_get_slice::<Tenancy>().expect("tenancy slice");
    let tenant = tenancy
        .directory
        .register(
            NewTenant::builder()
                .name("Džemat Zürich")
                .slug("zurich")
                .tier(SubscriptionTier::Standard)
                .status(SubscriptionStatus::Active)
                .build(),
        )
        .expect("register");

    let (status, body) =
        get_json(api(&state), "/api/subscription/current", &[("x-tenant-id", &tenant.id)]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tenantName"], "Džemat Zürich");
    assert_eq!(body["subscriptionTier"], "standard");
    assert_eq!(body["plan"]["maxStorage"], 2000);
}

#[tokio::test]
async fn unknown_tenant_header_is_a_404() {
    let state = test_state();
    let (status, body) =
        get_json(api(&state), "/api/subscription/current", &[("x-tenant-id", "nope")]).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Tenant not found");
}

#[tokio::test]
async fn modules_endpoint_classifies_every_module() {
    let state = test_state();
    let (status, body) = get_json(api(&state), "/api/tenant/modules", &[]).await;

    assert_eq!(status, StatusCode::OK);
    let modules = body.as_array().expect("array");
    assert_eq!(modules.len(), 20);

    let find = |id: &str| {
        modules.iter().find(|m| m["module"] == id).unwrap_or_else(|| panic!("missing {id}"))
    };
    // The seeded demo tenant is on the basic plan.
    assert_eq!(find("dashboard")["access"], "full");
    assert_eq!(find("shop")["access"], "readonly");
    assert_eq!(find("users")["access"], "disabled");
    assert_eq!(find("finances")["requiredRoles"][0], "admin");
    assert_eq!(find("vaktija")["requiresAuth"], false);
}

fn gated_app(state: &ApiState, module: ModuleId) -> Router {
    let routes = Router::new().route("/api/shop/products", get(|| async { "ok" }));
    require_module(module, state.clone(), routes)
}

#[tokio::test]
async fn gate_passes_enabled_module() {
    let state = test_state();
    // Dashboard is enabled on the basic plan.
    let (status, _) = get_json(gated_app(&state, ModuleId::Dashboard), "/api/shop/products", &[])
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn gate_rejects_locked_module_with_upgrade_payload() {
    let state = test_state();
    // Shop is read-only preview on the basic plan; mutating surface is locked.
    let (status, body) =
        get_json(gated_app(&state, ModuleId::Shop), "/api/shop/products", &[]).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["upgradeRequired"], true);
    assert_eq!(body["currentPlan"], "basic");
    assert_eq!(body["requiredPlan"], "full");
    assert_eq!(body["message"], "Feature \"shop\" not available in your Basic plan");
}

#[tokio::test]
async fn gate_rejects_dead_subscription() {
    let state = test_state();
    let tenancy = state.try_get_slice::<Tenancy>().expect("tenancy slice");
    tenancy
        .directory
        .set_status("default-tenant-demo", SubscriptionStatus::Suspended)
        .expect("set status");

    let (status, body) =
        get_json(gated_app(&state, ModuleId::Dashboard), "/api/shop/products", &[]).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["upgradeRequired"], false);
    assert_eq!(body["subscriptionStatus"], "suspended");
}

#[tokio::test]
async fn gate_upgrades_point_at_the_minimal_plan() {
    let state = test_state();
    // Users unlocks at standard, not full.
    let (status, body) =
        get_json(gated_app(&state, ModuleId::Users), "/api/shop/products", &[]).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["requiredPlan"], "standard");
}
