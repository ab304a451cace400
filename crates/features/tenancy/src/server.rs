//! Request-scoped tenant resolution for Axum handlers.

use crate::{Tenancy, Tenant, TenancyError};
use axum::Json;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use dzemat_kernel::server::ApiState;
use std::sync::Arc;

/// The tenant a request operates on.
///
/// Resolution order: explicit tenant header → `Host` subdomain → configured
/// default tenant. Deactivated tenants are rejected before any handler runs.
#[derive(Debug, Clone)]
pub struct TenantContext {
    pub tenant: Arc<Tenant>,
}

impl TenantContext {
    fn resolve(state: &ApiState, parts: &Parts) -> Result<Arc<Tenant>, TenancyError> {
        let tenancy =
            state.try_get_slice::<Tenancy>().map_err(|_| TenancyError::MissingContext)?;
        let directory = &tenancy.directory;
        let cfg = &state.config.tenancy;

        let tenant = if let Some(id) = header_value(parts, &cfg.header) {
            // An explicit header names a tenant; an unknown value is an error,
            // not a fallthrough.
            directory.resolve(id).ok_or_else(|| TenancyError::NotFound { id: id.to_owned() })?
        } else if let Some(tenant) =
            header_value(parts, header::HOST.as_str()).and_then(|host| {
                directory.resolve_subdomain(host)
            })
        {
            tenant
        } else {
            directory
                .resolve(&cfg.default_tenant)
                .ok_or_else(|| TenancyError::NotFound { id: cfg.default_tenant.clone() })?
        };

        if !tenant.is_active {
            return Err(TenancyError::Inactive { id: tenant.id.clone() });
        }

        Ok(tenant)
    }
}

fn header_value<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|v| v.to_str().ok()).filter(|v| !v.is_empty())
}

impl<S> FromRequestParts<S> for TenantContext
where
    ApiState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = TenantRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = ApiState::from_ref(state);
        let tenant = Self::resolve(&state, parts).map_err(TenantRejection)?;
        Ok(Self { tenant })
    }
}

/// Rejection produced when no usable tenant context exists for a request.
#[derive(Debug)]
pub struct TenantRejection(pub TenancyError);

impl IntoResponse for TenantRejection {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            TenancyError::NotFound { .. } => (StatusCode::NOT_FOUND, "Tenant not found"),
            TenancyError::Inactive { .. } => (StatusCode::FORBIDDEN, "Tenant not active"),
            TenancyError::MissingContext => (StatusCode::BAD_REQUEST, "Tenant context not found"),
            TenancyError::Duplicate { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Tenant registry conflict")
            },
        };

        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}
