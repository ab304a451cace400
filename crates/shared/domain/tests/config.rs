use dzemat_domain::config::{ApiConfig, ServerConfig, TenancyConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 5000);
    assert!(server.ssl.is_none());

    let tenancy = TenancyConfig::default();
    assert_eq!(tenancy.default_tenant, "default-tenant-demo");
    assert_eq!(tenancy.header, "x-tenant-id");
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "tenancy": { "default_tenant": "zurich", "header": "x-org" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.tenancy.default_tenant, "zurich");
}

#[test]
fn api_config_tolerates_missing_sections() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("empty config");
    assert_eq!(cfg.server.port, 5000);
    assert_eq!(cfg.tenancy.header, "x-tenant-id");
}
