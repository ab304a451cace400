use dzemat_domain::constants::{DEFAULT_TENANT_ID, PLAN, ROLE_ADMIN, ROLE_BOARD, TENANT};

#[test]
fn constants_match_entity_strings() {
    assert_eq!(TENANT, "tenant");
    assert_eq!(PLAN, "plan");
    assert_eq!(ROLE_ADMIN, "admin");
    assert_eq!(ROLE_BOARD, "clan_io");
    assert_eq!(DEFAULT_TENANT_ID, "default-tenant-demo");
}
