use dzemat_domain::constants::{ROLE_ADMIN, ROLE_BOARD};
use dzemat_domain::modules::ModuleId;
use dzemat_kernel::security::RoleGuard;

#[test]
fn unrestricted_module_passes_any_roles() {
    let guide = ModuleId::Guide.definition();
    assert!(RoleGuard::check_module(guide, &["member"]).is_ok());
    assert!(RoleGuard::check_module::<&str>(guide, &[]).is_ok());
}

#[test]
fn restricted_module_requires_matching_role() {
    let finances = ModuleId::Finances.definition();
    assert!(RoleGuard::check_module(finances, &[ROLE_ADMIN]).is_ok());
    assert!(RoleGuard::check_module(finances, &[ROLE_BOARD]).is_ok());
    assert!(RoleGuard::check_module(finances, &["member"]).is_err());
    assert!(RoleGuard::check_module::<&str>(finances, &[]).is_err());
}

#[test]
fn owned_role_strings_are_accepted() {
    let users = ModuleId::Users.definition();
    let held = vec![ROLE_ADMIN.to_owned()];
    assert!(RoleGuard::check_module(users, &held).is_ok());
}
