use dzemat_domain::constants::{ROLE_ADMIN, ROLE_BOARD};
use dzemat_domain::modules::{MODULES, ModuleCategory, ModuleId};
use std::collections::HashSet;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn catalog_covers_every_module_in_order() {
    assert_eq!(MODULES.len(), ModuleId::iter().count());
    for module in ModuleId::iter() {
        assert_eq!(module.definition().id, module, "catalog order drifted for {module}");
    }
}

#[test]
fn routes_are_nonempty_and_unique() {
    let mut seen = HashSet::new();
    for def in &MODULES {
        assert!(def.route.starts_with('/'), "{}: route must be absolute", def.id);
        assert!(seen.insert(def.route), "{}: duplicate route {}", def.id, def.route);
    }
}

#[test]
fn public_modules_do_not_require_auth() {
    use ModuleId::{Activity, Announcements, Events, Guide, Media, Requests, Vaktija};
    for module in [Announcements, Events, Vaktija, Activity, Guide, Media, Requests] {
        assert!(!module.definition().requires_auth, "{module} is intentionally public");
    }
    assert!(ModuleId::Dashboard.definition().requires_auth);
}

#[test]
fn role_restricted_modules() {
    assert_eq!(ModuleId::Users.definition().required_roles, &[ROLE_ADMIN]);
    assert_eq!(ModuleId::Settings.definition().required_roles, &[ROLE_ADMIN]);
    assert_eq!(ModuleId::Finances.definition().required_roles, &[ROLE_ADMIN, ROLE_BOARD]);
    assert_eq!(ModuleId::Projects.definition().required_roles, &[ROLE_ADMIN, ROLE_BOARD]);
    assert!(ModuleId::Guide.definition().required_roles.is_empty());
}

#[test]
fn wire_names_use_camel_case() {
    assert_eq!(ModuleId::AskImam.to_string(), "askImam");
    assert_eq!(ModuleId::Dashboard.to_string(), "dashboard");
    assert_eq!(serde_json::to_value(ModuleId::AskImam).unwrap(), "askImam");
    assert_eq!(ModuleId::from_str("askImam").unwrap(), ModuleId::AskImam);
    assert_eq!(serde_json::to_value(ModuleCategory::Communication).unwrap(), "communication");
}

#[test]
fn unknown_identifier_fails_fast() {
    assert!(ModuleId::from_str("livestream").is_err());
    assert!(ModuleId::from_str("").is_err());
    assert!(ModuleId::from_str("Dashboard").is_err(), "wire names are case sensitive");
}
