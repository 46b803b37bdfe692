//! End-to-end store scenarios.

use rebac_admin::ErrorKind;
use rebac_admin::types::{
    CapabilityMethod, EntityEntitlement, Group, Identity, IdentityProvider, Patch, PatchOp,
    ResourceFilter, Role,
};

use crate::common::TestFixture;

#[test]
fn test_zero_state_is_served() {
    let fixture = TestFixture::create();
    let db = fixture.open();

    let groups = db.list_groups().expect("list groups");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].description.as_deref(), Some("Controller administrators"));

    let roles = db.get_group_roles("admins").expect("group roles");
    assert_eq!(roles.map(|r| r.len()), Some(1));

    assert!(db.get_auth_model().expect("auth model").starts_with("model"));
    assert_eq!(db.list_entitlement_schema().expect("schema").len(), 2);
    assert_eq!(db.list_available_identity_providers().expect("idps").len(), 2);
    let caps = db.list_capabilities().expect("capabilities");
    assert!(caps.iter().any(|c| c.endpoint == "/identities" && c.supports(CapabilityMethod::Delete)));
}

#[test]
fn test_group_membership_scenario() {
    let fixture = TestFixture::create();
    let db = fixture.open();

    db.add_identity(Identity::new("a@b.com").with_name("Alice", "Bee"))
        .expect("add identity");
    assert!(db
        .patch_group_identities("admins", &["a@b.com"], &[])
        .expect("patch members"));

    let groups = db
        .get_identity_groups("a@b.com")
        .expect("identity groups")
        .unwrap_or_default();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "admins");

    let members = db
        .get_group_identities("admins")
        .expect("group identities")
        .unwrap_or_default();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].first_name.as_deref(), Some("Alice"));

    assert!(db.delete_group("admins").expect("delete group"));
    assert_eq!(db.get_identity_groups("a@b.com").expect("identity groups"), Some(vec![]));
    assert_eq!(db.get_role_groups("viewer").expect("role groups"), Some(vec![]));
}

#[test]
fn test_patch_items_applied_in_order() {
    let fixture = TestFixture::create();
    let db = fixture.open();
    db.add_role(Role::new("editor")).expect("add role");

    let patch: Patch<String> = [
        (PatchOp::Add, "editor".to_string()),
        (PatchOp::Add, "viewer".to_string()),
        (PatchOp::Remove, "viewer".to_string()),
    ]
    .into_iter()
    .collect();

    db.patch_group_roles("admins", patch.additions.as_slice(), patch.removals.as_slice())
        .expect("patch roles");
    let roles = db.get_group_roles("admins").expect("roles").unwrap_or_default();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].name, "editor");
}

#[test]
fn test_entitlements_for_every_receiver() {
    let fixture = TestFixture::create();
    let db = fixture.open();
    db.add_identity(Identity::new("a@b.com")).expect("add identity");

    let admin = EntityEntitlement::new("administrator", "controller", "c1");
    let reader = EntityEntitlement::new("reader", "model", "m1");

    db.patch_group_entitlements("admins", &[admin.clone()], &[])
        .expect("group entitlements");
    db.patch_identity_entitlements("a@b.com", &[reader.clone()], &[])
        .expect("identity entitlements");
    db.patch_role_entitlements("viewer", &[reader.clone()], &[])
        .expect("role entitlements");

    assert_eq!(db.get_group_entitlements("admins").expect("get"), Some(vec![admin.clone()]));
    assert_eq!(db.get_identity_entitlements("a@b.com").expect("get"), Some(vec![reader.clone()]));
    assert_eq!(db.get_role_entitlements("viewer").expect("get"), Some(vec![reader]));

    let keys: Vec<_> = db
        .snapshot()
        .expect("snapshot")
        .group_entitlement
        .rights_for("admins")
        .into_iter()
        .map(str::to_owned)
        .collect();
    assert_eq!(keys, vec!["administrator:controller:c1"]);
}

#[test]
fn test_identity_providers() {
    let fixture = TestFixture::create();
    let db = fixture.open();

    let idp = db
        .add_identity_provider(IdentityProvider::new("corp-okta").with_client("client", "secret"))
        .expect("add idp");
    assert_eq!(idp.id.as_deref(), Some("corp-okta"));
    assert_eq!(db.list_identity_providers().expect("list").len(), 1);

    let err = db
        .add_identity_provider(IdentityProvider::default())
        .expect_err("nameless idp");
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(err.kind().http_status_code(), 400);
}

#[test]
fn test_conflicts_and_missing_entities() {
    let fixture = TestFixture::create();
    let db = fixture.open();

    let err = db.add_group(Group::new("admins")).expect_err("duplicate group");
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);

    let err = db.update_role(Role::new("ghost")).expect_err("role without id");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.kind().http_status_code(), 404);

    assert_eq!(db.get_identity("nobody@b.com").expect("get"), None);
    assert!(!db.delete_identity("nobody@b.com").expect("delete"));
}

#[test]
fn test_resource_filter() {
    let fixture = TestFixture::create();
    let db = fixture.open();

    assert_eq!(db.list_resources(&ResourceFilter::new()).expect("all").len(), 2);

    // The shared controller parent is listed once.
    let controllers = db
        .list_resources(&ResourceFilter::new().with_entity_type("controller"))
        .expect("controllers");
    assert_eq!(controllers.len(), 1);
    assert_eq!(controllers[0].entity.name, "main");

    let staging = db
        .list_resources(
            &ResourceFilter::new()
                .with_entity_type("model")
                .with_entity_name("staging"),
        )
        .expect("staging");
    assert_eq!(staging.len(), 1);
    assert_eq!(staging[0].parent.as_ref().map(|p| p.entity.id.as_str()), Some("c1"));
}

#[test]
fn test_deleted_identity_leaves_group() {
    let fixture = TestFixture::empty();
    let db = fixture.open();

    let group = db.add_group(Group::new("admins")).expect("add group");
    assert_eq!(group.id.as_deref(), Some("admins"));
    let identity = db.add_identity(Identity::new("a@b.com")).expect("add identity");
    assert_eq!(identity.id.as_deref(), Some("a@b.com"));

    assert!(db
        .patch_group_identities("admins", &["a@b.com"], &[])
        .expect("patch members"));
    assert_eq!(db.get_group_identities("admins").expect("members"), Some(vec![identity]));

    assert!(db.delete_identity("a@b.com").expect("delete identity"));
    assert_eq!(db.get_group_identities("admins").expect("members"), Some(vec![]));
}
