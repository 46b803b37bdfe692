//! Snapshot file behaviour across store instances.

use std::fs;

use rebac_admin::types::{Group, Identity, Role};
use rebac_admin::{Database, ErrorKind, Snapshot, StoreConfig};

use crate::common::TestFixture;

#[test]
fn test_changes_survive_reopen() {
    let fixture = TestFixture::create();
    {
        let db = fixture.open();
        db.add_identity(Identity::new("a@b.com")).expect("add identity");
        db.patch_identity_roles("a@b.com", &["viewer"], &[])
            .expect("patch roles");
    }

    let reopened = fixture.open();
    let roles = reopened
        .get_identity_roles("a@b.com")
        .expect("roles")
        .unwrap_or_default();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].name, "viewer");
}

#[test]
fn test_other_instance_sees_writes_without_reload() {
    let fixture = TestFixture::create();
    let writer = fixture.open();
    let reader = fixture.open();

    assert!(reader.get_group("devs").expect("get").is_none());
    writer.add_group(Group::new("devs")).expect("add group");
    assert!(reader.get_group("devs").expect("get").is_some());

    // The reader's next mutation builds on the writer's change.
    reader.add_role(Role::new("editor")).expect("add role");
    let snapshot = writer.snapshot().expect("snapshot");
    assert!(snapshot.groups.contains_key("devs"));
    assert!(snapshot.roles.contains_key("editor"));
}

#[test]
fn test_zero_state_file_is_never_written() {
    let fixture = TestFixture::create();
    let before = fs::read(fixture.zero_state_path()).expect("read zero state");

    let db = fixture.open();
    db.add_group(Group::new("devs")).expect("add group");
    db.reset().expect("reset");

    let after = fs::read(fixture.zero_state_path()).expect("read zero state");
    assert_eq!(before, after);
}

#[test]
fn test_reset_restores_zero_state() {
    let fixture = TestFixture::create();
    let db = fixture.open();
    db.add_group(Group::new("devs")).expect("add group");
    db.delete_role("viewer").expect("delete role");

    db.reset().expect("reset");

    let zero: Snapshot =
        serde_json::from_slice(&fs::read(fixture.zero_state_path()).expect("read"))
            .expect("parse zero state");
    assert_eq!(db.snapshot().expect("snapshot"), zero);
    assert_eq!(fixture.open().snapshot().expect("snapshot"), zero);
}

#[test]
fn test_state_file_layout() {
    let fixture = TestFixture::create();
    let db = fixture.open();
    db.add_identity(Identity::new("a@b.com")).expect("add identity");
    db.patch_group_identities("admins", &["a@b.com"], &[])
        .expect("patch members");

    let json = fixture.state_json();
    assert_eq!(json["Identities"]["a@b.com"]["email"], "a@b.com");
    assert_eq!(
        json["Group2Identity"]["Tuples"],
        serde_json::json!([{"Left": "admins", "Right": "a@b.com"}])
    );

    let raw = fs::read_to_string(fixture.state_path()).expect("read state");
    assert!(raw.contains("\n    \"Groups\": {"));
}

#[test]
fn test_compact_output() {
    let fixture = TestFixture::create();
    let config = StoreConfig::builder()
        .state_path(fixture.state_path())
        .zero_state_path(fixture.zero_state_path())
        .indent(0)
        .build();
    let db = Database::open(config).expect("open");
    db.add_group(Group::new("devs")).expect("add group");

    let raw = fs::read_to_string(fixture.state_path()).expect("read state");
    assert!(!raw.contains('\n'));
}

#[test]
fn test_corrupt_state_file_is_reported() {
    let fixture = TestFixture::create();
    fs::write(fixture.state_path(), "not json").expect("write");

    let err = Database::open(fixture.config()).expect_err("corrupt state");
    assert_eq!(err.kind(), ErrorKind::Serialization);

    let db = Database::new(fixture.config());
    let err = db.list_groups().expect_err("corrupt state");
    assert_eq!(err.kind(), ErrorKind::Serialization);
    assert_eq!(err.kind().http_status_code(), 500);
}

#[test]
fn test_empty_fixture_starts_empty() {
    let fixture = TestFixture::empty();
    let db = fixture.open();
    assert_eq!(db.snapshot().expect("snapshot"), Snapshot::default());
    assert!(!fixture.state_path().exists());
}
