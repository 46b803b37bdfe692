//! One store shared between threads.

use std::sync::Arc;
use std::thread;

use rebac_admin::types::{Group, Identity};

use crate::common::TestFixture;

const THREADS: usize = 8;
const PER_THREAD: usize = 10;

#[test]
fn test_concurrent_adds_are_not_lost() {
    let fixture = TestFixture::create();
    let db = Arc::new(fixture.open());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let db = Arc::clone(&db);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    db.add_group(Group::new(format!("group-{t}-{i}")))
                        .expect("add group");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    // Plus the fixture's admins group.
    assert_eq!(db.list_groups().expect("list").len(), THREADS * PER_THREAD + 1);
    assert_eq!(fixture.open().list_groups().expect("list").len(), THREADS * PER_THREAD + 1);
}

#[test]
fn test_concurrent_membership_patches() {
    let fixture = TestFixture::create();
    let db = Arc::new(fixture.open());
    for t in 0..THREADS {
        db.add_identity(Identity::new(format!("user{t}@b.com")))
            .expect("add identity");
    }

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let db = Arc::clone(&db);
            thread::spawn(move || {
                let email = format!("user{t}@b.com");
                db.patch_identity_groups(&email, &["admins"], &[])
                    .expect("patch groups");
                let groups = db.get_identity_groups(&email).expect("groups");
                assert_eq!(groups.map(|g| g.len()), Some(1));
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("patch thread panicked");
    }

    let members = db
        .get_group_identities("admins")
        .expect("members")
        .unwrap_or_default();
    assert_eq!(members.len(), THREADS);
}

#[test]
fn test_readers_run_alongside_writers() {
    let fixture = TestFixture::create();
    let db = Arc::new(fixture.open());

    let writer = {
        let db = Arc::clone(&db);
        thread::spawn(move || {
            for i in 0..PER_THREAD {
                db.add_group(Group::new(format!("g{i}"))).expect("add group");
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let db = Arc::clone(&db);
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    let groups = db.list_groups().expect("list");
                    assert!(groups.iter().any(|g| g.name == "admins"));
                }
            })
        })
        .collect();

    writer.join().expect("writer panicked");
    for reader in readers {
        reader.join().expect("reader panicked");
    }
    assert_eq!(db.list_groups().expect("list").len(), PER_THREAD + 1);
}
