//! The in-memory relational store.
//!
//! [`Database`] owns four entity tables (groups, identities, roles, identity
//! providers), six [`Relationship`]s wiring them together, and the read-only
//! reference data served to admin clients. Everything is persisted as one
//! JSON [`Snapshot`].
//!
//! ## Consistency Model
//!
//! The snapshot file is the source of truth. Every operation reloads it
//! before doing anything, so changes written by another process sharing the
//! file become visible at the next call. Within one process, operations are
//! serialized by a reader/writer lock, which gives read-your-writes. There is
//! no lock across processes: two processes writing the same file concurrently
//! race, and the last write wins.
//!
//! ## Locking
//!
//! | Lock                       | Held by                         | Guards            |
//! |----------------------------|---------------------------------|-------------------|
//! | state (`RwLock`)           | reads shared, mutations exclusive | in-memory state |
//! | persistence (`Mutex`)      | each snapshot file read/write   | file I/O          |
//!
//! The state lock is always taken first.
//!
//! ## Cascades
//!
//! | Deleted          | Relationships cleaned                                   |
//! |------------------|---------------------------------------------------------|
//! | Group            | Group2Identity, Group2Role, Group2Entitlement (left)   |
//! | Identity         | Group2Identity (right); Identity2Role, Identity2Entitlement (left) |
//! | Role             | Group2Role, Identity2Role (right); Role2Entitlement (left) |
//! | IdentityProvider | none                                                    |
//!
//! ## Example
//!
//! ```rust,no_run
//! use rebac_admin::{Database, StoreConfig};
//! use rebac_admin::types::{Group, Identity};
//!
//! # fn main() -> rebac_admin::Result<()> {
//! let db = Database::open(StoreConfig::new("state.json", "state.zero.json"))?;
//!
//! db.add_group(Group::new("admins"))?;
//! db.add_identity(Identity::new("a@b.com"))?;
//! db.patch_group_identities("admins", &["a@b.com"], &[])?;
//!
//! let members = db.get_group_identities("admins")?.unwrap_or_default();
//! assert_eq!(members[0].email, "a@b.com");
//! # Ok(())
//! # }
//! ```

mod groups;
mod identities;
mod identity_providers;
mod persistence;
mod reference;
mod relationship;
mod roles;
mod snapshot;

use parking_lot::{Mutex, RwLock};

pub use relationship::{Relationship, RelationshipTuple};
pub use snapshot::{Snapshot, Table};

use crate::config::StoreConfig;
use crate::error::Result;

/// In-memory relational store persisted to a JSON snapshot file.
///
/// `Database` is `Send + Sync`; share it between request handlers with an
/// `Arc`. See the [module documentation](self) for the consistency model.
#[derive(Debug)]
pub struct Database {
    config: StoreConfig,
    state: RwLock<State>,
    persistence: Mutex<()>,
}

/// The in-memory copy of the snapshot plus the dirty flag.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) snapshot: Snapshot,
    dirty: bool,
}

impl State {
    /// Records that the in-memory snapshot differs from the file.
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Marks the state dirty if `changed` is set, and passes it through.
    pub(crate) fn mark_dirty_if(&mut self, changed: bool) -> bool {
        self.dirty |= changed;
        changed
    }
}

impl Database {
    /// Creates a store without touching the filesystem.
    ///
    /// The first operation loads the snapshot, so calling [`load`](Self::load)
    /// up front is only needed to surface a broken snapshot early.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            state: RwLock::new(State::default()),
            persistence: Mutex::new(()),
        }
    }

    /// Creates a store and loads the current snapshot.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let db = Self::new(config);
        db.load()?;
        Ok(db)
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns `true` if in-memory changes have not been written yet.
    ///
    /// This is only ever observable after a failed persist.
    pub fn is_dirty(&self) -> bool {
        self.state.read().dirty
    }

    /// Returns a copy of the current snapshot.
    pub fn snapshot(&self) -> Result<Snapshot> {
        self.read(Snapshot::clone)
    }

    /// Runs a read-only operation against the latest snapshot.
    ///
    /// Readers share the state lock and answer from a freshly loaded copy,
    /// leaving the in-memory state to writers.
    pub(crate) fn read<T>(&self, f: impl FnOnce(&Snapshot) -> T) -> Result<T> {
        let _state = self.state.read();
        let snapshot = self.read_current()?;
        Ok(f(&snapshot))
    }

    /// Runs a mutation: reload, apply `f`, persist if `f` marked the state
    /// dirty.
    ///
    /// The result of `f` is returned after persisting, so a rejected mutation
    /// (e.g. `AlreadyExists`) is reported as such, while a failed write is
    /// reported as `StorageIo` even though memory already holds the change.
    pub(crate) fn write<T>(&self, f: impl FnOnce(&mut State) -> Result<T>) -> Result<T> {
        let mut state = self.state.write();
        state.snapshot = self.read_current()?;
        state.dirty = false;

        let outcome = f(&mut state);
        self.persist_locked(&mut state)?;
        outcome
    }
}
