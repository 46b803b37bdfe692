//! # rebac-admin
//!
//! An in-memory relational backend for a ReBAC admin API. It keeps groups,
//! identities, roles and identity providers, the associations between them
//! and the entitlements granted to them, and persists everything as a single
//! JSON snapshot file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rebac_admin::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = StoreConfig::builder()
//!         .state_path("state.json")
//!         .zero_state_path("state.zero.json")
//!         .build();
//!     let db = Database::open(config)?;
//!
//!     db.add_group(Group::new("admins"))?;
//!     db.add_identity(Identity::new("a@b.com"))?;
//!     db.patch_group_identities("admins", &["a@b.com"], &[])?;
//!     db.patch_group_entitlements(
//!         "admins",
//!         &[EntityEntitlement::new("can_read", "controller", "main")],
//!         &[],
//!     )?;
//!
//!     for group in db.get_identity_groups("a@b.com")?.unwrap_or_default() {
//!         println!("member of {}", group.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Natural keys**: an entity's id is its name (email for identities),
//!   assigned on creation and never changed by updates
//! - **Relationships**: associations are stored as `(left, right)` tuples,
//!   e.g. `Group2Identity` holds `(group id, identity id)`
//! - **Cascades**: deleting an entity removes every tuple that names it
//! - **Absence ≠ Error**: lookups return `Ok(None)` for unknown ids
//! - **Snapshot first**: every call reloads the snapshot file, so the file
//!   is always the source of truth
//!
//! ## Logging
//!
//! The store emits [`tracing`](https://docs.rs/tracing) events: `info` on
//! reset, `warn` on failed writes, `debug` for file I/O and rejected
//! inserts, `trace` for dangling references. Install any subscriber to see
//! them.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod store;
pub mod types;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use config::StoreConfig;
pub use error::{Error, ErrorKind, Result};
pub use store::{Database, Relationship, RelationshipTuple, Snapshot};
