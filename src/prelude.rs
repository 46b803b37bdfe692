//! Prelude module for convenient imports.
//!
//! ```rust
//! use rebac_admin::prelude::*;
//! ```
//!
//! This provides access to:
//! - The store and its configuration
//! - Error types
//! - Entity and reference data types

pub use crate::{
    config::StoreConfig,
    error::{Error, ErrorKind, Result},
    store::Database,
    types::{
        AvailableIdentityProvider, Capability, CapabilityMethod, EntitlementSchema,
        EntityEntitlement, Group, Identity, IdentityProvider, Patch, PatchOp, Resource,
        ResourceFilter, Role,
    },
};
