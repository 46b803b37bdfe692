//! Identity provider operations.
//!
//! Identity providers take part in no relationship, so deleting one cascades
//! nowhere.

use super::Database;
use super::snapshot::{insert_new, replace_existing};
use crate::error::Result;
use crate::types::IdentityProvider;

impl Database {
    /// Returns all identity providers, in no particular order.
    pub fn list_identity_providers(&self) -> Result<Vec<IdentityProvider>> {
        self.read(|s| s.idps.values().cloned().collect())
    }

    /// Creates an identity provider. Its id becomes its name.
    ///
    /// Fails with `InvalidInput` if the name is missing or empty, and with
    /// `AlreadyExists` if the name is taken.
    pub fn add_identity_provider(&self, idp: IdentityProvider) -> Result<IdentityProvider> {
        self.write(|state| {
            let added = insert_new(&mut state.snapshot.idps, idp)?;
            state.mark_dirty();
            Ok(added)
        })
    }

    /// Returns the identity provider with the given id.
    pub fn get_identity_provider(&self, id: &str) -> Result<Option<IdentityProvider>> {
        self.read(|s| s.idps.get(id).cloned())
    }

    /// Replaces the identity provider identified by `idp.id`.
    pub fn update_identity_provider(&self, idp: IdentityProvider) -> Result<IdentityProvider> {
        self.write(|state| {
            let updated = replace_existing(&mut state.snapshot.idps, idp)?;
            state.mark_dirty();
            Ok(updated)
        })
    }

    /// Deletes an identity provider. Returns `false` if it did not exist.
    pub fn delete_identity_provider(&self, id: &str) -> Result<bool> {
        self.write(|state| {
            let removed = state.snapshot.idps.remove(id).is_some();
            Ok(state.mark_dirty_if(removed))
        })
    }
}
