//! Identity operations.

use super::Database;
use super::groups::encode_all;
use super::snapshot::{ensure_exists, insert_new, replace_existing, resolve};
use crate::error::Result;
use crate::types::{EntityEntitlement, Group, Identity, Role};

impl Database {
    /// Returns all identities, in no particular order.
    pub fn list_identities(&self) -> Result<Vec<Identity>> {
        self.read(|s| s.identities.values().cloned().collect())
    }

    /// Creates an identity. Its id becomes its email.
    ///
    /// Fails with `AlreadyExists` if the email is taken.
    pub fn add_identity(&self, identity: Identity) -> Result<Identity> {
        self.write(|state| {
            let added = insert_new(&mut state.snapshot.identities, identity)?;
            state.mark_dirty();
            Ok(added)
        })
    }

    /// Returns the identity with the given id.
    pub fn get_identity(&self, identity_id: &str) -> Result<Option<Identity>> {
        self.read(|s| s.identities.get(identity_id).cloned())
    }

    /// Replaces the identity identified by `identity.id`.
    pub fn update_identity(&self, identity: Identity) -> Result<Identity> {
        self.write(|state| {
            let updated = replace_existing(&mut state.snapshot.identities, identity)?;
            state.mark_dirty();
            Ok(updated)
        })
    }

    /// Deletes an identity, removing it from its groups and dropping its role
    /// and entitlement assignments.
    pub fn delete_identity(&self, identity_id: &str) -> Result<bool> {
        self.write(|state| {
            let s = &mut state.snapshot;
            if s.identities.remove(identity_id).is_none() {
                return Ok(false);
            }
            s.group_identity.remove_all_with_right(identity_id);
            s.identity_role.remove_all_with_left(identity_id);
            s.identity_entitlement.remove_all_with_left(identity_id);
            state.mark_dirty();
            Ok(true)
        })
    }

    /// Returns the groups an identity belongs to, or `None` if the identity
    /// does not exist.
    pub fn get_identity_groups(&self, identity_id: &str) -> Result<Option<Vec<Group>>> {
        self.read(|s| {
            s.identities
                .contains_key(identity_id)
                .then(|| resolve(&s.groups, s.group_identity.lefts_for(identity_id)))
        })
    }

    /// Adds the identity to, then removes it from, groups (by id).
    pub fn patch_identity_groups<S: AsRef<str>>(
        &self,
        identity_id: &str,
        additions: &[S],
        removals: &[S],
    ) -> Result<bool> {
        self.write(|state| {
            ensure_exists(&state.snapshot.identities, identity_id)?;
            let changed = state
                .snapshot
                .group_identity
                .patch_right(identity_id, additions, removals);
            Ok(state.mark_dirty_if(changed))
        })
    }

    /// Returns the roles assigned directly to an identity, or `None` if the
    /// identity does not exist.
    pub fn get_identity_roles(&self, identity_id: &str) -> Result<Option<Vec<Role>>> {
        self.read(|s| {
            s.identities
                .contains_key(identity_id)
                .then(|| resolve(&s.roles, s.identity_role.rights_for(identity_id)))
        })
    }

    /// Adds then removes roles (by id) assigned to an identity.
    pub fn patch_identity_roles<S: AsRef<str>>(
        &self,
        identity_id: &str,
        additions: &[S],
        removals: &[S],
    ) -> Result<bool> {
        self.write(|state| {
            ensure_exists(&state.snapshot.identities, identity_id)?;
            let changed = state
                .snapshot
                .identity_role
                .patch_left(identity_id, additions, removals);
            Ok(state.mark_dirty_if(changed))
        })
    }

    /// Returns the entitlements granted directly to an identity, or `None` if
    /// the identity does not exist.
    pub fn get_identity_entitlements(
        &self,
        identity_id: &str,
    ) -> Result<Option<Vec<EntityEntitlement>>> {
        self.read(|s| {
            s.identities.contains_key(identity_id).then(|| {
                s.identity_entitlement
                    .rights_for(identity_id)
                    .into_iter()
                    .map(EntityEntitlement::from_key)
                    .collect()
            })
        })
    }

    /// Grants then revokes entitlements for an identity.
    pub fn patch_identity_entitlements(
        &self,
        identity_id: &str,
        additions: &[EntityEntitlement],
        removals: &[EntityEntitlement],
    ) -> Result<bool> {
        let additions = encode_all(additions);
        let removals = encode_all(removals);
        self.write(|state| {
            ensure_exists(&state.snapshot.identities, identity_id)?;
            let changed = state.snapshot.identity_entitlement.patch_left(
                identity_id,
                additions.as_slice(),
                removals.as_slice(),
            );
            Ok(state.mark_dirty_if(changed))
        })
    }
}
