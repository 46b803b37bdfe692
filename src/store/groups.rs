//! Group operations.

use super::Database;
use super::snapshot::{ensure_exists, insert_new, replace_existing, resolve};
use crate::error::Result;
use crate::types::{EntityEntitlement, Group, Identity, Role};

impl Database {
    /// Returns all groups, in no particular order.
    pub fn list_groups(&self) -> Result<Vec<Group>> {
        self.read(|s| s.groups.values().cloned().collect())
    }

    /// Creates a group. Its id becomes its name.
    ///
    /// Fails with `AlreadyExists` if a group with that name exists.
    pub fn add_group(&self, group: Group) -> Result<Group> {
        self.write(|state| {
            let added = insert_new(&mut state.snapshot.groups, group)?;
            state.mark_dirty();
            Ok(added)
        })
    }

    /// Returns the group with the given id.
    pub fn get_group(&self, group_id: &str) -> Result<Option<Group>> {
        self.read(|s| s.groups.get(group_id).cloned())
    }

    /// Replaces the group identified by `group.id`.
    ///
    /// Fails with `NotFound` if the id is missing or unknown.
    pub fn update_group(&self, group: Group) -> Result<Group> {
        self.write(|state| {
            let updated = replace_existing(&mut state.snapshot.groups, group)?;
            state.mark_dirty();
            Ok(updated)
        })
    }

    /// Deletes a group and every association it takes part in.
    ///
    /// Returns `false` if no such group existed.
    pub fn delete_group(&self, group_id: &str) -> Result<bool> {
        self.write(|state| {
            let s = &mut state.snapshot;
            if s.groups.remove(group_id).is_none() {
                return Ok(false);
            }
            s.group_identity.remove_all_with_left(group_id);
            s.group_role.remove_all_with_left(group_id);
            s.group_entitlement.remove_all_with_left(group_id);
            state.mark_dirty();
            Ok(true)
        })
    }

    /// Returns the identities in a group, or `None` if the group does not
    /// exist.
    pub fn get_group_identities(&self, group_id: &str) -> Result<Option<Vec<Identity>>> {
        self.read(|s| {
            s.groups
                .contains_key(group_id)
                .then(|| resolve(&s.identities, s.group_identity.rights_for(group_id)))
        })
    }

    /// Adds then removes identities (by id) in a group.
    ///
    /// Returns whether anything changed.
    pub fn patch_group_identities<S: AsRef<str>>(
        &self,
        group_id: &str,
        additions: &[S],
        removals: &[S],
    ) -> Result<bool> {
        self.write(|state| {
            ensure_exists(&state.snapshot.groups, group_id)?;
            let changed = state
                .snapshot
                .group_identity
                .patch_left(group_id, additions, removals);
            Ok(state.mark_dirty_if(changed))
        })
    }

    /// Returns the roles assigned to a group, or `None` if the group does not
    /// exist.
    pub fn get_group_roles(&self, group_id: &str) -> Result<Option<Vec<Role>>> {
        self.read(|s| {
            s.groups
                .contains_key(group_id)
                .then(|| resolve(&s.roles, s.group_role.rights_for(group_id)))
        })
    }

    /// Adds then removes roles (by id) assigned to a group.
    pub fn patch_group_roles<S: AsRef<str>>(
        &self,
        group_id: &str,
        additions: &[S],
        removals: &[S],
    ) -> Result<bool> {
        self.write(|state| {
            ensure_exists(&state.snapshot.groups, group_id)?;
            let changed = state
                .snapshot
                .group_role
                .patch_left(group_id, additions, removals);
            Ok(state.mark_dirty_if(changed))
        })
    }

    /// Returns the entitlements granted to a group, or `None` if the group
    /// does not exist.
    pub fn get_group_entitlements(&self, group_id: &str) -> Result<Option<Vec<EntityEntitlement>>> {
        self.read(|s| {
            s.groups.contains_key(group_id).then(|| {
                s.group_entitlement
                    .rights_for(group_id)
                    .into_iter()
                    .map(EntityEntitlement::from_key)
                    .collect()
            })
        })
    }

    /// Grants then revokes entitlements for a group.
    pub fn patch_group_entitlements(
        &self,
        group_id: &str,
        additions: &[EntityEntitlement],
        removals: &[EntityEntitlement],
    ) -> Result<bool> {
        let additions = encode_all(additions);
        let removals = encode_all(removals);
        self.write(|state| {
            ensure_exists(&state.snapshot.groups, group_id)?;
            let changed = state
                .snapshot
                .group_entitlement
                .patch_left(group_id, additions.as_slice(), removals.as_slice());
            Ok(state.mark_dirty_if(changed))
        })
    }
}

/// Encodes entitlements as relationship keys.
pub(super) fn encode_all(entitlements: &[EntityEntitlement]) -> Vec<String> {
    entitlements.iter().map(EntityEntitlement::to_key).collect()
}
