//! Role operations.

use super::Database;
use super::groups::encode_all;
use super::snapshot::{ensure_exists, insert_new, replace_existing, resolve};
use crate::error::Result;
use crate::types::{EntityEntitlement, Group, Identity, Role};

impl Database {
    /// Returns all roles, in no particular order.
    pub fn list_roles(&self) -> Result<Vec<Role>> {
        self.read(|s| s.roles.values().cloned().collect())
    }

    /// Creates a role. Its id becomes its name.
    pub fn add_role(&self, role: Role) -> Result<Role> {
        self.write(|state| {
            let added = insert_new(&mut state.snapshot.roles, role)?;
            state.mark_dirty();
            Ok(added)
        })
    }

    /// Returns the role with the given id.
    pub fn get_role(&self, role_id: &str) -> Result<Option<Role>> {
        self.read(|s| s.roles.get(role_id).cloned())
    }

    /// Replaces the role identified by `role.id`.
    pub fn update_role(&self, role: Role) -> Result<Role> {
        self.write(|state| {
            let updated = replace_existing(&mut state.snapshot.roles, role)?;
            state.mark_dirty();
            Ok(updated)
        })
    }

    /// Deletes a role, unassigning it from groups and identities and dropping
    /// its entitlements.
    pub fn delete_role(&self, role_id: &str) -> Result<bool> {
        self.write(|state| {
            let s = &mut state.snapshot;
            if s.roles.remove(role_id).is_none() {
                return Ok(false);
            }
            s.group_role.remove_all_with_right(role_id);
            s.identity_role.remove_all_with_right(role_id);
            s.role_entitlement.remove_all_with_left(role_id);
            state.mark_dirty();
            Ok(true)
        })
    }

    /// Returns the groups a role is assigned to, or `None` if the role does
    /// not exist.
    pub fn get_role_groups(&self, role_id: &str) -> Result<Option<Vec<Group>>> {
        self.read(|s| {
            s.roles
                .contains_key(role_id)
                .then(|| resolve(&s.groups, s.group_role.lefts_for(role_id)))
        })
    }

    /// Returns the identities a role is assigned to directly, or `None` if the
    /// role does not exist.
    pub fn get_role_identities(&self, role_id: &str) -> Result<Option<Vec<Identity>>> {
        self.read(|s| {
            s.roles
                .contains_key(role_id)
                .then(|| resolve(&s.identities, s.identity_role.lefts_for(role_id)))
        })
    }

    /// Returns the entitlements of a role, or `None` if the role does not
    /// exist.
    pub fn get_role_entitlements(&self, role_id: &str) -> Result<Option<Vec<EntityEntitlement>>> {
        self.read(|s| {
            s.roles.contains_key(role_id).then(|| {
                s.role_entitlement
                    .rights_for(role_id)
                    .into_iter()
                    .map(EntityEntitlement::from_key)
                    .collect()
            })
        })
    }

    /// Grants then revokes entitlements for a role.
    pub fn patch_role_entitlements(
        &self,
        role_id: &str,
        additions: &[EntityEntitlement],
        removals: &[EntityEntitlement],
    ) -> Result<bool> {
        let additions = encode_all(additions);
        let removals = encode_all(removals);
        self.write(|state| {
            ensure_exists(&state.snapshot.roles, role_id)?;
            let changed = state.snapshot.role_entitlement.patch_left(
                role_id,
                additions.as_slice(),
                removals.as_slice(),
            );
            Ok(state.mark_dirty_if(changed))
        })
    }
}
