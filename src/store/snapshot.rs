//! The persisted aggregate of all tables and relationships.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, trace};

use super::Relationship;
use crate::error::{Error, Result};
use crate::types::{
    AvailableIdentityProvider, Capability, EntitlementSchema, Entity, Group, Identity,
    IdentityProvider, Resource, Role,
};

/// An entity table keyed by identifier.
pub type Table<E> = BTreeMap<String, E>;

/// Everything the store knows, as written to the snapshot file.
///
/// Field names follow the file layout (`Groups`, `Group2Identity`, ...).
/// Absent or `null` fields load as empty, so a snapshot written by an older
/// version, or a hand-written zero-state file listing only reference data,
/// is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Snapshot {
    /// Groups keyed by id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Table<Group>,

    /// Identities keyed by id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub identities: Table<Identity>,

    /// Roles keyed by id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Table<Role>,

    /// Identity providers keyed by id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub idps: Table<IdentityProvider>,

    /// Group id → identity id.
    #[serde(rename = "Group2Identity", default, deserialize_with = "null_as_default")]
    pub group_identity: Relationship,

    /// Group id → role id.
    #[serde(rename = "Group2Role", default, deserialize_with = "null_as_default")]
    pub group_role: Relationship,

    /// Group id → entitlement key.
    #[serde(rename = "Group2Entitlement", default, deserialize_with = "null_as_default")]
    pub group_entitlement: Relationship,

    /// Identity id → role id.
    #[serde(rename = "Identity2Role", default, deserialize_with = "null_as_default")]
    pub identity_role: Relationship,

    /// Identity id → entitlement key.
    #[serde(rename = "Identity2Entitlement", default, deserialize_with = "null_as_default")]
    pub identity_entitlement: Relationship,

    /// Role id → entitlement key.
    #[serde(rename = "Role2Entitlement", default, deserialize_with = "null_as_default")]
    pub role_entitlement: Relationship,

    /// Entitlements that can be granted.
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_entitlements: Vec<EntitlementSchema>,

    /// Identity provider types that can be configured.
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_identity_providers: Vec<AvailableIdentityProvider>,

    /// Resources entitlements can be granted on.
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_resources: Vec<Resource>,

    /// Raw authorization model text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub auth_model: String,

    /// Endpoints the backend implements.
    #[serde(default, deserialize_with = "null_as_default")]
    pub capabilities: Vec<Capability>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Stores a new entity under its natural key and returns the stored copy.
pub(crate) fn insert_new<E: Entity>(table: &mut Table<E>, mut entity: E) -> Result<E> {
    let id = entity
        .natural_key()
        .ok_or_else(|| Error::invalid_input(format!("missing {} name", E::KIND)))?
        .to_owned();

    if table.contains_key(&id) {
        debug!(kind = E::KIND, %id, "natural key already in use");
        return Err(Error::already_exists(format!("{} {id} already exists", E::KIND)));
    }

    entity.set_id(id.clone());
    table.insert(id, entity.clone());
    Ok(entity)
}

/// Replaces an existing entity wholesale.
pub(crate) fn replace_existing<E: Entity>(table: &mut Table<E>, entity: E) -> Result<E> {
    let id = entity
        .id()
        .ok_or_else(|| Error::not_found(format!("{} has no id", E::KIND)))?;
    let slot = table
        .get_mut(id)
        .ok_or_else(|| Error::not_found(format!("{} {id}", E::KIND)))?;
    *slot = entity.clone();
    Ok(entity)
}

/// Fails with `NotFound` unless `id` is in the table.
pub(crate) fn ensure_exists<E: Entity>(table: &Table<E>, id: &str) -> Result<()> {
    if table.contains_key(id) {
        Ok(())
    } else {
        Err(Error::not_found(format!("{} {id}", E::KIND)))
    }
}

/// Looks up each id, skipping ids whose entity no longer exists.
pub(crate) fn resolve<E: Entity>(table: &Table<E>, ids: Vec<&str>) -> Vec<E> {
    ids.into_iter()
        .filter_map(|id| {
            let found = table.get(id).cloned();
            if found.is_none() {
                trace!(kind = E::KIND, %id, "skipping dangling reference");
            }
            found
        })
        .collect()
}
