//! Read-only reference data.
//!
//! These records come from the snapshot (usually seeded by the zero-state
//! file) and are never modified by the store.

use super::Database;
use crate::error::Result;
use crate::types::{
    AvailableIdentityProvider, Capability, EntitlementSchema, Resource, ResourceFilter,
};

impl Database {
    /// Returns the authorization model text.
    pub fn get_auth_model(&self) -> Result<String> {
        self.read(|s| s.auth_model.clone())
    }

    /// Returns the entitlements that can be granted.
    pub fn list_entitlement_schema(&self) -> Result<Vec<EntitlementSchema>> {
        self.read(|s| s.user_entitlements.clone())
    }

    /// Returns the identity provider types that can be configured.
    pub fn list_available_identity_providers(&self) -> Result<Vec<AvailableIdentityProvider>> {
        self.read(|s| s.available_identity_providers.clone())
    }

    /// Returns the resources matching `filter`. See [`ResourceFilter::apply`].
    pub fn list_resources(&self, filter: &ResourceFilter) -> Result<Vec<Resource>> {
        self.read(|s| filter.apply(&s.user_resources))
    }

    /// Returns the endpoints the backend implements.
    pub fn list_capabilities(&self) -> Result<Vec<Capability>> {
        self.read(|s| s.capabilities.clone())
    }
}
