//! Read-only reference records served from the snapshot.

use serde::{Deserialize, Serialize};

/// An identity provider type that can be configured, e.g. GitHub or Okta.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableIdentityProvider {
    /// Provider identifier.
    pub id: String,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// HTTP methods a capability can advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CapabilityMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

/// An API endpoint together with the methods the backend implements for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    /// Endpoint path, e.g. `/groups`.
    pub endpoint: String,

    /// Supported methods.
    pub methods: Vec<CapabilityMethod>,
}

impl Capability {
    /// Returns `true` if the capability lists the method.
    pub fn supports(&self, method: CapabilityMethod) -> bool {
        self.methods.contains(&method)
    }
}
