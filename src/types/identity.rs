//! Identities (users and service accounts).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Entity;

/// A user or machine principal known to the admin backend.
///
/// The identifier is the email address.
///
/// ## Example
///
/// ```rust
/// use rebac_admin::types::Identity;
///
/// let identity = Identity::new("jane@example.com")
///     .with_name("Jane", "Doe")
///     .with_source("local");
/// assert_eq!(identity.first_name.as_deref(), Some("Jane"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Identifier, assigned from `email` on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Unique email address.
    pub email: String,

    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Who created the identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,

    /// Origin of the identity, e.g. an identity provider name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// When the identity joined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined: Option<DateTime<Utc>>,

    /// Last successful login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,

    /// PEM certificate for certificate-based authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,

    /// Authentication method, e.g. `"password"` or `"oidc"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<String>,

    /// Number of groups the identity belongs to, as reported to clients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<u32>,

    /// Number of roles assigned to the identity, as reported to clients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<u32>,
}

impl Identity {
    /// Creates an identity with the given email and no identifier.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    /// Sets the first and last name.
    #[must_use]
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Entity for Identity {
    const KIND: &'static str = "identity";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.email)
    }
}
