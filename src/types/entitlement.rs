//! Entitlements and their string encoding.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Separator between the components of an encoded entitlement.
const SEPARATOR: char = ':';

/// An entitlement granted on a specific entity: "`entitlement` on
/// `entity_type`:`entity_id`".
///
/// Entitlements are not stored as entities. Wherever one participates in a
/// relationship it is stored as its string encoding, which joins the three
/// components with `:`.
///
/// ## String Format
///
/// ```rust
/// use rebac_admin::types::EntityEntitlement;
///
/// let e = EntityEntitlement::new("can_read", "controller", "foo");
/// assert_eq!(e.to_string(), "can_read:controller:foo");
///
/// let parsed: EntityEntitlement = "can_read:controller:foo".parse().unwrap();
/// assert_eq!(parsed, e);
/// ```
///
/// Decoding never fails: it splits into at most four pieces and keeps the
/// first three, so missing components come back empty and anything after a
/// third separator is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityEntitlement {
    /// The entitlement (relation) name, e.g. `can_read`.
    pub entitlement: String,

    /// The type of the entity the entitlement applies to.
    pub entity_type: String,

    /// The identifier of the entity the entitlement applies to.
    pub entity_id: String,
}

impl EntityEntitlement {
    /// Creates an entitlement.
    pub fn new(
        entitlement: impl Into<String>,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        Self {
            entitlement: entitlement.into(),
            entity_type: entity_type.into(),
            entity_id: entity_id.into(),
        }
    }

    /// Decodes an entitlement from its relationship key.
    pub fn from_key(key: &str) -> Self {
        let mut parts = key.splitn(4, SEPARATOR);
        let mut next = || parts.next().unwrap_or_default().to_owned();
        Self {
            entitlement: next(),
            entity_type: next(),
            entity_id: next(),
        }
    }

    /// Encodes the entitlement as a relationship key.
    pub fn to_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EntityEntitlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.entitlement, self.entity_type, self.entity_id
        )
    }
}

impl FromStr for EntityEntitlement {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_key(s))
    }
}

/// Describes an entitlement that may be granted: which entity type it
/// applies to and which receiver type may hold it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementSchema {
    /// The entitlement (relation) name.
    pub entitlement: String,

    /// The entity type the entitlement is defined on.
    pub entity_type: String,

    /// The type of principal that can receive the entitlement.
    pub receiver_type: String,
}
