//! The trait shared by every record kept in an entity table.
//!
//! Groups, identities, roles and identity providers all follow the same
//! identifier policy: on creation the identifier is copied from a
//! human-meaningful attribute (the *natural key*), and it never changes
//! afterwards. Implementing [`Entity`] lets the store apply that policy,
//! and the uniqueness check that goes with it, once for all four kinds.
//!
//! ```rust
//! use rebac_admin::types::{Entity, Group, Identity};
//!
//! let group = Group::new("admins");
//! assert_eq!(group.natural_key(), Some("admins"));
//! assert_eq!(group.id(), None);
//!
//! let identity = Identity::new("a@b.com");
//! assert_eq!(identity.natural_key(), Some("a@b.com"));
//! assert_eq!(<Identity as Entity>::KIND, "identity");
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record stored in an entity table, addressed by a string identifier.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Human-readable kind, used in error messages and log fields.
    const KIND: &'static str;

    /// Returns the identifier, if one has been assigned.
    fn id(&self) -> Option<&str>;

    /// Assigns the identifier.
    fn set_id(&mut self, id: String);

    /// Returns the natural key the identifier is derived from.
    ///
    /// `None` means the record lacks the attribute and cannot be created.
    fn natural_key(&self) -> Option<&str>;
}
