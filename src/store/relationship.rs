//! Many-to-many association between two identifier namespaces.

use serde::{Deserialize, Deserializer, Serialize};

/// One `(left, right)` pair of a [`Relationship`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationshipTuple {
    /// Identifier from the left namespace (e.g. a group id).
    #[serde(rename = "Left")]
    pub left: String,

    /// Identifier from the right namespace (e.g. an identity id).
    #[serde(rename = "Right")]
    pub right: String,
}

impl RelationshipTuple {
    /// Creates a tuple.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    fn is(&self, left: &str, right: &str) -> bool {
        self.left == left && self.right == right
    }
}

/// A set of `(left, right)` string pairs, queried from either side.
///
/// This is the join table of the store: each instance links two entity
/// namespaces (group ↔ identity, role ↔ entitlement, ...). A pair is stored at
/// most once; insertion order is kept but carries no meaning.
///
/// Every mutating method reports whether anything actually changed, so the
/// store only rewrites the snapshot when needed.
///
/// ## Example
///
/// ```rust
/// use rebac_admin::store::Relationship;
///
/// let mut members = Relationship::new();
/// assert!(members.add("admins", "alice"));
/// assert!(!members.add("admins", "alice")); // already present
/// members.add("devs", "alice");
///
/// assert_eq!(members.lefts_for("alice"), vec!["admins", "devs"]);
/// assert!(members.remove_all_with_right("alice"));
/// assert!(members.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Relationship {
    #[serde(rename = "Tuples")]
    tuples: Vec<RelationshipTuple>,
}

impl Relationship {
    /// Creates an empty relationship.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored pairs.
    pub fn tuples(&self) -> &[RelationshipTuple] {
        &self.tuples
    }

    /// Returns the number of stored pairs.
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// Returns `true` if no pair is stored.
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Returns `true` if the pair is stored.
    pub fn contains(&self, left: &str, right: &str) -> bool {
        self.tuples.iter().any(|t| t.is(left, right))
    }

    /// Returns every left paired with `right`.
    pub fn lefts_for(&self, right: &str) -> Vec<&str> {
        self.tuples
            .iter()
            .filter(|t| t.right == right)
            .map(|t| t.left.as_str())
            .collect()
    }

    /// Returns every right paired with `left`.
    pub fn rights_for(&self, left: &str) -> Vec<&str> {
        self.tuples
            .iter()
            .filter(|t| t.left == left)
            .map(|t| t.right.as_str())
            .collect()
    }

    /// Inserts the pair. Returns `false` if it was already present.
    pub fn add(&mut self, left: &str, right: &str) -> bool {
        if self.contains(left, right) {
            return false;
        }
        self.tuples.push(RelationshipTuple::new(left, right));
        true
    }

    /// Deletes the pair. Returns `false` if it was absent.
    pub fn remove(&mut self, left: &str, right: &str) -> bool {
        self.remove_where(|t| t.is(left, right))
    }

    /// Deletes every pair with the given left. Returns `true` if any was
    /// removed.
    pub fn remove_all_with_left(&mut self, left: &str) -> bool {
        self.remove_where(|t| t.left == left)
    }

    /// Deletes every pair with the given right. Returns `true` if any was
    /// removed.
    pub fn remove_all_with_right(&mut self, right: &str) -> bool {
        self.remove_where(|t| t.right == right)
    }

    /// Adds `(left, r)` for every `r` in `additions`, then removes `(left, r)`
    /// for every `r` in `removals`.
    ///
    /// Items that are already in the requested state are skipped. Returns
    /// `true` if at least one pair changed.
    pub fn patch_left<S: AsRef<str>>(&mut self, left: &str, additions: &[S], removals: &[S]) -> bool {
        let mut changed = false;
        for right in additions {
            changed |= self.add(left, right.as_ref());
        }
        for right in removals {
            changed |= self.remove(left, right.as_ref());
        }
        changed
    }

    /// Adds `(l, right)` for every `l` in `additions`, then removes
    /// `(l, right)` for every `l` in `removals`.
    ///
    /// Returns `true` if at least one pair changed.
    pub fn patch_right<S: AsRef<str>>(&mut self, right: &str, additions: &[S], removals: &[S]) -> bool {
        let mut changed = false;
        for left in additions {
            changed |= self.add(left.as_ref(), right);
        }
        for left in removals {
            changed |= self.remove(left.as_ref(), right);
        }
        changed
    }

    fn remove_where(&mut self, predicate: impl Fn(&RelationshipTuple) -> bool) -> bool {
        let before = self.tuples.len();
        self.tuples.retain(|t| !predicate(t));
        before != self.tuples.len()
    }
}

impl FromIterator<RelationshipTuple> for Relationship {
    /// Collects tuples, dropping duplicates.
    fn from_iter<I: IntoIterator<Item = RelationshipTuple>>(iter: I) -> Self {
        let mut relationship = Self::new();
        for tuple in iter {
            if !relationship.contains(&tuple.left, &tuple.right) {
                relationship.tuples.push(tuple);
            }
        }
        relationship
    }
}

impl<'de> Deserialize<'de> for Relationship {
    /// Accepts `{"Tuples": null}` and a missing `Tuples` field as empty, and
    /// drops duplicate pairs so a hand-edited snapshot cannot break the set
    /// invariant.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Repr {
            #[serde(rename = "Tuples", default)]
            tuples: Option<Vec<RelationshipTuple>>,
        }

        let repr = Repr::deserialize(deserializer)?;
        Ok(repr.tuples.unwrap_or_default().into_iter().collect())
    }
}
