//! Add/remove patches for associations.

use serde::{Deserialize, Serialize};

/// The operation of a single association patch item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    /// Associate the value.
    Add,
    /// Dissociate the value.
    Remove,
}

/// A batch of association changes, split by operation.
///
/// Admin API clients send patches as a list of `{op, value}` items; the store
/// takes the additions and removals as two lists. Collecting the items keeps
/// their order within each list.
///
/// ```rust
/// use rebac_admin::types::{Patch, PatchOp};
///
/// let patch: Patch<&str> = [
///     (PatchOp::Add, "alice"),
///     (PatchOp::Remove, "bob"),
///     (PatchOp::Add, "carol"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(patch.additions, vec!["alice", "carol"]);
/// assert_eq!(patch.removals, vec!["bob"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch<T> {
    /// Values to associate, applied first.
    pub additions: Vec<T>,

    /// Values to dissociate, applied after the additions.
    pub removals: Vec<T>,
}

impl<T> Patch<T> {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self {
            additions: Vec::new(),
            removals: Vec::new(),
        }
    }

    /// Appends a value to the list selected by `op`.
    pub fn push(&mut self, op: PatchOp, value: T) {
        match op {
            PatchOp::Add => self.additions.push(value),
            PatchOp::Remove => self.removals.push(value),
        }
    }

    /// Returns `true` if the patch has no items.
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(PatchOp, T)> for Patch<T> {
    fn from_iter<I: IntoIterator<Item = (PatchOp, T)>>(iter: I) -> Self {
        let mut patch = Self::new();
        for (op, value) in iter {
            patch.push(op, value);
        }
        patch
    }
}
