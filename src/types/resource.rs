//! Resources that entitlements can be granted on.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The entity a [`Resource`] refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceEntity {
    /// Entity identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Entity type, e.g. `controller` or `model`.
    #[serde(rename = "type")]
    pub entity_type: String,
}

/// A resource with an optional parent, forming a hierarchy such as
/// controller → model → application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// The entity this resource represents.
    pub entity: ResourceEntity,

    /// The enclosing resource, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Resource>>,
}

impl Resource {
    /// Creates a top-level resource.
    pub fn new(
        entity_type: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            entity: ResourceEntity {
                id: id.into(),
                name: name.into(),
                entity_type: entity_type.into(),
            },
            parent: None,
        }
    }

    /// Sets the parent resource.
    #[must_use]
    pub fn with_parent(mut self, parent: Resource) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }
}

/// Narrows [`Database::list_resources`](crate::Database::list_resources).
///
/// An empty filter returns the stored resources unchanged. Otherwise the
/// hierarchy is flattened first, so ancestors that only appear as a
/// `parent` can match too.
///
/// ```rust
/// use rebac_admin::types::ResourceFilter;
///
/// let filter = ResourceFilter::new().with_entity_type("model");
/// assert!(!filter.is_empty());
/// assert!(ResourceFilter::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    /// Only return resources of this entity type.
    pub entity_type: Option<String>,

    /// Only return resources with this entity name.
    pub entity_name: Option<String>,
}

impl ResourceFilter {
    /// Creates a filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to an entity type.
    #[must_use]
    pub fn with_entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    /// Restricts results to an entity name.
    #[must_use]
    pub fn with_entity_name(mut self, entity_name: impl Into<String>) -> Self {
        self.entity_name = Some(entity_name.into());
        self
    }

    /// Returns `true` if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.entity_type.is_none() && self.entity_name.is_none()
    }

    fn matches(&self, entity: &ResourceEntity) -> bool {
        self.entity_type
            .as_deref()
            .is_none_or(|t| entity.entity_type == t)
            && self
                .entity_name
                .as_deref()
                .is_none_or(|n| entity.name == n)
    }

    /// Applies the filter to a list of resources.
    ///
    /// Flattening walks the hierarchy one level at a time, leaves first. Each
    /// entity is kept once, in the form it was first seen, together with its
    /// parent chain.
    pub fn apply(&self, resources: &[Resource]) -> Vec<Resource> {
        if self.is_empty() {
            return resources.to_vec();
        }

        let mut seen = HashSet::new();
        let mut flattened = Vec::new();
        let mut level: Vec<&Resource> = resources.iter().collect();
        while !level.is_empty() {
            let mut parents = Vec::new();
            for resource in level {
                if let Some(parent) = resource.parent.as_deref() {
                    parents.push(parent);
                }
                if seen.insert(&resource.entity) {
                    flattened.push(resource);
                }
            }
            level = parents;
        }

        flattened
            .into_iter()
            .filter(|resource| self.matches(&resource.entity))
            .cloned()
            .collect()
    }
}
