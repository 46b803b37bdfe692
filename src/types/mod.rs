//! Core types for the admin store.
//!
//! - Entities kept in tables: [`Group`], [`Identity`], [`Role`],
//!   [`IdentityProvider`], all implementing [`Entity`]
//! - [`EntityEntitlement`] and its `type:entity_type:entity_id` key encoding
//! - Reference data: [`EntitlementSchema`], [`AvailableIdentityProvider`],
//!   [`Resource`], [`Capability`]
//! - Association patches: [`Patch`], [`PatchOp`]

mod entitlement;
mod entity;
mod group;
mod identity;
mod identity_provider;
mod patch;
mod reference;
mod resource;
mod role;

pub use entitlement::{EntitlementSchema, EntityEntitlement};
pub use entity::Entity;
pub use group::Group;
pub use identity::Identity;
pub use identity_provider::IdentityProvider;
pub use patch::{Patch, PatchOp};
pub use reference::{AvailableIdentityProvider, Capability, CapabilityMethod};
pub use resource::{Resource, ResourceEntity, ResourceFilter};
pub use role::Role;
