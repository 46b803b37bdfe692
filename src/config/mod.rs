//! Configuration types for the store.
//!
//! - [`StoreConfig`]: snapshot file locations and output layout

mod store;

pub use store::StoreConfig;
