//! Integration tests for the rebac-admin store.
//!
//! Every test works in its own temporary directory, seeded from
//! `tests/fixtures/state.zero.json`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # With store logging
//! RUST_LOG=rebac_admin=debug cargo test --test integration -- --nocapture
//! ```

mod common;
mod concurrency_tests;
mod persistence_tests;
mod store_tests;
