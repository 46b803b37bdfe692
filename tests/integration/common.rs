//! Common test harness for rebac-admin integration tests.

use std::{fs, path::PathBuf, sync::OnceLock};

use rebac_admin::{Database, StoreConfig};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Zero-state fixture shipped with the tests.
pub const ZERO_STATE_FIXTURE: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/state.zero.json");

static TRACING: OnceLock<()> = OnceLock::new();

/// Install a test subscriber once, honouring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A temporary directory holding a copy of the zero-state fixture.
pub struct TestFixture {
    dir: TempDir,
}

impl TestFixture {
    /// Create a fixture seeded with the zero-state file.
    pub fn create() -> Self {
        init_tracing();
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::copy(ZERO_STATE_FIXTURE, dir.path().join("state.zero.json"))
            .expect("Failed to copy zero-state fixture");
        Self { dir }
    }

    /// Create a fixture without a zero-state file.
    pub fn empty() -> Self {
        init_tracing();
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Store configuration pointing into the fixture directory.
    pub fn config(&self) -> StoreConfig {
        StoreConfig::new(self.state_path(), self.zero_state_path())
    }

    /// Path of the primary snapshot.
    pub fn state_path(&self) -> PathBuf {
        self.dir.path().join("state.json")
    }

    /// Path of the zero-state snapshot.
    pub fn zero_state_path(&self) -> PathBuf {
        self.dir.path().join("state.zero.json")
    }

    /// Open a new store over the fixture files.
    pub fn open(&self) -> Database {
        Database::open(self.config()).expect("Failed to open store")
    }

    /// Parse the primary snapshot file as raw JSON.
    pub fn state_json(&self) -> serde_json::Value {
        let raw = fs::read(self.state_path()).expect("Failed to read state file");
        serde_json::from_slice(&raw).expect("State file is not JSON")
    }
}
