//! Snapshot file configuration for [`Database`](crate::Database).

use std::path::PathBuf;

/// Default number of spaces used to indent the persisted snapshot.
pub const DEFAULT_INDENT: usize = 4;

/// Configuration for the snapshot files backing a store.
///
/// The store reads and writes `state_path`. When that file does not exist,
/// or on [`reset`](crate::Database::reset), it falls back to the
/// `zero_state_path` snapshot. A missing zero-state file behaves like an
/// empty snapshot.
///
/// ## Example
///
/// ```rust
/// use rebac_admin::StoreConfig;
///
/// let config = StoreConfig::builder()
///     .state_path("state.json")
///     .zero_state_path("state.zero.json")
///     .build();
/// assert_eq!(config.indent, 4);
///
/// // Compact output
/// let config = StoreConfig::builder()
///     .state_path("state.json")
///     .zero_state_path("state.zero.json")
///     .indent(0)
///     .build();
/// assert_eq!(config.indent, 0);
/// ```
#[derive(Debug, Clone, bon::Builder)]
pub struct StoreConfig {
    /// Primary snapshot file, read at the start of every operation and
    /// overwritten after every mutation.
    #[builder(into)]
    pub state_path: PathBuf,

    /// Fallback snapshot used when `state_path` is absent and on reset.
    #[builder(into)]
    pub zero_state_path: PathBuf,

    /// Indentation width of the persisted JSON. Zero writes compact JSON.
    #[builder(default = DEFAULT_INDENT)]
    pub indent: usize,
}

impl StoreConfig {
    /// Creates a configuration with the default layout.
    pub fn new(state_path: impl Into<PathBuf>, zero_state_path: impl Into<PathBuf>) -> Self {
        Self::builder()
            .state_path(state_path)
            .zero_state_path(zero_state_path)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_new_uses_default_indent() {
        let config = StoreConfig::new("state.json", "state.zero.json");
        assert_eq!(config.state_path, Path::new("state.json"));
        assert_eq!(config.zero_state_path, Path::new("state.zero.json"));
        assert_eq!(config.indent, DEFAULT_INDENT);
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::builder()
            .state_path(PathBuf::from("/tmp/a.json"))
            .zero_state_path("/tmp/b.json")
            .indent(2)
            .build();
        assert_eq!(config.state_path, Path::new("/tmp/a.json"));
        assert_eq!(config.zero_state_path, Path::new("/tmp/b.json"));
        assert_eq!(config.indent, 2);
    }
}
