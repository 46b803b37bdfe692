//! Snapshot load / persist / reset.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info, warn};

use super::{Database, Snapshot, State};
use crate::error::{Error, Result};

impl Database {
    /// Replaces the in-memory state with the snapshot on disk.
    ///
    /// Reads the primary snapshot, or the zero-state file when the primary
    /// does not exist, or an empty snapshot when neither exists. Fields
    /// missing from the file load as empty. Clears the dirty flag.
    pub fn load(&self) -> Result<()> {
        let mut state = self.state.write();
        state.snapshot = self.read_current()?;
        state.dirty = false;
        Ok(())
    }

    /// Writes the in-memory state to the primary snapshot file, if it has
    /// unpersisted changes.
    pub fn persist(&self) -> Result<()> {
        let mut state = self.state.write();
        self.persist_locked(&mut state)
    }

    /// Discards the current state and re-establishes the zero state, both in
    /// memory and in the primary snapshot file.
    pub fn reset(&self) -> Result<()> {
        let mut state = self.state.write();
        let _io = self.persistence.lock();

        state.snapshot = read_snapshot_file(&self.config.zero_state_path)?;
        state.dirty = true;
        self.write_snapshot_file(&state.snapshot)?;
        state.dirty = false;

        info!(path = %self.config.state_path.display(), "store reset to zero state");
        Ok(())
    }

    /// Reads the snapshot that is current on disk.
    pub(crate) fn read_current(&self) -> Result<Snapshot> {
        let _io = self.persistence.lock();
        if self.config.state_path.exists() {
            read_snapshot_file(&self.config.state_path)
        } else {
            read_snapshot_file(&self.config.zero_state_path)
        }
    }

    /// Writes the state if it is dirty. The caller holds the state lock.
    pub(crate) fn persist_locked(&self, state: &mut State) -> Result<()> {
        if !state.dirty {
            return Ok(());
        }
        let _io = self.persistence.lock();
        self.write_snapshot_file(&state.snapshot)?;
        state.dirty = false;
        Ok(())
    }

    fn write_snapshot_file(&self, snapshot: &Snapshot) -> Result<()> {
        let path = &self.config.state_path;
        let raw = encode_snapshot(snapshot, self.config.indent)?;
        fs::write(path, raw).map_err(|err| {
            warn!(path = %path.display(), error = %err, "failed to persist state");
            Error::storage_io(format!("failed to persist state to {}", path.display()))
                .with_source(err)
        })?;
        debug!(path = %path.display(), "persisted state");
        Ok(())
    }
}

/// Parses a snapshot file. A missing file yields an empty snapshot.
fn read_snapshot_file(path: &Path) -> Result<Snapshot> {
    if !path.exists() {
        debug!(path = %path.display(), "snapshot file absent, using empty state");
        return Ok(Snapshot::default());
    }

    let raw = fs::read(path).map_err(|err| {
        Error::storage_io(format!("failed to read state file {}", path.display())).with_source(err)
    })?;
    let snapshot = serde_json::from_slice(&raw).map_err(|err| {
        Error::serialization(format!(
            "failed to parse state file {}: {}",
            path.display(),
            err
        ))
        .with_source(err)
    })?;

    debug!(path = %path.display(), "loaded state");
    Ok(snapshot)
}

/// Serializes a snapshot, indented by `indent` spaces (compact when zero).
fn encode_snapshot(snapshot: &Snapshot, indent: usize) -> Result<Vec<u8>> {
    if indent == 0 {
        return Ok(serde_json::to_vec(snapshot)?);
    }

    let indent = " ".repeat(indent);
    let mut raw = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut raw, PrettyFormatter::with_indent(indent.as_bytes()));
    snapshot.serialize(&mut serializer)?;
    Ok(raw)
}
