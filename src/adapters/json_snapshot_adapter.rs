//! JSON file snapshot store adapter.
//!
//! One JSON document holding an array of row objects keyed by canonical
//! column name, two-space indented. Overwritten wholesale on each save.

use log::warn;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::error::TenenciasError;
use crate::domain::record::Snapshot;
use crate::ports::snapshot_port::SnapshotStore;

pub struct JsonSnapshotAdapter {
    path: PathBuf,
}

impl JsonSnapshotAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotAdapter {
    fn save(&self, snapshot: &Snapshot) -> Result<(), TenenciasError> {
        let json = serde_json::to_string_pretty(snapshot).map_err(|e| {
            TenenciasError::Persistence {
                reason: format!("failed to serialize snapshot: {e}"),
            }
        })?;
        // Write-temp-then-rename so an interrupted save never leaves a
        // half-written baseline behind.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, TenenciasError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&content) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                // A corrupt baseline reads as "no baseline"; the next
                // end-of-day save replaces it.
                warn!(
                    "baseline file {} is not a valid snapshot ({e}); ignoring it",
                    self.path.display()
                );
                Ok(None)
            }
        }
    }
}
