//! Snapshot store port: the durable end-of-day baseline.

use crate::domain::error::TenenciasError;
use crate::domain::record::Snapshot;

/// Single-baseline durable store. The medium (file, KV store, database row)
/// is an adapter concern; the pipeline only ever saves wholesale and loads
/// the latest.
pub trait SnapshotStore {
    /// Persist the snapshot, replacing any previous baseline.
    fn save(&self, snapshot: &Snapshot) -> Result<(), TenenciasError>;

    /// The last persisted baseline. `None` when nothing usable is stored —
    /// a normal state, not an error.
    fn load(&self) -> Result<Option<Snapshot>, TenenciasError>;
}
