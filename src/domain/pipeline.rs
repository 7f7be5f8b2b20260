//! One monitoring cycle, raw feed to display-ready table.
//!
//! The snapshot is an owned value handed from stage to stage:
//! normalize → classify → derive → conditional end-of-day save → daily
//! variation → totals → projection. Nothing in here is fatal; persistence
//! problems degrade to a warning and a cycle without a fresh baseline.

use log::warn;

use super::record::{Position, ProjectedTable, Snapshot};
use super::schema;
use super::{classify, derive, normalize, project, totals, variation};
use crate::ports::snapshot_port::SnapshotStore;

/// Run the full pipeline over one cycle's raw records.
///
/// The baseline is saved pre-totals: at the close the snapshot on disk is
/// the set of real positions with their derived metrics, and the variation
/// stage that follows immediately diffs against it, zeroing that cycle's
/// deltas.
pub fn run_cycle(raw: Vec<Position>, store: &dyn SnapshotStore) -> ProjectedTable {
    let mut snapshot = normalize::normalize(raw);
    classify::classify(&mut snapshot);
    derive::derive_metrics(&mut snapshot);

    if has_close_marker(&snapshot) {
        if let Err(e) = store.save(&snapshot) {
            warn!("failed to persist end-of-day snapshot: {e}");
        }
    }

    let baseline = match store.load() {
        Ok(baseline) => baseline,
        Err(e) => {
            warn!("could not read baseline snapshot: {e}");
            None
        }
    };
    variation::apply_daily_variation(&mut snapshot, baseline.as_ref());
    totals::append_totals(&mut snapshot);
    project::project(snapshot)
}

/// True when any row carries the end-of-day marker in its "Hora" field.
pub fn has_close_marker(snapshot: &Snapshot) -> bool {
    snapshot
        .rows
        .iter()
        .any(|row| row.text(schema::HOUR).eq_ignore_ascii_case(schema::CLOSE_MARKER))
}
