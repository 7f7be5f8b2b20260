//! Final column projection.

use super::record::{ProjectedTable, Snapshot};
use super::schema;

/// Narrow the snapshot to the candidate columns that are actually present,
/// in candidate order. Fields outside the candidate list (ESPE and whatever
/// else the vendor sends) are dropped here, at the very end of the pipeline.
pub fn project(snapshot: Snapshot) -> ProjectedTable {
    let present = snapshot.columns();
    let columns: Vec<String> = schema::CANDIDATE_COLUMNS
        .iter()
        .filter(|name| present.contains(**name))
        .map(|name| name.to_string())
        .collect();

    let rows = snapshot
        .rows
        .into_iter()
        .map(|mut row| {
            row.retain(|name| columns.iter().any(|c| c == name));
            row
        })
        .collect();

    ProjectedTable { columns, rows }
}
