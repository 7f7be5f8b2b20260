//! Schema normalization: vendor field codes to canonical column names.

use super::record::{Position, Snapshot};
use super::schema;

/// Rename every field with a rename-table entry; fields without one keep
/// their vendor name. Absent codes are silently skipped, never an error, so
/// each cycle's schema is whatever subset the feed actually sent.
pub fn normalize(raw: Vec<Position>) -> Snapshot {
    let mut rows = raw;
    for row in &mut rows {
        for &(code, name) in schema::RENAME_TABLE {
            if code != name {
                row.rename(code, name);
            }
        }
    }
    Snapshot::new(rows)
}
