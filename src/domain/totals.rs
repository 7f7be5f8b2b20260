//! Aggregate totals row.

use super::record::{Cell, Position, Snapshot};
use super::schema;

/// Append the single TOTALES row. Pre-existing totals rows are dropped first,
/// so aggregating twice produces the same output. Requires the species-name
/// column; without it there is nothing to label and the snapshot is left
/// alone.
pub fn append_totals(snapshot: &mut Snapshot) {
    if !snapshot.has_column(schema::SPECIES_NAME) {
        return;
    }
    let columns = snapshot.columns();
    snapshot
        .rows
        .retain(|row| row.text(schema::SPECIES_NAME) != schema::TOTALS_LABEL);

    let mut totals = Position::new();
    for name in &columns {
        totals.set(name.clone(), Cell::text(""));
    }
    totals.set(schema::SPECIES_NAME, Cell::text(schema::TOTALS_LABEL));

    // Percentage columns stay blank; only the summable columns present in
    // this cycle's schema are filled in. Missing cells drop out of the sum.
    for &name in schema::SUMMED_COLUMNS {
        if columns.contains(name) {
            let sum: f64 = snapshot
                .rows
                .iter()
                .filter_map(|row| row.number(name))
                .sum();
            totals.set(name, Cell::Number(sum));
        }
    }

    snapshot.rows.push(totals);
}
