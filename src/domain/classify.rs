//! Instrument type classification.

use super::record::{Cell, Snapshot};
use super::schema;

/// Replace coded TIPO values with their asset category. Unknown codes pass
/// through unchanged, and a "Cash" species is always "Efectivo" no matter
/// what its code says. Skipped entirely when no row carries a TIPO field.
pub fn classify(snapshot: &mut Snapshot) {
    if !snapshot.has_column(schema::ASSET_TYPE) {
        return;
    }
    for row in &mut snapshot.rows {
        if let Some(code) = row.get(schema::ASSET_TYPE).and_then(code_string)
            && let Some(category) = schema::asset_category(&code)
        {
            row.set(schema::ASSET_TYPE, Cell::text(category));
        }
        if row.text(schema::SPECIES_CODE) == schema::CASH_SPECIES {
            row.set(schema::ASSET_TYPE, Cell::text(schema::CASH_CATEGORY));
        }
    }
}

/// TIPO codes arrive as text but some feeds send them numeric.
fn code_string(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Text(s) => Some(s.clone()),
        Cell::Number(n) if n.fract() == 0.0 => Some(format!("{}", *n as i64)),
        Cell::Number(n) => Some(n.to_string()),
        Cell::Missing => None,
    }
}
