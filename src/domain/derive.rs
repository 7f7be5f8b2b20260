//! Derived metrics: numeric coercion and FX-equivalent valuation.

use log::warn;

use super::record::{Cell, Snapshot};
use super::schema;

/// Coerce the numeric columns to two-decimal numbers, then price every row
/// in USD off the reference instrument.
pub fn derive_metrics(snapshot: &mut Snapshot) {
    coerce_numeric_columns(snapshot);
    add_fx_valuation(snapshot);
}

/// Values that fail coercion become [`Cell::Missing`] rather than an error;
/// the row stays in the table with that cell blanked.
fn coerce_numeric_columns(snapshot: &mut Snapshot) {
    for &name in schema::NUMERIC_COLUMNS {
        for row in &mut snapshot.rows {
            let Some(cell) = row.get(name).cloned() else {
                continue;
            };
            match cell.as_f64() {
                Some(value) => row.set(name, Cell::Number(schema::round2(value))),
                None => {
                    if let Cell::Text(raw) = &cell
                        && !raw.is_empty()
                    {
                        warn!("non-numeric value {raw:?} in column {name:?}");
                    }
                    row.set(name, Cell::Missing);
                }
            }
        }
    }
}

/// "Actual en U$S" = "Importe Actual" / reference price. When the reference
/// row is absent, or its price is missing or zero, the column is omitted for
/// the whole cycle — degraded mode, not an error.
fn add_fx_valuation(snapshot: &mut Snapshot) {
    if !snapshot.has_column(schema::TICKER)
        || !snapshot.has_column(schema::LAST_PRICE)
        || !snapshot.has_column(schema::CURRENT_VALUE)
    {
        return;
    }
    let rate = snapshot
        .rows
        .iter()
        .find(|row| row.text(schema::TICKER) == schema::FX_TICKER)
        .and_then(|row| row.number(schema::LAST_PRICE));
    let Some(rate) = rate else {
        return;
    };
    if rate == 0.0 {
        warn!("reference instrument {} has price zero; skipping USD valuation", schema::FX_TICKER);
        return;
    }
    for row in &mut snapshot.rows {
        let cell = match row.number(schema::CURRENT_VALUE) {
            Some(value) => Cell::Number(schema::round2(value / rate)),
            None => Cell::Missing,
        };
        row.set(schema::USD_VALUE, cell);
    }
}
