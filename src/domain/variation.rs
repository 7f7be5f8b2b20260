//! Day-over-day variation against the persisted end-of-day baseline.

use std::collections::HashMap;

use super::record::{Cell, Snapshot};
use super::schema;

struct BaselineEntry {
    price: f64,
    value: f64,
}

/// Initialize "% Diario" and "Resultado del dia" to 0.0 on every row, then
/// overwrite them for tickers that also exist in the baseline. Both columns
/// are therefore always present, baseline or not.
///
/// Positions only on one side (opened or closed since the baseline) keep the
/// zero default: daily variation is undefined without a same-ticker
/// predecessor.
pub fn apply_daily_variation(snapshot: &mut Snapshot, baseline: Option<&Snapshot>) {
    if snapshot.is_empty() {
        return;
    }
    for row in &mut snapshot.rows {
        row.set(schema::DAILY_PCT, Cell::Number(0.0));
        row.set(schema::DAILY_RESULT, Cell::Number(0.0));
    }

    let Some(baseline) = baseline else {
        return;
    };
    if !baseline.has_column(schema::TICKER) || !snapshot.has_column(schema::TICKER) {
        return;
    }

    let previous = baseline_lookup(baseline);
    for row in &mut snapshot.rows {
        let ticker = row.text(schema::TICKER);
        if ticker.is_empty() || ticker == schema::TOTALS_LABEL {
            continue;
        }
        let Some(prev) = previous.get(ticker) else {
            continue;
        };
        let price = row.number_or_zero(schema::LAST_PRICE);
        let value = row.number_or_zero(schema::CURRENT_VALUE);

        // A zero previous price leaves the 0.0 default rather than dividing.
        if prev.price != 0.0 {
            let pct = (price - prev.price) / prev.price * 100.0;
            row.set(schema::DAILY_PCT, Cell::Number(schema::round2(pct)));
        }
        row.set(
            schema::DAILY_RESULT,
            Cell::Number(schema::round2(value - prev.value)),
        );
    }
}

/// Ticker → previous price and valuation, with the baseline's own totals row
/// excluded. Blank or missing numbers read as zero.
fn baseline_lookup(baseline: &Snapshot) -> HashMap<String, BaselineEntry> {
    let mut map = HashMap::new();
    for row in &baseline.rows {
        let ticker = row.text(schema::TICKER);
        if ticker.is_empty() || ticker == schema::TOTALS_LABEL {
            continue;
        }
        map.insert(
            ticker.to_string(),
            BaselineEntry {
                price: row.number_or_zero(schema::LAST_PRICE),
                value: row.number_or_zero(schema::CURRENT_VALUE),
            },
        );
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Position;
    use approx::assert_relative_eq;

    fn position(ticker: &str, price: f64, value: f64) -> Position {
        let mut row = Position::new();
        row.set(schema::TICKER, Cell::text(ticker));
        row.set(schema::LAST_PRICE, Cell::Number(price));
        row.set(schema::CURRENT_VALUE, Cell::Number(value));
        row
    }

    fn daily(row: &Position) -> (f64, f64) {
        (
            row.number_or_zero(schema::DAILY_PCT),
            row.number_or_zero(schema::DAILY_RESULT),
        )
    }

    #[test]
    fn no_baseline_leaves_zero_defaults() {
        let mut snapshot = Snapshot::new(vec![position("AAPL", 110.0, 1100.0)]);
        apply_daily_variation(&mut snapshot, None);

        assert_eq!(
            snapshot.rows[0].get(schema::DAILY_PCT),
            Some(&Cell::Number(0.0))
        );
        assert_eq!(
            snapshot.rows[0].get(schema::DAILY_RESULT),
            Some(&Cell::Number(0.0))
        );
    }

    #[test]
    fn empty_snapshot_gets_no_columns() {
        let mut snapshot = Snapshot::default();
        apply_daily_variation(&mut snapshot, None);
        assert!(!snapshot.has_column(schema::DAILY_PCT));
    }

    #[test]
    fn matched_ticker_gets_price_and_result_deltas() {
        let baseline = Snapshot::new(vec![position("AAPL", 100.0, 1000.0)]);
        let mut snapshot = Snapshot::new(vec![position("AAPL", 110.0, 1100.0)]);
        apply_daily_variation(&mut snapshot, Some(&baseline));

        let (pct, result) = daily(&snapshot.rows[0]);
        assert_relative_eq!(pct, 10.0);
        assert_relative_eq!(result, 100.0);
    }

    #[test]
    fn deltas_are_rounded() {
        let baseline = Snapshot::new(vec![position("GGAL", 3.0, 300.0)]);
        let mut snapshot = Snapshot::new(vec![position("GGAL", 3.1, 310.004)]);
        apply_daily_variation(&mut snapshot, Some(&baseline));

        let (pct, result) = daily(&snapshot.rows[0]);
        assert_relative_eq!(pct, 3.33);
        assert_relative_eq!(result, 10.0);
    }

    #[test]
    fn zero_previous_price_skips_percentage_only() {
        let baseline = Snapshot::new(vec![position("NEWY", 0.0, 500.0)]);
        let mut snapshot = Snapshot::new(vec![position("NEWY", 10.0, 700.0)]);
        apply_daily_variation(&mut snapshot, Some(&baseline));

        let (pct, result) = daily(&snapshot.rows[0]);
        assert_relative_eq!(pct, 0.0);
        assert_relative_eq!(result, 200.0);
    }

    #[test]
    fn unmatched_tickers_keep_defaults() {
        let baseline = Snapshot::new(vec![position("GONE", 50.0, 500.0)]);
        let mut snapshot = Snapshot::new(vec![position("FRESH", 20.0, 200.0)]);
        apply_daily_variation(&mut snapshot, Some(&baseline));

        assert_eq!(daily(&snapshot.rows[0]), (0.0, 0.0));
    }

    #[test]
    fn baseline_totals_row_is_excluded() {
        let mut totals = position(schema::TOTALS_LABEL, 1.0, 9999.0);
        totals.set(schema::SPECIES_NAME, Cell::text(schema::TOTALS_LABEL));
        let baseline = Snapshot::new(vec![position("AAPL", 100.0, 1000.0), totals]);

        let mut snapshot = Snapshot::new(vec![position(schema::TOTALS_LABEL, 2.0, 8888.0)]);
        apply_daily_variation(&mut snapshot, Some(&baseline));

        // The current TOTALES row never diffs, even against itself.
        assert_eq!(daily(&snapshot.rows[0]), (0.0, 0.0));
    }

    #[test]
    fn missing_current_numbers_read_as_zero() {
        let baseline = Snapshot::new(vec![position("AAPL", 100.0, 1000.0)]);
        let mut current = Position::new();
        current.set(schema::TICKER, Cell::text("AAPL"));
        let mut snapshot = Snapshot::new(vec![current]);
        apply_daily_variation(&mut snapshot, Some(&baseline));

        let (pct, result) = daily(&snapshot.rows[0]);
        assert_relative_eq!(pct, -100.0);
        assert_relative_eq!(result, -1000.0);
    }
}
