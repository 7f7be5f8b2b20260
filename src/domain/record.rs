//! Sparse tabular records and cycle snapshots.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One cell of the holdings table.
///
/// `Missing` is the coercion sentinel: it serializes as JSON `null` and is
/// what a numeric column holds when its raw value does not parse as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Missing,
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Numeric view of the cell: numbers as-is, text when it parses.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse().ok(),
            Cell::Missing => None,
        }
    }
}

/// A sparse field-name → value record.
///
/// Raw records key by vendor field code (`TICK`, `PCIO`, ...); normalized
/// positions key by canonical column name. An absent field is an absent key,
/// never a placeholder value — every pipeline stage checks for presence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position {
    fields: BTreeMap<String, Cell>,
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: Cell) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Move a field to a new name; no-op when the source field is absent.
    pub fn rename(&mut self, from: &str, to: &str) {
        if let Some(value) = self.fields.remove(from) {
            self.fields.insert(to.to_string(), value);
        }
    }

    /// Drop every field the predicate rejects.
    pub fn retain(&mut self, keep: impl Fn(&str) -> bool) {
        self.fields.retain(|name, _| keep(name));
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Text content of a field; empty for absent or non-text cells.
    pub fn text(&self, name: &str) -> &str {
        match self.fields.get(name) {
            Some(Cell::Text(s)) => s,
            _ => "",
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.fields.get(name).and_then(|c| c.as_f64())
    }

    /// Numeric value with absent, blank, and missing all read as zero — the
    /// rule used when comparing against the baseline.
    pub fn number_or_zero(&self, name: &str) -> f64 {
        self.number(name).unwrap_or(0.0)
    }
}

/// One cycle's position table. Rebuilt from scratch every cycle; only the
/// snapshot persisted at end-of-day survives across cycles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    pub rows: Vec<Position>,
}

impl Snapshot {
    pub fn new(rows: Vec<Position>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Union of field names across all rows.
    pub fn columns(&self) -> BTreeSet<String> {
        self.rows
            .iter()
            .flat_map(|row| row.field_names().map(str::to_string))
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.rows.iter().any(|row| row.contains(name))
    }
}

/// Display-ready table: a snapshot narrowed to an explicit column order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Position>,
}
