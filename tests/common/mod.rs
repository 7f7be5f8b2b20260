#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tenencias::domain::error::TenenciasError;
use tenencias::domain::record::{Cell, Position, ProjectedTable, Snapshot};
use tenencias::ports::connector_port::ConnectorPort;
use tenencias::ports::presentation_port::PresentationPort;
use tenencias::ports::snapshot_port::SnapshotStore;

/// Connector serving pre-scripted batches, one per fetch.
pub struct MockConnector {
    batches: VecDeque<Result<Vec<Position>, String>>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self {
            batches: VecDeque::new(),
        }
    }

    pub fn with_batch(mut self, rows: Vec<Position>) -> Self {
        self.batches.push_back(Ok(rows));
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.batches.push_back(Err(reason.to_string()));
        self
    }
}

impl ConnectorPort for MockConnector {
    fn connect(&mut self) -> Result<(), TenenciasError> {
        Ok(())
    }

    fn fetch(&mut self, _account: u32) -> Result<Vec<Position>, TenenciasError> {
        match self.batches.pop_front() {
            Some(Ok(rows)) => Ok(rows),
            Some(Err(reason)) => Err(TenenciasError::Connection { reason }),
            None => Ok(Vec::new()),
        }
    }
}

/// In-memory snapshot store that counts saves.
#[derive(Default)]
pub struct MemoryStore {
    saved: RefCell<Option<Snapshot>>,
    saves: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }

    pub fn saved(&self) -> Option<Snapshot> {
        self.saved.borrow().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&self, snapshot: &Snapshot) -> Result<(), TenenciasError> {
        *self.saves.borrow_mut() += 1;
        *self.saved.borrow_mut() = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, TenenciasError> {
        Ok(self.saved.borrow().clone())
    }
}

#[derive(Default)]
pub struct SinkLog {
    pub tables: Vec<ProjectedTable>,
    pub connection_events: Vec<bool>,
}

/// Presentation sink that records everything it receives.
pub struct RecordingSink {
    log: Rc<RefCell<SinkLog>>,
}

impl RecordingSink {
    pub fn new() -> (Self, Rc<RefCell<SinkLog>>) {
        let log = Rc::new(RefCell::new(SinkLog::default()));
        (Self { log: Rc::clone(&log) }, log)
    }
}

impl PresentationPort for RecordingSink {
    fn render(&mut self, table: &ProjectedTable) {
        self.log.borrow_mut().tables.push(table.clone());
    }

    fn connection_changed(&mut self, connected: bool) {
        self.log.borrow_mut().connection_events.push(connected);
    }
}

/// Raw vendor-coded record as the connector would return it.
pub fn raw_record(fields: &[(&str, &str)]) -> Position {
    let mut row = Position::new();
    for &(code, value) in fields {
        row.set(code, Cell::text(value));
    }
    row
}

pub fn raw_holding(name: &str, ticker: &str, price: &str, value: &str) -> Position {
    raw_record(&[
        ("AMPL", name),
        ("TICK", ticker),
        ("PCIO", price),
        ("IMPO", value),
    ])
}

pub fn find_row<'a>(table: &'a ProjectedTable, ticker: &str) -> &'a Position {
    table
        .rows
        .iter()
        .find(|row| row.text("Ticker") == ticker)
        .unwrap_or_else(|| panic!("no row for ticker {ticker}"))
}

pub fn totals_row(table: &ProjectedTable) -> &Position {
    table
        .rows
        .iter()
        .find(|row| row.text("Nombre de la Especie") == "TOTALES")
        .expect("no totals row")
}
