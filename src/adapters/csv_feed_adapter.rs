//! CSV feed connector adapter.
//!
//! File-backed stand-in for the live brokerage connector, used for offline
//! runs and tests. The header row holds the vendor field codes (TICK, PCIO,
//! IMPO, ...) and every cell is read as raw text; numeric coercion belongs
//! to the pipeline, exactly as with the live feed.

use std::fs;
use std::path::PathBuf;

use crate::domain::error::TenenciasError;
use crate::domain::record::{Cell, Position};
use crate::ports::connector_port::ConnectorPort;

pub struct CsvFeedAdapter {
    path: PathBuf,
}

impl CsvFeedAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ConnectorPort for CsvFeedAdapter {
    fn connect(&mut self) -> Result<(), TenenciasError> {
        if self.path.is_file() {
            Ok(())
        } else {
            Err(TenenciasError::Connection {
                reason: format!("feed file {} not found", self.path.display()),
            })
        }
    }

    fn fetch(&mut self, _account: u32) -> Result<Vec<Position>, TenenciasError> {
        let content = fs::read_to_string(&self.path).map_err(|e| TenenciasError::Connection {
            reason: format!("failed to read {}: {e}", self.path.display()),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let headers = rdr
            .headers()
            .map_err(|e| TenenciasError::Feed {
                reason: format!("CSV parse error: {e}"),
            })?
            .clone();

        let mut records = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| TenenciasError::Feed {
                reason: format!("CSV parse error: {e}"),
            })?;
            let mut row = Position::new();
            for (code, value) in headers.iter().zip(record.iter()) {
                // Empty cells are absent fields, keeping records sparse.
                if !value.is_empty() {
                    row.set(code, Cell::text(value));
                }
            }
            records.push(row);
        }
        Ok(records)
    }
}
