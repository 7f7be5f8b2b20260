//! Plain-text table presentation adapter.
//!
//! Renders the projected snapshot as an aligned text table. The drill-down
//! payload column is suppressed from the output (the data is for per-row
//! detail views, not the table itself), mirroring how the desktop table
//! hides it.

use chrono::Local;
use std::io::{self, Write};

use crate::domain::record::{Cell, Position, ProjectedTable};
use crate::domain::schema;
use crate::ports::presentation_port::PresentationPort;

/// Columns rendered right-aligned.
const RIGHT_ALIGNED: &[&str] = &[
    schema::QUANTITY,
    schema::LAST_PRICE,
    schema::RESULT,
    schema::AVG_COST,
    schema::SABE_DIOS,
    schema::TOTAL_VAR_PCT,
    schema::CURRENT_VALUE,
    schema::DAILY_PCT,
    schema::DAILY_RESULT,
    schema::USD_VALUE,
];

pub struct TextTableAdapter<W: Write> {
    out: W,
}

impl TextTableAdapter<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TextTableAdapter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn cell_text(row: &Position, column: &str) -> String {
    match row.get(column) {
        Some(Cell::Number(n)) => format!("{n:.2}"),
        Some(Cell::Text(s)) => s.clone(),
        Some(Cell::Missing) | None => String::new(),
    }
}

impl<W: Write> PresentationPort for TextTableAdapter<W> {
    fn render(&mut self, table: &ProjectedTable) {
        let columns: Vec<&String> = table
            .columns
            .iter()
            .filter(|c| c.as_str() != schema::DETAIL)
            .collect();
        if columns.is_empty() {
            return;
        }

        let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .enumerate()
                    .map(|(i, column)| {
                        let text = cell_text(row, column);
                        widths[i] = widths[i].max(text.len());
                        text
                    })
                    .collect()
            })
            .collect();

        let _ = writeln!(
            self.out,
            "Tenencias al {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        let header: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:<width$}", c, width = widths[i]))
            .collect();
        let _ = writeln!(self.out, "{}", header.join("  "));

        for cells in &rows {
            let line: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    if RIGHT_ALIGNED.contains(&columns[i].as_str()) {
                        format!("{:>width$}", text, width = widths[i])
                    } else {
                        format!("{:<width$}", text, width = widths[i])
                    }
                })
                .collect();
            let _ = writeln!(self.out, "{}", line.join("  "));
        }
        let _ = self.out.flush();
    }

    fn connection_changed(&mut self, connected: bool) {
        let state = if connected { "conectado" } else { "desconectado" };
        let _ = writeln!(self.out, "[{state}]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Position;

    fn sample_table() -> ProjectedTable {
        let mut row = Position::new();
        row.set(schema::TICKER, Cell::text("GGAL"));
        row.set(schema::LAST_PRICE, Cell::Number(250.5));
        row.set(schema::DETAIL, Cell::text("[{...}]"));
        ProjectedTable {
            columns: vec![
                schema::TICKER.to_string(),
                schema::LAST_PRICE.to_string(),
                schema::DETAIL.to_string(),
            ],
            rows: vec![row],
        }
    }

    fn rendered(table: &ProjectedTable) -> String {
        let mut adapter = TextTableAdapter::new(Vec::new());
        adapter.render(table);
        String::from_utf8(adapter.into_inner()).unwrap()
    }

    #[test]
    fn renders_headers_and_formatted_numbers() {
        let output = rendered(&sample_table());
        assert!(output.contains("Ticker"));
        assert!(output.contains("Ultimo Precio"));
        assert!(output.contains("250.50"));
    }

    #[test]
    fn detail_column_is_hidden() {
        let output = rendered(&sample_table());
        assert!(!output.contains(schema::DETAIL));
        assert!(!output.contains("[{...}]"));
    }

    #[test]
    fn numeric_columns_right_align() {
        let output = rendered(&sample_table());
        // "Ultimo Precio" is wider than "250.50": the value is padded left.
        let row_line = output.lines().last().unwrap();
        assert!(row_line.contains("       250.50"));
    }

    #[test]
    fn missing_cells_render_blank() {
        let mut row = Position::new();
        row.set(schema::TICKER, Cell::text("GGAL"));
        row.set(schema::LAST_PRICE, Cell::Missing);
        let table = ProjectedTable {
            columns: vec![schema::TICKER.to_string(), schema::LAST_PRICE.to_string()],
            rows: vec![row],
        };
        let output = rendered(&table);
        let row_line = output.lines().last().unwrap();
        assert!(!row_line.contains("Missing"));
        assert!(row_line.starts_with("GGAL"));
    }

    #[test]
    fn connection_state_lines() {
        let mut adapter = TextTableAdapter::new(Vec::new());
        adapter.connection_changed(true);
        adapter.connection_changed(false);
        let output = String::from_utf8(adapter.into_inner()).unwrap();
        assert_eq!(output, "[conectado]\n[desconectado]\n");
    }
}
