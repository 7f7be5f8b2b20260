//! Presentation sink port.

use crate::domain::record::ProjectedTable;

pub trait PresentationPort {
    /// Receive one cycle's display-ready table.
    fn render(&mut self, table: &ProjectedTable);

    /// Connection-state signal, sent after every connect, disconnect, or
    /// cycle failure.
    fn connection_changed(&mut self, connected: bool);
}
