//! Connector port: the brokerage data-source capability.

use crate::domain::error::TenenciasError;
use crate::domain::record::Position;

pub trait ConnectorPort {
    /// Acquire the capability. Called on every user-triggered connect.
    fn connect(&mut self) -> Result<(), TenenciasError>;

    /// Current raw holdings for one account, one vendor-coded record per
    /// held instrument, possibly including the synthetic end-of-day marker
    /// row. A failure here drives the scheduler to Disconnected.
    fn fetch(&mut self, account: u32) -> Result<Vec<Position>, TenenciasError>;
}
